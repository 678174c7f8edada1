//! `og:` namespace: Open Graph protocol.

use crate::vocabulary;

vocabulary! {
    /// Open Graph protocol subset.
    pub struct OpenGraphVocabulary;
    prefix = "og";
    namespace = "http://ogp.me/ns#";
    label = "The Open Graph protocol";
    family = Community;
    terms {
        title => "title";
        tag => "tag";
    }
}
