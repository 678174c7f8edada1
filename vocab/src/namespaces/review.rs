//! `rev:` namespace: RDF Review Vocabulary.
//!
//! Only the terms used by the DataFabric review datasets are listed.

use crate::vocabulary;

vocabulary! {
    /// Review vocabulary subset.
    pub struct ReviewVocabulary;
    prefix = "rev";
    namespace = "http://purl.org/stuff/rev#";
    label = "RDF Review Vocabulary";
    family = Community;
    terms {
        rating => "rating";
        title => "title";
        text => "text";
        totalVotes => "totalVotes";
        reviewer => "reviewer";
        hasReview => "hasReview";
    }
}
