//! `dc:` namespace: Dublin Core Metadata Element Set, version 1.1.

use crate::vocabulary;

vocabulary! {
    /// Dublin Core element set.
    pub struct DcVocabulary;
    prefix = "dc";
    namespace = "http://purl.org/dc/elements/1.1/";
    label = "Dublin Core Metadata Element Set, Version 1.1";
    family = Community;
    terms {
        contributor => "contributor";
        coverage => "coverage";
        creator => "creator";
        date => "date";
        description => "description";
        format => "format";
        identifier => "identifier";
        language => "language";
        publisher => "publisher";
        relation => "relation";
        rights => "rights";
        source => "source";
        subject => "subject";
        title => "title";
        type_ => "type";
    }
}
