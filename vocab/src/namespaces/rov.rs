//! `rov:` namespace: Registered Organization Vocabulary.

use crate::vocabulary;

vocabulary! {
    /// Registered Organization Vocabulary.
    pub struct RovVocabulary;
    prefix = "rov";
    namespace = "http://www.w3.org/ns/regorg#";
    label = "Registered Organization Vocabulary";
    family = Core;
    terms {
        /// An organization legally registered in a jurisdiction.
        RegisteredOrganization => "RegisteredOrganization";
        hasRegisteredOrganization => "hasRegisteredOrganization";
        /// The legal name of the business.
        legalName => "legalName";
        /// The activity of the organization, typically a NACE or similar classification code.
        orgActivity => "orgActivity";
        /// The status of the organization within its life cycle.
        orgStatus => "orgStatus";
        /// The legal form of the organization.
        orgType => "orgType";
        /// The registration identifier the organization holds with its registering authority.
        registration => "registration";
    }
}
