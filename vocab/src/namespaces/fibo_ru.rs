//! `fibo-ru:` namespace: Russian Federation extensions to FIBO.
//!
//! Organization status codes (`RUOrgStatus-*`) and signatory roles
//! (`SignatoryRoleInRFJ-*`) of the Russian state register.

use crate::vocabulary;

vocabulary! {
    /// FIBO Russian Federation extensions.
    pub struct FiboRuVocabulary;
    prefix = "fibo-ru";
    namespace = "https://w3id.org/datafabric.cc/ontologies/fibo-ru#";
    label = "FIBO Russian Federation extensions";
    family = Local;
    terms {
        asPercentage => "asPercentage";
        hasCommercialActivity => "hasCommercialActivity";
        hasPrimaryCommercialActivity => "hasPrimaryCommercialActivity";
        hasReasonCodeOfIssuance => "hasReasonCodeOfIssuance";
        hasRegistrationIdentifier => "hasRegistrationIdentifier";
        hasVATRegistrationNumber => "hasVATRegistrationNumber";
        Attorney => "Attorney";
        MutualFund => "MutualFund";
        SignatoryRoleInRFJ => "SignatoryRoleInRFJ";
        VATIN => "VATIN";
        RUOrgStatus_0 => "RUOrgStatus-0";
        RUOrgStatus_1 => "RUOrgStatus-1";
        RUOrgStatus_101 => "RUOrgStatus-101";
        RUOrgStatus_105 => "RUOrgStatus-105";
        RUOrgStatus_121 => "RUOrgStatus-121";
        RUOrgStatus_122 => "RUOrgStatus-122";
        RUOrgStatus_123 => "RUOrgStatus-123";
        RUOrgStatus_124 => "RUOrgStatus-124";
        RUOrgStatus_125 => "RUOrgStatus-125";
        RUOrgStatus_126 => "RUOrgStatus-126";
        RUOrgStatus_127 => "RUOrgStatus-127";
        RUOrgStatus_128 => "RUOrgStatus-128";
        RUOrgStatus_131 => "RUOrgStatus-131";
        RUOrgStatus_132 => "RUOrgStatus-132";
        RUOrgStatus_133 => "RUOrgStatus-133";
        RUOrgStatus_134 => "RUOrgStatus-134";
        RUOrgStatus_135 => "RUOrgStatus-135";
        RUOrgStatus_136 => "RUOrgStatus-136";
        RUOrgStatus_201 => "RUOrgStatus-201";
        RUOrgStatus_202 => "RUOrgStatus-202";
        RUOrgStatus_301 => "RUOrgStatus-301";
        RUOrgStatus_501 => "RUOrgStatus-501";
        RUOrgStatus_701 => "RUOrgStatus-701";
        RUOrgStatus_702 => "RUOrgStatus-702";
        RUOrgStatus_801 => "RUOrgStatus-801";
        RUOrgStatusClassificationSystem => "RUOrgStatusClassificationSystem";
        RUSignatoryRolesClassificationSystem => "RUSignatoryRolesClassificationSystem";
        RussianFederationEntity => "RussianFederationEntity";
        RussianFederationJurisdiction => "RussianFederationJurisdiction";
        SignatoryRoleInRFJ_02 => "SignatoryRoleInRFJ-02";
        SignatoryRoleInRFJ_03 => "SignatoryRoleInRFJ-03";
        SignatoryRoleInRFJ_04 => "SignatoryRoleInRFJ-04";
        SignatoryRoleInRFJ_05 => "SignatoryRoleInRFJ-05";
        SignatoryRoleInRFJ_06 => "SignatoryRoleInRFJ-06";
        SignatoryRoleInRFJ_07 => "SignatoryRoleInRFJ-07";
        SignatoryRoleInRFJ_08 => "SignatoryRoleInRFJ-08";
        SignatoryRoleInRFJ_09 => "SignatoryRoleInRFJ-09";
        SignatoryRoleInRFJ_10 => "SignatoryRoleInRFJ-10";
        SignatoryRoleInRFJ_11 => "SignatoryRoleInRFJ-11";
    }
}
