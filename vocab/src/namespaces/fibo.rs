//! FIBO and OMG LCC modules.
//!
//! Each submodule lists the subset of a FIBO module that the DataFabric
//! registry datasets reference. Prefixes follow the EDM Council convention
//! (`fibo-<domain>-<module>-<ontology>`).

/// `fibo-fnd-plc-cty:`, Countries.
pub mod fnd_plc_cty {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Countries.
        pub struct FndPlcCtyVocabulary;
        prefix = "fibo-fnd-plc-cty";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/Places/Countries/";
        label = "Countries";
        family = Fibo;
        terms {
            Country => "Country";
            Municipality => "Municipality";
        }
    }
}

/// `fibo-be-le-lp:`, Legal Persons.
pub mod be_le_lp {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Legal Persons.
        pub struct BeLeLpVocabulary;
        prefix = "fibo-be-le-lp";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/BE/LegalEntities/LegalPersons/";
        label = "Legal Persons";
        family = Fibo;
        terms {
            Signatory => "Signatory";
            NaturalPerson => "NaturalPerson";
        }
    }
}

/// `fibo-fnd-aap-agt:`, Agents.
pub mod fnd_aap_agt {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Agents.
        pub struct FndAapAgtVocabulary;
        prefix = "fibo-fnd-aap-agt";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/AgentsAndPeople/Agents/";
        label = "Agents";
        family = Fibo;
        terms {
            hasName => "hasName";
            identifies => "identifies";
        }
    }
}

/// `fibo-be-oac-cown:`, Corporate Ownership.
pub mod be_oac_cown {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Corporate Ownership.
        pub struct BeOacCownVocabulary;
        prefix = "fibo-be-oac-cown";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/BE/OwnershipAndControl/CorporateOwnership/";
        label = "Corporate Ownership";
        family = Fibo;
        terms {
            Shareholding => "Shareholding";
        }
    }
}

/// `fibo-fnd-rel-rel:`, Relations.
pub mod fnd_rel_rel {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Relations.
        pub struct FndRelRelVocabulary;
        prefix = "fibo-fnd-rel-rel";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/Relations/Relations/";
        label = "Relations";
        family = Fibo;
        terms {
            appliesTo => "appliesTo";
            hasLegalName => "hasLegalName";
            hasUniqueIdentifier => "hasUniqueIdentifier";
            hasAlias => "hasAlias";
            hasFormalName => "hasFormalName";
            isManagedBy => "isManagedBy";
            manages => "manages";
            governs => "governs";
        }
    }
}

/// `fibo-be-le-fbo:`, Formal Business Organizations.
pub mod be_le_fbo {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Formal Business Organizations.
        pub struct BeLeFboVocabulary;
        prefix = "fibo-be-le-fbo";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/BE/LegalEntities/FormalBusinessOrganizations/";
        label = "Formal Business Organizations";
        family = Fibo;
        terms {
            hasRegisteredAddress => "hasRegisteredAddress";
            RegisteredAddress => "RegisteredAddress";
            hasSignatory => "hasSignatory";
            hasEquity => "hasEquity";
        }
    }
}

/// `fibo-fnd-pty-rl:`, Roles.
pub mod fnd_pty_rl {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Roles.
        pub struct FndPtyRlVocabulary;
        prefix = "fibo-fnd-pty-rl";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/Parties/Roles/";
        label = "Roles";
        family = Fibo;
        terms {
            isPlayedBy => "isPlayedBy";
            hasRole => "hasRole";
            playsRole => "playsRole";
        }
    }
}

/// `fibo-fnd-acc-cur:`, Currency Amount.
pub mod fnd_acc_cur {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Currency Amount.
        pub struct FndAccCurVocabulary;
        prefix = "fibo-fnd-acc-cur";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/Accounting/CurrencyAmount/";
        label = "Currency Amount";
        family = Fibo;
        terms {
            AmountOfMoney => "AmountOfMoney";
            hasBaseMoneyUnit => "hasBaseMoneyUnit";
            MonetaryAmount => "MonetaryAmount";
            hasCurrency => "hasCurrency";
            hasAmount => "hasAmount";
        }
    }
}

/// `fibo-be-corp-corp:`, Corporations.
pub mod be_corp_corp {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Corporations.
        pub struct BeCorpCorpVocabulary;
        prefix = "fibo-be-corp-corp";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/BE/Corporations/Corporations/";
        label = "Corporations";
        family = Fibo;
        terms {
            hasIssuedCapital => "hasIssuedCapital";
            hasDateOfRegistration => "hasDateOfRegistration";
            RegistrationIdentifier => "RegistrationIdentifier";
        }
    }
}

/// `fibo-fnd-acc-4217:`, ISO 4217 Currency Codes.
pub mod fnd_acc_4217 {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO ISO 4217 Currency Codes.
        pub struct FndAcc4217Vocabulary;
        prefix = "fibo-fnd-acc-4217";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/Accounting/ISO4217-CurrencyCodes/";
        label = "ISO 4217 Currency Codes";
        family = Fibo;
        terms {
            RussianRuble => "RussianRuble";
        }
    }
}

/// `fibo-fnd-aap-ppl:`, People.
pub mod fnd_aap_ppl {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO People.
        pub struct FndAapPplVocabulary;
        prefix = "fibo-fnd-aap-ppl";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/AgentsAndPeople/People/";
        label = "People";
        family = Fibo;
        terms {
            hasFirstName => "hasFirstName";
            hasGender => "hasGender";
            hasLastName => "hasLastName";
            hasMiddleNameOrInitial => "hasMiddleNameOrInitial";
        }
    }
}

/// `fibo-fnd-acc-aeq:`, Accounting Equity.
pub mod fnd_acc_aeq {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Accounting Equity.
        pub struct FndAccAeqVocabulary;
        prefix = "fibo-fnd-acc-aeq";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/Accounting/AccountingEquity/";
        label = "Accounting Equity";
        family = Fibo;
        terms {
            takesForm => "takesForm";
            representsAnInterestIn => "representsAnInterestIn";
        }
    }
}

/// `fibo-be-ge-ge:`, Government Entities.
pub mod be_ge_ge {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Government Entities.
        pub struct BeGeGeVocabulary;
        prefix = "fibo-be-ge-ge";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/BE/GovernmentEntities/GovernmentEntities/";
        label = "Government Entities";
        family = Fibo;
        terms {
            Government => "Government";
            RegionalGovernment => "RegionalGovernment";
            MunicipalGovernment => "MunicipalGovernment";
        }
    }
}

/// `fibo-fnd-qt-qtu:`, Quantities and Units.
pub mod fnd_qt_qtu {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Quantities and Units.
        pub struct FndQtQtuVocabulary;
        prefix = "fibo-fnd-qt-qtu";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/Quantities/QuantitiesAndUnits/";
        label = "Quantities and Units";
        family = Fibo;
        terms {
            hasNumericValue => "hasNumericValue";
        }
    }
}

/// `lcc-3166-1:`, ISO 3166-1 Country Codes.
pub mod lcc_3166_1 {
    use crate::vocabulary;

    vocabulary! {
        /// LCC ISO 3166-1 Country Codes.
        pub struct LccCountryCodesVocabulary;
        prefix = "lcc-3166-1";
        namespace = "http://www.omg.org/spec/LCC/Countries/ISO3166-1-CountryCodes/";
        label = "ISO 3166-1 Country Codes";
        family = Fibo;
        terms {
            RussianFederation => "RussianFederation";
        }
    }
}

/// `fibo-be-sps-sps:`, Sole Proprietorships.
pub mod be_sps_sps {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Sole Proprietorships.
        pub struct BeSpsSpsVocabulary;
        prefix = "fibo-be-sps-sps";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/BE/SoleProprietorships/SoleProprietorships/";
        label = "Sole Proprietorships";
        family = Fibo;
        terms {
            SoleProprietorship => "SoleProprietorship";
        }
    }
}

/// `fibo-be-oac-opty:`, Ownership Parties.
pub mod be_oac_opty {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Ownership Parties.
        pub struct BeOacOptyVocabulary;
        prefix = "fibo-be-oac-opty";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/BE/OwnershipAndControl/OwnershipParties/";
        label = "Ownership Parties";
        family = Fibo;
        terms {
            hasConstitutionalOwner => "hasConstitutionalOwner";
            ConstitutionalOwner => "ConstitutionalOwner";
            holdsEquityIn => "holdsEquityIn";
            isEquityHeldBy => "isEquityHeldBy";
        }
    }
}

/// `fibo-fnd-utl-bt:`, Business-Facing Types.
pub mod fnd_utl_bt {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Business-Facing Types.
        pub struct FndUtlBtVocabulary;
        prefix = "fibo-fnd-utl-bt";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/Utilities/BusinessFacingTypes/";
        label = "Business-Facing Types";
        family = Fibo;
        terms {
            hasPercentageValue => "hasPercentageValue";
        }
    }
}

/// `fibo-fnd-oac-oac:`, Ownership and Control.
pub mod fnd_oac_oac {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Ownership and Control.
        pub struct FndOacOacVocabulary;
        prefix = "fibo-fnd-oac-oac";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/OwnershipAndControl/OwnershipAndControl/";
        label = "Ownership and Control";
        family = Fibo;
        terms {
            isOwnedAndControlledBy => "isOwnedAndControlledBy";
            ownsAndControls => "ownsAndControls";
        }
    }
}

/// `fibo-fnd-dt-fd:`, Financial Dates.
pub mod fnd_dt_fd {
    use crate::vocabulary;

    vocabulary! {
        /// FIBO Financial Dates.
        pub struct FndDtFdVocabulary;
        prefix = "fibo-fnd-dt-fd";
        namespace = "https://spec.edmcouncil.org/fibo/ontology/FND/DatesAndTimes/FinancialDates/";
        label = "Financial Dates";
        family = Fibo;
        terms {
            hasDateValue => "hasDateValue";
        }
    }
}
