//! The vocabulary registry.
//!
//! [`Registry`] is the explicit list of every vocabulary the crate knows
//! about, with an index from full identifier to term. The built-in list is
//! assembled once by [`Registry::full`]; callers with their own tables use
//! [`Registry::try_new`], which checks the table invariants up front.

use std::collections::HashMap;

use crate::model::{Term, Vocabulary};
use crate::namespaces::{
    dc, dcterms, fibo, fibo_ru, foaf, fts, geonames, goodrelations, music, opengraph, org, owl,
    rdf, rdfs, review, rov, skos, xsd,
};

/// A violated registry invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two vocabularies declare the same prefix.
    #[error("prefix `{prefix}` is declared by more than one vocabulary")]
    DuplicatePrefix {
        /// The shared prefix.
        prefix: &'static str,
    },
    /// Two vocabularies declare the same namespace.
    #[error("namespace <{namespace}> is declared by more than one vocabulary")]
    DuplicateNamespace {
        /// The shared namespace.
        namespace: &'static str,
    },
    /// One namespace is a proper prefix of another.
    #[error("namespace <{outer}> is a prefix of namespace <{inner}>")]
    OverlappingNamespace {
        /// The shorter namespace.
        outer: &'static str,
        /// The namespace it prefixes.
        inner: &'static str,
    },
    /// A term's identifier is not its vocabulary namespace followed by its local name.
    #[error("term <{iri}> does not derive from namespace <{namespace}> and local name `{local_name}`")]
    Underived {
        /// The offending identifier.
        iri: &'static str,
        /// The vocabulary namespace.
        namespace: &'static str,
        /// The declared local name.
        local_name: &'static str,
    },
    /// The same identifier appears twice.
    #[error("identifier <{iri}> is declared more than once")]
    DuplicateIdentifier {
        /// The repeated identifier.
        iri: &'static str,
    },
}

/// Position of a term inside the registry.
#[derive(Debug, Clone, Copy)]
struct Slot {
    vocabulary: usize,
    term: usize,
}

/// An ordered, indexed set of vocabularies.
#[derive(Debug)]
pub struct Registry {
    vocabularies: Vec<&'static dyn Vocabulary>,
    prefixes: HashMap<&'static str, usize>,
    namespaces: HashMap<&'static str, usize>,
    identifiers: HashMap<&'static str, Slot>,
}

/// Every built-in vocabulary in registry order.
///
/// The order is significant: the known-vocabulary dictionary numbers
/// identifiers in this order.
#[must_use]
pub fn builtin() -> Vec<&'static dyn Vocabulary> {
    vec![
        &rdf::RdfVocabulary,
        &rdfs::RdfsVocabulary,
        &owl::OwlVocabulary,
        &xsd::XsdVocabulary,
        &dc::DcVocabulary,
        &dcterms::DcTermsVocabulary,
        &foaf::FoafVocabulary,
        &org::OrgVocabulary,
        &skos::SkosVocabulary,
        &rov::RovVocabulary,
        &review::ReviewVocabulary,
        &opengraph::OpenGraphVocabulary,
        &goodrelations::GoodRelationsVocabulary,
        &geonames::GeoNamesVocabulary,
        &music::MusicVocabulary,
        &fibo::fnd_plc_cty::FndPlcCtyVocabulary,
        &fibo::be_le_lp::BeLeLpVocabulary,
        &fibo::fnd_aap_agt::FndAapAgtVocabulary,
        &fibo::be_oac_cown::BeOacCownVocabulary,
        &fibo::fnd_rel_rel::FndRelRelVocabulary,
        &fibo::be_le_fbo::BeLeFboVocabulary,
        &fibo::fnd_pty_rl::FndPtyRlVocabulary,
        &fibo::fnd_acc_cur::FndAccCurVocabulary,
        &fibo::be_corp_corp::BeCorpCorpVocabulary,
        &fibo::fnd_acc_4217::FndAcc4217Vocabulary,
        &fibo::fnd_aap_ppl::FndAapPplVocabulary,
        &fibo::fnd_acc_aeq::FndAccAeqVocabulary,
        &fibo::be_ge_ge::BeGeGeVocabulary,
        &fibo::fnd_qt_qtu::FndQtQtuVocabulary,
        &fibo::lcc_3166_1::LccCountryCodesVocabulary,
        &fibo::be_sps_sps::BeSpsSpsVocabulary,
        &fibo::be_oac_opty::BeOacOptyVocabulary,
        &fibo::fnd_utl_bt::FndUtlBtVocabulary,
        &fibo::fnd_oac_oac::FndOacOacVocabulary,
        &fibo::fnd_dt_fd::FndDtFdVocabulary,
        &fibo_ru::FiboRuVocabulary,
        &fts::FtsVocabulary,
    ]
}

impl Registry {
    /// Returns the registry of every built-in vocabulary.
    ///
    /// Assembly order: W3C core (`rdf`, `rdfs`, `owl`, `xsd`), Dublin Core,
    /// FOAF, ORG, SKOS, RegOrg, the community ontologies (`rev`, `og`, `gr`,
    /// `gn`, `mo`), the FIBO modules, then the local `fibo-ru` and `fts`.
    #[must_use]
    pub fn full() -> &'static Registry {
        static REGISTRY: std::sync::OnceLock<Registry> = std::sync::OnceLock::new();
        REGISTRY.get_or_init(|| Registry::index(builtin()))
    }

    /// Builds a registry after checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] found: duplicate prefixes,
    /// duplicate or overlapping namespaces, underived terms, or identifiers
    /// declared twice.
    pub fn try_new(vocabularies: Vec<&'static dyn Vocabulary>) -> Result<Self, RegistryError> {
        match check(&vocabularies).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(Registry::index(vocabularies)),
        }
    }

    fn index(vocabularies: Vec<&'static dyn Vocabulary>) -> Self {
        let mut prefixes = HashMap::new();
        let mut namespaces = HashMap::new();
        let mut identifiers = HashMap::new();
        for (v, vocabulary) in vocabularies.iter().enumerate() {
            prefixes.entry(vocabulary.prefix()).or_insert(v);
            namespaces.entry(vocabulary.namespace()).or_insert(v);
            for (t, term) in vocabulary.terms().iter().enumerate() {
                identifiers.entry(term.iri).or_insert(Slot {
                    vocabulary: v,
                    term: t,
                });
            }
        }
        Self {
            vocabularies,
            prefixes,
            namespaces,
            identifiers,
        }
    }

    /// Every vocabulary in registry order.
    #[must_use]
    pub fn vocabularies(&self) -> &[&'static dyn Vocabulary] {
        &self.vocabularies
    }

    /// Number of vocabularies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    /// Returns `true` if the registry holds no vocabularies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }

    /// Total number of terms across every vocabulary.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.vocabularies.iter().map(|v| v.len()).sum()
    }

    /// Looks up a vocabulary by its preferred prefix.
    #[must_use]
    pub fn by_prefix(&self, prefix: &str) -> Option<&'static dyn Vocabulary> {
        self.prefixes.get(prefix).map(|&i| self.vocabularies[i])
    }

    /// Looks up a vocabulary by its exact namespace.
    #[must_use]
    pub fn by_namespace(&self, namespace: &str) -> Option<&'static dyn Vocabulary> {
        self.namespaces.get(namespace).map(|&i| self.vocabularies[i])
    }

    /// Returns the vocabulary whose namespace starts `iri`, whether or not
    /// the remainder is a declared term.
    #[must_use]
    pub fn vocabulary_of(&self, iri: &str) -> Option<&'static dyn Vocabulary> {
        self.vocabularies
            .iter()
            .copied()
            .find(|v| iri.starts_with(v.namespace()))
    }

    /// Resolves a full identifier to its vocabulary and term.
    #[must_use]
    pub fn find_term(&self, iri: &str) -> Option<(&'static dyn Vocabulary, &'static Term)> {
        let slot = self.identifiers.get(iri)?;
        let vocabulary = self.vocabularies[slot.vocabulary];
        Some((vocabulary, &vocabulary.terms()[slot.term]))
    }

    /// Returns `true` if `iri` is a declared term of some vocabulary.
    #[must_use]
    pub fn contains(&self, iri: &str) -> bool {
        self.identifiers.contains_key(iri)
    }

    /// Every identifier in registry order, vocabulary by vocabulary.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.vocabularies.iter().flat_map(|v| v.identifiers())
    }

    /// Expands a compact `prefix:local` name to a declared identifier.
    ///
    /// Only the first `:` separates prefix from local name, so
    /// `"gn:A.ADM1"` and `"fibo-ru:RUOrgStatus-0"` both resolve.
    #[must_use]
    pub fn expand(&self, curie: &str) -> Option<&'static str> {
        let (prefix, local) = curie.split_once(':')?;
        self.by_prefix(prefix)?.lookup(local)
    }

    /// Shortens a declared identifier to `prefix:local`.
    #[must_use]
    pub fn compact(&self, iri: &str) -> Option<String> {
        let (vocabulary, term) = self.find_term(iri)?;
        Some(format!("{}:{}", vocabulary.prefix(), term.local_name))
    }

    /// Every invariant violation in this registry. Empty for a sound registry.
    #[must_use]
    pub fn violations(&self) -> Vec<RegistryError> {
        check(&self.vocabularies)
    }
}

fn check(vocabularies: &[&'static dyn Vocabulary]) -> Vec<RegistryError> {
    let mut errors = Vec::new();

    let mut prefixes = HashMap::new();
    let mut namespaces = HashMap::new();
    for vocabulary in vocabularies {
        if prefixes.insert(vocabulary.prefix(), ()).is_some() {
            errors.push(RegistryError::DuplicatePrefix {
                prefix: vocabulary.prefix(),
            });
        }
        if namespaces.insert(vocabulary.namespace(), ()).is_some() {
            errors.push(RegistryError::DuplicateNamespace {
                namespace: vocabulary.namespace(),
            });
        }
    }

    for outer in vocabularies {
        for inner in vocabularies {
            let (o, i) = (outer.namespace(), inner.namespace());
            if o.len() < i.len() && i.starts_with(o) {
                errors.push(RegistryError::OverlappingNamespace { outer: o, inner: i });
            }
        }
    }

    let mut seen = HashMap::new();
    for vocabulary in vocabularies {
        let namespace = vocabulary.namespace();
        for term in vocabulary.terms() {
            if term.iri.strip_prefix(namespace) != Some(term.local_name) {
                errors.push(RegistryError::Underived {
                    iri: term.iri,
                    namespace,
                    local_name: term.local_name,
                });
            }
            if seen.insert(term.iri, ()).is_some() {
                errors.push(RegistryError::DuplicateIdentifier { iri: term.iri });
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Family;

    crate::vocabulary! {
        /// Overlaps `ex_sub` by namespace.
        pub struct Outer;
        prefix = "ex";
        namespace = "http://example.org/";
        label = "Outer";
        family = Local;
        terms {
            a => "a";
            a_dup => "a";
        }
    }

    mod ex_sub {
        crate::vocabulary! {
            /// Namespace nested in `Outer`'s.
            pub struct Inner;
            prefix = "ex";
            namespace = "http://example.org/sub#";
            label = "Inner";
            family = Local;
            terms {
                b => "b";
            }
        }
    }

    #[test]
    fn full_registry_is_sound() {
        assert!(Registry::full().violations().is_empty());
    }

    #[test]
    fn full_registry_order() {
        let prefixes: Vec<_> = Registry::full()
            .vocabularies()
            .iter()
            .map(|v| v.prefix())
            .collect();
        assert_eq!(&prefixes[..4], ["rdf", "rdfs", "owl", "xsd"]);
        assert_eq!(prefixes.last().copied(), Some("fts"));
        assert_eq!(prefixes.len(), 37);
    }

    #[test]
    fn lookups() {
        let registry = Registry::full();
        assert_eq!(registry.by_prefix("gn").map(|v| v.family()), Some(Family::Community));
        assert_eq!(
            registry.expand("gn:A.ADM1"),
            Some("http://www.geonames.org/ontology#A.ADM1")
        );
        assert_eq!(
            registry.expand("fibo-ru:RUOrgStatus-0"),
            Some(fibo_ru::RUOrgStatus_0)
        );
        assert_eq!(registry.expand("gn:NoSuchTerm"), None);
        assert_eq!(registry.expand("rdf"), None);
        assert_eq!(registry.compact(rdf::type_).as_deref(), Some("rdf:type"));
        assert_eq!(
            registry
                .vocabulary_of("http://www.geonames.org/ontology#Unlisted")
                .map(|v| v.prefix()),
            Some("gn")
        );
        assert!(registry.find_term("http://www.geonames.org/ontology#Unlisted").is_none());
        assert_eq!(
            registry.by_namespace(skos::NAMESPACE).map(|v| v.prefix()),
            Some("skos")
        );
    }

    #[test]
    fn identifiers_follow_registry_order() {
        let registry = Registry::full();
        let mut ids = registry.identifiers();
        assert_eq!(ids.next(), Some(rdf::type_));
        assert_eq!(registry.identifiers().count(), registry.term_count());
    }

    #[test]
    fn try_new_accepts_builtin() {
        let registry = Registry::try_new(builtin());
        assert!(registry.is_ok());
    }

    #[test]
    fn try_new_rejects_overlap_and_duplicates() {
        let errors = check(&[&Outer, &ex_sub::Inner]);
        assert!(errors.contains(&RegistryError::DuplicatePrefix { prefix: "ex" }));
        assert!(errors.contains(&RegistryError::OverlappingNamespace {
            outer: "http://example.org/",
            inner: "http://example.org/sub#",
        }));
        assert!(errors.contains(&RegistryError::DuplicateIdentifier {
            iri: "http://example.org/a",
        }));
        assert!(Registry::try_new(vec![&Outer]).is_err());
        assert!(Registry::try_new(vec![&ex_sub::Inner]).is_ok());
    }
}
