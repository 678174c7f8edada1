//! The `vocabulary!` table generator.

/// Declares a vocabulary table in the current module.
///
/// Expands to:
/// - `NAMESPACE` and `PREFIX` constants,
/// - one `&str` constant per term, built with `concat!` at compile time,
/// - a `TERMS` slice in declaration order,
/// - a unit struct implementing [`Vocabulary`](crate::model::Vocabulary).
///
/// ```
/// mod ex {
///     datafabric_vocab::vocabulary! {
///         /// Example vocabulary.
///         pub struct ExampleVocabulary;
///         prefix = "ex";
///         namespace = "http://example.org/ns#";
///         label = "Example";
///         family = Local;
///         terms {
///             /// A thing.
///             Thing => "Thing";
///             A_B => "A.B";
///         }
///     }
/// }
///
/// use datafabric_vocab::Vocabulary;
/// assert_eq!(ex::A_B, "http://example.org/ns#A.B");
/// assert_eq!(ex::ExampleVocabulary.identifiers().count(), 2);
/// ```
#[macro_export]
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
        prefix = $prefix:literal;
        namespace = $ns:literal;
        label = $label:literal;
        family = $family:ident;
        terms {
            $(
                $(#[$term_meta:meta])*
                $term:ident => $local:literal;
            )*
        }
    ) => {
        /// Namespace IRI shared by every term in this vocabulary.
        pub const NAMESPACE: &str = $ns;

        /// Preferred namespace prefix.
        pub const PREFIX: &str = $prefix;

        $(
            $(#[$term_meta])*
            #[doc = ""]
            #[doc = concat!("`<", $ns, $local, ">`")]
            #[allow(non_upper_case_globals)]
            pub const $term: &str = concat!($ns, $local);
        )*

        /// Every term of this vocabulary in declaration order.
        pub static TERMS: &[$crate::model::Term] = &[
            $( $crate::model::Term::new($local, $term), )*
        ];

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::model::Vocabulary for $name {
            fn prefix(&self) -> &'static str {
                PREFIX
            }

            fn namespace(&self) -> &'static str {
                NAMESPACE
            }

            fn label(&self) -> &'static str {
                $label
            }

            fn family(&self) -> $crate::model::Family {
                $crate::model::Family::$family
            }

            fn terms(&self) -> &'static [$crate::model::Term] {
                TERMS
            }
        }
    };
}
