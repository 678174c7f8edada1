//! The header byte that prefixes every code.
//!
//! ```text
//!  bit   7   6 5 4 3 2   1 0
//!       [0] [coder id ] [type]
//! ```
//!
//! Bits 0-1 carry the [`ValueType`], bits 2-6 the id of the coder that
//! produced the code. Bit 7 is always clear.

const MASK_VALUE_TYPE: u8 = 0b0000_0011;
const MASK_CODER_ID: u8 = 0b0111_1100;

/// Largest coder id that fits in the header.
pub const MAX_CODER_ID: u8 = MASK_CODER_ID >> 2;

/// Kind of RDF value a code stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueType {
    /// Language-tagged string literal.
    LangString = 0,
    /// IRI.
    Iri = 1,
    /// Blank node.
    BNode = 2,
    /// Typed literal.
    Literal = 3,
}

impl ValueType {
    fn from_bits(bits: u8) -> Self {
        match bits & MASK_VALUE_TYPE {
            0 => ValueType::LangString,
            1 => ValueType::Iri,
            2 => ValueType::BNode,
            _ => ValueType::Literal,
        }
    }
}

/// Builds the header byte for `coder_id` and `value_type`.
///
/// Only the low five bits of `coder_id` are kept; callers validate ids
/// against [`MAX_CODER_ID`] up front.
#[must_use]
pub fn header(coder_id: u8, value_type: ValueType) -> u8 {
    ((coder_id << 2) & MASK_CODER_ID) | value_type as u8
}

/// Value type of `code`, or `None` for an empty code.
#[must_use]
pub fn value_type(code: &[u8]) -> Option<ValueType> {
    code.first().map(|&b| ValueType::from_bits(b))
}

/// Coder id of `code`, or `None` for an empty code.
#[must_use]
pub fn coder_id(code: &[u8]) -> Option<u8> {
    code.first().map(|&b| (b & MASK_CODER_ID) >> 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_headers() {
        assert_eq!(header(0, ValueType::Iri), 0b0000_0001);
        assert_eq!(header(1, ValueType::Iri), 0b0000_0101);
        assert_eq!(header(2, ValueType::Iri), 0b0000_1001);
    }

    #[test]
    fn fields_round_trip() {
        for id in 0..=MAX_CODER_ID {
            for vt in [
                ValueType::LangString,
                ValueType::Iri,
                ValueType::BNode,
                ValueType::Literal,
            ] {
                let code = [header(id, vt), 0xff];
                assert_eq!(coder_id(&code), Some(id));
                assert_eq!(value_type(&code), Some(vt));
            }
        }
    }

    #[test]
    fn high_bit_is_clear() {
        assert_eq!(header(MAX_CODER_ID, ValueType::Literal), 0b0111_1111);
        assert_eq!(header(0xff, ValueType::Iri) & 0x80, 0);
    }

    #[test]
    fn empty_code() {
        assert_eq!(value_type(&[]), None);
        assert_eq!(coder_id(&[]), None);
    }
}
