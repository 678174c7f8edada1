//! `xsd:` namespace: XML Schema datatypes.
//!
//! Primitive and derived datatypes used as literal datatypes.

use crate::vocabulary;

vocabulary! {
    /// XML Schema datatype vocabulary.
    pub struct XsdVocabulary;
    prefix = "xsd";
    namespace = "http://www.w3.org/2001/XMLSchema#";
    label = "XML Schema Datatypes";
    family = Core;
    terms {
        duration => "duration";
        dateTime => "dateTime";
        dayTimeDuration => "dayTimeDuration";
        time => "time";
        date => "date";
        gYearMonth => "gYearMonth";
        gYear => "gYear";
        gMonthDay => "gMonthDay";
        gDay => "gDay";
        gMonth => "gMonth";
        string => "string";
        boolean => "boolean";
        base64Binary => "base64Binary";
        hexBinary => "hexBinary";
        float => "float";
        decimal => "decimal";
        double => "double";
        anyURI => "anyURI";
        QName => "QName";
        NOTATION => "NOTATION";
        normalizedString => "normalizedString";
        token => "token";
        language => "language";
        NMTOKEN => "NMTOKEN";
        NMTOKENS => "NMTOKENS";
        Name => "Name";
        NCName => "NCName";
        ID => "ID";
        IDREF => "IDREF";
        IDREFS => "IDREFS";
        ENTITY => "ENTITY";
        ENTITIES => "ENTITIES";
        integer => "integer";
        long => "long";
        int => "int";
        short => "short";
        byte => "byte";
        nonPositiveInteger => "nonPositiveInteger";
        negativeInteger => "negativeInteger";
        nonNegativeInteger => "nonNegativeInteger";
        positiveInteger => "positiveInteger";
        unsignedLong => "unsignedLong";
        unsignedInt => "unsignedInt";
        unsignedShort => "unsignedShort";
        unsignedByte => "unsignedByte";
        yearMonthDuration => "yearMonthDuration";
        dateTimeStamp => "dateTimeStamp";
    }
}
