//! `dcterms:` namespace: DCMI Metadata Terms.
//!
//! Classes, properties, and vocabulary encoding schemes of the `/terms/`
//! namespace. Local names containing `-` map to `_` in accessor names
//! (`ISO639-2` becomes [`ISO639_2`]).

use crate::vocabulary;

vocabulary! {
    /// DCMI Metadata Terms vocabulary.
    pub struct DcTermsVocabulary;
    prefix = "dcterms";
    namespace = "http://purl.org/dc/terms/";
    label = "DCMI Metadata Terms";
    family = Community;
    terms {
        Agent => "Agent";
        AgentClass => "AgentClass";
        BibliographicResource => "BibliographicResource";
        FileFormat => "FileFormat";
        Frequency => "Frequency";
        Jurisdiction => "Jurisdiction";
        LicenseDocument => "LicenseDocument";
        LinguisticSystem => "LinguisticSystem";
        Location => "Location";
        LocationPeriodOrJurisdiction => "LocationPeriodOrJurisdiction";
        MediaType => "MediaType";
        MediaTypeOrExtent => "MediaTypeOrExtent";
        MethodOfAccrual => "MethodOfAccrual";
        MethodOfInstruction => "MethodOfInstruction";
        PeriodOfTime => "PeriodOfTime";
        PhysicalMedium => "PhysicalMedium";
        PhysicalResource => "PhysicalResource";
        Policy => "Policy";
        ProvenanceStatement => "ProvenanceStatement";
        RightsStatement => "RightsStatement";
        SizeOrDuration => "SizeOrDuration";
        Standard => "Standard";
        abstract_ => "abstract";
        accessRights => "accessRights";
        accrualMethod => "accrualMethod";
        accrualPeriodicity => "accrualPeriodicity";
        accrualPolicy => "accrualPolicy";
        alternative => "alternative";
        audience => "audience";
        available => "available";
        bibliographicCitation => "bibliographicCitation";
        conformsTo => "conformsTo";
        contributor => "contributor";
        coverage => "coverage";
        created => "created";
        creator => "creator";
        date => "date";
        dateAccepted => "dateAccepted";
        dateCopyrighted => "dateCopyrighted";
        dateSubmitted => "dateSubmitted";
        description => "description";
        educationLevel => "educationLevel";
        extent => "extent";
        format => "format";
        hasFormat => "hasFormat";
        hasPart => "hasPart";
        hasVersion => "hasVersion";
        identifier => "identifier";
        instructionalMethod => "instructionalMethod";
        isFormatOf => "isFormatOf";
        isPartOf => "isPartOf";
        isReferencedBy => "isReferencedBy";
        isReplacedBy => "isReplacedBy";
        isRequiredBy => "isRequiredBy";
        isVersionOf => "isVersionOf";
        issued => "issued";
        language => "language";
        license => "license";
        mediator => "mediator";
        medium => "medium";
        modified => "modified";
        provenance => "provenance";
        publisher => "publisher";
        references => "references";
        relation => "relation";
        replaces => "replaces";
        requires => "requires";
        rights => "rights";
        rightsHolder => "rightsHolder";
        source => "source";
        spatial => "spatial";
        subject => "subject";
        tableOfContents => "tableOfContents";
        temporal => "temporal";
        title => "title";
        type_ => "type";
        valid => "valid";
        Box => "Box";
        DCMIType => "DCMIType";
        DDC => "DDC";
        IMT => "IMT";
        ISO3166 => "ISO3166";
        ISO639_2 => "ISO639-2";
        ISO639_3 => "ISO639-3";
        LCC => "LCC";
        LCSH => "LCSH";
        MESH => "MESH";
        NLM => "NLM";
        Period => "Period";
        Point => "Point";
        RFC1766 => "RFC1766";
        RFC3066 => "RFC3066";
        RFC4646 => "RFC4646";
        RFC5646 => "RFC5646";
        TGN => "TGN";
        UDC => "UDC";
        URI => "URI";
        W3CDTF => "W3CDTF";
    }
}
