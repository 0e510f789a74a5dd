//! Vocabulary constants
//!
//! IRIs used in produced triples, and the prefixed names under which the
//! content store records LDP configuration on its nodes.

/// IRI of a term in the repository namespace, as a `&'static str`
macro_rules! repository_term {
    ($local:literal) => {
        concat!("http://fedora.info/definitions/v4/repository#", $local)
    };
}
pub(crate) use repository_term;

/// Repository namespace IRI prefix.
pub const REPOSITORY_NAMESPACE: &str = repository_term!("");

// LDP terms
pub const LDP_MEMBER: &str = "http://www.w3.org/ns/ldp#member";
pub const LDP_MEMBER_SUBJECT: &str = "http://www.w3.org/ns/ldp#MemberSubject";

// Store node types (prefixed names)
pub const LDP_BASIC_CONTAINER: &str = "ldp:BasicContainer";
pub const LDP_DIRECT_CONTAINER: &str = "ldp:DirectContainer";
pub const LDP_INDIRECT_CONTAINER: &str = "ldp:IndirectContainer";
pub const FEDORA_NON_RDF_SOURCE_DESCRIPTION: &str = "fedora:NonRdfSourceDescription";
pub const FEDORA_BLANK_NODE: &str = "fedora:Skolem";

// Store property names (prefixed names)
pub const LDP_HAS_MEMBER_RELATION: &str = "ldp:hasMemberRelation";
pub const LDP_INSERTED_CONTENT_RELATION: &str = "ldp:insertedContentRelation";
pub const LDP_MEMBER_RESOURCE: &str = "ldp:membershipResource";

/// Child node holding the binary content described by a non-RDF source description.
pub const JCR_CONTENT: &str = "jcr:content";

/// Suffix carried by store property names whose values are references.
pub const REFERENCE_PROPERTY_SUFFIX: &str = "_ref";

/// Prefixes whose properties are store bookkeeping and never projected.
pub const INTERNAL_PREFIXES: [&str; 2] = ["jcr", "mode"];
