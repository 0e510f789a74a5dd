//! RDF terms and triples
//!
//! The engine only builds triples, it never parses them. Subjects are always
//! IRIs: anonymous store nodes are skolemized and translated like any other
//! node. Objects are IRIs or literals. `Display` writes N-Triples syntax.

use chrono::{DateTime, SecondsFormat, Utc};
use oxrdf::vocab::xsd;
use oxrdf::{Literal as OxLiteral, NamedNode as OxNamedNode, NamedNodeRef};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type RdfResult<T> = Result<T, RdfError>;

/// An absolute IRI
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    pub fn new(iri: &str) -> RdfResult<Self> {
        match OxNamedNode::new(iri) {
            Ok(node) => Ok(Self(node)),
            Err(e) => Err(RdfError::InvalidIri(format!("{} ({})", iri, e))),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<NamedNodeRef<'_>> for NamedNode {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self(node.into_owned())
    }
}

/// A literal with its datatype
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// xsd:string
    pub fn simple(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    pub fn typed(value: impl Into<String>, datatype: impl Into<NamedNode>) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.into().0))
    }

    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), xsd::BOOLEAN)
    }

    pub fn long(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::LONG)
    }

    /// xsd:double, with `INF`, `-INF` and `NaN` for the special values
    pub fn double(value: f64) -> Self {
        let lexical = match value {
            v if v.is_nan() => "NaN".to_string(),
            v if v == f64::INFINITY => "INF".to_string(),
            v if v == f64::NEG_INFINITY => "-INF".to_string(),
            v => v.to_string(),
        };
        Self::typed(lexical, xsd::DOUBLE)
    }

    pub fn decimal(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, xsd::DECIMAL)
    }

    pub fn date_time(value: &DateTime<Utc>) -> Self {
        let lexical = value.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self::typed(lexical, xsd::DATE_TIME)
    }

    /// Lexical form
    pub fn value(&self) -> &str {
        self.0.value()
    }

    pub fn datatype(&self) -> NamedNode {
        self.0.datatype().into()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfObject {
    NamedNode(NamedNode),
    Literal(Literal),
}

impl RdfObject {
    pub fn is_literal(&self) -> bool {
        matches!(self, RdfObject::Literal(_))
    }

    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            RdfObject::NamedNode(node) => Some(node),
            RdfObject::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            RdfObject::Literal(literal) => Some(literal),
            RdfObject::NamedNode(_) => None,
        }
    }
}

impl fmt::Display for RdfObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfObject::NamedNode(node) => node.fmt(f),
            RdfObject::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<NamedNode> for RdfObject {
    fn from(node: NamedNode) -> Self {
        RdfObject::NamedNode(node)
    }
}

impl From<Literal> for RdfObject {
    fn from(literal: Literal) -> Self {
        RdfObject::Literal(literal)
    }
}

/// One statement about a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: NamedNode,
    pub predicate: NamedNode,
    pub object: RdfObject,
}

impl Triple {
    pub fn new(
        subject: impl Into<NamedNode>,
        predicate: impl Into<NamedNode>,
        object: impl Into<RdfObject>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_named_node() {
        let node = NamedNode::new("http://example.org/books/1").unwrap();
        assert_eq!(node.as_str(), "http://example.org/books/1");
        assert_eq!(node.to_string(), "<http://example.org/books/1>");
        assert!(matches!(NamedNode::new("no scheme"), Err(RdfError::InvalidIri(_))));
    }

    #[test]
    fn test_typed_literals() {
        let lit = Literal::long(42);
        assert_eq!(lit.value(), "42");
        assert_eq!(lit.datatype().as_str(), "http://www.w3.org/2001/XMLSchema#long");
        assert_eq!(Literal::boolean(true).value(), "true");

        assert_eq!(Literal::double(f64::INFINITY).value(), "INF");
        assert_eq!(Literal::double(f64::NEG_INFINITY).value(), "-INF");
        assert_eq!(Literal::double(f64::NAN).value(), "NaN");
        assert_eq!(Literal::double(1.5).value(), "1.5");

        let when = Utc.with_ymd_and_hms(2015, 3, 1, 12, 30, 0).unwrap();
        let lit = Literal::date_time(&when);
        assert_eq!(lit.value(), "2015-03-01T12:30:00.000Z");
        assert_eq!(lit.datatype().as_str(), "http://www.w3.org/2001/XMLSchema#dateTime");
    }

    #[test]
    fn test_triple_display() {
        let triple = Triple::new(
            NamedNode::new("http://example.org/books/1").unwrap(),
            NamedNode::new("http://purl.org/dc/elements/1.1/title").unwrap(),
            Literal::simple("Moby Dick"),
        );
        assert_eq!(
            triple.to_string(),
            "<http://example.org/books/1> <http://purl.org/dc/elements/1.1/title> \"Moby Dick\" ."
        );
        assert!(triple.object.is_literal());
        assert!(triple.object.as_named_node().is_none());
    }
}
