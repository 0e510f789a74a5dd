//! Store value → RDF term conversion

use crate::error::ProjectionResult;
use crate::identifiers::IdentifierTranslator;
use crate::rdf::{Literal, NamedNode, RdfObject};
use crate::store::{Session, Value};

/// Converts property values into RDF objects
///
/// References are resolved through the session to the node they identify,
/// then translated to that node's resource IRI.
#[derive(Clone, Copy)]
pub struct ValueConverter<'a> {
    session: Session<'a>,
    translator: &'a dyn IdentifierTranslator,
}

impl<'a> ValueConverter<'a> {
    pub fn new(session: Session<'a>, translator: &'a dyn IdentifierTranslator) -> Self {
        Self { session, translator }
    }

    pub fn convert(&self, value: &Value) -> ProjectionResult<RdfObject> {
        let object = match value {
            Value::Reference(identifier) | Value::WeakReference(identifier) => {
                let referent = self.session.referent(identifier)?;
                self.translator.node_to_resource(&referent)?.into()
            }
            Value::Path(path) => self.translator.to_resource(path)?.into(),
            Value::Uri(uri) => NamedNode::new(uri)?.into(),
            Value::Boolean(b) => Literal::boolean(*b).into(),
            Value::Long(l) => Literal::long(*l).into(),
            Value::Double(d) => Literal::double(*d).into(),
            Value::Decimal(lexical) => Literal::decimal(lexical.clone()).into(),
            Value::Date(date) => Literal::date_time(date).into(),
            Value::String(s) | Value::Name(s) => Literal::simple(s.clone()).into(),
            Value::Binary(bytes) => Literal::simple(String::from_utf8_lossy(bytes).into_owned()).into(),
        };
        Ok(object)
    }
}
