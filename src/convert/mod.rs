//! Conversions between store items and RDF terms

mod property;
mod value;

pub use property::{
    is_internal_property, predicate_for_property, property_name_for_predicate, PropertyToTriples,
};
pub use value::ValueConverter;
