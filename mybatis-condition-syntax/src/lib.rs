//! Syntax shared by `#[derive(ConditionFields)]` and the source scanner:
//! the `#[condition(...)]` attributes and the reduction of a field's type
//! to the facts the classifier needs.

pub mod attributes;
mod error;
pub mod type_facts;

pub use attributes::{container_attrs, field_attrs, ContainerAttrs, FieldAttrs, RenameRule};
pub use error::AttributeError;
pub use type_facts::{type_facts, TypeFacts};
