//! Generates MyBatis dynamic-SQL `<if>` conditions from the fields of a class.

pub mod assignment;
pub mod descriptor;
pub mod dialect;
pub mod error;
pub mod field;
pub mod form;
pub mod generator;
pub mod naming;
pub mod operator;
pub mod settings;

pub use assignment::OperatorAssignment;
pub use descriptor::{parse_type_text, ClassDescriptor, DescribedField};
pub use dialect::Dialect;
pub use error::{ConditionError, ConditionResult};
pub use field::{ConditionFields, FieldDescriptor, FieldKind, FieldSource, TypeInfo};
pub use form::{ConditionForm, DEFAULT_PARAM_PREFIX, DEFAULT_TABLE_ALIAS};
pub use generator::{generate, render_field, select_template, GenerationRequest, Template};
pub use naming::camel_to_snake;
pub use operator::Operator;
pub use settings::{Settings, SETTINGS_FILE_NAME};

// Derive macro shares the trait's name, like serde's
pub use mybatis_condition_macros::ConditionFields;
