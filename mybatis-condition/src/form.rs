use crate::assignment::OperatorAssignment;
use crate::dialect::Dialect;
use crate::error::{ConditionError, ConditionResult};
use crate::field::{FieldDescriptor, FieldSource};
use crate::generator::{generate, GenerationRequest};
use crate::operator::Operator;
use log::warn;

pub const DEFAULT_TABLE_ALIAS: &str = "t";
pub const DEFAULT_PARAM_PREFIX: &str = "param";

/// Editable state of one generation session.
///
/// Each setter only records the change; `render` regenerates the whole
/// output from the current state every time it is called.
#[derive(Debug, Clone)]
pub struct ConditionForm {
    fields: Vec<FieldDescriptor>,
    table_alias: String,
    param_prefix: String,
    dialect: Dialect,
    assignment: OperatorAssignment,
}

impl ConditionForm {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let assignment = OperatorAssignment::with_defaults(&fields);
        Self {
            fields,
            table_alias: DEFAULT_TABLE_ALIAS.to_string(),
            param_prefix: DEFAULT_PARAM_PREFIX.to_string(),
            dialect: Dialect::default(),
            assignment,
        }
    }

    pub fn from_source<S: FieldSource + ?Sized>(source: &S) -> Self {
        Self::new(source.fields())
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn table_alias(&self) -> &str {
        &self.table_alias
    }

    pub fn param_prefix(&self) -> &str {
        &self.param_prefix
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn assignment(&self) -> &OperatorAssignment {
        &self.assignment
    }

    pub fn set_table_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.table_alias = alias.into();
        self
    }

    pub fn set_param_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.param_prefix = prefix.into();
        self
    }

    pub fn set_dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.dialect = dialect;
        self
    }

    /// Pick the operator for one field. Operators the field's kind does not
    /// offer are kept but logged, the generator decides what they render.
    pub fn select_operator(&mut self, field: &str, operator: Operator) -> ConditionResult<&mut Self> {
        let Some(descriptor) = self.fields.iter().find(|f| f.name == field) else {
            return Err(ConditionError::UnknownField {
                field: field.to_string(),
                known: self
                    .fields
                    .iter()
                    .map(|f| f.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        };
        if !descriptor.kind.offers(operator) {
            warn!(
                "Operator {} is not offered for {} field '{}'",
                operator, descriptor.kind, field
            );
        }
        self.assignment.assign(field, operator);
        Ok(self)
    }

    pub fn request(&self) -> GenerationRequest<'_> {
        GenerationRequest {
            fields: &self.fields,
            table_alias: &self.table_alias,
            param_prefix: &self.param_prefix,
            assignment: &self.assignment,
            dialect: self.dialect,
        }
    }

    pub fn render(&self) -> String {
        generate(&self.request())
    }
}
