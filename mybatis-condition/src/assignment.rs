use crate::field::FieldDescriptor;
use crate::operator::Operator;
use std::collections::HashMap;

/// Operator chosen per field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorAssignment {
    operators: HashMap<String, Operator>,
}

impl OperatorAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assignment holding each field's kind default.
    pub fn with_defaults(fields: &[FieldDescriptor]) -> Self {
        let mut assignment = Self::new();
        assignment.seed(fields);
        assignment
    }

    /// Insert the kind default for every field not assigned yet.
    pub fn seed(&mut self, fields: &[FieldDescriptor]) {
        for field in fields {
            self.operators
                .entry(field.name.clone())
                .or_insert_with(|| field.kind.default_operator());
        }
    }

    /// Replace the operator of `field`, returning the previous one.
    pub fn assign(&mut self, field: impl Into<String>, operator: Operator) -> Option<Operator> {
        self.operators.insert(field.into(), operator)
    }

    pub fn get(&self, field: &str) -> Option<Operator> {
        self.operators.get(field).copied()
    }

    /// Operator used for generation; unassigned fields compare with `=`.
    pub fn operator_for(&self, field: &str) -> Operator {
        self.get(field).unwrap_or(Operator::Eq)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Operator)> for OperatorAssignment {
    fn from_iter<I: IntoIterator<Item = (S, Operator)>>(iter: I) -> Self {
        Self {
            operators: iter.into_iter().map(|(name, op)| (name.into(), op)).collect(),
        }
    }
}
