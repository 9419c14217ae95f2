//! Field descriptors and the classification of declared types into kinds.

use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

const STRING_TYPES: &[&str] = &["java.lang.String", "String", "str"];

const BOOLEAN_TYPES: &[&str] = &["java.lang.Boolean", "boolean", "bool"];

const TEMPORAL_TYPES: &[&str] = &[
    "java.util.Date",
    "java.time.LocalDateTime",
    "java.time.LocalDate",
    "java.sql.Timestamp",
    "NaiveDateTime",
    "NaiveDate",
    "DateTime",
    "SystemTime",
    "OffsetDateTime",
    "PrimitiveDateTime",
];

const COLLECTION_TYPES: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.Set",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.TreeSet",
    "Vec",
    "VecDeque",
    "HashSet",
    "BTreeSet",
];

/// Match a qualified name against a table. Java names compare in full,
/// Rust paths (`chrono::NaiveDateTime`) on their last segment.
fn is_one_of(qualified_name: &str, table: &[&str]) -> bool {
    let name = qualified_name.trim();
    let last_segment = name.rsplit("::").next().unwrap_or(name);
    table
        .iter()
        .any(|candidate| *candidate == name || *candidate == last_segment)
}

/// Whether `qualified_name` names one of the known collection types.
pub fn is_collection_type(qualified_name: &str) -> bool {
    is_one_of(qualified_name, COLLECTION_TYPES)
}

/// The three facts the source model reports about a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub qualified_name: String,
    pub is_collection: bool,
    /// Single generic argument of a collection, when it could be resolved.
    pub element: Option<String>,
}

impl TypeInfo {
    pub fn scalar(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            is_collection: false,
            element: None,
        }
    }

    pub fn collection(qualified_name: impl Into<String>, element: Option<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            is_collection: true,
            element,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    String,
    Boolean,
    Temporal,
    TemporalCollection,
    GenericCollection,
    Other,
}

impl FieldKind {
    pub fn classify(ty: &TypeInfo) -> Self {
        if ty.is_collection {
            return match &ty.element {
                Some(element) if is_one_of(element, TEMPORAL_TYPES) => FieldKind::TemporalCollection,
                _ => FieldKind::GenericCollection,
            };
        }
        if is_one_of(&ty.qualified_name, STRING_TYPES) {
            FieldKind::String
        } else if is_one_of(&ty.qualified_name, BOOLEAN_TYPES) {
            FieldKind::Boolean
        } else if is_one_of(&ty.qualified_name, TEMPORAL_TYPES) {
            FieldKind::Temporal
        } else {
            FieldKind::Other
        }
    }

    /// Operators a user may pick for this kind; the first one is the default.
    pub fn offered_operators(self) -> &'static [Operator] {
        match self {
            FieldKind::String => &[Operator::Eq, Operator::Like],
            FieldKind::TemporalCollection => &[Operator::Between],
            FieldKind::GenericCollection => &[Operator::In, Operator::NotIn, Operator::Between],
            FieldKind::Boolean => &[Operator::Eq],
            FieldKind::Temporal | FieldKind::Other => &[
                Operator::Eq,
                Operator::NotEq,
                Operator::Gt,
                Operator::Lt,
                Operator::Gte,
                Operator::Lte,
            ],
        }
    }

    pub fn default_operator(self) -> Operator {
        self.offered_operators()[0]
    }

    pub fn offers(self, operator: Operator) -> bool {
        self.offered_operators().contains(&operator)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Temporal => "temporal",
            FieldKind::TemporalCollection => "temporal-collection",
            FieldKind::GenericCollection => "collection",
            FieldKind::Other => "other",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn from_type(name: impl Into<String>, ty: &TypeInfo) -> Self {
        Self::new(name, FieldKind::classify(ty))
    }
}

/// Anything that can report the fields of a class in declaration order.
pub trait FieldSource {
    fn fields(&self) -> Vec<FieldDescriptor>;
}

impl FieldSource for Vec<FieldDescriptor> {
    fn fields(&self) -> Vec<FieldDescriptor> {
        self.clone()
    }
}

impl FieldSource for [FieldDescriptor] {
    fn fields(&self) -> Vec<FieldDescriptor> {
        self.to_vec()
    }
}

/// Implemented by `#[derive(ConditionFields)]`.
pub trait ConditionFields {
    fn condition_fields() -> Vec<FieldDescriptor>;
}
