//! Class descriptors: the fields of a class and their declared types, as
//! exported from a source model into a JSON file.
//!
//! ```json
//! {
//!   "name": "com.example.UserQuery",
//!   "fields": [
//!     { "name": "userName", "type": "java.lang.String" },
//!     { "name": "createdAt", "type": "java.util.List<java.time.LocalDateTime>" },
//!     { "name": "tags", "type": "java.util.Set", "collection": true, "element": "java.lang.String" }
//!   ]
//! }
//! ```

use crate::error::{ConditionError, ConditionResult};
use crate::field::{is_collection_type, FieldDescriptor, FieldSource, TypeInfo};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

// `Name` or `Name<Arg>`, names may be Java (`a.b.C`) or Rust (`a::b::C`) paths
static TYPE_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_$][\w$.:]*(?:\[\])*)\s*(?:<\s*([A-Za-z_$][\w$.:]*)\s*>)?\s*$")
        .expect("type text pattern is valid")
});

#[derive(Debug, Deserialize)]
struct RawClass {
    #[serde(default)]
    name: Option<String>,
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    type_text: String,
    #[serde(default)]
    collection: Option<bool>,
    #[serde(default)]
    element: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedField {
    pub name: String,
    pub type_info: TypeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: Option<String>,
    pub fields: Vec<DescribedField>,
}

/// Split `java.util.List<java.lang.Long>` into its type facts.
///
/// Text with several or nested generic arguments keeps only its outer type:
/// `java.util.Map<K, V>` is a scalar, `List<List<Long>>` a collection with
/// an unknown element. Only blank text is rejected.
pub fn parse_type_text(field: &str, text: &str) -> ConditionResult<TypeInfo> {
    let (name, element) = match TYPE_TEXT.captures(text) {
        Some(captures) => (
            captures[1].to_string(),
            captures.get(2).map(|m| m.as_str().to_string()),
        ),
        None => {
            let outer = text.split('<').next().unwrap_or_default().trim();
            if outer.is_empty() {
                return Err(ConditionError::InvalidTypeText {
                    field: field.to_string(),
                    text: text.to_string(),
                });
            }
            (outer.to_string(), None)
        }
    };
    if is_collection_type(&name) {
        Ok(TypeInfo::collection(name, element))
    } else {
        Ok(TypeInfo {
            qualified_name: name,
            is_collection: false,
            element,
        })
    }
}

impl ClassDescriptor {
    pub fn from_json_str(json: &str) -> ConditionResult<Self> {
        let raw: RawClass =
            serde_json::from_str(json).map_err(|e| ConditionError::json("<inline>", e))?;
        Self::from_raw(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> ConditionResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConditionError::io(path, e))?;
        let raw: RawClass = serde_json::from_str(&content).map_err(|e| ConditionError::json(path, e))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawClass) -> ConditionResult<Self> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(raw.fields.len());
        for (index, field) in raw.fields.into_iter().enumerate() {
            let name = field.name.trim().to_string();
            if name.is_empty() {
                return Err(ConditionError::InvalidField {
                    index,
                    reason: "field name is blank".to_string(),
                });
            }
            if !seen.insert(name.clone()) {
                return Err(ConditionError::DuplicateField { field: name });
            }

            let mut type_info = parse_type_text(&name, &field.type_text)?;
            if let Some(collection) = field.collection {
                type_info.is_collection = collection;
            }
            if field.element.is_some() {
                type_info.element = field.element;
            }
            fields.push(DescribedField { name, type_info });
        }
        Ok(Self {
            name: raw.name,
            fields,
        })
    }
}

impl FieldSource for ClassDescriptor {
    fn fields(&self) -> Vec<FieldDescriptor> {
        self.fields
            .iter()
            .map(|f| FieldDescriptor::from_type(&f.name, &f.type_info))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_text() {
        let ty = parse_type_text("f", "java.util.List<java.time.LocalDateTime>").unwrap();
        assert!(ty.is_collection);
        assert_eq!(ty.qualified_name, "java.util.List");
        assert_eq!(ty.element.as_deref(), Some("java.time.LocalDateTime"));

        let ty = parse_type_text("f", " java.lang.Long ").unwrap();
        assert!(!ty.is_collection);
        assert_eq!(ty.element, None);

        let ty = parse_type_text("f", "Vec<chrono::NaiveDate>").unwrap();
        assert!(ty.is_collection);

        let ty = parse_type_text("f", "java.lang.Long[]").unwrap();
        assert!(!ty.is_collection);
    }

    #[test]
    fn test_parse_type_text_keeps_outer_type_of_complex_generics() {
        let ty = parse_type_text("f", "java.util.Map<java.lang.String, java.lang.Object>").unwrap();
        assert_eq!(ty, TypeInfo::scalar("java.util.Map"));

        let ty = parse_type_text("f", "java.util.List<java.util.List<java.lang.Long>>").unwrap();
        assert_eq!(ty, TypeInfo::collection("java.util.List", None));
    }

    #[test]
    fn test_parse_type_text_rejects_blank() {
        let err = parse_type_text("f", "  ").unwrap_err();
        assert!(matches!(err, ConditionError::InvalidTypeText { .. }));
        assert!(parse_type_text("f", "").is_err());
        assert!(parse_type_text("f", "<T>").is_err());
    }

    #[test]
    fn test_explicit_flags_win() {
        let desc = ClassDescriptor::from_json_str(
            r#"{"fields":[{"name":"tags","type":"com.example.TagBag","collection":true,"element":"java.util.Date"}]}"#,
        )
        .unwrap();
        assert_eq!(desc.name, None);
        let ty = &desc.fields[0].type_info;
        assert!(ty.is_collection);
        assert_eq!(ty.element.as_deref(), Some("java.util.Date"));
    }

    #[test]
    fn test_duplicate_and_blank_names() {
        let err = ClassDescriptor::from_json_str(
            r#"{"fields":[{"name":"a","type":"int"},{"name":"a","type":"int"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConditionError::DuplicateField { field } if field == "a"));

        let err = ClassDescriptor::from_json_str(r#"{"fields":[{"name":" ","type":"int"}]}"#).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidField { index: 0, .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = ClassDescriptor::from_json_str("{").unwrap_err();
        assert!(matches!(err, ConditionError::Json { .. }));
    }
}
