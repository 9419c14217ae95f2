//! Error types for derive failures, reported as compile errors at the
//! offending span.

use proc_macro2::Span;
use syn::Error;

#[derive(Debug, thiserror::Error)]
pub enum MacroError {
    #[error("#[derive(ConditionFields)] only supports structs with named fields, '{type_name}' is not one.\n\nExample:\n    #[derive(ConditionFields)]\n    struct UserQuery {{\n        user_name: Option<String>,\n    }}")]
    NotNamedStruct { type_name: String },
}

impl MacroError {
    pub fn to_syn_error(&self, span: Span) -> Error {
        Error::new(span, self.to_string())
    }
}
