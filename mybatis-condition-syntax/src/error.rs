use proc_macro2::Span;

#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    #[error("Unknown condition attribute '{key}'. Supported: skip, rename = \"...\" on fields and rename_all = \"...\" on the struct.")]
    UnknownAttribute { key: String },

    #[error("Unknown rename rule '{rule}'. Supported: camelCase, snake_case, PascalCase, SCREAMING_SNAKE_CASE.")]
    UnknownRenameRule { rule: String },

    #[error("Field '{field_name}' is renamed to an empty name.")]
    EmptyRename { field_name: String },
}

impl AttributeError {
    pub fn to_syn_error(&self, span: Span) -> syn::Error {
        syn::Error::new(span, self.to_string())
    }
}
