use crate::error::AttributeError;
use heck::{ToLowerCamelCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase};
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    CamelCase,
    SnakeCase,
    PascalCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    pub fn parse(rule: &str) -> Result<Self, AttributeError> {
        match rule {
            "camelCase" => Ok(RenameRule::CamelCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            "PascalCase" => Ok(RenameRule::PascalCase),
            "SCREAMING_SNAKE_CASE" => Ok(RenameRule::ScreamingSnakeCase),
            _ => Err(AttributeError::UnknownRenameRule {
                rule: rule.to_string(),
            }),
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            RenameRule::CamelCase => name.to_lower_camel_case(),
            RenameRule::SnakeCase => name.to_snake_case(),
            RenameRule::PascalCase => name.to_pascal_case(),
            RenameRule::ScreamingSnakeCase => name.to_shouty_snake_case(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ContainerAttrs {
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    /// The name a field is reported under, or `None` when it is skipped.
    ///
    /// Raw identifiers (`r#type`) report their plain name. An explicit
    /// `rename` wins over `rename_all`.
    pub fn field_name(&self, ident: &syn::Ident, attrs: &[Attribute]) -> syn::Result<Option<String>> {
        let rust_name = ident.to_string().trim_start_matches("r#").to_string();
        let field = field_attrs(&rust_name, attrs)?;
        if field.skip {
            return Ok(None);
        }
        Ok(Some(match (field.rename, self.rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(&rust_name),
            (None, None) => rust_name,
        }))
    }
}

#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub skip: bool,
    pub rename: Option<String>,
}

fn unknown_key(meta: &syn::meta::ParseNestedMeta) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map(|ident| ident.to_string())
        .unwrap_or_else(|| "<path>".to_string());
    AttributeError::UnknownAttribute { key }.to_syn_error(meta.path.span())
}

pub fn container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut parsed = ContainerAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("condition")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let rule: LitStr = meta.value()?.parse()?;
                parsed.rename_all =
                    Some(RenameRule::parse(&rule.value()).map_err(|e| e.to_syn_error(rule.span()))?);
                Ok(())
            } else {
                Err(unknown_key(&meta))
            }
        })?;
    }
    Ok(parsed)
}

pub fn field_attrs(field_name: &str, attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("condition")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                if name.value().trim().is_empty() {
                    return Err(AttributeError::EmptyRename {
                        field_name: field_name.to_string(),
                    }
                    .to_syn_error(name.span()));
                }
                parsed.rename = Some(name.value());
                Ok(())
            } else {
                Err(unknown_key(&meta))
            }
        })?;
    }
    Ok(parsed)
}
