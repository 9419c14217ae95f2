//! Finds structs in Rust sources and reports their fields.
//!
//! The `#[condition(...)]` attributes are parsed by the same code as the
//! derive macro, so `skip`, `rename` and `rename_all` behave identically
//! whether a struct is derived or scanned.

use crate::error::{ScanError, ScanResult};
use crate::type_info::type_info;
use log::debug;
use mybatis_condition::{FieldDescriptor, FieldSource};
use mybatis_condition_syntax::container_attrs;
use std::path::{Component, Path, PathBuf};
use syn::{Attribute, Item};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedStruct {
    pub name: String,
    /// Modules the struct is nested in, outermost first: the file's own
    /// module path followed by any inline `mod` blocks.
    pub module_path: Vec<String>,
    pub file: PathBuf,
    pub derives_condition_fields: bool,
    pub fields: Vec<FieldDescriptor>,
}

impl ScannedStruct {
    /// `outer::inner::Name`
    pub fn qualified_name(&self) -> String {
        let mut parts = self.module_path.clone();
        parts.push(self.name.clone());
        parts.join("::")
    }
}

impl FieldSource for ScannedStruct {
    fn fields(&self) -> Vec<FieldDescriptor> {
        self.fields.clone()
    }
}

fn has_condition_fields_derive(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        if !attr.path().is_ident("derive") {
            return false;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.segments.last().is_some_and(|s| s.ident == "ConditionFields") {
                found = true;
            }
            Ok(())
        });
        found
    })
}

/// Module path of a source file relative to the scanned root.
///
/// `src/admin/user.rs` is `admin::user`; `mod.rs`, `lib.rs` and `main.rs`
/// belong to their directory's module.
pub fn file_module_path(root: &Path, file: &Path) -> Vec<String> {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    if parts.first().is_some_and(|first| first == "src") {
        parts.remove(0);
    }
    if let Some(file_name) = parts.pop() {
        let stem = file_name.strip_suffix(".rs").unwrap_or(&file_name);
        if !matches!(stem, "mod" | "lib" | "main") {
            parts.push(stem.to_string());
        }
    }
    parts
}

fn scan_struct(item: &syn::ItemStruct, module_path: &[String], file: &Path) -> ScanResult<ScannedStruct> {
    let attribute_error = |e: syn::Error| ScanError::Attribute {
        path: file.to_path_buf(),
        message: format!("{}: {}", item.ident, e),
    };
    let container = container_attrs(&item.attrs).map_err(attribute_error)?;

    let mut fields = Vec::new();
    if let syn::Fields::Named(named) = &item.fields {
        for field in &named.named {
            let Some(ident) = &field.ident else { continue };
            let Some(name) = container.field_name(ident, &field.attrs).map_err(attribute_error)? else {
                continue;
            };
            fields.push(FieldDescriptor::from_type(name, &type_info(&field.ty)));
        }
    }

    Ok(ScannedStruct {
        name: item.ident.to_string(),
        module_path: module_path.to_vec(),
        file: file.to_path_buf(),
        derives_condition_fields: has_condition_fields_derive(&item.attrs),
        fields,
    })
}

fn collect_structs(
    items: &[Item],
    module_path: &mut Vec<String>,
    file: &Path,
    out: &mut Vec<ScannedStruct>,
) -> ScanResult<()> {
    for item in items {
        match item {
            Item::Struct(item) => out.push(scan_struct(item, module_path, file)?),
            Item::Mod(module) => {
                if let Some((_, items)) = &module.content {
                    module_path.push(module.ident.to_string());
                    collect_structs(items, module_path, file, out)?;
                    module_path.pop();
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn scan_module(source: &str, file: &Path, mut module_path: Vec<String>) -> ScanResult<Vec<ScannedStruct>> {
    let parsed = syn::parse_file(source).map_err(|source| ScanError::Parse {
        path: file.to_path_buf(),
        source,
    })?;
    let mut structs = Vec::new();
    collect_structs(&parsed.items, &mut module_path, file, &mut structs)?;
    Ok(structs)
}

/// Structs declared in one source text, as if it were the crate root.
/// `file` is only used for reporting.
pub fn scan_source(source: &str, file: impl AsRef<Path>) -> ScanResult<Vec<ScannedStruct>> {
    scan_module(source, file.as_ref(), Vec::new())
}

/// Every struct in every `.rs` file under `root`, in path order.
pub fn scan_dir(root: impl AsRef<Path>) -> ScanResult<Vec<ScannedStruct>> {
    let root = root.as_ref();
    let mut structs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| ScanError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "rs") {
            continue;
        }
        let content = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let found = scan_module(&content, path, file_module_path(root, path))?;
        debug!("{}: {} struct(s)", path.display(), found.len());
        structs.extend(found);
    }
    Ok(structs)
}

/// Look a struct up by name, or by `module::Name` when the bare name is ambiguous.
pub fn find_struct(root: impl AsRef<Path>, name: &str) -> ScanResult<ScannedStruct> {
    let root = root.as_ref();
    let mut matches: Vec<ScannedStruct> = scan_dir(root)?
        .into_iter()
        .filter(|s| {
            if name.contains("::") {
                s.qualified_name() == name || s.qualified_name().ends_with(&format!("::{}", name))
            } else {
                s.name == name
            }
        })
        .collect();
    match matches.len() {
        0 => Err(ScanError::StructNotFound {
            name: name.to_string(),
            root: root.to_path_buf(),
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(ScanError::AmbiguousStruct {
            name: name.to_string(),
            root: root.to_path_buf(),
            candidates: matches
                .iter()
                .map(|s| format!("{} ({})", s.qualified_name(), s.file.display()))
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
