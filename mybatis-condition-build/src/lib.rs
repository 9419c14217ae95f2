//! Source scanning and build-script support for mybatis-condition.
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     mybatis_condition_build::generate_fragments_for_dir(
//!         "src",
//!         "conditions.rs",
//!         &mybatis_condition_build::FragmentOptions::default(),
//!     )
//!     .unwrap();
//! }
//!
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/conditions.rs"));
//! ```

mod error;
mod scanner;
mod type_info;

pub use error::{ScanError, ScanResult};
pub use scanner::{file_module_path, find_struct, scan_dir, scan_source, ScannedStruct};
pub use type_info::type_info;

use heck::ToShoutySnakeCase;
use log::debug;
use mybatis_condition::{ConditionForm, Dialect, DEFAULT_PARAM_PREFIX, DEFAULT_TABLE_ALIAS};
use quote::{format_ident, quote};
use std::env;
use std::path::{Path, PathBuf};

/// Rendering settings for fragments baked in at build time. Every field
/// uses its kind's default operator.
#[derive(Debug, Clone)]
pub struct FragmentOptions {
    pub table_alias: String,
    pub param_prefix: String,
    pub dialect: Dialect,
}

impl Default for FragmentOptions {
    fn default() -> Self {
        Self {
            table_alias: DEFAULT_TABLE_ALIAS.to_string(),
            param_prefix: DEFAULT_PARAM_PREFIX.to_string(),
            dialect: Dialect::default(),
        }
    }
}

/// Rust source declaring one `<NAME>_CONDITIONS` constant per struct that
/// derives `ConditionFields`.
pub fn generate_fragment_code(structs: &[ScannedStruct], options: &FragmentOptions) -> String {
    let constants = structs
        .iter()
        .filter(|s| s.derives_condition_fields)
        .map(|s| {
            let const_name = format_ident!(
                "{}_CONDITIONS",
                s.qualified_name().replace("::", "_").to_shouty_snake_case()
            );
            let mut form = ConditionForm::new(s.fields.clone());
            form.set_table_alias(options.table_alias.as_str())
                .set_param_prefix(options.param_prefix.as_str())
                .set_dialect(options.dialect);
            let text = form.render();
            let doc = format!(" MyBatis conditions for `{}`.", s.qualified_name());
            quote! {
                #[doc = #doc]
                pub const #const_name: &str = #text;
            }
        });

    quote! {
        #(#constants)*
    }
    .to_string()
}

/// Scan `dir` and write the generated constants to `$OUT_DIR/out_file`.
pub fn generate_fragments_for_dir(
    dir: impl AsRef<Path>,
    out_file: &str,
    options: &FragmentOptions,
) -> ScanResult<PathBuf> {
    let dir = dir.as_ref();
    println!("cargo:rerun-if-changed={}", dir.display());

    let out_dir = env::var_os("OUT_DIR").ok_or(ScanError::MissingOutDir)?;
    let out_path = Path::new(&out_dir).join(out_file);

    let structs = scan_dir(dir)?;
    let code = generate_fragment_code(&structs, options);
    std::fs::write(&out_path, code).map_err(|source| ScanError::Io {
        path: out_path.clone(),
        source,
    })?;
    debug!("Wrote condition fragments to {}", out_path.display());
    Ok(out_path)
}
