use std::path::PathBuf;

pub type ScanResult<T> = std::result::Result<T, ScanError>;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot walk '{}': {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Cannot parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("Invalid condition attribute in '{}': {message}", path.display())]
    Attribute { path: PathBuf, message: String },

    #[error("No struct named '{name}' under '{}'.", root.display())]
    StructNotFound { name: String, root: PathBuf },

    #[error("Struct name '{name}' is ambiguous under '{}', found in: {candidates}. Qualify it with its module path, e.g. module::{name}.", root.display())]
    AmbiguousStruct {
        name: String,
        root: PathBuf,
        candidates: String,
    },

    #[error("OUT_DIR is not set; generate_fragments_for_dir must run from a build script.")]
    MissingOutDir,
}
