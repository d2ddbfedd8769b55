//! Defines the error types for loading type declarations.
use std::path::PathBuf;
use thiserror::Error;

/// Why a package's declarations could not be loaded.
///
/// These never reach the matcher. The cache logs them and marks the package
/// unusable, which turns every check against it into `NotAvailable`.
#[derive(Error, Debug)]
pub enum DeclarationError {
    #[error("Unable to read declarations for package '{package}' from {path}: {source}")]
    Io {
        package: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed declarations for package '{package}': {source}")]
    Parse {
        package: String,
        #[source]
        source: serde_json::Error,
    },
}
