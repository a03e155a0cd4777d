mod coverage_error;

use std::path::PathBuf;

pub use coverage_error::CoverageError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for the edges around tokenization: reading input,
/// serializing output and checking coverage. Tokenizing itself cannot fail.
#[derive(Debug, Error, Diagnostic)]
pub enum GlintError {
    #[error("could not read '{}'", .path.display())]
    #[diagnostic(help("check that the file exists and is valid UTF-8"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize tokens")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Coverage(#[from] CoverageError),
}
