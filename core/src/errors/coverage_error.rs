use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("CoverageError: {message}")]
#[diagnostic(help("every byte of the input must belong to exactly one token"))]
pub struct CoverageError {
    pub message: String,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl CoverageError {
    pub fn new(message: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            message: message.into(),
            span: (offset, length).into(),
        }
    }
}
