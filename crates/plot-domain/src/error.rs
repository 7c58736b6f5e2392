use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("extension slices must share one length: `{attr}` has {got}, expected {expected}")]
    LengthMismatch { attr: String, expected: usize, got: usize },
    #[error("style path must contain at least one segment")]
    EmptyPath,
}
