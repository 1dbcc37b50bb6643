use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown normalization step: {0}")]
    UnknownStep(String),
    #[error("unknown issue field: {0}")]
    UnknownIssueField(String),
    #[error("unknown issue type: {0}")]
    UnknownIssueKind(String),
    #[error("unknown input column: {0}")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
