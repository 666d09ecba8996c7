use thiserror::Error;

#[derive(Error, Debug)]
pub enum DsaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty structure: {0}")]
    EmptyStructure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sort mismatch: {0}")]
    SortMismatch(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl DsaError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DsaError::InvalidArgument(_))
    }

    pub fn is_empty_structure(&self) -> bool {
        matches!(self, DsaError::EmptyStructure(_))
    }
}

impl From<anyhow::Error> for DsaError {
    fn from(err: anyhow::Error) -> Self {
        DsaError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DsaError>;
