use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("invalid distribution for '{context}': {reason}")]
    InvalidDistribution {
        context: &'static str,
        reason: String,
    },

    #[error("data integrity violation: {0}")]
    DataIntegrity(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("export to '{path}' failed: {reason}")]
    Export { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DatasetResult<T> = Result<T, DatasetError>;
