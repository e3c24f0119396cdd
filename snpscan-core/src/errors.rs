use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnpScanError {
    #[error("Error parsing region: {0}")]
    InvalidRegion(String),

    #[error("Invalid window parameter: {0}")]
    InvalidWindowParameter(String),

    #[error("Malformed variant record: {0}")]
    MalformedRecord(String),

    #[error("Can't read variant source: {0}")]
    Source(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnpScanError>;
