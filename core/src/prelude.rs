/// Common error type for model construction and archiving.
#[derive(thiserror::Error, Debug)]
pub enum DetectorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("serialization failure: {0}")]
    SerializationFailure(#[from] serde_json::Error),
}

pub type DetectorResult<T> = Result<T, DetectorError>;
