use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown target: {0}")]
    UnknownTarget(String),

    #[error("unknown subcategory: {0}")]
    UnknownSubcategory(String),

    #[error("unknown athlete type: {0}")]
    UnknownAthleteType(String),
}
