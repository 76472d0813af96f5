use thiserror::Error;

pub type AxisSpacingResult<T> = Result<T, AxisSpacingError>;

#[derive(Debug, Error)]
pub enum AxisSpacingError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("tick positions must be strictly increasing: previous={previous}, next={next}")]
    InvalidTickOrder { previous: usize, next: usize },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
