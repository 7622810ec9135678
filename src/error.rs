use thiserror::Error;

/// All errors produced by the centering library.
#[derive(Debug, Error)]
pub enum CenteringError {
    /// A method name outside `flexbox | grid | absolute`.
    #[error("unknown centering method: {0} (expected flexbox, grid, or absolute)")]
    UnknownMethod(String),

    /// A playground size outside its slider range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A question bank that cannot drive a quiz.
    #[error("invalid question bank: {0}")]
    InvalidBank(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CenteringError>;

/// Shorthand constructors.
impl CenteringError {
    pub fn out_of_range(field: &'static str, value: u32, range: std::ops::RangeInclusive<u32>) -> Self {
        Self::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        }
    }

    pub fn invalid_bank(msg: impl Into<String>) -> Self {
        Self::InvalidBank(msg.into())
    }
}
