use thiserror::Error;

/// Rejected radar chart configuration.
///
/// Raised synchronously from construction or from a value update; these
/// are caller mistakes, never transient failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("empty label list provided")]
    EmptyLabels,

    #[error("ring position out of range: {0} (allowed 1-9)")]
    RingOutOfRange(u8),

    #[error("duplicate ring selector: {0}")]
    DuplicateRing(u8),

    #[error("at least one value is required")]
    NoValues,

    #[error("value at index {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("chart size must be positive and finite, got {0}")]
    InvalidSize(f64),

    #[error("max value must be positive and finite, got {0}")]
    InvalidMaxValue(f64),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
