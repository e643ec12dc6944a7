use thiserror::Error;

/// Errors detected while validating a `ModelSpec`, before any value is sampled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("The model defines no constructs; at least one is required")]
    NoConstructs,

    #[error("Construct at position {index} has an empty name")]
    EmptyName { index: usize },

    #[error("Construct name '{0}' is used more than once")]
    DuplicateConstruct(String),

    #[error("Construct '{name}' has {items} items, but the allowed range is {min} to {max}")]
    ItemsOutOfRange {
        name: String,
        items: u8,
        min: u8,
        max: u8,
    },

    #[error("Construct '{name}' has mean {mean}, but the allowed range is [{min}, {max}]")]
    MeanOutOfRange {
        name: String,
        mean: f64,
        min: f64,
        max: f64,
    },

    #[error("Construct '{name}' has SD {sd}, but the allowed range is [{min}, {max}]")]
    SdOutOfRange {
        name: String,
        sd: f64,
        min: f64,
        max: f64,
    },

    #[error("Sample size {size} is outside the allowed range {min} to {max}")]
    SampleSizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("Path '{from} → {to}' has coefficient {coefficient}, which is outside [-1, 1]")]
    CoefficientOutOfRange {
        from: String,
        to: String,
        coefficient: f64,
    },

    #[error("Path '{0} → {0}' points a construct at itself")]
    SelfLoop(String),

    #[error("Field '{field}' of '{owner}' is not a finite number")]
    NonFinite { owner: String, field: &'static str },

    #[error("Generation setting '{name}' has invalid value {value}")]
    InvalidSetting { name: &'static str, value: f64 },

    #[error("Failed to parse model JSON: {0}")]
    Json(String),

    #[error("Failed to read model file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Numerical failures raised by the latent sampler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error(
        "The covariance matrix is not positive definite (factorisation broke down at construct '{construct}', pivot {pivot:.6}); the configured paths conflict"
    )]
    NotPositiveDefinite { construct: String, pivot: f64 },

    #[error("Matrix dimension {found} does not match the {expected} configured constructs")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Errors raised by a full generation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisError {
    #[error("Invalid model configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Sampling failed: {0}")]
    Sampling(#[from] SamplingError),
}

/// Errors that can occur while writing or reading exported run data.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Errors that can occur when converting a custom user format into a `ModelSpec`.
#[derive(Error, Debug, Clone)]
pub enum SpecConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
