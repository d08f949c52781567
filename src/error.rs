use thiserror::Error;

/// Everything that can make a traced run fail.
///
/// A run is deterministic given its input and seed, there is nothing to retry from inside.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("range end {high} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { high: usize, len: usize },

    #[error("random source failed to produce a seed: {0}")]
    RandomSource(#[source] rand::Error),

    #[error("unknown pivot policy '{0}', expected 'fixed' or 'randomized'")]
    UnknownPolicy(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
