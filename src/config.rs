use std::env;

use crate::error::TraceError;

const SEED_VAR: &str = "SORT_TRACE_SEED";
const PARALLEL_VAR: &str = "SORT_TRACE_PARALLEL";

/// Knobs of a comparative run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Seed of the randomized run, `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Run both policies on their own thread.
    pub parallel: bool,
}

impl ComparisonConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reads `SORT_TRACE_SEED` and `SORT_TRACE_PARALLEL`, unset variables keep the defaults.
    pub fn from_env() -> Result<Self, TraceError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ComparisonConfig::from_env`], with an arbitrary variable source.
    pub fn from_lookup<L>(mut lookup: L) -> Result<Self, TraceError>
    where
        L: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_VAR) {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| TraceError::InvalidConfig {
                    key: SEED_VAR,
                    value: value.clone(),
                })?;
            config.seed = Some(seed);
        }

        if let Some(value) = lookup(PARALLEL_VAR) {
            config.parallel = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(TraceError::InvalidConfig {
                        key: PARALLEL_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
