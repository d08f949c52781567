use core::fmt;
use core::str::FromStr;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::error::TraceError;

/// Strategy used to pick the pivot of a sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PivotPolicy {
    /// Always the last element of the range.
    Fixed,
    /// A uniformly drawn element of the range, exchanged into the last position.
    Randomized,
}

impl PivotPolicy {
    pub const ALL: [PivotPolicy; 2] = [PivotPolicy::Fixed, PivotPolicy::Randomized];

    pub fn name(self) -> &'static str {
        match self {
            PivotPolicy::Fixed => "fixed",
            PivotPolicy::Randomized => "randomized",
        }
    }
}

impl fmt::Display for PivotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotPolicy {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(PivotPolicy::Fixed),
            "randomized" => Ok(PivotPolicy::Randomized),
            _ => Err(TraceError::UnknownPolicy(s.to_owned())),
        }
    }
}

/// A pivot policy together with the state it needs.
///
/// The randomized variant owns its generator, so two runs never share random state and a run
/// seeded with the same value always draws the same pivots.
#[derive(Debug, Clone)]
pub enum PivotSelector {
    Fixed,
    Randomized(StdRng),
}

impl PivotSelector {
    /// Without a seed the randomized generator is seeded from the OS entropy source, which is
    /// the only fallible step of a run.
    pub fn new(policy: PivotPolicy, seed: Option<u64>) -> Result<Self, TraceError> {
        match policy {
            PivotPolicy::Fixed => Ok(PivotSelector::Fixed),
            PivotPolicy::Randomized => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_rng(OsRng).map_err(TraceError::RandomSource)?,
                };
                Ok(PivotSelector::Randomized(rng))
            }
        }
    }

    pub fn policy(&self) -> PivotPolicy {
        match self {
            PivotSelector::Fixed => PivotPolicy::Fixed,
            PivotSelector::Randomized(_) => PivotPolicy::Randomized,
        }
    }

    /// Returns the pivot position for `v[low..=high]`, which is always `high`.
    ///
    /// The randomized policy first swaps its pick into `high`, before any frame of the
    /// partition step is recorded. Callers must ensure `low <= high < v.len()`.
    pub fn select<T>(&mut self, v: &mut [T], low: usize, high: usize) -> usize {
        debug_assert!(low <= high && high < v.len());

        if let PivotSelector::Randomized(rng) = self {
            let pick = rng.gen_range(low..=high);
            trace!(low, high, pick, "randomized pivot exchanged into last position");
            v.swap(pick, high);
        }

        high
    }
}
