use std::thread;

use tracing::debug;

use crate::config::ComparisonConfig;
use crate::error::TraceError;
use crate::pivot::PivotPolicy;
use crate::quicksort;
use crate::trace::{Frame, Trace};

/// Final sequence of one run together with its trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult<T> {
    policy: PivotPolicy,
    sorted: Vec<T>,
    trace: Trace<T>,
}

impl<T: Ord + Clone> RunResult<T> {
    /// Sorts a private copy of `initial`.
    pub fn run(initial: &[T], policy: PivotPolicy, seed: Option<u64>) -> Result<Self, TraceError> {
        let mut sorted = initial.to_vec();
        let trace = quicksort::sort(&mut sorted, policy, seed)?;

        Ok(Self {
            policy,
            sorted,
            trace,
        })
    }
}

impl<T> RunResult<T> {
    pub fn policy(&self) -> PivotPolicy {
        self.policy
    }

    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }

    pub fn trace(&self) -> &Trace<T> {
        &self.trace
    }

    pub fn into_parts(self) -> (Vec<T>, Trace<T>) {
        (self.sorted, self.trace)
    }
}

/// The same input sorted once per pivot policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    fixed: RunResult<T>,
    randomized: RunResult<T>,
}

impl<T> Comparison<T> {
    pub fn fixed(&self) -> &RunResult<T> {
        &self.fixed
    }

    pub fn randomized(&self) -> &RunResult<T> {
        &self.randomized
    }

    pub fn into_parts(self) -> (RunResult<T>, RunResult<T>) {
        (self.fixed, self.randomized)
    }

    /// Number of ticks a side-by-side playback needs, the length of the longer trace.
    pub fn max_frames(&self) -> usize {
        self.fixed.trace.len().max(self.randomized.trace.len())
    }

    /// Walks both traces in lockstep. The shorter side yields `None` once it is exhausted.
    pub fn playback(&self) -> impl Iterator<Item = (Option<&Frame<T>>, Option<&Frame<T>>)> + '_ {
        (0..self.max_frames()).map(move |tick| {
            (
                self.fixed.trace.get(tick),
                self.randomized.trace.get(tick),
            )
        })
    }
}

impl<T: Ord + Clone + Send + Sync> Comparison<T> {
    /// Runs both policies on independent copies of `initial`.
    pub fn run(initial: &[T], config: &ComparisonConfig) -> Result<Self, TraceError> {
        let (fixed, randomized) = if config.parallel {
            thread::scope(|s| {
                let fixed = s.spawn(|| RunResult::run(initial, PivotPolicy::Fixed, None));
                let randomized = RunResult::run(initial, PivotPolicy::Randomized, config.seed);
                let fixed = match fixed.join() {
                    Ok(result) => result,
                    Err(payload) => std::panic::resume_unwind(payload),
                };
                (fixed, randomized)
            })
        } else {
            (
                RunResult::run(initial, PivotPolicy::Fixed, None),
                RunResult::run(initial, PivotPolicy::Randomized, config.seed),
            )
        };

        let comparison = Self {
            fixed: fixed?,
            randomized: randomized?,
        };

        debug!(
            len = initial.len(),
            fixed_frames = comparison.fixed.trace.len(),
            randomized_frames = comparison.randomized.trace.len(),
            parallel = config.parallel,
            "comparison finished"
        );

        Ok(comparison)
    }
}

/// Sorts `initial` with both pivot policies, one after the other.
///
/// The randomized run is seeded from `seed`, so the same input and seed reproduce both traces.
pub fn run_comparison<T>(initial: &[T], seed: Option<u64>) -> Result<Comparison<T>, TraceError>
where
    T: Ord + Clone + Send + Sync,
{
    let config = ComparisonConfig {
        seed,
        parallel: false,
    };
    Comparison::run(initial, &config)
}
