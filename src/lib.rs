//! Instrumented quicksort that records a replayable trace of every partitioning decision.
//!
//! Two pivot policies share one Lomuto partition, so the same input can be played back side by
//! side under the fixed (last element) and the randomized policy.

pub mod compare;
pub mod config;
pub mod error;
pub mod partition;
pub mod pivot;
pub mod quicksort;
pub mod trace;

pub use compare::{run_comparison, Comparison, RunResult};
pub use config::ComparisonConfig;
pub use error::TraceError;
pub use pivot::{PivotPolicy, PivotSelector};
pub use quicksort::{sort, sort_by, sort_range};
pub use trace::{Frame, FrameKind, Highlight, Trace, TraceRecorder};
