use core::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::TraceError;
use crate::partition::partition;
use crate::pivot::{PivotPolicy, PivotSelector};
use crate::trace::{FrameKind, Trace, TraceRecorder};

/// Sorts the slice with the given pivot policy and returns the trace of the run.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place, and *O*(*n*^2)
/// worst-case. The fixed policy hits that worst case on ascending, descending and all-equal
/// input, the randomized policy expects *O*(*n* \* log(*n*)) on any input.
///
/// `seed` only matters for [`PivotPolicy::Randomized`]. The same input and seed always yield
/// the same trace, no seed means non-reproducible pivots.
pub fn sort<T>(v: &mut [T], policy: PivotPolicy, seed: Option<u64>) -> Result<Trace<T>, TraceError>
where
    T: Ord + Clone,
{
    traced_sort(v, policy, seed, &mut |a: &T, b: &T| a.lt(b))
}

/// Sorts the slice with a comparator function and returns the trace of the run.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
pub fn sort_by<T, F>(
    v: &mut [T],
    policy: PivotPolicy,
    seed: Option<u64>,
    mut compare: F,
) -> Result<Trace<T>, TraceError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    traced_sort(v, policy, seed, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    })
}

fn traced_sort<T, F>(
    v: &mut [T],
    policy: PivotPolicy,
    seed: Option<u64>,
    is_less: &mut F,
) -> Result<Trace<T>, TraceError>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut selector = PivotSelector::new(policy, seed)?;
    let mut recorder = TraceRecorder::new(v);

    if let Some(high) = v.len().checked_sub(1) {
        quicksort(v, 0, high, &mut selector, &mut recorder, is_less);
    }

    let trace = recorder.finish();
    debug!(
        %policy,
        len = v.len(),
        frames = trace.len(),
        comparisons = trace.comparisons(),
        "traced sort finished"
    );

    Ok(trace)
}

/// Sorts `v[low..=high]` in place, appending its frames to `recorder`.
///
/// `low > high` describes an empty range and does nothing. Frames outside the range still show
/// the whole of `v`.
pub fn sort_range<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    selector: &mut PivotSelector,
    recorder: &mut TraceRecorder<T>,
    is_less: &mut F,
) -> Result<(), TraceError>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if low > high {
        return Ok(());
    }

    if high >= v.len() {
        return Err(TraceError::RangeOutOfBounds {
            high,
            len: v.len(),
        });
    }

    quicksort(v, low, high, selector, recorder, is_less);
    Ok(())
}

/// Sorts `v[low..=high]` recursively.
///
/// Recurses into the left side and loops on the right side. Left is always fully sorted before
/// right, which keeps the frame order identical to plain two-sided recursion.
///
/// Only the right side is free of stack growth. The left side still recurses once per
/// partition, so the fixed policy on ascending input nests `n - 1` calls deep.
fn quicksort<T, F>(
    v: &mut [T],
    mut low: usize,
    high: usize,
    selector: &mut PivotSelector,
    recorder: &mut TraceRecorder<T>,
    is_less: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    while low < high {
        let pivot_pos = selector.select(v, low, high);
        recorder.record(FrameKind::PivotChosen, v, Some(pivot_pos), None);

        let mid = partition(v, low, high, recorder, is_less);
        trace!(low, high, mid, "partitioned range");

        if mid > low {
            quicksort(v, low, mid - 1, selector, recorder, is_less);
        }

        low = mid + 1;
    }
}
