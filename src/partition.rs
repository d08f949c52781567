use crate::trace::{FrameKind, TraceRecorder};

/// Takes the sub-range `v[low..=high]` and re-arranges it such that when the call returns all
/// elements that compare true for `is_less(elem, pivot)` where `pivot == v[high]` are on the
/// left, followed by the pivot itself, followed by the other elements, notionally considered
/// greater or equal to `pivot`.
///
/// Returns the final position of the pivot.
///
/// Elements equal to the pivot stay on the right, the comparison is strict on purpose. That is
/// what makes ascending, descending and all-equal inputs degenerate for the fixed policy.
///
/// Exactly `high - low + 1` frames are recorded, one per comparison and one for placing the
/// pivot. If `is_less` does not implement a total order the resulting order and return value
/// are unspecified, but all original elements remain in `v`.
pub fn partition<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    recorder: &mut TraceRecorder<T>,
    is_less: &mut F,
) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(low <= high && high < v.len());

    // The pivot stays at `high` for the whole scan, only positions below it are exchanged.
    let mut num_lt = low;
    for j in low..high {
        if is_less(&v[j], &v[high]) {
            v.swap(num_lt, j);
            num_lt += 1;
        }
        recorder.record(FrameKind::Comparison, v, Some(high), Some(j));
    }

    // Place the pivot between the two partitions.
    v.swap(num_lt, high);
    recorder.record(FrameKind::Placement, v, Some(high), Some(num_lt));

    num_lt
}
