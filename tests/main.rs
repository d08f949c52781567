use std::cmp::Ordering;

use sort_trace_rs::{Frame, FrameKind, PivotPolicy, Trace};
use trace_test_tools::{instantiate_trace_tests, Snapshot, SnapshotKind, TraceSort};

fn snapshots<T: Clone>(trace: Trace<T>) -> Vec<Snapshot<T>> {
    trace.iter().map(snapshot).collect()
}

fn snapshot<T: Clone>(frame: &Frame<T>) -> Snapshot<T> {
    let kind = match frame.kind() {
        FrameKind::Initial => SnapshotKind::Initial,
        FrameKind::PivotChosen => SnapshotKind::PivotChosen,
        FrameKind::Comparison => SnapshotKind::Comparison,
        FrameKind::Placement => SnapshotKind::Placement,
    };

    Snapshot {
        kind,
        values: frame.values().to_vec(),
        pivot: frame.pivot(),
        compared: frame.compared(),
    }
}

macro_rules! trace_sort_impl {
    ($name:ident, $policy:expr) => {
        struct $name {}

        impl TraceSort for $name {
            fn name() -> String {
                format!("traced_quicksort_{}", $policy)
            }

            fn sort<T>(arr: &mut [T], seed: u64) -> Vec<Snapshot<T>>
            where
                T: Ord + Clone,
            {
                snapshots(sort_trace_rs::sort(arr, $policy, Some(seed)).unwrap())
            }

            fn sort_by<T, F>(arr: &mut [T], seed: u64, compare: F) -> Vec<Snapshot<T>>
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                snapshots(sort_trace_rs::sort_by(arr, $policy, Some(seed), compare).unwrap())
            }
        }
    };
}

trace_sort_impl!(FixedSort, PivotPolicy::Fixed);
trace_sort_impl!(RandomizedSort, PivotPolicy::Randomized);

instantiate_trace_tests!(FixedSort, fixed);
instantiate_trace_tests!(RandomizedSort, randomized);
