use std::cmp::Ordering;

pub mod patterns;

#[doc(hidden)]
pub use paste;

/// Implementation neutral view of a recorded frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub kind: SnapshotKind,
    pub values: Vec<T>,
    pub pivot: Option<usize>,
    pub compared: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Initial,
    PivotChosen,
    Comparison,
    Placement,
}

/// A traced sort under test.
///
/// Implementations sort `arr` in place and return every frame of the run in order. `seed`
/// feeds whatever randomness the implementation uses.
pub trait TraceSort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T], seed: u64) -> Vec<Snapshot<T>>
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], seed: u64, compare: F) -> Vec<Snapshot<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}
