use core::slice;

/// What produced a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FrameKind {
    /// The untouched input, recorded before any work.
    Initial,
    /// A pivot was selected for a range, recorded before partitioning it.
    PivotChosen,
    /// One element was compared against the pivot, and possibly exchanged.
    Comparison,
    /// The pivot was moved to its final sorted position.
    Placement,
}

/// How a renderer should colour a single position of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Pivot,
    Compared,
    Default,
}

/// One immutable snapshot of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<T> {
    kind: FrameKind,
    values: Vec<T>,
    pivot: Option<usize>,
    compared: Option<usize>,
}

impl<T> Frame<T> {
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Position of the pivot, `None` only for the initial frame.
    pub fn pivot(&self) -> Option<usize> {
        self.pivot
    }

    /// Position last compared against the pivot, never equal to [`Frame::pivot`].
    pub fn compared(&self) -> Option<usize> {
        self.compared
    }

    pub fn highlight(&self, index: usize) -> Highlight {
        if self.pivot == Some(index) {
            Highlight::Pivot
        } else if self.compared == Some(index) {
            Highlight::Compared
        } else {
            Highlight::Default
        }
    }
}

/// Append-only frame log owned by exactly one run.
#[derive(Debug)]
pub struct TraceRecorder<T> {
    frames: Vec<Frame<T>>,
}

impl<T: Clone> TraceRecorder<T> {
    /// Starts a log seeded with the pre-sort snapshot of `initial`.
    pub fn new(initial: &[T]) -> Self {
        let mut recorder = Self { frames: Vec::new() };
        recorder.record(FrameKind::Initial, initial, None, None);
        recorder
    }

    /// Appends a snapshot of `v`. A `compared` position equal to `pivot` is dropped.
    pub fn record(
        &mut self,
        kind: FrameKind,
        v: &[T],
        pivot: Option<usize>,
        compared: Option<usize>,
    ) {
        let compared = compared.filter(|&c| Some(c) != pivot);
        self.frames.push(Frame {
            kind,
            values: v.to_vec(),
            pivot,
            compared,
        });
    }
}

impl<T> TraceRecorder<T> {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Seals the log.
    pub fn finish(self) -> Trace<T> {
        Trace {
            frames: self.frames,
        }
    }
}

/// The complete, ordered frames of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace<T> {
    frames: Vec<Frame<T>>,
}

impl<T> Trace<T> {
    pub fn frames(&self) -> &[Frame<T>] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame<T>> {
        self.frames.get(index)
    }

    pub fn last(&self) -> Option<&Frame<T>> {
        self.frames.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Frame<T>> {
        self.frames.iter()
    }

    pub fn count(&self, kind: FrameKind) -> usize {
        self.frames.iter().filter(|frame| frame.kind == kind).count()
    }

    /// Number of element-versus-pivot comparisons the run performed.
    pub fn comparisons(&self) -> usize {
        self.count(FrameKind::Comparison)
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Frame<T>;
    type IntoIter = slice::Iter<'a, Frame<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
