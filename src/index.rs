use std::num::NonZeroUsize;

/// Outcome of a move on a [`NavigableImageIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub index: usize,
    pub changed: bool,
}

/// A position inside a fixed, non-empty sequence.
///
/// Moves never fail: anything outside `[0, len - 1]` is clamped to the nearest
/// end, never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigableImageIndex {
    current: usize,
    len: NonZeroUsize,
}

impl NavigableImageIndex {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves by `delta` positions.
    pub fn step(&mut self, delta: i64) -> IndexChange {
        let target = (self.current as i64).saturating_add(delta);
        self.jump(target)
    }

    /// Moves to the zero-based position `target`.
    pub fn jump(&mut self, target: i64) -> IndexChange {
        let last = self.len.get() - 1;
        let clamped = if target <= 0 {
            0
        } else {
            usize::try_from(target).map_or(last, |t| t.min(last))
        };

        let changed = clamped != self.current;
        self.current = clamped;
        IndexChange {
            index: clamped,
            changed,
        }
    }
}
