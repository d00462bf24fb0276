//! Typed slot handles into the object arena.
//!
//! A [`Slot`] is an index into one of the arena's fixed-capacity blocks. The
//! type parameter records which block it belongs to, so a particle slot cannot
//! be handed to the pin block by mistake. Slots never dangle: blocks do not
//! shrink or reallocate during the arena's lifetime.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// Index of one object inside an arena block.
pub struct Slot<T> {
    index: usize,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Slot<T> {
    /// Slot for the `index`-th object of a block, or of any slice laid out
    /// the same way.
    pub fn from_index(index: usize) -> Self {
        Slot { index, _kind: PhantomData }
    }

    /// Position of the object within its block (allocation order).
    pub fn index(self) -> usize {
        self.index
    }
}

// Manual impls: deriving would demand the same traits from `T`.
impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Slot<T> {}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool { self.index == other.index }
}

impl<T> Eq for Slot<T> {}

impl<T> Hash for Slot<T> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.index.hash(state); }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.index)
    }
}

/// A contiguous run of slots returned by one allocation call.
pub struct SlotRange<T> {
    start: usize,
    len: usize,
    _kind: PhantomData<fn() -> T>,
}

impl<T> SlotRange<T> {
    pub(crate) fn new(start: usize, len: usize) -> Self {
        SlotRange { start, len, _kind: PhantomData }
    }

    /// First slot of the run. For an empty run this is where the next
    /// allocation would start.
    pub fn first(&self) -> Slot<T> {
        Slot::from_index(self.start)
    }

    /// The `offset`-th slot of the run, if it lies inside it.
    pub fn get(&self, offset: usize) -> Option<Slot<T>> {
        if offset < self.len {
            Some(Slot::from_index(self.start + offset))
        } else {
            None
        }
    }

    /// Number of slots in the run.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the run is empty (a zero-count allocation).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Block indices covered by the run.
    pub fn indices(&self) -> core::ops::Range<usize> {
        self.start..self.start + self.len
    }

    /// Iterate the slots in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = Slot<T>> + '_ {
        self.indices().map(Slot::from_index)
    }
}

impl<T> Clone for SlotRange<T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for SlotRange<T> {}

impl<T> PartialEq for SlotRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.len == other.len
    }
}

impl<T> Eq for SlotRange<T> {}

impl<T> fmt::Debug for SlotRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotRange({}..{})", self.start, self.start + self.len)
    }
}
