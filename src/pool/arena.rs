use std::marker::PhantomData;
use std::mem::size_of;
use std::ops::Range;

use bytemuck::{bytes_of, pod_read_unaligned, Pod};

use crate::error::{PlanarIndexError, Result};

/// A fixed-capacity arena of `slot_count` slots, each `size_of::<T>()` bytes.
///
/// Slots are handed out as runs of contiguous indices using a first-fit scan over the occupancy
/// map. The arena never grows: a request that cannot be satisfied fails with
/// [`PlanarIndexError::OutOfMemory`].
#[derive(Debug, Clone)]
pub struct Pool<T: Pod> {
    /// data buffer
    storage: Vec<u8>,
    used: Vec<bool>,
    phantom: PhantomData<T>,
}

impl<T: Pod> Pool<T> {
    /// Reserve `slot_count` slots up front.
    pub fn new(slot_count: usize) -> Self {
        Self {
            storage: vec![0; size_of::<T>() * slot_count],
            used: vec![false; slot_count],
            phantom: PhantomData,
        }
    }

    /// The number of bytes in one slot.
    #[inline]
    pub fn slot_size(&self) -> usize {
        size_of::<T>()
    }

    /// The total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.used.len()
    }

    /// The number of slots not currently allocated.
    pub fn free_slots(&self) -> usize {
        self.used.iter().filter(|used| !**used).count()
    }

    /// Returns `true` if `slot` is currently allocated.
    pub fn is_allocated(&self, slot: usize) -> bool {
        self.used.get(slot).copied().unwrap_or(false)
    }

    /// Allocate `n` contiguous slots and return the index of the first one.
    ///
    /// The lowest-indexed free run wins. Fails when no run of `n` free slots exists, which
    /// includes any `n` larger than the capacity.
    pub fn allocate(&mut self, n: usize) -> Result<usize> {
        let start = self
            .find_free_run(n)
            .ok_or(PlanarIndexError::OutOfMemory {
                requested: n,
                capacity: self.capacity(),
            })?;
        self.used[start..start + n].fill(true);
        Ok(start)
    }

    /// Release `n` slots starting at `slot`.
    ///
    /// A range running past the end of the arena is truncated to the arena. A `slot` outside
    /// the arena is ignored.
    pub fn deallocate(&mut self, slot: usize, n: usize) {
        if slot < self.capacity() {
            let end = slot + n.min(self.capacity() - slot);
            self.used[slot..end].fill(false);
        }
    }

    /// Read the value stored in `slot`.
    ///
    /// Panics if `slot` is outside the arena.
    #[inline]
    pub fn read(&self, slot: usize) -> T {
        debug_assert!(self.used[slot], "read of unallocated slot {}", slot);
        pod_read_unaligned(&self.storage[self.byte_range(slot)])
    }

    /// Overwrite the value stored in `slot`.
    ///
    /// Panics if `slot` is outside the arena.
    #[inline]
    pub fn write(&mut self, slot: usize, value: T) {
        debug_assert!(self.used[slot], "write to unallocated slot {}", slot);
        let range = self.byte_range(slot);
        self.storage[range].copy_from_slice(bytes_of(&value));
    }

    #[inline]
    fn byte_range(&self, slot: usize) -> Range<usize> {
        let start = slot * self.slot_size();
        start..start + self.slot_size()
    }

    fn find_free_run(&self, n: usize) -> Option<usize> {
        if n > self.capacity() {
            return None;
        }

        let mut start = 0;
        while start + n <= self.capacity() {
            // skip past the last taken slot in the window
            match self.used[start..start + n].iter().rposition(|used| *used) {
                Some(taken) => start += taken + 1,
                None => return Some(start),
            }
        }
        None
    }
}
