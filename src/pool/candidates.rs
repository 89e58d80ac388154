use std::cmp::Ordering;

use crate::error::Result;
use crate::geometry::Point;
use crate::pool::Pool;
use crate::r#type::IndexableNum;

/// One candidate as stored in a pool slot: `[distance, x, y]`.
type Slot<N> = [N; 3];

/// An ordered map from distance to point, stored entirely inside a [`Pool`].
///
/// Entries are kept sorted by ascending distance, ties broken by the point order, packed in
/// slots `0..len`. The insertion position is found by binary search, but the entries after it
/// are then shifted up one slot each, so [`insert`][Self::insert] is linear in `len`. The map
/// can never hold more entries than the pool has slots.
#[derive(Debug, Clone)]
pub struct CandidateMap<N: IndexableNum = f64> {
    pool: Pool<Slot<N>>,
    len: usize,
}

impl<N: IndexableNum> CandidateMap<N> {
    /// Create a map backed by a fresh pool of `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let pool = Pool::new(capacity);
        debug_assert_eq!(pool.slot_size(), 3 * N::BYTES_PER_ELEMENT);
        Self { pool, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The maximum number of live entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Insert a candidate, shifting every entry ordered after it.
    ///
    /// Fails with [`OutOfMemory`][crate::PlanarIndexError::OutOfMemory] when the map is full.
    pub fn insert(&mut self, distance: N, point: Point<N>) -> Result<()> {
        let slot = self.pool.allocate(1)?;
        // live entries are packed, so first-fit always hands back the slot right after them
        debug_assert_eq!(slot, self.len);

        let entry = [distance, point.x(), point.y()];
        let pos = self.upper_bound(&entry);
        for i in (pos..self.len).rev() {
            let moved = self.pool.read(i);
            self.pool.write(i + 1, moved);
        }
        self.pool.write(pos, entry);
        self.len += 1;
        Ok(())
    }

    /// The entry with the largest distance.
    pub fn last(&self) -> Option<(N, Point<N>)> {
        self.len.checked_sub(1).map(|i| decode(self.pool.read(i)))
    }

    /// Remove and return the entry with the largest distance.
    pub fn pop_last(&mut self) -> Option<(N, Point<N>)> {
        let last = self.len.checked_sub(1)?;
        let entry = decode(self.pool.read(last));
        self.pool.deallocate(last, 1);
        self.len = last;
        Some(entry)
    }

    /// Iterate entries by ascending distance.
    pub fn iter(&self) -> impl Iterator<Item = (N, Point<N>)> + '_ {
        (0..self.len).map(|i| decode(self.pool.read(i)))
    }

    /// Index of the first stored entry ordered strictly after `entry`.
    fn upper_bound(&self, entry: &Slot<N>) -> usize {
        let mut i = 0;
        let mut j = self.len;
        while i < j {
            let m = (i + j) >> 1;
            if compare(&self.pool.read(m), entry) == Ordering::Greater {
                j = m;
            } else {
                i = m + 1;
            }
        }
        i
    }
}

#[inline]
fn decode<N: IndexableNum>([distance, x, y]: Slot<N>) -> (N, Point<N>) {
    (distance, Point::new(x, y))
}

fn compare<N: IndexableNum>(a: &Slot<N>, b: &Slot<N>) -> Ordering {
    // We don't allow NaN. This should only panic on NaN
    a[0].partial_cmp(&b[0])
        .unwrap()
        .then_with(|| Point::new(a[1], a[2]).cmp(&Point::new(b[1], b[2])))
}
