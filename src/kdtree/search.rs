use std::collections::BTreeSet;

use geo_traits::{CoordTrait, RectTrait};
use tinyvec::TinyVec;

use crate::geometry::{Point, Rect};
use crate::kdtree::PointSet;
use crate::pool::CandidateMap;
use crate::r#type::IndexableNum;

impl<N: IndexableNum> PointSet<N> {
    /// Search the set for points within a given rectangle, edges included.
    ///
    /// Returns each matching point once, in ascending point order.
    pub fn range(&self, query: &Rect<N>) -> Vec<Point<N>> {
        let Some(root) = self.root_index() else {
            return vec![];
        };

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[(usize, Rect<N>); 32]> = TinyVec::new();
        stack.push((root, Rect::unbounded()));

        let mut found = BTreeSet::new();

        while let Some((index, rect)) = stack.pop() {
            // the whole subtree lies outside the query
            if !query.intersects(&rect) {
                continue;
            }

            let node = &self.nodes[index];
            if query.contains(&node.point) {
                found.insert(node.point);
            }

            let (left_rect, right_rect) = node.orientation.split(&rect, &node.point);
            // Note: these are pushed in backwards order to what gets popped
            if let Some(right) = node.right {
                stack.push((right, right_rect));
            }
            if let Some(left) = node.left {
                stack.push((left, left_rect));
            }
        }

        found.into_iter().collect()
    }

    /// Search the set for points within a given rectangle.
    pub fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Vec<Point<N>> {
        self.range(&Rect::from_bounds(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        ))
    }

    /// Find the `k` points closest to `key`.
    ///
    /// Returns `min(k, len)` points in ascending point order. Among points at equal distance
    /// the smaller ones in point order are preferred, so for a fixed key the result for `k` is
    /// always contained in the result for `k + 1`.
    pub fn nearest(&self, key: &Point<N>, k: usize) -> Vec<Point<N>> {
        let found: BTreeSet<_> = self
            .nearest_with_distance(key, k)
            .into_iter()
            .map(|(_, point)| point)
            .collect();
        found.into_iter().collect()
    }

    /// Find the point closest to `key`, or `None` if the set is empty.
    pub fn nearest_neighbor(&self, key: &Point<N>) -> Option<Point<N>> {
        self.nearest(key, 1).into_iter().next()
    }

    /// Find the `k` points closest to the given coordinate.
    pub fn nearest_coord(&self, coord: &impl CoordTrait<T = N>, k: usize) -> Vec<Point<N>> {
        self.nearest(&Point::new(coord.x(), coord.y()), k)
    }

    /// Find the `k` points closest to `key` along with their distance to it.
    ///
    /// Results are ordered by ascending distance, ties by point order.
    pub fn nearest_with_distance(&self, key: &Point<N>, k: usize) -> Vec<(N, Point<N>)> {
        if k == 0 || self.is_empty() {
            return vec![];
        }
        let k = k.min(self.len());

        // Candidates never exceed k + 1 at once: one insert, then one eviction.
        let mut candidates = CandidateMap::with_capacity(k + 1);
        self.collect_nearest(key, k, &mut candidates);

        // copy out so that the results outlive the pool
        candidates.iter().collect()
    }

    /// Run [`nearest`][Self::nearest] for every key.
    ///
    /// With the `rayon` feature the keys are processed in parallel. Each query owns its own
    /// candidate pool, so queries never share scratch state.
    pub fn nearest_batch(&self, keys: &[Point<N>], k: usize) -> Vec<Vec<Point<N>>> {
        #[cfg(feature = "rayon")]
        let results = {
            use rayon::prelude::*;
            keys.par_iter().map(|key| self.nearest(key, k)).collect()
        };

        #[cfg(not(feature = "rayon"))]
        let results = keys.iter().map(|key| self.nearest(key, k)).collect();

        results
    }

    fn collect_nearest(&self, key: &Point<N>, k: usize, candidates: &mut CandidateMap<N>) {
        let Some(root) = self.root_index() else {
            return;
        };

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[(usize, Rect<N>); 32]> = TinyVec::new();
        stack.push((root, Rect::unbounded()));

        while let Some((index, rect)) = stack.pop() {
            let node = &self.nodes[index];

            candidates
                .insert(key.distance(&node.point), node.point)
                .expect("candidate pool holds k + 1 entries");
            if candidates.len() > k {
                candidates.pop_last();
            }

            // nothing in this subtree can beat the current k-th best
            let worst = match candidates.last() {
                Some((distance, _)) => distance,
                None => continue,
            };
            if rect.distance(key) > worst {
                continue;
            }

            let (left_rect, right_rect) = node.orientation.split(&rect, &node.point);
            let near_is_right = node.orientation.goes_right(key, &node.point);
            let (near, far) = if near_is_right {
                ((node.right, right_rect), (node.left, left_rect))
            } else {
                ((node.left, left_rect), (node.right, right_rect))
            };

            // visit the half holding the key first, it tightens the bound fastest
            if let (Some(far), far_rect) = far {
                stack.push((far, far_rect));
            }
            if let (Some(near), near_rect) = near {
                stack.push((near, near_rect));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::geometry::{Point, Rect};
    use crate::kdtree::PointSet;

    fn small_set() -> PointSet {
        [(2., 3.), (4., 2.), (4., 5.), (3., 3.)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn range_on_small_set() {
        let set = small_set();
        let result = set.range(&Rect::from_bounds(2., 2., 4., 4.));
        assert_eq!(
            result,
            vec![Point::new(2., 3.), Point::new(3., 3.), Point::new(4., 2.)]
        );
    }

    #[test]
    fn nearest_on_small_set() {
        let set = small_set();
        let key = Point::new(3., 3.);
        assert_eq!(set.nearest(&key, 1), vec![Point::new(3., 3.)]);
        assert_eq!(
            set.nearest(&key, 2),
            vec![Point::new(2., 3.), Point::new(3., 3.)]
        );
        assert_eq!(set.nearest_neighbor(&key), Some(Point::new(3., 3.)));
    }

    #[test]
    fn nearest_with_distance_orders_by_distance() {
        let set = small_set();
        let result = set.nearest_with_distance(&Point::new(3., 3.), 3);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], (0., Point::new(3., 3.)));
        assert_eq!(result[1], (1., Point::new(2., 3.)));
        assert!((result[2].0 - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(result[2].1, Point::new(4., 2.));
    }

    #[test]
    fn equal_distances_prefer_smaller_points() {
        let set: PointSet = [(1., 0.), (-1., 0.), (0., 1.), (0., -1.)]
            .into_iter()
            .map(Point::from)
            .collect();
        let origin = Point::new(0., 0.);
        assert_eq!(set.nearest(&origin, 1), vec![Point::new(-1., 0.)]);
        assert_eq!(
            set.nearest(&origin, 2),
            vec![Point::new(-1., 0.), Point::new(0., -1.)]
        );
    }

    #[test]
    fn degenerate_queries_are_empty() {
        let empty = PointSet::<f64>::new();
        assert!(empty.range(&Rect::unbounded()).is_empty());
        assert!(empty.nearest(&Point::new(0., 0.), 3).is_empty());
        assert_eq!(empty.nearest_neighbor(&Point::new(0., 0.)), None);

        let set = small_set();
        assert!(set.nearest(&Point::new(0., 0.), 0).is_empty());
        assert_eq!(set.nearest(&Point::new(0., 0.), usize::MAX).len(), 4);
        assert!(set.range(&Rect::from_bounds(10., 10., 20., 20.)).is_empty());
    }

    #[test]
    fn k_larger_than_len_returns_everything() {
        let set = small_set();
        let mut all: Vec<_> = set.iter().collect();
        all.sort();
        assert_eq!(set.nearest(&Point::new(100., -100.), 10), all);
    }

    #[test]
    fn range_rect_and_nearest_coord_accept_geo_traits() {
        let set = small_set();
        let rect = Rect::from_bounds(3.5, 1., 5., 6.);
        assert_eq!(
            set.range_rect(&rect),
            vec![Point::new(4., 2.), Point::new(4., 5.)]
        );
        assert_eq!(
            set.nearest_coord(&Point::new(4., 6.), 1),
            vec![Point::new(4., 5.)]
        );
    }

    #[test]
    fn nearest_batch_matches_single_queries() {
        let set = small_set();
        let keys = [Point::new(0., 0.), Point::new(4., 4.), Point::new(3., 3.)];
        let batch = set.nearest_batch(&keys, 2);
        assert_eq!(batch.len(), 3);
        for (key, result) in keys.iter().zip(batch) {
            assert_eq!(result, set.nearest(key, 2));
        }
    }
}
