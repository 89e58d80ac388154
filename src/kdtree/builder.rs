use crate::geometry::Point;
use crate::kdtree::index::Orientation;
use crate::kdtree::PointSet;
use crate::r#type::IndexableNum;

/// A builder to create a balanced [`PointSet`].
///
/// Points are staged with [`add`][Self::add] and the tree is built in one pass by
/// [`finish`][Self::finish], inserting the median of each half on alternating axes so that the
/// resulting depth is logarithmic in the number of points whatever order they were added in.
#[derive(Debug, Clone, Default)]
pub struct PointSetBuilder<N: IndexableNum = f64> {
    points: Vec<Point<N>>,
}

impl<N: IndexableNum> PointSetBuilder<N> {
    /// Create a new builder with room for the provided number of items.
    pub fn new(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
        }
    }

    /// Add a point to the index.
    ///
    /// Returns the staging position of the point.
    pub fn add(&mut self, x: N, y: N) -> usize {
        self.add_point(Point::new(x, y))
    }

    /// Add a point to the index.
    pub fn add_point(&mut self, point: Point<N>) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// The number of points staged so far, duplicates included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point has been staged.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consume this builder, building the tree from the medians of the staged points.
    ///
    /// Duplicate points are kept once.
    pub fn finish(mut self) -> PointSet<N> {
        let mut set = PointSet::with_capacity(self.points.len());
        balance(&mut set, &mut self.points, Orientation::Vertical);
        set
    }
}

/// Insert the median of `points` along `orientation`, then recursively the medians of both
/// halves along the opposite axis.
fn balance<N: IndexableNum>(set: &mut PointSet<N>, points: &mut [Point<N>], orientation: Orientation) {
    if points.is_empty() {
        return;
    }

    points.sort_by(|a, b| orientation.axis_cmp(a, b));

    // middle index, moved down to the first of any points tied with it on this axis: ties go
    // right, so the left half must hold strictly smaller keys
    let mut m = points.len() >> 1;
    while m > 0 && orientation.axis_cmp(&points[m - 1], &points[m]).is_eq() {
        m -= 1;
    }
    set.insert(points[m]);

    let (left, right) = points.split_at_mut(m);
    balance(set, left, orientation.next());
    balance(set, &mut right[1..], orientation.next());
}

impl<N: IndexableNum> FromIterator<Point<N>> for PointSet<N> {
    /// Bulk-load a balanced tree.
    fn from_iter<I: IntoIterator<Item = Point<N>>>(iter: I) -> Self {
        let mut builder = PointSetBuilder::default();
        for point in iter {
            builder.add_point(point);
        }
        builder.finish()
    }
}

impl<N: IndexableNum> PointSet<N> {
    /// Bulk-load a balanced tree from a sequence of points.
    ///
    /// Equivalent to collecting into a [`PointSet`].
    pub fn from_points<I: IntoIterator<Item = Point<N>>>(points: I) -> Self {
        points.into_iter().collect()
    }
}
