use std::cmp::Ordering;

use tinyvec::TinyVec;

use crate::geometry::{Point, Rect};
use crate::r#type::IndexableNum;

/// The axis a tree node splits its subtree over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Split by x: the left subtree holds smaller x.
    Vertical,
    /// Split by y: the left subtree holds smaller y.
    Horizontal,
}

impl Orientation {
    /// The orientation of this node's children.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Whether `key` belongs in the right subtree of a node holding `at`. Ties go right.
    ///
    /// Insertion, lookup and both query traversals must agree on this rule.
    #[inline]
    pub(crate) fn goes_right<N: IndexableNum>(self, key: &Point<N>, at: &Point<N>) -> bool {
        match self {
            Self::Vertical => key.x() >= at.x(),
            Self::Horizontal => key.y() >= at.y(),
        }
    }

    /// Compare two points along this axis only.
    #[inline]
    pub(crate) fn axis_cmp<N: IndexableNum>(self, a: &Point<N>, b: &Point<N>) -> Ordering {
        // We don't allow NaN. This should only panic on NaN
        match self {
            Self::Vertical => a.x().partial_cmp(&b.x()).unwrap(),
            Self::Horizontal => a.y().partial_cmp(&b.y()).unwrap(),
        }
    }

    /// Split a traversal rectangle at `at` into its left/bottom and right/top halves.
    pub(crate) fn split<N: IndexableNum>(self, rect: &Rect<N>, at: &Point<N>) -> (Rect<N>, Rect<N>) {
        match self {
            Self::Vertical => (
                Rect::new(rect.left_bottom(), Point::new(at.x(), rect.max_y())),
                Rect::new(Point::new(at.x(), rect.min_y()), rect.right_top()),
            ),
            Self::Horizontal => (
                Rect::new(rect.left_bottom(), Point::new(rect.max_x(), at.y())),
                Rect::new(Point::new(rect.min_x(), at.y()), rect.right_top()),
            ),
        }
    }
}

/// A single indexed point and links to its children in the node arena.
#[derive(Debug, Clone)]
pub(crate) struct TreeNode<N: IndexableNum> {
    pub(crate) point: Point<N>,
    pub(crate) orientation: Orientation,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
    /// Number of nodes in the subtree rooted here, this node included.
    pub(crate) size: usize,
}

impl<N: IndexableNum> TreeNode<N> {
    fn new(point: Point<N>, orientation: Orientation) -> Self {
        Self {
            point,
            orientation,
            left: None,
            right: None,
            size: 1,
        }
    }

    #[inline]
    pub(crate) fn child(&self, right: bool) -> Option<usize> {
        if right {
            self.right
        } else {
            self.left
        }
    }
}

/// A set of planar points indexed by a 2D-tree.
///
/// Nodes live in an arena and refer to their children by position. The first point inserted is
/// the root and sits at position 0. Nodes are never removed individually.
///
/// Insertion order determines the shape of the tree; use [`PointSetBuilder`] (or
/// [`FromIterator`]) to bulk-load a balanced tree.
///
/// [`PointSetBuilder`]: crate::kdtree::PointSetBuilder
#[derive(Debug, Clone, Default)]
pub struct PointSet<N: IndexableNum = f64> {
    pub(crate) nodes: Vec<TreeNode<N>>,
}

impl<N: IndexableNum> PointSet<N> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty set with room for `capacity` points before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// The number of points in this set.
    pub fn len(&self) -> usize {
        let len = self.nodes.first().map_or(0, |root| root.size);
        debug_assert_eq!(len, self.nodes.len());
        len
    }

    /// Returns `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a point to the set.
    ///
    /// Returns `false` and leaves the tree untouched if an equal point is already present.
    pub fn insert(&mut self, point: Point<N>) -> bool {
        // Use TinyVec to avoid heap allocations
        let mut path: TinyVec<[usize; 32]> = TinyVec::new();
        let mut parent: Option<(usize, bool)> = None;
        let mut current = self.root_index();

        while let Some(index) = current {
            let node = &self.nodes[index];
            if node.point == point {
                return false;
            }
            path.push(index);
            let right = node.orientation.goes_right(&point, &node.point);
            parent = Some((index, right));
            current = node.child(right);
        }

        let index = self.nodes.len();
        let orientation = match parent {
            Some((parent, right)) => {
                let node = &mut self.nodes[parent];
                if right {
                    node.right = Some(index);
                } else {
                    node.left = Some(index);
                }
                node.orientation.next()
            }
            None => Orientation::Vertical,
        };

        for ancestor in path {
            self.nodes[ancestor].size += 1;
        }
        self.nodes.push(TreeNode::new(point, orientation));
        true
    }

    /// Returns `true` if a point equal to `key` is in the set.
    pub fn contains(&self, key: &Point<N>) -> bool {
        let mut current = self.root_index();
        while let Some(index) = current {
            let node = &self.nodes[index];
            if node.point == *key {
                return true;
            }
            current = node.child(node.orientation.goes_right(key, &node.point));
        }
        false
    }

    /// The number of nodes on the longest root-to-leaf path, or 0 for an empty set.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack: Vec<(usize, usize)> = self.root_index().map(|i| (i, 1)).into_iter().collect();
        while let Some((index, level)) = stack.pop() {
            depth = depth.max(level);
            let node = &self.nodes[index];
            stack.extend(node.left.map(|i| (i, level + 1)));
            stack.extend(node.right.map(|i| (i, level + 1)));
        }
        depth
    }

    #[inline]
    pub(crate) fn root_index(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

impl<N: IndexableNum> Extend<Point<N>> for PointSet<N> {
    /// Insert each point in the given order. No rebalancing takes place.
    fn extend<I: IntoIterator<Item = Point<N>>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}
