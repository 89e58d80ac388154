//! Utilities to traverse the tree structure.

use std::collections::VecDeque;

use geo_traits::RectTrait;

use crate::geometry::{impl_rect_geometry, Point, Rect};
use crate::kdtree::index::{Orientation, TreeNode};
use crate::kdtree::PointSet;
use crate::r#type::IndexableNum;

/// A node in the tree, together with the traversal rectangle its subtree is responsible for.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a, N: IndexableNum> {
    /// The tree that this node is a reference onto
    tree: &'a PointSet<N>,

    index: usize,

    /// Region of the plane covered by this subtree, derived from the ancestors' splits
    rect: Rect<N>,
}

impl<'a, N: IndexableNum> Node<'a, N> {
    pub(crate) fn from_root(tree: &'a PointSet<N>) -> Option<Self> {
        tree.root_index().map(|index| Self {
            tree,
            index,
            rect: Rect::unbounded(),
        })
    }

    #[inline]
    fn inner(&self) -> &'a TreeNode<N> {
        &self.tree.nodes[self.index]
    }

    /// The point stored at this node.
    #[inline]
    pub fn point(&self) -> Point<N> {
        self.inner().point
    }

    /// The axis the children of this node are split over.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.inner().orientation
    }

    /// The number of points in the subtree rooted at this node, this node included.
    #[inline]
    pub fn size(&self) -> usize {
        self.inner().size
    }

    /// The traversal rectangle of this subtree.
    #[inline]
    pub fn rect(&self) -> Rect<N> {
        self.rect
    }

    /// The child node representing the "left" (or "bottom") half.
    pub fn left_child(&self) -> Option<Node<'a, N>> {
        let (rect, _) = self.orientation().split(&self.rect, &self.point());
        self.inner().left.map(|index| Self {
            tree: self.tree,
            index,
            rect,
        })
    }

    /// The child node representing the "right" (or "top") half.
    pub fn right_child(&self) -> Option<Node<'a, N>> {
        let (_, rect) = self.orientation().split(&self.rect, &self.point());
        self.inner().right.map(|index| Self {
            tree: self.tree,
            index,
            rect,
        })
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.size() == 1
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl_rect_geometry!(impl<'a, N> for Node<'a, N>);

impl<N: IndexableNum> RectTrait for Node<'_, N> {
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        self.rect.left_bottom()
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.rect.right_top()
    }
}

/// An iterator over every point of a [`PointSet`], level by level from the root.
#[derive(Debug, Clone)]
pub struct Iter<'a, N: IndexableNum> {
    tree: &'a PointSet<N>,
    queue: VecDeque<usize>,
    remaining: usize,
}

impl<'a, N: IndexableNum> Iterator for Iter<'a, N> {
    type Item = Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let node = &self.tree.nodes[index];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        self.remaining -= 1;
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: IndexableNum> ExactSizeIterator for Iter<'_, N> {}

impl<N: IndexableNum> PointSet<N> {
    /// Access the root node of the tree for manual traversal.
    pub fn root(&self) -> Option<Node<'_, N>> {
        Node::from_root(self)
    }

    /// Iterate over every point in breadth-first order.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            tree: self,
            queue: self.root_index().into_iter().collect(),
            remaining: self.nodes.len(),
        }
    }
}

impl<'a, N: IndexableNum> IntoIterator for &'a PointSet<N> {
    type Item = Point<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use geo_traits::{Dimensions, GeometryTrait, GeometryType, RectTrait};

    use crate::geometry::{Point, Rect};
    use crate::kdtree::{Orientation, PointSet};

    #[test]
    fn root_covers_the_plane() {
        let mut set = PointSet::new();
        set.insert(Point::new(5., 5.));
        set.insert(Point::new(2., 8.));
        set.insert(Point::new(7., 1.));

        let root = set.root().unwrap();
        assert_eq!(root.point(), Point::new(5., 5.));
        assert_eq!(root.orientation(), Orientation::Vertical);
        assert_eq!(root.size(), 3);
        assert_eq!(root.rect(), Rect::unbounded());
        assert!(root.is_parent());

        let left = root.left_child().unwrap();
        assert_eq!(left.point(), Point::new(2., 8.));
        assert_eq!(left.orientation(), Orientation::Horizontal);
        assert!(left.is_leaf());
        assert_eq!(left.max().x(), 5.);
        assert_eq!(left.min().x(), f64::NEG_INFINITY);

        let right = root.right_child().unwrap();
        assert_eq!(right.point(), Point::new(7., 1.));
        assert_eq!(right.min().x(), 5.);
        assert!(right.left_child().is_none());

        assert_eq!(right.dim(), Dimensions::Xy);
        match right.as_type() {
            GeometryType::Rect(rect) => assert_eq!(rect.point(), Point::new(7., 1.)),
            _ => panic!("expected a rectangle"),
        }
    }

    #[test]
    fn iter_visits_each_point_once_breadth_first() {
        let mut set = PointSet::new();
        for (x, y) in [(5., 5.), (2., 8.), (7., 1.), (1., 1.)] {
            set.insert(Point::new(x, y));
        }
        let iter = set.iter();
        assert_eq!(iter.len(), 4);
        let points: Vec<_> = iter.collect();
        assert_eq!(
            points,
            vec![
                Point::new(5., 5.),
                Point::new(2., 8.),
                Point::new(7., 1.),
                Point::new(1., 1.)
            ]
        );
        assert_eq!((&set).into_iter().count(), 4);
        assert!(PointSet::<f64>::new().root().is_none());
        assert_eq!(PointSet::<f64>::new().iter().next(), None);
    }
}
