//! Planar value types: [`Point`] and the axis-aligned [`Rect`].

use std::cmp::Ordering;
use std::fmt;

use geo_traits::{CoordTrait, Dimensions, RectTrait};

use crate::r#type::IndexableNum;

/// An immutable 2D point.
///
/// Equality is epsilon-tolerant on each coordinate, and points are totally ordered by x, then
/// by y. Two points closer than epsilon on both axes are the same point for membership and
/// deduplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point<N: IndexableNum = f64> {
    x: N,
    y: N,
}

impl<N: IndexableNum> Point<N> {
    /// Create a new point.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> N {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl<N: IndexableNum> PartialEq for Point<N> {
    fn eq(&self, other: &Self) -> bool {
        self.x.approx_eq(other.x) && self.y.approx_eq(other.y)
    }
}

impl<N: IndexableNum> Eq for Point<N> {}

impl<N: IndexableNum> Ord for Point<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // We don't allow NaN. This should only panic on NaN
        if self.x.approx_eq(other.x) {
            if self.y.approx_eq(other.y) {
                return Ordering::Equal;
            }
            return self.y.partial_cmp(&other.y).unwrap();
        }
        self.x.partial_cmp(&other.x).unwrap()
    }
}

impl<N: IndexableNum> PartialOrd for Point<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: IndexableNum> From<(N, N)> for Point<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> From<[N; 2]> for Point<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({} {})", self.x, self.y)
    }
}

impl<N: IndexableNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Point has no coordinate {}", n),
        }
    }
}

/// An immutable axis-aligned rectangle given by its left-bottom and right-top corners.
///
/// Callers are expected to pass `left_bottom <= right_top` on both axes. Edges are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect<N: IndexableNum = f64> {
    left_bottom: Point<N>,
    right_top: Point<N>,
}

impl<N: IndexableNum> Rect<N> {
    pub fn new(left_bottom: Point<N>, right_top: Point<N>) -> Self {
        Self {
            left_bottom,
            right_top,
        }
    }

    pub fn from_bounds(min_x: N, min_y: N, max_x: N, max_y: N) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// The whole plane, with corners at negative and positive infinity.
    pub fn unbounded() -> Self {
        let inf = N::infinity();
        Self::from_bounds(-inf, -inf, inf, inf)
    }

    #[inline]
    pub fn left_bottom(&self) -> Point<N> {
        self.left_bottom
    }

    #[inline]
    pub fn right_top(&self) -> Point<N> {
        self.right_top
    }

    #[inline]
    pub fn min_x(&self) -> N {
        self.left_bottom.x
    }

    #[inline]
    pub fn min_y(&self) -> N {
        self.left_bottom.y
    }

    #[inline]
    pub fn max_x(&self) -> N {
        self.right_top.x
    }

    #[inline]
    pub fn max_y(&self) -> N {
        self.right_top.y
    }

    /// Returns `true` if `point` lies inside or on the boundary of this rectangle.
    #[inline]
    pub fn contains(&self, point: &Point<N>) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Minimum Euclidean distance from `point` to any point of this rectangle.
    ///
    /// Zero when the rectangle contains `point`. Infinite edges are handled: a point is never
    /// "outside" an edge at infinity.
    pub fn distance(&self, point: &Point<N>) -> N {
        let dx = axis_dist(point.x, self.min_x(), self.max_x());
        let dy = axis_dist(point.y, self.min_y(), self.max_y());
        dx.hypot(dy)
    }

    /// Returns `true` if the two rectangles share at least one point, boundaries included.
    ///
    /// This is a per-axis overlap test, so it also catches a thin rectangle crossing another
    /// one with no corner of either inside the other.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }
}

/// Implement [`GeometryTrait`][geo_traits::GeometryTrait] for a type that is only ever a
/// rectangle, so that it can stand behind [`RectTrait`].
macro_rules! impl_rect_geometry {
    (impl<$($lt:lifetime,)? N> for $ty:ty) => {
        impl<$($lt,)? N: $crate::r#type::IndexableNum> ::geo_traits::GeometryTrait for $ty {
            type T = N;
            type PointType<'b>
                = ::geo_traits::UnimplementedPoint<N>
            where
                Self: 'b;
            type LineStringType<'b>
                = ::geo_traits::UnimplementedLineString<N>
            where
                Self: 'b;
            type PolygonType<'b>
                = ::geo_traits::UnimplementedPolygon<N>
            where
                Self: 'b;
            type MultiPointType<'b>
                = ::geo_traits::UnimplementedMultiPoint<N>
            where
                Self: 'b;
            type MultiLineStringType<'b>
                = ::geo_traits::UnimplementedMultiLineString<N>
            where
                Self: 'b;
            type MultiPolygonType<'b>
                = ::geo_traits::UnimplementedMultiPolygon<N>
            where
                Self: 'b;
            type GeometryCollectionType<'b>
                = ::geo_traits::UnimplementedGeometryCollection<N>
            where
                Self: 'b;
            type RectType<'b>
                = Self
            where
                Self: 'b;
            type TriangleType<'b>
                = ::geo_traits::UnimplementedTriangle<N>
            where
                Self: 'b;
            type LineType<'b>
                = ::geo_traits::UnimplementedLine<N>
            where
                Self: 'b;

            fn dim(&self) -> ::geo_traits::Dimensions {
                ::geo_traits::Dimensions::Xy
            }

            fn as_type(
                &self,
            ) -> ::geo_traits::GeometryType<
                '_,
                Self::PointType<'_>,
                Self::LineStringType<'_>,
                Self::PolygonType<'_>,
                Self::MultiPointType<'_>,
                Self::MultiLineStringType<'_>,
                Self::MultiPolygonType<'_>,
                Self::GeometryCollectionType<'_>,
                Self::RectType<'_>,
                Self::TriangleType<'_>,
                Self::LineType<'_>,
            > {
                ::geo_traits::GeometryType::Rect(self)
            }
        }
    };
}

pub(crate) use impl_rect_geometry;

impl_rect_geometry!(impl<N> for Rect<N>);

impl<N: IndexableNum> RectTrait for Rect<N> {
    type CoordType<'a>
        = Point<N>
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        self.left_bottom
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.right_top
    }
}

/// 1D distance from a value to a range.
#[inline]
fn axis_dist<N: IndexableNum>(k: N, min: N, max: N) -> N {
    if k < min {
        min - k
    } else if k <= max {
        N::zero()
    } else {
        k - max
    }
}
