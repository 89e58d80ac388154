use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::Float;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Coordinates must be real
/// numbers with an epsilon, an infinity and a `hypot`, and must be plain old data so that query
/// candidates can be stored in a [`Pool`][crate::pool::Pool] byte arena.
pub trait IndexableNum:
    private::Sealed
    + Float
    + FromStr
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + bytemuck::Pod
{
    /// The number of bytes per element
    const BYTES_PER_ELEMENT: usize;

    /// Epsilon-tolerant equality: `|a - b| < epsilon`. Equal infinities compare equal.
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        self == other || (self - other).abs() < Self::epsilon()
    }
}

impl IndexableNum for f32 {
    const BYTES_PER_ELEMENT: usize = 4;
}

impl IndexableNum for f64 {
    const BYTES_PER_ELEMENT: usize = 8;
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
