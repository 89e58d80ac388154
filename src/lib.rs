#![doc = include_str!("../README.md")]

mod error;
pub mod geometry;
pub mod kdtree;
pub mod pool;
mod r#type;

pub use error::{PlanarIndexError, Result};
pub use geometry::{Point, Rect};
pub use kdtree::{PointSet, PointSetBuilder};
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
