//! A mutable two-dimensional kd-tree over planar points.
//!
//! Nodes alternate between splitting by x ([`Orientation::Vertical`]) and by y
//! ([`Orientation::Horizontal`]) with depth. Points equal to a node's key on the splitting axis
//! go right. Each subtree is responsible for a traversal rectangle derived by splitting the
//! unbounded plane at every ancestor, and queries prune subtrees using that rectangle.

#![warn(missing_docs)]

mod builder;
mod index;
mod io;
mod search;
mod traversal;

pub use builder::PointSetBuilder;
pub use index::{Orientation, PointSet};
pub use traversal::{Iter, Node};
