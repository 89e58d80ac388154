//! Fixed-capacity storage used to bound memory during a single k-nearest-neighbor query.
//!
//! [`Pool`] is a byte arena carved into equally sized slots with a used/free map.
//! [`CandidateMap`] is an ordered map from distance to point whose entries all live inside a
//! [`Pool`], so a query never holds more than `k + 1` candidates and never touches the general
//! allocator after setup.

mod arena;
mod candidates;

pub use arena::Pool;
pub use candidates::CandidateMap;
