use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum PlanarIndexError {
    /// A [`Pool`][crate::pool::Pool] had no run of `requested` contiguous free slots.
    #[error("Pool exhausted: requested {requested} contiguous slots of {capacity}")]
    OutOfMemory { requested: usize, capacity: usize },

    /// A token in a point list could not be read as a coordinate.
    #[error("Invalid coordinate {token:?} at position {position}")]
    Parse { token: String, position: usize },

    /// A point list ended with an x coordinate and no matching y.
    #[error("Point list has an odd number of coordinates ({0})")]
    OddCoordinateCount(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlanarIndexError>;
