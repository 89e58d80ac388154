//! Text input and formatted output for [`PointSet`].

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{PlanarIndexError, Result};
use crate::kdtree::{PointSet, PointSetBuilder};
use crate::r#type::IndexableNum;

impl<N: IndexableNum> PointSet<N> {
    /// Load a balanced set from whitespace-separated numbers, read pairwise as `x y`.
    ///
    /// Line breaks carry no meaning. Empty input yields an empty set. Tokens that are not finite
    /// numbers, such as `NaN` or `inf`, are rejected.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut builder = PointSetBuilder::new(0);
        let mut pending_x: Option<N> = None;
        let mut position = 0;

        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                let invalid = || PlanarIndexError::Parse {
                    token: token.to_string(),
                    position,
                };
                let value: N = token.parse().map_err(|_| invalid())?;
                // points must be totally ordered
                if !value.is_finite() {
                    return Err(invalid());
                }
                position += 1;

                match pending_x.take() {
                    Some(x) => {
                        builder.add(x, value);
                    }
                    None => pending_x = Some(value),
                }
            }
        }

        if pending_x.is_some() {
            return Err(PlanarIndexError::OddCoordinateCount(position));
        }
        Ok(builder.finish())
    }

    /// Load a balanced set from a text file of coordinate pairs.
    ///
    /// See [`from_reader`][Self::from_reader] for the format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<N: IndexableNum> FromStr for PointSet<N> {
    type Err = PlanarIndexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl<N: IndexableNum> fmt::Display for PointSet<N> {
    /// One point per line, in in-order traversal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PointSet {{")?;

        let mut stack = vec![];
        let mut current = self.root_index();
        while current.is_some() || !stack.is_empty() {
            while let Some(index) = current {
                stack.push(index);
                current = self.nodes[index].left;
            }
            if let Some(index) = stack.pop() {
                let node = &self.nodes[index];
                writeln!(f, "\t{},", node.point)?;
                current = node.right;
            }
        }

        write!(f, "}}")
    }
}
