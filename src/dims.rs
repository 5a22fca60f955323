//! Validated dimension sequences.
//!
//! Matrix `i` (0-indexed) of a chain has shape `d[i] x d[i+1]`, so a chain
//! of `n` matrices is described by `n + 1` positive integers.

use std::fmt::Display;

use crate::error::{Error, Result};

/// An immutable dimension sequence `d[0..=n]` describing `n >= 1` matrices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    values: Vec<u32>,
}

impl Dimensions {
    /// Validate and wrap a raw dimension sequence.
    ///
    /// Fails with [`Error::InvalidInput`] if fewer than two values are given
    /// or if any value is zero, negative or wider than `u32`.
    pub fn new<T>(values: impl IntoIterator<Item = T>) -> Result<Self>
    where
        T: TryInto<u32> + Copy + Display,
    {
        let values = values
            .into_iter()
            .enumerate()
            .map(|(pos, raw)| match TryInto::<u32>::try_into(raw) {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(Error::invalid(format!(
                    "dimension {raw} at position {pos} must be in 1..={}",
                    u32::MAX
                ))),
            })
            .collect::<Result<Vec<u32>>>()?;

        if values.len() < 2 {
            return Err(Error::invalid(format!(
                "need at least two dimensions (one matrix), got {}",
                values.len()
            )));
        }
        Ok(Self { values })
    }

    /// Number of matrices `n` in the chain.
    #[inline]
    pub fn matrices(&self) -> usize {
        self.values.len() - 1
    }

    /// Shape `(rows, cols)` of matrix `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.matrices()`.
    pub fn shape(&self, i: usize) -> (u32, u32) {
        (self.values[i], self.values[i + 1])
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }
}

impl std::ops::Index<usize> for Dimensions {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.values[index]
    }
}
