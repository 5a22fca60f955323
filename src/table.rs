//! The cost table filled by the matrix-chain recurrence.
//!
//! Cell `(i, j)` with `i <= j` holds the minimum number of scalar
//! multiplications needed for the product of matrices `i..=j`. Cells below
//! the diagonal are never read.

/// Marks a cell that has not been computed yet.
///
/// Real costs are below `n * 2^96` (dimensions are `u32`), so this value
/// never collides with one.
const UNSET: u128 = u128::MAX;

/// Dense `n x n` table with an explicit "unset" state per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostTable {
    n: usize,
    cells: Vec<u128>,
}

impl CostTable {
    /// Allocate a table for `n` matrices: diagonal cells are 0, every other
    /// cell starts unset.
    pub fn new(n: usize) -> Self {
        let mut cells = vec![UNSET; n * n];
        for i in 0..n {
            cells[i * n + i] = 0;
        }
        Self { n, cells }
    }

    /// Number of matrices the table covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Cost of the sub-chain `i..=j`, or `None` if not yet computed.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<u128> {
        Some(self.cells[i * self.n + j]).filter(|&cost| cost != UNSET)
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, cost: u128) {
        debug_assert_ne!(cost, UNSET, "cost of ({i}, {j}) collides with the unset marker");
        self.cells[i * self.n + j] = cost;
    }

    /// True once every cell on or above the diagonal holds a cost.
    pub fn is_filled(&self) -> bool {
        (0..self.n).all(|i| (i..self.n).all(|j| self.get(i, j).is_some()))
    }
}
