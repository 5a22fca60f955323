//! Matrix-chain multiplication as a layered DP.
//!
//! Classic DP:
//! - Given dimensions d[0..=n], matrix i (0-indexed) has shape d[i] x d[i+1].
//! - Find the parenthesization minimizing scalar multiplications.
//!
//! Layers are chain lengths: layer `l` fills every sub-chain of length
//! `l + 2`. Sub-chains of one length only depend on strictly shorter ones,
//! which is exactly the independence the engine needs.

use std::fmt::Display;

use crate::dims::Dimensions;
use crate::engine::DpEngine;
use crate::error::Result;
use crate::table::CostTable;
use crate::traits::LayeredProblem;
use crate::utils::{chain_length, product_cost};

/// Matrix-chain DP instance.
#[derive(Clone, Debug)]
pub struct MatrixChainProblem {
    dims: Dimensions,
}

impl MatrixChainProblem {
    pub fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    fn n(&self) -> usize {
        self.dims.matrices()
    }

    /// Cost of computing sub-chain `i..=j` when the last multiplication
    /// joins `i..=k` with `k+1..=j`.
    ///
    /// Both halves must already be present in `table`.
    fn split_cost(&self, table: &CostTable, i: usize, k: usize, j: usize) -> u128 {
        let left = table.get(i, k);
        let right = table.get(k + 1, j);
        debug_assert!(
            left.is_some() && right.is_some(),
            "sub-chain of ({i}, {j}) evaluated before its halves"
        );
        let (rows, _) = self.dims.shape(i);
        let (_, shared) = self.dims.shape(k);
        let (_, cols) = self.dims.shape(j);
        left.unwrap_or_default() + right.unwrap_or_default() + product_cost(rows, shared, cols)
    }
}

impl LayeredProblem for MatrixChainProblem {
    type Frontier = CostTable;
    type Cost = u128;

    fn num_layers(&self) -> usize {
        // One layer per chain length 2..=n.
        self.n() - 1
    }

    fn init_frontier(&self) -> CostTable {
        CostTable::new(self.n())
    }

    fn layer_width(&self, layer: usize) -> usize {
        self.n() + 1 - chain_length(layer)
    }

    fn evaluate_cell(&self, layer: usize, i: usize, table: &CostTable) -> u128 {
        let j = i + chain_length(layer) - 1;
        // Non-empty: j > i for every layer.
        (i..j)
            .map(|k| self.split_cost(table, i, k, j))
            .min()
            .unwrap_or_default()
    }

    fn commit_layer(&self, layer: usize, cells: Vec<u128>, table: &mut CostTable) {
        let span = chain_length(layer) - 1;
        for (i, cost) in cells.into_iter().enumerate() {
            table.set(i, i + span, cost);
        }
    }

    fn extract_cost(&self, table: &CostTable) -> u128 {
        table.get(0, self.n() - 1).unwrap_or_default()
    }
}

/// Minimum number of scalar multiplications needed to multiply the chain
/// described by `dimensions`.
///
/// ```
/// assert_eq!(mcm_dp::solve(&[10, 100, 5, 50]).unwrap(), 7500);
/// assert!(mcm_dp::solve::<u32>(&[]).is_err());
/// ```
pub fn solve<T>(dimensions: &[T]) -> Result<u128>
where
    T: TryInto<u32> + Copy + Display,
{
    let dims = Dimensions::new(dimensions.iter().copied())?;
    let cost = DpEngine::new(MatrixChainProblem::new(dims)).run();

    #[cfg(feature = "tracing")]
    tracing::debug!(matrices = dimensions.len() - 1, cost = %cost, "matrix chain solved");

    Ok(cost)
}

/// Like [`solve`], but returns the whole cost table so every sub-chain
/// optimum can be inspected.
pub fn solve_table<T>(dimensions: &[T]) -> Result<CostTable>
where
    T: TryInto<u32> + Copy + Display,
{
    let dims = Dimensions::new(dimensions.iter().copied())?;
    Ok(DpEngine::new(MatrixChainProblem::new(dims)).run_frontier())
}
