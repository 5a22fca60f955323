//! Core trait definitions for layered dynamic programs.
//!
//! To run a recurrence on [`DpEngine`](crate::engine::DpEngine), implement
//! [`LayeredProblem`] for a struct that captures one problem instance.
//!
//! The trait encodes a simple contract:
//! - Cells are grouped into layers `0..T`.
//! - Every cell of layer `l` depends only on the initial frontier and on
//!   cells of layers `< l`, so cells within one layer are independent.
//! - The frontier is the memo structure that accumulates finished layers.
//!
//! The engine owns the layer loop and decides whether a layer is evaluated
//! serially or in parallel. Implementations only describe single cells.

/// Trait for a layered dynamic program instance.
///
/// A `LayeredProblem` corresponds to a *fixed* DP instance: in practice a
/// struct holding the input data (dimensions, sequences, weights).
pub trait LayeredProblem {
    /// Memo structure shared by all layers (e.g. a cost table).
    type Frontier;

    /// Objective / cost type.
    type Cost: Copy + Ord;

    /// Number of layers `T` the engine must evaluate.
    fn num_layers(&self) -> usize;

    /// Build the frontier holding the base cases, before layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Number of independent cells in `layer`.
    fn layer_width(&self, layer: usize) -> usize;

    /// Compute the final value of cell `index` of `layer`.
    ///
    /// Must only read cells of earlier layers from `frontier`.
    fn evaluate_cell(&self, layer: usize, index: usize, frontier: &Self::Frontier) -> Self::Cost;

    /// Store a finished layer; `cells[index]` is the value of cell `index`.
    fn commit_layer(&self, layer: usize, cells: Vec<Self::Cost>, frontier: &mut Self::Frontier);

    /// Read the objective from the fully populated frontier.
    fn extract_cost(&self, frontier: &Self::Frontier) -> Self::Cost;
}
