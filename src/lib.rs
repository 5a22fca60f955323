//! Matrix-chain multiplication on a layered DP engine.
//!
//! Given the dimensions of a chain of matrices multiplied in a fixed order,
//! this crate computes the minimum number of scalar multiplications over all
//! parenthesizations, using the classic bottom-up recurrence.
//!
//! ## Core idea
//! 1. Model the recurrence as a *layered* DP: every cell of a layer depends
//!    only on earlier layers.
//! 2. Implement the [`LayeredProblem`] trait for that recurrence.
//! 3. Let [`DpEngine`] drive the layers in order (serially, or with the
//!    `parallel` feature across the cells of one layer).
//!
//! For matrix chains a layer is a chain length, and the frontier is the
//! `n x n` [`CostTable`].
//!
//! ## Quick start
//! ```
//! let cost = mcm_dp::solve(&[30, 35, 15, 5, 10, 20, 25]).unwrap();
//! assert_eq!(cost, 15125);
//!
//! let dims = mcm_dp::parse_dimensions("2\n10\n20\n30\n").unwrap();
//! let engine = mcm_dp::DpEngine::new(mcm_dp::MatrixChainProblem::new(dims));
//! assert_eq!(engine.run(), 6000);
//! ```
//!
//! ## Features
//! - `parallel`: evaluate wide layers on the rayon thread pool.
//! - `tracing`: emit spans and events through `tracing`; the `mcm` binary
//!   installs a subscriber filtered by `RUST_LOG`.
//! - `heavy`: enable long-running stress tests.

pub mod builder;
pub mod dims;
pub mod engine;
pub mod error;
pub mod input;
pub mod problems;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::DpEngineBuilder;
pub use crate::dims::Dimensions;
pub use crate::engine::DpEngine;
pub use crate::error::{Error, Result};
pub use crate::input::{parse_dimensions, read_dimensions};
pub use crate::problems::matrix_chain::{solve, solve_table, MatrixChainProblem};
pub use crate::table::CostTable;
pub use crate::traits::LayeredProblem;
