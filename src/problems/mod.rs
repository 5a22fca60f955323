//! Problem implementations for the layered DP engine.
//!
//! - [`matrix_chain`] : Matrix-chain multiplication, layered by chain length.

pub mod matrix_chain;
