//! Example: Matrix-chain multiplication on the layered DP engine.
//!
//! Run with:
//! `cargo run --example matrix_chain`

use mcm_dp::{Dimensions, DpEngineBuilder, MatrixChainProblem};

fn main() -> mcm_dp::Result<()> {
    // Example from CLRS:
    // Matrices A1..A6 with dimensions:
    // 30x35, 35x15, 15x5, 5x10, 10x20, 20x25
    let dims = Dimensions::new([30, 35, 15, 5, 10, 20, 25])?;
    let n = dims.matrices();

    let engine = DpEngineBuilder::new(MatrixChainProblem::new(dims))
        .with_parallel_threshold(4)
        .build();
    for i in 0..n {
        let (rows, cols) = engine.problem().dimensions().shape(i);
        println!("A{}: {rows}x{cols}", i + 1);
    }
    let table = engine.run_frontier();

    println!("Optimal multiplication cost: {}", engine.run());
    println!("Sub-chain optima (i..=j, 0-indexed):");
    for len in 2..=n {
        for i in 0..=(n - len) {
            let j = i + len - 1;
            if let Some(cost) = table.get(i, j) {
                println!("  A[{i}..={j}] = {cost}");
            }
        }
    }
    Ok(())
}
