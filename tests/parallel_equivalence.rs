#![cfg(feature = "parallel")]

use mcm_dp::{builder::DpEngineBuilder, Dimensions, DpEngine, MatrixChainProblem};
use proptest::prelude::*;

fn serial_reference(d: &[u32]) -> u128 {
    let n = d.len() - 1;
    let mut m = vec![vec![0u128; n]; n];
    for len in 2..=n {
        for i in 0..=(n - len) {
            let j = i + len - 1;
            m[i][j] = (i..j)
                .map(|k| {
                    m[i][k]
                        + m[k + 1][j]
                        + u128::from(d[i]) * u128::from(d[k + 1]) * u128::from(d[j + 1])
                })
                .min()
                .unwrap();
        }
    }
    m[0][n - 1]
}

proptest! {
    #[test]
    fn parallel_matches_serial(
        d in prop::collection::vec(1u32..200, 2..40),
        threshold in 1usize..8,
    ) {
        let dims = Dimensions::new(d.clone()).unwrap();
        let engine = DpEngineBuilder::new(MatrixChainProblem::new(dims))
            .with_parallel_threshold(threshold)
            .build();
        prop_assert_eq!(engine.run(), serial_reference(&d));
    }
}

#[test]
fn parallel_table_equals_default_table() {
    let d: Vec<u32> = (1..=80).map(|x| (x * 37 % 97) + 1).collect();
    let dims = Dimensions::new(d).unwrap();
    let eager = DpEngine::with_parallel_threshold(MatrixChainProblem::new(dims.clone()), 1);
    let lazy = DpEngine::with_parallel_threshold(MatrixChainProblem::new(dims), usize::MAX);
    assert_eq!(eager.run_frontier(), lazy.run_frontier());
}
