#![cfg(feature = "heavy")]
use mcm_dp::{solve, solve_table};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn heavy_stress_long_chain() {
    let mut rng = StdRng::seed_from_u64(123);
    let d: Vec<u32> = (0..=600).map(|_| rng.gen_range(1..=1000)).collect();
    let cost = solve(&d).unwrap();
    // Any left-to-right order is an upper bound on the optimum.
    let naive: u128 = (1..600)
        .map(|k| u128::from(d[0]) * u128::from(d[k]) * u128::from(d[k + 1]))
        .sum();
    assert!(cost <= naive);
}

#[test]
fn heavy_stress_uniform_chain_has_closed_form() {
    // Square matrices: every parenthesization costs (n-1) * s^3.
    let s = 1000u32;
    let d = vec![s; 401];
    let table = solve_table(&d).unwrap();
    assert!(table.is_filled());
    assert_eq!(table.get(0, 399), Some(399 * u128::from(s).pow(3)));
}
