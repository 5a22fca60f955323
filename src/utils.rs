//! Assorted arithmetic helpers shared by the solver and its tests.

/// Scalar multiplications needed to multiply a `rows x shared` matrix by a
/// `shared x cols` matrix.
///
/// Operands are `u32`, so the product always fits in `u128`.
#[inline]
pub fn product_cost(rows: u32, shared: u32, cols: u32) -> u128 {
    u128::from(rows) * u128::from(shared) * u128::from(cols)
}

/// Chain length handled by engine layer `layer`.
///
/// Layer 0 combines pairs of matrices; single matrices are the initial
/// frontier and cost nothing.
#[inline]
pub fn chain_length(layer: usize) -> usize {
    layer + 2
}
