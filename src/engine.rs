//! Generic layered DP engine.
//!
//! The engine drives a [`LayeredProblem`] one layer at a time, in increasing
//! order, so that every cell sees finished values for all the layers it
//! depends on. Within a layer cells are independent; with the `parallel`
//! feature wide layers are evaluated on the rayon thread pool.
//!
//! The engine is completely generic over implementations of [`LayeredProblem`].

use crate::traits::LayeredProblem;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Layers narrower than this are evaluated serially even with `parallel`.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Layered DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use mcm_dp::{DpEngine, problems::matrix_chain::MatrixChainProblem, Dimensions};
///
/// let dims = Dimensions::new([30, 35, 15, 5, 10, 20, 25]).unwrap();
/// let engine = DpEngine::new(MatrixChainProblem::new(dims));
/// assert_eq!(engine.run(), 15125);
/// ```
pub struct DpEngine<P: LayeredProblem> {
    problem: P,
    parallel_threshold: usize,
}

impl<P: LayeredProblem> DpEngine<P> {
    /// Create a new engine with the default parallel threshold.
    pub fn new(problem: P) -> Self {
        Self::with_parallel_threshold(problem, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Create a new engine that parallelizes layers of at least `threshold`
    /// cells. Ignored unless the `parallel` feature is enabled.
    pub fn with_parallel_threshold(problem: P, threshold: usize) -> Self {
        Self {
            problem,
            parallel_threshold: threshold.max(1),
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured parallel threshold.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Initialize the frontier and fill layers `0..T` in order, using
    /// `evaluate` to compute all cells of one layer.
    fn fill_layers<F>(&self, evaluate: F) -> P::Frontier
    where
        F: Fn(usize, &P::Frontier) -> Vec<P::Cost>,
    {
        let t = self.problem.num_layers();
        let mut frontier = self.problem.init_frontier();

        for layer in 0..t {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!(
                "layer",
                layer,
                width = self.problem.layer_width(layer)
            );
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let cells = evaluate(layer, &frontier);
            debug_assert_eq!(
                cells.len(),
                self.problem.layer_width(layer),
                "layer {layer} produced the wrong number of cells"
            );
            self.problem.commit_layer(layer, cells, &mut frontier);
        }

        frontier
    }

    fn evaluate_serial(&self, layer: usize, frontier: &P::Frontier) -> Vec<P::Cost> {
        (0..self.problem.layer_width(layer))
            .map(|index| self.problem.evaluate_cell(layer, index, frontier))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<P> DpEngine<P>
where
    P: LayeredProblem + Sync,
    P::Frontier: Sync,
    P::Cost: Send,
{
    /// Run the DP to completion (parallel execution within layers).
    ///
    /// Returns exactly what the serial engine returns: cells of one layer
    /// never read each other.
    pub fn run(&self) -> P::Cost {
        let frontier = self.run_frontier();
        self.problem.extract_cost(&frontier)
    }

    /// Run the DP and return the fully populated frontier.
    pub fn run_frontier(&self) -> P::Frontier {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_run", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.fill_layers(|layer, frontier| {
            let width = self.problem.layer_width(layer);
            if width < self.parallel_threshold {
                return self.evaluate_serial(layer, frontier);
            }
            (0..width)
                .into_par_iter()
                .map(|index| self.problem.evaluate_cell(layer, index, frontier))
                .collect()
        })
    }
}

#[cfg(not(feature = "parallel"))]
impl<P: LayeredProblem> DpEngine<P> {
    /// Run the DP to completion (serial execution).
    pub fn run(&self) -> P::Cost {
        let frontier = self.run_frontier();
        self.problem.extract_cost(&frontier)
    }

    /// Run the DP and return the fully populated frontier.
    pub fn run_frontier(&self) -> P::Frontier {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_run", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.fill_layers(|layer, frontier| self.evaluate_serial(layer, frontier))
    }
}
