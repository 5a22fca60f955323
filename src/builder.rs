use crate::engine::DEFAULT_PARALLEL_THRESHOLD;
use crate::{DpEngine, LayeredProblem};

pub struct DpEngineBuilder<P: LayeredProblem> {
    problem: P,
    parallel_threshold: Option<usize>,
}

impl<P: LayeredProblem> DpEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            parallel_threshold: None,
        }
    }
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }
    pub fn build(self) -> DpEngine<P> {
        let threshold = self
            .parallel_threshold
            .unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
        DpEngine::with_parallel_threshold(self.problem, threshold)
    }
}
