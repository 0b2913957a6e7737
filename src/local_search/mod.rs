//! Local search refinement of a visiting order.

pub mod two_opt;
pub mod utils;

use log::debug;

use crate::distance::DistanceModel;

pub use self::two_opt::TWO_OPT_EPSILON;

/// Runs 2-opt passes over an order and keeps statistics of the last run.
#[derive(Debug, Clone, Default)]
pub struct LocalSearch {
    /// Full passes made by the last run, including the final one that found nothing.
    pub passes: usize,
    /// Segment reversals applied by the last run.
    pub moves: usize,
}

impl LocalSearch {
    /// Create a new local search instance.
    pub fn new() -> Self {
        LocalSearch::default()
    }

    /// Improve `order` in place until no improving 2-opt move remains.
    ///
    /// The first and last positions are never moved. Returns whether any
    /// move was applied.
    pub fn refine<D: DistanceModel>(&mut self, order: &mut [usize], distances: &D) -> bool {
        self.passes = 0;
        self.moves = 0;

        if order.len() < 4 {
            return false;
        }

        let mut improvement = true;
        while improvement {
            improvement = self.two_opt_pass(order, distances);
            self.passes += 1;
            debug!(
                "2-opt pass {}: {} moves so far, length {:.3} km",
                self.passes,
                self.moves,
                utils::path_length(order, distances)
            );
        }

        self.moves > 0
    }
}

/// Refine a copy of `order` with 2-opt and return it.
pub fn two_opt<D: DistanceModel>(order: &[usize], distances: &D) -> Vec<usize> {
    let mut refined = order.to_vec();
    LocalSearch::new().refine(&mut refined, distances);
    refined
}
