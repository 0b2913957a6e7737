//! 2-Opt neighborhood over an open path with fixed end points.

use crate::distance::DistanceModel;

use super::LocalSearch;

/// Minimum gain for a reversal to count as an improvement.
pub const TWO_OPT_EPSILON: f64 = 1e-9;

impl LocalSearch {
    /// Run one first-improvement pass over all segment pairs.
    ///
    /// Every improving reversal found is applied immediately and the scan
    /// continues on the modified order.
    pub(crate) fn two_opt_pass<D: DistanceModel>(
        &mut self,
        order: &mut [usize],
        distances: &D,
    ) -> bool {
        let n = order.len();
        if n < 4 {
            return false;
        }

        let mut improvement = false;

        for i in 1..n - 2 {
            for k in i + 1..n - 1 {
                let delta = evaluate_two_opt(order, distances, i, k);

                if delta > TWO_OPT_EPSILON {
                    apply_two_opt(order, i, k);
                    self.moves += 1;
                    improvement = true;
                }
            }
        }

        improvement
    }
}

/// Length saved by reversing `order[i..=k]`; positive means shorter.
pub fn evaluate_two_opt<D: DistanceModel>(order: &[usize], distances: &D, i: usize, k: usize) -> f64 {
    let before = order[i - 1];
    let first = order[i];
    let last = order[k];
    let after = order[k + 1];

    let old_cost = distances.distance(before, first) + distances.distance(last, after);
    let new_cost = distances.distance(before, last) + distances.distance(first, after);

    old_cost - new_cost
}

/// Reverse the segment `order[i..=k]`.
fn apply_two_opt(order: &mut [usize], i: usize, k: usize) {
    order[i..=k].reverse();
}
