//! Utility functions for local search operations.

use itertools::Itertools;

use crate::distance::DistanceModel;

/// Total length of the open path visiting `order` front to back.
pub fn path_length<D: DistanceModel>(order: &[usize], distances: &D) -> f64 {
    order
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| distances.distance(from, to))
        .sum()
}

/// Check that `a` and `b` hold the same indices, each exactly once.
pub fn is_permutation_of(a: &[usize], b: &[usize]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b && a.iter().tuple_windows().all(|(x, y)| x != y)
}
