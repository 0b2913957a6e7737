//! Nearest-neighbour construction of an initial visiting order.

use crate::distance::DistanceModel;

/// Build a visiting order over `candidates` by repeatedly stepping to the
/// nearest unvisited one, starting from `start`.
///
/// Ties go to the candidate listed first. The result is a permutation of
/// `candidates`; `start` itself is not part of it.
pub fn nearest_neighbor<D: DistanceModel>(
    distances: &D,
    start: usize,
    candidates: &[usize],
) -> Vec<usize> {
    let n = candidates.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = start;

    for _ in 0..n {
        let mut best: Option<(usize, f64)> = None;

        for (pos, &candidate) in candidates.iter().enumerate() {
            if visited[pos] {
                continue;
            }
            let d = distances.distance(current, candidate);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((pos, d));
            }
        }

        let Some((pos, _)) = best else {
            break;
        };
        visited[pos] = true;
        current = candidates[pos];
        order.push(current);
    }

    order
}
