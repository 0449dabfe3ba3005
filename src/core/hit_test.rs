use smallvec::SmallVec;

use crate::core::point_sequence::PointSequence;
use crate::core::types::DataPoint;

/// Nearest existing point under a pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance_sq: f64,
}

/// Finds the point nearest to `query` among the neighbours of its insertion index.
///
/// Only `i - 1`, `i` and `i + 1` (with `i = index_for_x(query.x)`) are
/// considered. A candidate wins when its squared data-space distance is
/// strictly below both the best so far and `epsilon`, so ties keep the
/// leftmost candidate. The distance mixes both axes without normalizing by
/// axis scale.
///
/// `None` means the gesture targets empty space.
#[must_use]
pub fn hit_test(sequence: &PointSequence, query: DataPoint, epsilon: f64) -> Option<Hit> {
    let index = sequence.index_for_x(query.x);
    let candidates: SmallVec<[usize; 3]> = [index.checked_sub(1), Some(index), Some(index + 1)]
        .into_iter()
        .flatten()
        .filter(|candidate| *candidate < sequence.len())
        .collect();

    let mut best: Option<Hit> = None;
    for candidate in candidates {
        let Some(point) = sequence.point(candidate) else {
            continue;
        };
        let distance_sq = (point.x - query.x).powi(2) + (point.y - query.y).powi(2);
        let threshold = best.map_or(epsilon, |hit| hit.distance_sq.min(epsilon));
        if distance_sq < threshold {
            best = Some(Hit {
                index: candidate,
                distance_sq,
            });
        }
    }
    best
}
