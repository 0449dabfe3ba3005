use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::DataPoint;

/// Ordered, x-unique point collection stored as parallel label/value arrays.
///
/// Labels are strictly ascending. In bounded mode the first and last points
/// are anchors: their `x` never changes and they cannot be removed. An
/// insertion beyond an anchor takes over that end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointSequence {
    labels: Vec<f64>,
    values: Vec<f64>,
    bounded: bool,
}

impl PointSequence {
    #[must_use]
    pub fn new(bounded: bool) -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
            bounded,
        }
    }

    /// Builds a sequence from arbitrary points: sorted by `x`, non-finite
    /// samples dropped, and the first sample kept when `x` repeats.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = DataPoint>, bounded: bool) -> Self {
        let mut points: Vec<DataPoint> = points.into_iter().filter(|p| p.is_finite()).collect();
        points.sort_by(|left, right| left.x.total_cmp(&right.x));
        points.dedup_by(|next, kept| next.x == kept.x);

        Self {
            labels: points.iter().map(|p| p.x).collect(),
            values: points.iter().map(|p| p.y).collect(),
            bounded,
        }
    }

    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.bounded
    }

    #[must_use]
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<DataPoint> {
        Some(DataPoint::new(
            *self.labels.get(index)?,
            *self.values.get(index)?,
        ))
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(&x, &y)| DataPoint::new(x, y))
    }

    /// Whether `index` is the first or last point of a bounded sequence.
    #[must_use]
    pub fn is_anchor(&self, index: usize) -> bool {
        self.bounded && !self.labels.is_empty() && (index == 0 || index == self.labels.len() - 1)
    }

    /// Lower-bound insertion index: `labels[i - 1] < x <= labels[i]`.
    #[must_use]
    pub fn index_for_x(&self, x: f64) -> usize {
        self.labels.partition_point(|label| *label < x)
    }

    /// Inserts `(x, y)` at `index` (or at `index_for_x(x)` when omitted).
    ///
    /// Returns `false` without mutating when a point with the same `x` sits at
    /// the candidate index or its right neighbour, or when the index would
    /// break ordering.
    #[must_use]
    pub fn add_point(&mut self, x: f64, y: f64, index: Option<usize>) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let index = index.unwrap_or_else(|| self.index_for_x(x));
        if index > self.labels.len() {
            return false;
        }
        if self.labels.get(index) == Some(&x) || self.labels.get(index + 1) == Some(&x) {
            trace!(x, index, "duplicate point rejected");
            return false;
        }
        let left_ok = index == 0 || self.labels[index - 1] < x;
        let right_ok = index == self.labels.len() || x < self.labels[index];
        if !left_ok || !right_ok {
            trace!(x, index, "out-of-order insertion rejected");
            return false;
        }

        self.labels.insert(index, x);
        self.values.insert(index, y);
        trace!(x, y, index, count = self.labels.len(), "point added");
        true
    }

    /// Removes the point at `index`, or locates it by exact `(x, y)` when the
    /// index is omitted. Anchors are never removed.
    #[must_use]
    pub fn remove_point(&mut self, x: f64, y: f64, index: Option<usize>) -> bool {
        let index = match index {
            Some(index) => index,
            None => {
                let index = self.index_for_x(x);
                if self.labels.get(index) != Some(&x) || self.values.get(index) != Some(&y) {
                    trace!(x, y, "remove target mismatch");
                    return false;
                }
                index
            }
        };
        if index >= self.labels.len() || self.is_anchor(index) {
            return false;
        }

        self.labels.remove(index);
        self.values.remove(index);
        trace!(index, count = self.labels.len(), "point removed");
        true
    }

    /// Moves the point at `index`: `x` is held inside `[left_bound, right_bound]`
    /// (anchors keep their `x`), `y` is written as given.
    ///
    /// Returns the stored point, or `None` when `index` is out of range.
    pub fn move_to(
        &mut self,
        index: usize,
        x: f64,
        y: f64,
        left_bound: f64,
        right_bound: f64,
    ) -> Option<DataPoint> {
        if index >= self.labels.len() {
            return None;
        }
        if !self.is_anchor(index) && x.is_finite() {
            self.labels[index] = x.max(left_bound).min(right_bound);
        }
        if y.is_finite() {
            self.values[index] = y;
        }
        self.point(index)
    }

    #[must_use]
    pub(crate) fn set_value(&mut self, index: usize, y: f64) -> bool {
        match self.values.get_mut(index) {
            Some(value) if y.is_finite() => {
                *value = y;
                true
            }
            _ => false,
        }
    }

    /// Replaces the arrays wholesale. Callers guarantee the invariants.
    pub(crate) fn replace(&mut self, labels: Vec<f64>, values: Vec<f64>) {
        debug_assert_eq!(labels.len(), values.len());
        debug_assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
        self.labels = labels;
        self.values = values;
    }
}
