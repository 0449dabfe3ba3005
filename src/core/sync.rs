use tracing::trace;

use crate::core::color::Rgb;
use crate::core::gradient::{GradientStop, sample_palette};
use crate::core::normalization::Normalization;
use crate::core::point_sequence::PointSequence;

/// Default coincidence tolerance, in normalized offset units.
pub const DEFAULT_SYNC_TOLERANCE: f64 = 0.01;

/// Shared x-partition produced by [`merge_partitions`].
///
/// `offsets` are normalized; `values_a`/`values_b` are in each side's own data
/// units and `stops` carries one stop per offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergedPartition {
    pub offsets: Vec<f64>,
    pub values_a: Vec<f64>,
    pub values_b: Vec<f64>,
    pub stops: Vec<GradientStop>,
}

impl MergedPartition {
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offsets mapped back into a side's data space.
    #[must_use]
    pub fn labels_for(&self, normalization: Normalization) -> Vec<f64> {
        self.offsets
            .iter()
            .map(|offset| normalization.from_unit_x(*offset))
            .collect()
    }

    fn push(&mut self, offset: f64, value_a: f64, value_b: f64, stop_color: Rgb) {
        if let Some(&last) = self.offsets.last() {
            if offset <= last {
                // Dropped: offsets must stay strictly ascending.
                trace!(offset, last, "dropping non-increasing merge offset");
                return;
            }
        }
        self.offsets.push(offset);
        self.values_a.push(value_a);
        self.values_b.push(value_b);
        self.stops.push(GradientStop::new(offset, stop_color));
    }
}

/// Tolerance-based sorted union of two point sequences.
///
/// `stops_b` runs parallel to `b` (stop `i` colors point `i`). Heads closer
/// than `tolerance` collapse into one entry at their midpoint carrying `a`'s
/// value and `b`'s color. A head present on one side only gets a placeholder
/// on the other: the other side's mid-range value, and for `a`-only heads the
/// palette color sampled at that offset.
#[must_use]
pub fn merge_partitions(
    a: &PointSequence,
    norm_a: Normalization,
    b: &PointSequence,
    norm_b: Normalization,
    stops_b: &[GradientStop],
    tolerance: f64,
) -> MergedPartition {
    let offsets_a: Vec<f64> = a.labels().iter().map(|x| norm_a.unit_x(*x)).collect();
    let offsets_b: Vec<f64> = b.labels().iter().map(|x| norm_b.unit_x(*x)).collect();
    let mid_a = norm_a.mid_y();
    let mid_b = norm_b.mid_y();
    let color_b = |index: usize, offset: f64| {
        stops_b
            .get(index)
            .map_or_else(|| sample_palette(stops_b, offset), |stop| stop.color)
    };

    let mut merged = MergedPartition::default();
    let (mut i1, mut i2) = (0, 0);
    while i1 < offsets_a.len() || i2 < offsets_b.len() {
        match (offsets_a.get(i1), offsets_b.get(i2)) {
            (Some(&x1), Some(&x2)) if (x1 - x2).abs() < tolerance => {
                merged.push(
                    (x1 + x2) / 2.0,
                    a.values()[i1],
                    b.values()[i2],
                    color_b(i2, x2),
                );
                i1 += 1;
                i2 += 1;
            }
            (Some(&x1), Some(&x2)) if x1 < x2 => {
                merged.push(x1, a.values()[i1], mid_b, sample_palette(stops_b, x1));
                i1 += 1;
            }
            (Some(&x1), None) => {
                merged.push(x1, a.values()[i1], mid_b, sample_palette(stops_b, x1));
                i1 += 1;
            }
            (_, Some(&x2)) => {
                merged.push(x2, mid_a, b.values()[i2], color_b(i2, x2));
                i2 += 1;
            }
            (None, None) => break,
        }
    }
    merged
}
