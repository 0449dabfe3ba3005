use tracing::debug;

use crate::core::{GradientStop, Normalization, PointSequence, merge_partitions};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::InteractionController;

/// Unifies two charts onto one shared x-partition.
///
/// After the call every normalized offset present in either chart exists in
/// both, and both palettes are replaced by the merged stop list (`b`'s stops
/// run parallel to `b`'s points). Both charts are recomputed and committed.
/// Returns the merged length.
pub fn merge_sync<RA, RB>(
    a: &mut InteractionController<RA>,
    b: &mut InteractionController<RB>,
    tolerance: f64,
) -> ChartResult<usize>
where
    RA: Renderer,
    RB: Renderer,
{
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(ChartError::InvalidData(
            "sync tolerance must be finite and > 0".to_owned(),
        ));
    }

    let norm_a = a.model.normalization;
    let norm_b = b.model.normalization;
    let merged = merge_partitions(
        &a.model.sequence,
        norm_a,
        &b.model.sequence,
        norm_b,
        &b.model.palette,
        tolerance,
    );
    debug!(
        before_a = a.model.sequence.len(),
        before_b = b.model.sequence.len(),
        merged = merged.len(),
        tolerance,
        "merge sync"
    );

    let labels_a = anchored_labels(merged.labels_for(norm_a), &a.model.sequence, norm_a, tolerance);
    let labels_b = anchored_labels(merged.labels_for(norm_b), &b.model.sequence, norm_b, tolerance);

    let merged_len = merged.len();
    let stops: Vec<GradientStop> = merged
        .stops
        .iter()
        .zip(&labels_b)
        .map(|(stop, label)| GradientStop::new(norm_b.unit_x(*label), stop.color))
        .collect();

    a.interaction.on_drag_end();
    b.interaction.on_drag_end();
    a.model.sequence.replace(labels_a, merged.values_a);
    b.model.sequence.replace(labels_b, merged.values_b);
    a.model.palette = stops.clone();
    b.model.palette = stops;
    a.model.refresh_ramp();
    b.model.refresh_ramp();

    let commit_a = a.commit_frame(None);
    let commit_b = b.commit_frame(None);
    commit_a.and(commit_b)?;
    Ok(merged_len)
}

/// Snaps a bounded chart's end labels back onto its anchors' exact `x`.
///
/// Normalizing and mapping back can drift by rounding; an end label within
/// `tolerance` of the old anchor takes the anchor's value when ordering allows.
fn anchored_labels(
    mut labels: Vec<f64>,
    previous: &PointSequence,
    normalization: Normalization,
    tolerance: f64,
) -> Vec<f64> {
    if !previous.is_bounded() || labels.len() < 2 {
        return labels;
    }
    let (Some(&first), Some(&last)) = (previous.labels().first(), previous.labels().last()) else {
        return labels;
    };
    let near = |label: f64, anchor: f64| {
        (normalization.unit_x(label) - normalization.unit_x(anchor)).abs() < tolerance
    };

    let n = labels.len();
    if near(labels[0], first) && first < labels[1] {
        labels[0] = first;
    }
    if near(labels[n - 1], last) && last > labels[n - 2] {
        labels[n - 1] = last;
    }
    labels
}
