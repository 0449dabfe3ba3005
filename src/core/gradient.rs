use serde::{Deserialize, Serialize};

use crate::core::color::Rgb;
use crate::core::normalization::Normalization;
use crate::core::point_sequence::PointSequence;

/// Gradient control point at a normalized offset in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
}

impl GradientStop {
    #[must_use]
    pub const fn new(offset: f64, color: Rgb) -> Self {
        Self { offset, color }
    }
}

/// Sorts stops ascending by offset, keeping the first stop for a repeated offset.
#[must_use]
pub fn canonicalize_stops(mut stops: Vec<GradientStop>) -> Vec<GradientStop> {
    stops.retain(|stop| stop.offset.is_finite());
    stops.sort_by(|left, right| left.offset.total_cmp(&right.offset));
    stops.dedup_by(|next, kept| next.offset == kept.offset);
    stops
}

/// How a chart turns its palette into a drawable ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradientMode {
    /// Palette used verbatim.
    #[default]
    ColorOnly,
    /// Palette merged with curve samples, alpha taken from the curve.
    OpacityWeighted,
}

/// One stop of a derived, drawable ramp.
///
/// `alpha` is `None` for stops drawn fully opaque without annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampStop {
    pub offset: f64,
    pub color: Rgb,
    pub alpha: Option<f64>,
}

impl RampStop {
    #[must_use]
    pub fn opaque(stop: GradientStop) -> Self {
        Self {
            offset: stop.offset,
            color: stop.color,
            alpha: None,
        }
    }

    #[must_use]
    pub fn css(&self) -> String {
        match self.alpha {
            Some(alpha) => format!(
                "rgba({},{},{},{})",
                self.color.red, self.color.green, self.color.blue, alpha
            ),
            None => self.color.to_css(),
        }
    }
}

/// Palette used when a chart has no stops at all.
#[must_use]
pub fn fallback_palette() -> Vec<GradientStop> {
    vec![GradientStop::new(1.0, Rgb::BLACK)]
}

/// Builds the drawable stop list for `mode`.
#[must_use]
pub fn derive_ramp_stops(
    mode: GradientMode,
    palette: &[GradientStop],
    curve: &PointSequence,
    normalization: Normalization,
) -> Vec<RampStop> {
    let fallback;
    let palette = if palette.is_empty() {
        fallback = fallback_palette();
        &fallback
    } else {
        palette
    };

    match mode {
        GradientMode::ColorOnly => palette.iter().copied().map(RampStop::opaque).collect(),
        GradientMode::OpacityWeighted => opacity_weighted_stops(palette, curve, normalization),
    }
}

/// Merges palette stops with curve samples in one forward pass.
///
/// Each palette stop is emitted at its own offset with alpha interpolated
/// between the two curve samples around it (held at the first/last sample
/// outside the curve). Curve samples strictly between two palette stops are
/// emitted with the palette color interpolated at their offset and their own
/// alpha. An empty curve yields the palette unannotated.
#[must_use]
pub fn opacity_weighted_stops(
    palette: &[GradientStop],
    curve: &PointSequence,
    normalization: Normalization,
) -> Vec<RampStop> {
    if curve.is_empty() {
        return palette.iter().copied().map(RampStop::opaque).collect();
    }

    let samples: Vec<(f64, f64)> = curve
        .points()
        .map(|point| {
            (
                normalization.unit_x(point.x),
                normalization.unit_y(point.y),
            )
        })
        .collect();

    let mut merged = Vec::with_capacity(palette.len() + samples.len());
    let mut cursor = 0;
    for (j, stop) in palette.iter().enumerate() {
        while cursor < samples.len() && samples[cursor].0 < stop.offset {
            cursor += 1;
        }
        merged.push(RampStop {
            offset: stop.offset,
            color: stop.color,
            alpha: Some(alpha_at(&samples, cursor, stop.offset)),
        });

        while cursor < samples.len() && samples[cursor].0 <= stop.offset {
            cursor += 1;
        }
        let Some(next) = palette.get(j + 1) else {
            continue;
        };
        while cursor < samples.len() && samples[cursor].0 < next.offset {
            let (offset, alpha) = samples[cursor];
            let t = (offset - stop.offset) / (next.offset - stop.offset);
            merged.push(RampStop {
                offset,
                color: stop.color.lerp(next.color, t),
                alpha: Some(alpha),
            });
            cursor += 1;
        }
    }
    merged
}

/// Alpha at `offset` where `samples[cursor - 1].0 < offset <= samples[cursor].0`.
fn alpha_at(samples: &[(f64, f64)], cursor: usize, offset: f64) -> f64 {
    if cursor == 0 {
        return samples[0].1;
    }
    let Some(&(cur_x, cur_alpha)) = samples.get(cursor) else {
        return samples[samples.len() - 1].1;
    };
    let (prev_x, prev_alpha) = samples[cursor - 1];
    let t = if cur_x == prev_x {
        0.0
    } else {
        (offset - prev_x) / (cur_x - prev_x)
    };
    prev_alpha * (1.0 - t) + cur_alpha * t
}

/// Palette color at `offset`, interpolated between the surrounding stops.
#[must_use]
pub fn sample_palette(palette: &[GradientStop], offset: f64) -> Rgb {
    let Some(first) = palette.first() else {
        return Rgb::BLACK;
    };
    let index = palette.partition_point(|stop| stop.offset < offset);
    if index == 0 {
        return first.color;
    }
    let Some(right) = palette.get(index) else {
        return palette[palette.len() - 1].color;
    };
    let left = palette[index - 1];
    let span = right.offset - left.offset;
    if span == 0.0 {
        return right.color;
    }
    left.color.lerp(right.color, (offset - left.offset) / span)
}
