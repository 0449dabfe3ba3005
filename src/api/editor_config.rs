use serde::{Deserialize, Serialize};

use crate::core::{Bounds, DEFAULT_SYNC_TOLERANCE, GradientMode};
use crate::error::{ChartError, ChartResult};

use super::validation::validate_editor_config;

/// What a chart edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartRole {
    /// Free curve whose samples drive ramp opacity.
    #[default]
    Curve,
    /// Gradient stop handles pinned to a fixed height; `x` is the stop offset.
    GradientStops,
}

/// Per-chart interaction options.
///
/// Serializable so hosts can keep editor setup next to their own settings
/// without inventing an ad-hoc format. Curve data itself is not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Hit radius override in data units; derived from the draw area when `None`.
    pub epsilon: Option<f64>,
    pub show_guide_lines: bool,
    pub opacity_weighted: bool,
    /// Explicit domain; seed points are clamped into it.
    pub bounds: Option<Bounds>,
    /// First/last points are anchors.
    pub bounded: bool,
    pub clamp_y_to_domain: bool,
    pub role: ChartRole,
    pub sync_tolerance: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::curve()
    }
}

impl EditorConfig {
    /// Opacity-weighted curve chart with anchors and domain clamping.
    #[must_use]
    pub fn curve() -> Self {
        Self {
            epsilon: None,
            show_guide_lines: false,
            opacity_weighted: true,
            bounds: None,
            bounded: true,
            clamp_y_to_domain: true,
            role: ChartRole::Curve,
            sync_tolerance: DEFAULT_SYNC_TOLERANCE,
        }
    }

    /// Color-only chart editing gradient stop offsets.
    #[must_use]
    pub fn gradient_stops() -> Self {
        Self {
            opacity_weighted: false,
            role: ChartRole::GradientStops,
            ..Self::curve()
        }
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    #[must_use]
    pub fn with_guide_lines(mut self, show: bool) -> Self {
        self.show_guide_lines = show;
        self
    }

    #[must_use]
    pub fn with_opacity_weighted(mut self, enabled: bool) -> Self {
        self.opacity_weighted = enabled;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_bounded(mut self, bounded: bool) -> Self {
        self.bounded = bounded;
        self
    }

    #[must_use]
    pub fn with_clamp_y_to_domain(mut self, clamp: bool) -> Self {
        self.clamp_y_to_domain = clamp;
        self
    }

    #[must_use]
    pub fn with_sync_tolerance(mut self, tolerance: f64) -> Self {
        self.sync_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn gradient_mode(self) -> GradientMode {
        if self.opacity_weighted {
            GradientMode::OpacityWeighted
        } else {
            GradientMode::ColorOnly
        }
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse editor config: {e}")))?;
        validate_editor_config(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize editor config: {e}"))
        })
    }
}
