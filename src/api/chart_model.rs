use tracing::debug;

use crate::core::{
    DataPoint, GradientMode, GradientStop, Normalization, NormalizationSeed, PointSequence,
    RampStop, Rgb, canonicalize_stops, compute_normalization, derive_ramp_stops,
};
use crate::error::ChartResult;
use crate::render::GradientCache;

use super::{ChartRole, EditorConfig};

/// Fixed `y` of every gradient stop handle.
pub const STOP_HANDLE_HEIGHT: f64 = 0.001;

/// Color given to a stop created by clicking the stop chart.
pub const DEFAULT_STOP_COLOR: Rgb = Rgb::new(220.0, 220.0, 120.0);

/// Authoritative state of one chart.
///
/// Groups the point sequence, its normalization, the palette and the derived
/// ramp so every view reads one model and all writes go through the
/// controller that owns it.
#[derive(Debug)]
pub struct ChartModel {
    pub(super) normalization: Normalization,
    pub(super) sequence: PointSequence,
    pub(super) palette: Vec<GradientStop>,
    pub(super) mode: GradientMode,
    pub(super) derived: Vec<RampStop>,
    pub(super) ramp_cache: GradientCache,
}

impl ChartModel {
    #[must_use]
    pub fn new(
        sequence: PointSequence,
        normalization: Normalization,
        palette: Vec<GradientStop>,
        mode: GradientMode,
    ) -> Self {
        let mut model = Self {
            normalization,
            sequence,
            palette: canonicalize_stops(palette),
            mode,
            derived: Vec::new(),
            ramp_cache: GradientCache::default(),
        };
        model.refresh_ramp();
        model
    }

    /// Curve chart seeded from arbitrary points.
    ///
    /// The normalization comes from `config.bounds` when set (seed points are
    /// then clamped into the domain) or from the sorted seed points. Bounded
    /// charts get anchors at the domain edges when the seed does not reach
    /// them.
    pub fn curve(
        points: Vec<DataPoint>,
        palette: Vec<GradientStop>,
        config: EditorConfig,
    ) -> ChartResult<Self> {
        let mut points: Vec<DataPoint> = points.into_iter().filter(|p| p.is_finite()).collect();
        points.sort_by(|left, right| left.x.total_cmp(&right.x));

        let normalization = match config.bounds {
            Some(bounds) => compute_normalization(NormalizationSeed::Bounds(bounds))?,
            None => compute_normalization(NormalizationSeed::Points(&points))?,
        };
        if config.bounds.is_some() {
            for point in &mut points {
                *point = normalization.clamp_point(*point);
            }
        }

        if config.bounded {
            let upper = normalization.upper();
            if points.first().is_none_or(|first| first.x > normalization.offset.x) {
                points.insert(0, normalization.offset);
            }
            if points.last().is_none_or(|last| last.x < upper.x) {
                points.push(upper);
            }
        }

        let sequence = PointSequence::from_points(points, config.bounded);
        debug!(
            points = sequence.len(),
            offset_x = normalization.offset.x,
            scale_x = normalization.scale.x,
            "curve chart model created"
        );
        Ok(Self::new(
            sequence,
            normalization,
            palette,
            config.gradient_mode(),
        ))
    }

    /// Stop chart whose handles mirror `stops`, one handle per stop.
    #[must_use]
    pub fn gradient_stops(stops: Vec<GradientStop>, config: EditorConfig) -> Self {
        let stops = canonicalize_stops(stops);
        let sequence = PointSequence::from_points(
            stops
                .iter()
                .map(|stop| DataPoint::new(stop.offset, STOP_HANDLE_HEIGHT)),
            config.bounded,
        );
        let normalization = Normalization::new(
            DataPoint::new(0.0, 0.0),
            DataPoint::new(1.0, STOP_HANDLE_HEIGHT * 2.0),
        );
        debug!(stops = stops.len(), "gradient stop chart model created");
        Self::new(sequence, normalization, stops, GradientMode::ColorOnly)
    }

    /// Builds the model a config asks for.
    pub fn for_role(
        points: Vec<DataPoint>,
        palette: Vec<GradientStop>,
        config: EditorConfig,
    ) -> ChartResult<Self> {
        match config.role {
            ChartRole::Curve => Self::curve(points, palette, config),
            ChartRole::GradientStops => Ok(Self::gradient_stops(palette, config)),
        }
    }

    #[must_use]
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    #[must_use]
    pub fn sequence(&self) -> &PointSequence {
        &self.sequence
    }

    #[must_use]
    pub fn palette(&self) -> &[GradientStop] {
        &self.palette
    }

    #[must_use]
    pub fn mode(&self) -> GradientMode {
        self.mode
    }

    /// Drawable stop list derived from the palette (and curve, when opacity-weighted).
    #[must_use]
    pub fn derived_stops(&self) -> &[RampStop] {
        &self.derived
    }

    #[must_use]
    pub fn ramp_cache(&self) -> &GradientCache {
        &self.ramp_cache
    }

    /// Recomputes the derived stops and drops the cached ramp.
    pub(super) fn refresh_ramp(&mut self) {
        self.derived = derive_ramp_stops(
            self.mode,
            &self.palette,
            &self.sequence,
            self.normalization,
        );
        self.ramp_cache.invalidate();
    }
}
