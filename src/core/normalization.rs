use serde::{Deserialize, Serialize};

use crate::core::types::{DataPoint, DrawArea};
use crate::error::{ChartError, ChartResult};

/// Explicit data-space domain used instead of deriving one from the seed points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: DataPoint,
    pub upper: DataPoint,
}

impl Bounds {
    #[must_use]
    pub fn new(lower: DataPoint, upper: DataPoint) -> Self {
        Self { lower, upper }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(ChartError::InvalidInput(
                "bounds must be finite".to_owned(),
            ));
        }
        if self.upper.x < self.lower.x || self.upper.y < self.lower.y {
            return Err(ChartError::InvalidInput(
                "bounds upper corner must not be below lower corner".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// What a chart's normalization is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizationSeed<'a> {
    Points(&'a [DataPoint]),
    Bounds(Bounds),
}

/// Affine map from a chart's data space into the unit square.
///
/// `offset` is the data-space lower corner and `scale` the extent per axis.
/// A zero extent is floored to `1` so mapping never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub offset: DataPoint,
    pub scale: DataPoint,
}

/// Derives a normalization from seed points (sorted by `x`) or explicit bounds.
pub fn compute_normalization(seed: NormalizationSeed<'_>) -> ChartResult<Normalization> {
    match seed {
        NormalizationSeed::Points(points) => Normalization::from_points(points),
        NormalizationSeed::Bounds(bounds) => Normalization::from_bounds(bounds),
    }
}

impl Normalization {
    #[must_use]
    pub fn new(offset: DataPoint, scale: DataPoint) -> Self {
        Self {
            offset,
            scale: DataPoint::new(floor_extent(scale.x), floor_extent(scale.y)),
        }
    }

    /// The unit square itself; used by charts whose data already lives in `[0, 1]`.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(DataPoint::new(0.0, 0.0), DataPoint::new(1.0, 1.0))
    }

    /// `offset.x` is taken from the first point; callers pass points sorted by `x`.
    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        let Some(first) = points.first() else {
            return Err(ChartError::InvalidInput(
                "cannot normalize an empty point set without bounds".to_owned(),
            ));
        };
        if points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidInput(
                "seed points must be finite".to_owned(),
            ));
        }

        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        let offset = DataPoint::new(first.x, min_y);
        Ok(Self::new(
            offset,
            DataPoint::new(max_x - offset.x, max_y - offset.y),
        ))
    }

    pub fn from_bounds(bounds: Bounds) -> ChartResult<Self> {
        let bounds = bounds.validate()?;
        Ok(Self::new(
            bounds.lower,
            DataPoint::new(bounds.upper.x - bounds.lower.x, bounds.upper.y - bounds.lower.y),
        ))
    }

    /// Upper data-space corner, `offset + scale`.
    #[must_use]
    pub fn upper(self) -> DataPoint {
        DataPoint::new(self.offset.x + self.scale.x, self.offset.y + self.scale.y)
    }

    #[must_use]
    pub fn mid_y(self) -> f64 {
        self.offset.y + self.scale.y / 2.0
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.offset.x && x <= self.upper().x
    }

    #[must_use]
    pub fn clamp_y(self, y: f64) -> f64 {
        y.max(self.offset.y).min(self.upper().y)
    }

    #[must_use]
    pub fn clamp_point(self, point: DataPoint) -> DataPoint {
        let upper = self.upper();
        DataPoint::new(
            point.x.max(self.offset.x).min(upper.x),
            point.y.max(self.offset.y).min(upper.y),
        )
    }

    #[must_use]
    pub fn unit_x(self, x: f64) -> f64 {
        (x - self.offset.x) / self.scale.x
    }

    #[must_use]
    pub fn unit_y(self, y: f64) -> f64 {
        (y - self.offset.y) / self.scale.y
    }

    #[must_use]
    pub fn from_unit_x(self, unit: f64) -> f64 {
        unit * self.scale.x + self.offset.x
    }

    /// Converts a pixel position inside `area` into data space.
    #[must_use]
    pub fn pixel_to_data(self, pixel_x: f64, pixel_y: f64, area: DrawArea) -> DataPoint {
        DataPoint::new(
            (pixel_x - area.left) * self.scale.x / area.width + self.offset.x,
            (area.bottom() - pixel_y) * self.scale.y / area.height + self.offset.y,
        )
    }

    #[must_use]
    pub fn data_to_pixel(self, point: DataPoint, area: DrawArea) -> (f64, f64) {
        (
            self.unit_x(point.x) * area.width + area.left,
            (1.0 - self.unit_y(point.y)) * area.height + area.top,
        )
    }

    /// One horizontal pixel expressed in data units.
    #[must_use]
    pub fn pixel_step_x(self, area: DrawArea) -> f64 {
        self.scale.x / area.width
    }

    /// One pixel of slack in data units along the coarser axis; the default hit radius.
    #[must_use]
    pub fn default_hit_epsilon(self, area: DrawArea) -> f64 {
        self.scale.x.max(self.scale.y) / area.width.min(area.height)
    }
}

fn floor_extent(extent: f64) -> f64 {
    if extent == 0.0 { 1.0 } else { extent }
}
