use std::sync::Arc;

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{DrawArea, RampStop};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One color stop of a built ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampColorStop {
    pub offset: f64,
    pub color: Color,
}

/// Horizontal linear gradient spanning the draw area, ready for a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRamp {
    pub x_start: f64,
    pub x_end: f64,
    pub stops: Vec<RampColorStop>,
}

impl GradientRamp {
    #[must_use]
    pub fn build(area: DrawArea, stops: &[RampStop]) -> Self {
        Self {
            x_start: area.left,
            x_end: area.right(),
            stops: stops
                .iter()
                .map(|stop| RampColorStop {
                    offset: stop.offset,
                    color: Color::from_palette(stop.color, stop.alpha.unwrap_or(1.0)),
                })
                .collect(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x_start.is_finite() || !self.x_end.is_finite() {
            return Err(ChartError::InvalidData(
                "gradient ramp extent must be finite".to_owned(),
            ));
        }
        for stop in &self.stops {
            if !stop.offset.is_finite() {
                return Err(ChartError::InvalidData(
                    "gradient ramp offsets must be finite".to_owned(),
                ));
            }
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Runtime metrics of a [`GradientCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GradientCacheStats {
    pub hits: u64,
    pub misses: u64,
}

type SizeKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Built ramp memoized by draw-area width and height.
///
/// A stop-list change must be signalled with [`GradientCache::invalidate`];
/// otherwise the ramp is rebuilt only when the size key changes.
#[derive(Debug, Default)]
pub struct GradientCache {
    key: Option<SizeKey>,
    ramp: Option<Arc<GradientRamp>>,
    hits: u64,
    misses: u64,
}

impl GradientCache {
    pub fn get_or_build(&mut self, area: DrawArea, stops: &[RampStop]) -> Arc<GradientRamp> {
        let key = (OrderedFloat(area.width), OrderedFloat(area.height));
        if let (Some(cached_key), Some(ramp)) = (self.key, &self.ramp) {
            if cached_key == key {
                self.hits = self.hits.saturating_add(1);
                return Arc::clone(ramp);
            }
        }

        self.misses = self.misses.saturating_add(1);
        trace!(
            width = area.width,
            height = area.height,
            stops = stops.len(),
            "rebuild gradient ramp"
        );
        let ramp = Arc::new(GradientRamp::build(area, stops));
        self.key = Some(key);
        self.ramp = Some(Arc::clone(&ramp));
        ramp
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.ramp = None;
    }

    #[must_use]
    pub fn stats(&self) -> GradientCacheStats {
        GradientCacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }
}
