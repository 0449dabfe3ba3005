use tracing::{debug, trace};

use crate::core::{GradientStop, Rgb, canonicalize_stops};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::chart_model::{DEFAULT_STOP_COLOR, STOP_HANDLE_HEIGHT};
use super::validation::validate_index;
use super::{ChartRole, InteractionController};

/// Writes routed from tables and pickers.
///
/// These keep the same ordering and anchor rules as pointer gestures and
/// commit once, but do not notify listeners: the caller initiated them.
/// Edits that shift labels end any active drag, whose bounds would be stale.
impl<R: Renderer> InteractionController<R> {
    /// Inserts a point at its sorted position. `false` on duplicate `x` or outside the domain.
    pub fn add_point(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let normalization = self.model.normalization;
        if !normalization.contains_x(x) {
            return Ok(false);
        }
        let y = self.constrain_y(y);
        let index = self.model.sequence.index_for_x(x);
        if !self.model.sequence.add_point(x, y, Some(index)) {
            return Ok(false);
        }
        if self.config.role == ChartRole::GradientStops {
            let index = index.min(self.model.palette.len());
            self.model.palette.insert(
                index,
                GradientStop::new(normalization.unit_x(x), DEFAULT_STOP_COLOR),
            );
        }
        self.cancel_drag("routed add");
        self.model.refresh_ramp();
        self.commit_frame(None)?;
        Ok(true)
    }

    /// Removes the non-anchor point at `index`.
    pub fn remove_point(&mut self, index: usize) -> ChartResult<bool> {
        validate_index(index, self.model.sequence.len())?;
        let Some(point) = self.model.sequence.point(index) else {
            return Ok(false);
        };
        if !self.model.sequence.remove_point(point.x, point.y, Some(index)) {
            return Ok(false);
        }
        if self.config.role == ChartRole::GradientStops && index < self.model.palette.len() {
            self.model.palette.remove(index);
        }
        self.cancel_drag("routed remove");
        self.model.refresh_ramp();
        self.commit_frame(None)?;
        Ok(true)
    }

    /// Sets a point's `x`, held between its neighbours; anchors keep theirs.
    ///
    /// Returns the stored `x`.
    pub fn set_point_x(&mut self, index: usize, x: f64) -> ChartResult<f64> {
        validate_index(index, self.model.sequence.len())?;
        if !x.is_finite() {
            return Err(ChartError::InvalidData("point x must be finite".to_owned()));
        }
        let area = self.renderer.draw_area().validate()?;
        let (left, right) = self.neighbour_bounds(index, area);
        let current = self.model.sequence.values()[index];
        let moved = self
            .model
            .sequence
            .move_to(index, x, current, left, right)
            .ok_or_else(|| ChartError::InvalidData(format!("no point at index {index}")))?;
        if self.config.role == ChartRole::GradientStops {
            let offset = self.model.normalization.unit_x(moved.x);
            if let Some(stop) = self.model.palette.get_mut(index) {
                stop.offset = offset;
            }
        }
        trace!(index, x = moved.x, "routed x edit");
        self.cancel_drag("routed x edit");
        self.model.refresh_ramp();
        self.commit_frame(None)?;
        Ok(moved.x)
    }

    /// Sets a point's `y`, clamped to the domain when the chart enforces it.
    ///
    /// Stop handles stay at their fixed height. Returns the stored `y`.
    pub fn set_point_y(&mut self, index: usize, y: f64) -> ChartResult<f64> {
        validate_index(index, self.model.sequence.len())?;
        if !y.is_finite() {
            return Err(ChartError::InvalidData("point y must be finite".to_owned()));
        }
        let y = match self.config.role {
            ChartRole::GradientStops => STOP_HANDLE_HEIGHT,
            ChartRole::Curve => self.constrain_y(y),
        };
        if !self.model.sequence.set_value(index, y) {
            return Err(ChartError::InvalidData(format!("no point at index {index}")));
        }
        trace!(index, y, "routed y edit");
        self.model.refresh_ramp();
        self.commit_frame(None)?;
        Ok(y)
    }

    /// Recolors palette stop `index`; channels are clamped into 0..=255.
    pub fn set_stop_color(&mut self, index: usize, color: Rgb) -> ChartResult<()> {
        validate_index(index, self.model.palette.len())?;
        self.model.palette[index].color = color.clamped();
        trace!(index, color = %color, "stop recolored");
        self.model.refresh_ramp();
        self.commit_frame(None)
    }

    /// Recolors palette stop `index` from a CSS-style color string.
    pub fn set_stop_color_css(&mut self, index: usize, color: &str) -> ChartResult<()> {
        let color = Rgb::parse_css(color)?;
        self.set_stop_color(index, color)
    }

    /// Replaces the palette this chart draws with.
    ///
    /// For the stop chart the handles are rebuilt one per stop.
    pub fn replace_palette(&mut self, stops: Vec<GradientStop>) -> ChartResult<()> {
        let stops = canonicalize_stops(stops);
        if self.config.role == ChartRole::GradientStops {
            let labels = stops
                .iter()
                .map(|stop| self.model.normalization.from_unit_x(stop.offset))
                .collect();
            self.model
                .sequence
                .replace(labels, vec![STOP_HANDLE_HEIGHT; stops.len()]);
            self.cancel_drag("palette replaced");
        }
        debug!(stops = stops.len(), "palette replaced");
        self.model.palette = stops;
        self.model.refresh_ramp();
        self.commit_frame(None)
    }

    fn cancel_drag(&mut self, reason: &'static str) {
        if let Some(drag) = self.interaction.on_drag_end() {
            debug!(index = drag.index, reason, "active drag cancelled");
        }
    }
}
