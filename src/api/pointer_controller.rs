use tracing::{trace, warn};

use crate::core::{DataPoint, DrawArea, GradientStop, hit_test};
use crate::interaction::{DragState, InteractionEventKind, PointerButton};
use crate::render::Renderer;

use super::chart_model::{DEFAULT_STOP_COLOR, STOP_HANDLE_HEIGHT};
use super::{ChartRole, InteractionController};

impl<R: Renderer> InteractionController<R> {
    /// Handles a button press at pixel `(pixel_x, pixel_y)`.
    ///
    /// Returns the emitted event kind, or `None` when the gesture was a no-op.
    pub fn pointer_down(
        &mut self,
        pixel_x: f64,
        pixel_y: f64,
        button: PointerButton,
    ) -> Option<InteractionEventKind> {
        let area = self.active_area()?;
        let position = self.data_position(pixel_x, pixel_y, area);
        self.pointer_down_at(position, button)
    }

    /// Same as [`Self::pointer_down`] with a data-space position.
    pub fn pointer_down_at(
        &mut self,
        position: DataPoint,
        button: PointerButton,
    ) -> Option<InteractionEventKind> {
        let area = self.active_area()?;
        let position = self.pin_to_role(position);
        self.interaction.on_hover(position);

        let epsilon = self.hit_epsilon(area);
        match (hit_test(&self.model.sequence, position, epsilon), button) {
            (Some(hit), PointerButton::Secondary) => {
                self.interaction.on_drag_end();
                self.remove_hit(hit.index)
            }
            (Some(hit), PointerButton::Primary) => self.start_drag(hit.index, area),
            (None, PointerButton::Primary) => self.add_at(position),
            (None, PointerButton::Secondary) => None,
        }
    }

    /// Handles pointer motion; drags the active point when `Dragging`.
    pub fn pointer_move(&mut self, pixel_x: f64, pixel_y: f64) -> Option<InteractionEventKind> {
        let area = self.active_area()?;
        let position = self.data_position(pixel_x, pixel_y, area);
        self.pointer_move_to(position)
    }

    /// Same as [`Self::pointer_move`] with a data-space position.
    pub fn pointer_move_to(&mut self, position: DataPoint) -> Option<InteractionEventKind> {
        if !self.attached {
            return None;
        }
        let position = self.pin_to_role(position);
        self.interaction.on_hover(position);
        let drag = self.interaction.drag()?;

        let current = self.model.sequence.point(drag.index)?;
        let x = drag.constrain_x(position.x, current.x);
        let y = self.constrain_y(position.y);
        let moved = self.model.sequence.move_to(
            drag.index,
            x,
            y,
            drag.left_bound,
            drag.right_bound,
        )?;
        if self.config.role == ChartRole::GradientStops {
            let offset = self.model.normalization.unit_x(moved.x);
            if let Some(stop) = self.model.palette.get_mut(drag.index) {
                stop.offset = offset;
            }
        }
        trace!(index = drag.index, x = moved.x, y = moved.y, "drag move");

        self.model.refresh_ramp();
        self.commit_in_handler(Some(moved));
        let kind = InteractionEventKind::PointerMove { index: drag.index };
        self.emit(kind);
        Some(kind)
    }

    /// Hover without a pressed button; only updates the cursor read-out.
    pub fn pointer_hover(&mut self, pixel_x: f64, pixel_y: f64) -> Option<DataPoint> {
        let area = self.active_area()?;
        let position = self.pin_to_role(self.data_position(pixel_x, pixel_y, area));
        self.interaction.on_hover(position);
        Some(position)
    }

    /// Ends an active drag and reports the final position.
    pub fn pointer_up(&mut self) -> Option<InteractionEventKind> {
        if !self.attached {
            return None;
        }
        let drag = self.interaction.on_drag_end()?;
        let point = self.model.sequence.point(drag.index)?;
        self.commit_in_handler(None);
        let kind = InteractionEventKind::PointerUp {
            index: drag.index,
            x: point.x,
            y: point.y,
        };
        self.emit(kind);
        Some(kind)
    }

    /// Pointer left the surface: an active drag is committed as if released.
    pub fn pointer_leave(&mut self) -> Option<InteractionEventKind> {
        let kind = self.pointer_up();
        self.interaction.on_pointer_leave();
        kind
    }

    fn active_area(&self) -> Option<DrawArea> {
        if !self.attached {
            return None;
        }
        match self.renderer.draw_area().validate() {
            Ok(area) => Some(area),
            Err(err) => {
                warn!(error = %err, "ignoring pointer input on invalid draw area");
                None
            }
        }
    }

    fn data_position(&self, pixel_x: f64, pixel_y: f64, area: DrawArea) -> DataPoint {
        self.model
            .normalization
            .pixel_to_data(pixel_x, pixel_y, area)
    }

    fn pin_to_role(&self, position: DataPoint) -> DataPoint {
        match self.config.role {
            ChartRole::Curve => position,
            ChartRole::GradientStops => DataPoint::new(position.x, STOP_HANDLE_HEIGHT),
        }
    }

    pub(super) fn constrain_y(&self, y: f64) -> f64 {
        match self.config.role {
            ChartRole::GradientStops => STOP_HANDLE_HEIGHT,
            ChartRole::Curve if self.config.clamp_y_to_domain => {
                self.model.normalization.clamp_y(y)
            }
            ChartRole::Curve => y,
        }
    }

    /// `[prev.x + step, next.x - step]`, domain edges standing in for missing neighbours.
    pub(super) fn neighbour_bounds(&self, index: usize, area: DrawArea) -> (f64, f64) {
        let normalization = self.model.normalization;
        let step = normalization.pixel_step_x(area);
        let labels = self.model.sequence.labels();
        let left = index
            .checked_sub(1)
            .and_then(|prev| labels.get(prev))
            .copied()
            .unwrap_or(normalization.offset.x);
        let right = labels
            .get(index + 1)
            .copied()
            .unwrap_or(normalization.upper().x);
        (left + step, right - step)
    }

    fn start_drag(&mut self, index: usize, area: DrawArea) -> Option<InteractionEventKind> {
        let (left_bound, right_bound) = self.neighbour_bounds(index, area);
        self.interaction.on_drag_start(DragState {
            index,
            left_bound,
            right_bound,
            x_locked: self.model.sequence.is_anchor(index),
        });
        trace!(index, left_bound, right_bound, "drag start");

        let point = self.model.sequence.point(index);
        self.commit_in_handler(point);
        let kind = InteractionEventKind::PointerDown { index };
        self.emit(kind);
        Some(kind)
    }

    fn remove_hit(&mut self, index: usize) -> Option<InteractionEventKind> {
        if self.model.sequence.is_anchor(index) {
            return None;
        }
        let point = self.model.sequence.point(index)?;
        if !self.model.sequence.remove_point(point.x, point.y, Some(index)) {
            return None;
        }
        if self.config.role == ChartRole::GradientStops && index < self.model.palette.len() {
            self.model.palette.remove(index);
        }

        self.model.refresh_ramp();
        self.commit_in_handler(None);
        let kind = InteractionEventKind::RemovePoint { index };
        self.emit(kind);
        Some(kind)
    }

    fn add_at(&mut self, position: DataPoint) -> Option<InteractionEventKind> {
        if !self.model.normalization.contains_x(position.x) {
            return None;
        }
        let y = self.constrain_y(position.y);
        let index = self.model.sequence.index_for_x(position.x);
        if !self.model.sequence.add_point(position.x, y, Some(index)) {
            return None;
        }
        if self.config.role == ChartRole::GradientStops {
            let offset = self.model.normalization.unit_x(position.x);
            let index = index.min(self.model.palette.len());
            self.model
                .palette
                .insert(index, GradientStop::new(offset, DEFAULT_STOP_COLOR));
        }

        self.model.refresh_ramp();
        let added = DataPoint::new(position.x, y);
        self.commit_in_handler(Some(added));
        let kind = InteractionEventKind::AddPoint {
            index,
            x: position.x,
            y,
        };
        self.emit(kind);
        Some(kind)
    }
}
