mod events;

pub use events::{InteractionEvent, InteractionEventKind};

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    /// Selects, drags or adds points.
    Primary,
    /// Context button; removes the point under the pointer.
    Secondary,
}

/// Active drag bound to one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub index: usize,
    pub left_bound: f64,
    pub right_bound: f64,
    /// Anchors keep their `x`; only `y` follows the pointer.
    pub x_locked: bool,
}

impl DragState {
    /// Holds `x` between the neighbours, or returns `anchor_x` when locked.
    #[must_use]
    pub fn constrain_x(self, x: f64, anchor_x: f64) -> f64 {
        if self.x_locked {
            anchor_x
        } else {
            x.max(self.left_bound).min(self.right_bound)
        }
    }
}

/// Pointer state machine record: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    drag: Option<DragState>,
    cursor: Option<DataPoint>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            drag: None,
            cursor: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn drag(self) -> Option<DragState> {
        self.drag
    }

    /// Last data-space pointer position seen by hover/move handlers.
    #[must_use]
    pub fn cursor(self) -> Option<DataPoint> {
        self.cursor
    }

    pub fn on_hover(&mut self, cursor: DataPoint) {
        self.cursor = Some(cursor);
    }

    pub fn on_drag_start(&mut self, drag: DragState) {
        self.mode = InteractionMode::Dragging;
        self.drag = Some(drag);
    }

    /// Leaves `Dragging` and returns the drag that was active, if any.
    pub fn on_drag_end(&mut self) -> Option<DragState> {
        self.mode = InteractionMode::Idle;
        self.drag.take()
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
    }
}
