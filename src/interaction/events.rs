use serde::{Deserialize, Serialize};

use crate::core::RampStop;

/// Kind-specific payload of an [`InteractionEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InteractionEventKind {
    PointerDown { index: usize },
    PointerMove { index: usize },
    PointerUp { index: usize, x: f64, y: f64 },
    AddPoint { index: usize, x: f64, y: f64 },
    RemovePoint { index: usize },
}

impl InteractionEventKind {
    /// Index of the point the event refers to.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::PointerDown { index }
            | Self::PointerMove { index }
            | Self::PointerUp { index, .. }
            | Self::AddPoint { index, .. }
            | Self::RemovePoint { index } => index,
        }
    }
}

/// Event delivered to listeners once per handled input, after the mutation.
///
/// Carries a full copy of the chart's arrays and derived ramp so consumers
/// never read a partially updated model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub kind: InteractionEventKind,
    pub labels: Vec<f64>,
    pub values: Vec<f64>,
    pub gradient: Vec<RampStop>,
}
