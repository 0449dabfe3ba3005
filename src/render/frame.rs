use std::sync::Arc;

use crate::core::DrawArea;
use crate::error::{ChartError, ChartResult};
use crate::render::{GradientRamp, LinePrimitive};

/// Backend-agnostic description of one committed chart state.
///
/// Labels and values are the chart's parallel arrays; the ramp is the cached
/// drawable gradient and guide lines are optional overlay annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub draw_area: DrawArea,
    pub labels: Vec<f64>,
    pub values: Vec<f64>,
    pub ramp: Option<Arc<GradientRamp>>,
    pub guide_lines: Vec<LinePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(draw_area: DrawArea, labels: Vec<f64>, values: Vec<f64>) -> Self {
        Self {
            draw_area,
            labels,
            values,
            ramp: None,
            guide_lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_ramp(mut self, ramp: Arc<GradientRamp>) -> Self {
        self.ramp = Some(ramp);
        self
    }

    #[must_use]
    pub fn with_guide_lines(mut self, lines: Vec<LinePrimitive>) -> Self {
        self.guide_lines.extend(lines);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.draw_area.validate()?;
        if self.labels.len() != self.values.len() {
            return Err(ChartError::InvalidData(format!(
                "label/value length mismatch: {} labels, {} values",
                self.labels.len(),
                self.values.len()
            )));
        }
        if self.labels.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ChartError::InvalidData(
                "labels must be strictly ascending".to_owned(),
            ));
        }
        if let Some(ramp) = &self.ramp {
            ramp.validate()?;
        }
        for line in &self.guide_lines {
            line.validate()?;
        }
        Ok(())
    }
}
