use std::sync::Arc;

use tracing::warn;

use crate::core::DataPoint;
use crate::error::ChartResult;
use crate::render::{GradientRamp, RenderFrame, Renderer, dashed_guide_line};

use super::InteractionController;

impl<R: Renderer> InteractionController<R> {
    /// Commits the current model to the surface without overlays.
    pub fn redraw(&mut self) -> ChartResult<()> {
        self.commit_frame(None)
    }

    /// Cached drawable ramp for the surface's current draw area.
    pub fn ramp(&mut self) -> ChartResult<Arc<GradientRamp>> {
        let area = self.renderer.draw_area().validate()?;
        Ok(self
            .model
            .ramp_cache
            .get_or_build(area, &self.model.derived))
    }

    pub(super) fn build_frame(&mut self, guide: Option<DataPoint>) -> ChartResult<RenderFrame> {
        let area = self.renderer.draw_area().validate()?;
        let ramp = self
            .model
            .ramp_cache
            .get_or_build(area, &self.model.derived);
        let guide_lines = match guide {
            Some(point) if self.config.show_guide_lines => {
                dashed_guide_line(point, self.model.normalization, area)
            }
            _ => Vec::new(),
        };
        Ok(RenderFrame::new(
            area,
            self.model.sequence.labels().to_vec(),
            self.model.sequence.values().to_vec(),
        )
        .with_ramp(ramp)
        .with_guide_lines(guide_lines))
    }

    pub(super) fn commit_frame(&mut self, guide: Option<DataPoint>) -> ChartResult<()> {
        let frame = self.build_frame(guide)?;
        self.renderer.render(&frame)
    }

    /// Commit from inside an input handler: failures are logged, never propagated.
    pub(super) fn commit_in_handler(&mut self, guide: Option<DataPoint>) {
        if let Err(err) = self.commit_frame(guide) {
            warn!(error = %err, "surface commit failed inside input handler");
        }
    }
}
