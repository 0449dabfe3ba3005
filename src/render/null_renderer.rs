use crate::core::DrawArea;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless render surface used by tests and hosts without a backend.
///
/// It still validates every committed frame so invariant breaks surface as
/// errors instead of silently drawing garbage.
#[derive(Debug)]
pub struct NullRenderer {
    pub draw_area: DrawArea,
    pub commit_count: usize,
    pub last_point_count: usize,
    pub last_ramp_stop_count: usize,
    pub last_guide_line_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn new(draw_area: DrawArea) -> Self {
        Self {
            draw_area,
            commit_count: 0,
            last_point_count: 0,
            last_ramp_stop_count: 0,
            last_guide_line_count: 0,
        }
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new(DrawArea::sized(800.0, 600.0))
    }
}

impl Renderer for NullRenderer {
    fn draw_area(&self) -> DrawArea {
        self.draw_area
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.commit_count += 1;
        self.last_point_count = frame.labels.len();
        self.last_ramp_stop_count = frame.ramp.as_ref().map_or(0, |ramp| ramp.stops.len());
        self.last_guide_line_count = frame.guide_lines.len();
        Ok(())
    }
}
