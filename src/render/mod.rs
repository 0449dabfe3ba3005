mod frame;
mod gradient_ramp;
mod guide_lines;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use gradient_ramp::{GradientCache, GradientCacheStats, GradientRamp, RampColorStop};
pub use guide_lines::dashed_guide_line;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive};

use crate::core::DrawArea;
use crate::error::ChartResult;

/// Contract implemented by the host's render surface.
///
/// The surface reports its current drawable rectangle and receives one fully
/// materialized `RenderFrame` per commit, so drawing stays isolated from the
/// editing logic.
pub trait Renderer {
    fn draw_area(&self) -> DrawArea;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
