use crate::core::{DataPoint, DrawArea, Normalization};
use crate::render::{Color, LinePrimitive};

const GUIDE_TOP_GAP_PX: f64 = 5.0;
const GUIDE_DASHES_PER_HEIGHT: f64 = 50.0;

/// Dashed vertical guide from just under `point` down to the draw-area bottom.
#[must_use]
pub fn dashed_guide_line(
    point: DataPoint,
    normalization: Normalization,
    area: DrawArea,
) -> Vec<LinePrimitive> {
    let (x, point_y) = normalization.data_to_pixel(point, area);
    let dash = area.height / GUIDE_DASHES_PER_HEIGHT;
    if !x.is_finite() || !point_y.is_finite() || dash <= 0.0 {
        return Vec::new();
    }

    let bottom = area.bottom();
    let mut y = (point_y + GUIDE_TOP_GAP_PX).max(area.top);
    let mut dashes = Vec::new();
    while y < bottom {
        dashes.push(LinePrimitive::new(
            x,
            y,
            x,
            (y + dash).min(bottom),
            1.0,
            Color::BLACK,
        ));
        y += dash * 2.0;
    }
    dashes
}
