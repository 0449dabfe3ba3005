use tracing::debug;

use crate::core::{DataPoint, GradientStop, Rgb};
use crate::error::ChartResult;
use crate::extensions::InteractionListener;
use crate::interaction::{InteractionEventKind, PointerButton};
use crate::render::Renderer;

use super::{EditorConfig, InteractionController, merge_sync};

/// Opacity curve chart linked to a gradient-stop chart.
///
/// The stop chart owns the palette; every stop edit made through this type
/// is pushed into the curve chart so its opacity-weighted ramp follows.
pub struct TransferFunctionEditor<RC: Renderer, RS: Renderer> {
    curve: InteractionController<RC>,
    stops: InteractionController<RS>,
}

impl<RC: Renderer, RS: Renderer> TransferFunctionEditor<RC, RS> {
    pub fn new(
        curve_renderer: RC,
        stop_renderer: RS,
        points: Vec<DataPoint>,
        palette: Vec<GradientStop>,
        curve_config: EditorConfig,
    ) -> ChartResult<Self> {
        let curve = InteractionController::from_seed(
            curve_renderer,
            points,
            palette.clone(),
            curve_config.with_opacity_weighted(true),
        )?;
        let stops = InteractionController::from_seed(
            stop_renderer,
            Vec::new(),
            palette,
            EditorConfig::gradient_stops().with_sync_tolerance(curve_config.sync_tolerance),
        )?;
        Ok(Self { curve, stops })
    }

    #[must_use]
    pub fn curve(&self) -> &InteractionController<RC> {
        &self.curve
    }

    /// Curve edits never touch the palette, so the curve chart is freely accessible.
    pub fn curve_mut(&mut self) -> &mut InteractionController<RC> {
        &mut self.curve
    }

    #[must_use]
    pub fn stops(&self) -> &InteractionController<RS> {
        &self.stops
    }

    #[must_use]
    pub fn palette(&self) -> &[GradientStop] {
        self.stops.model().palette()
    }

    pub fn register_stop_listener(
        &mut self,
        listener: Box<dyn InteractionListener>,
    ) -> ChartResult<()> {
        self.stops.register_listener(listener)
    }

    pub fn stop_pointer_down(
        &mut self,
        pixel_x: f64,
        pixel_y: f64,
        button: PointerButton,
    ) -> ChartResult<Option<InteractionEventKind>> {
        let kind = self.stops.pointer_down(pixel_x, pixel_y, button);
        self.propagate_palette_after(kind)
    }

    pub fn stop_pointer_move(
        &mut self,
        pixel_x: f64,
        pixel_y: f64,
    ) -> ChartResult<Option<InteractionEventKind>> {
        let kind = self.stops.pointer_move(pixel_x, pixel_y);
        self.propagate_palette_after(kind)
    }

    pub fn stop_pointer_up(&mut self) -> ChartResult<Option<InteractionEventKind>> {
        let kind = self.stops.pointer_up();
        self.propagate_palette_after(kind)
    }

    pub fn stop_pointer_leave(&mut self) -> ChartResult<Option<InteractionEventKind>> {
        let kind = self.stops.pointer_leave();
        self.propagate_palette_after(kind)
    }

    /// Picker write: recolors stop `index` in both charts.
    pub fn set_stop_color(&mut self, index: usize, color: Rgb) -> ChartResult<()> {
        self.stops.set_stop_color(index, color)?;
        self.propagate_palette()
    }

    pub fn set_stop_color_css(&mut self, index: usize, color: &str) -> ChartResult<()> {
        self.set_stop_color(index, Rgb::parse_css(color)?)
    }

    /// Table write: moves stop `index` to `offset`.
    pub fn set_stop_offset(&mut self, index: usize, offset: f64) -> ChartResult<f64> {
        let x = self.stops.normalization().from_unit_x(offset);
        let stored = self.stops.set_point_x(index, x)?;
        self.propagate_palette()?;
        Ok(self.stops.normalization().unit_x(stored))
    }

    /// Puts curve samples and stops onto one shared partition.
    pub fn sync(&mut self) -> ChartResult<usize> {
        let tolerance = self.curve.config().sync_tolerance;
        merge_sync(&mut self.curve, &mut self.stops, tolerance)
    }

    fn propagate_palette_after(
        &mut self,
        kind: Option<InteractionEventKind>,
    ) -> ChartResult<Option<InteractionEventKind>> {
        if matches!(
            kind,
            Some(
                InteractionEventKind::PointerMove { .. }
                    | InteractionEventKind::AddPoint { .. }
                    | InteractionEventKind::RemovePoint { .. }
            )
        ) {
            self.propagate_palette()?;
        }
        Ok(kind)
    }

    fn propagate_palette(&mut self) -> ChartResult<()> {
        let palette = self.stops.model().palette().to_vec();
        debug!(stops = palette.len(), "propagating palette to curve chart");
        self.curve.replace_palette(palette)
    }
}
