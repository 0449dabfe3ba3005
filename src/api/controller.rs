use indexmap::IndexMap;
use tracing::debug;

use crate::core::{DataPoint, DrawArea, GradientStop, Normalization, PointSequence};
use crate::error::ChartResult;
use crate::extensions::InteractionListener;
use crate::interaction::{InteractionMode, InteractionState};
use crate::render::Renderer;

use super::validation::validate_editor_config;
use super::{ChartModel, ChartRole, EditorConfig};

/// Binds one render surface to one chart model.
///
/// The controller is the only writer of its model: pointer handlers and
/// routed table/picker edits mutate synchronously, commit one frame, then
/// notify listeners with a consistent snapshot.
pub struct InteractionController<R: Renderer> {
    pub(super) renderer: R,
    pub(super) model: ChartModel,
    pub(super) config: EditorConfig,
    pub(super) interaction: InteractionState,
    pub(super) listeners: IndexMap<String, Box<dyn InteractionListener>>,
    pub(super) attached: bool,
}

/// Binds pointer handling for a point sequence to a render surface.
///
/// `on_event` is registered as the first listener. Detaching the returned
/// controller drops every listener and makes pointer handlers no-ops.
pub fn bind_interaction<R, L>(
    surface: R,
    sequence: PointSequence,
    normalization: Normalization,
    options: EditorConfig,
    on_event: L,
) -> ChartResult<InteractionController<R>>
where
    R: Renderer,
    L: InteractionListener + 'static,
{
    let model = ChartModel::new(
        sequence,
        normalization,
        Vec::new(),
        options.gradient_mode(),
    );
    let mut controller = InteractionController::new(surface, model, options)?;
    controller.register_listener(Box::new(on_event))?;
    Ok(controller)
}

impl<R: Renderer> InteractionController<R> {
    pub fn new(renderer: R, model: ChartModel, config: EditorConfig) -> ChartResult<Self> {
        let config = validate_editor_config(config)?;
        renderer.draw_area().validate()?;
        debug!(
            role = ?config.role,
            points = model.sequence.len(),
            opacity_weighted = config.opacity_weighted,
            "interaction bound"
        );
        Ok(Self {
            renderer,
            model,
            config,
            interaction: InteractionState::default(),
            listeners: IndexMap::new(),
            attached: true,
        })
    }

    /// Convenience constructor building the model from seed data per `config.role`.
    pub fn from_seed(
        renderer: R,
        points: Vec<DataPoint>,
        palette: Vec<GradientStop>,
        config: EditorConfig,
    ) -> ChartResult<Self> {
        let model = ChartModel::for_role(points, palette, config)?;
        Self::new(renderer, model, config)
    }

    #[must_use]
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    #[must_use]
    pub fn sequence(&self) -> &PointSequence {
        &self.model.sequence
    }

    #[must_use]
    pub fn normalization(&self) -> Normalization {
        self.model.normalization
    }

    #[must_use]
    pub fn config(&self) -> EditorConfig {
        self.config
    }

    #[must_use]
    pub fn role(&self) -> ChartRole {
        self.config.role
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Last data-space pointer position, for coordinate read-outs.
    #[must_use]
    pub fn cursor(&self) -> Option<DataPoint> {
        self.interaction.cursor()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Removes every listener and stops reacting to pointer input.
    pub fn detach(&mut self) {
        self.attached = false;
        self.interaction.on_drag_end();
        self.interaction.on_pointer_leave();
        self.listeners.clear();
        debug!("interaction detached");
    }

    /// Hit radius in data units for the current draw area.
    #[must_use]
    pub fn hit_epsilon(&self, area: DrawArea) -> f64 {
        if let Some(epsilon) = self.config.epsilon {
            return epsilon;
        }
        match self.config.role {
            ChartRole::Curve => self.model.normalization.default_hit_epsilon(area),
            ChartRole::GradientStops => 0.1 / area.width,
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
