mod chart_model;
mod controller;
mod edit_controller;
mod editor_config;
mod listener_registry;
mod pointer_controller;
mod render_coordinator;
mod sync_controller;
mod transfer_function;
mod validation;

pub use chart_model::{ChartModel, DEFAULT_STOP_COLOR, STOP_HANDLE_HEIGHT};
pub use controller::{InteractionController, bind_interaction};
pub use editor_config::{ChartRole, EditorConfig};
pub use sync_controller::merge_sync;
pub use transfer_function::TransferFunctionEditor;
