//! transfer-rs: editing core for opacity transfer curves and color gradients.
//!
//! The crate keeps the algorithmic parts (normalization, sorted point
//! maintenance, hit testing, pointer state machine, gradient derivation and
//! merge-sync) separate from drawing: hosts implement [`render::Renderer`]
//! and observe edits through [`extensions::InteractionListener`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{EditorConfig, InteractionController, TransferFunctionEditor, bind_interaction, merge_sync};
pub use error::{ChartError, ChartResult};
