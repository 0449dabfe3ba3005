//! Consumers of editor events live here.
//!
//! Tables, color pickers and coordinate read-outs observe the chart through
//! listeners and route every write back through the controller.

pub mod listeners;

pub use listeners::{FnListener, InteractionListener};
