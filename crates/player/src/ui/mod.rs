//! User-facing layer: presentation models and the console front end.

pub mod console;
pub mod presentation;

pub use console::{render_status, Command, HELP};
pub use presentation::WidgetView;
