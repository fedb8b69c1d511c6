//! Real Life RPG player crate.
//!
//! Application services, platform adapters and the console front end around
//! the `rlrpg-domain` progression rules.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use application::services::{PersistenceGateway, WidgetController, WidgetService};
pub use config::PlayerConfig;
pub use state::Platform;
