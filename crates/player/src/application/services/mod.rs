//! Application services
//!
//! Use cases for the widget. Services depend on port traits and the
//! [`Platform`](crate::state::Platform) container, never on concrete adapters.

pub mod persistence_service;
pub mod save_scheduler;
pub mod tick_driver;
pub mod widget_controller;
pub mod widget_service;

pub use persistence_service::PersistenceGateway;
pub use save_scheduler::DeferredSave;
pub use tick_driver::TickDriver;
pub use widget_controller::WidgetController;
pub use widget_service::{SharedWidgetService, WidgetService};
