//! Entities - objects with a stable identity

mod task;

pub use task::Task;
