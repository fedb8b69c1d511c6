//! Test doubles for the platform ports.

mod fixtures;

pub use fixtures::{fixed_instant, test_platform, InMemoryStorage, ManualClock};
