//! Application layer: widget use cases over the outbound ports.

pub mod services;
