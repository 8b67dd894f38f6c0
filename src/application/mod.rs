//! Application layer: service orchestration over the domain contracts.

pub mod services;
