//! Middleware applied to the HTTP surface.

pub mod tracing;
