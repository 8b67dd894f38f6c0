//! API layer: JSON handlers, DTOs, routes and HTTP middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
