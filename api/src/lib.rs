//! HTTP layer for the OTP relay.
//!
//! Exposes the actix-web application factory plus the DTOs and handlers
//! that translate between HTTP and the domain services in `relay_core`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
