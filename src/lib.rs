//! Minimal Rust demo API showcasing CI/CD and DevOps best practices.
//!
//! The service exposes four read-only JSON endpoints plus interactive
//! API documentation:
//!
//! ```text
//! GET /             app info (version, features, endpoints, tech stack)
//! GET /health       health check with process uptime
//! GET /api/status   service status with toolchain and platform info
//! GET /api/metrics  uptime metrics with placeholder measurements
//! GET /docs         Swagger UI
//! GET /redoc        Redoc
//! ```
//!
//! Unknown paths fall back to a 404 body listing the known endpoints.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP router, handlers, and OpenAPI document
//! - [`metrics`]: Request counters and latency histograms
//! - [`runtime`]: Toolchain and platform introspection
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod runtime;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
