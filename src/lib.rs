//! # Shubakar Budget Assistant
//!
//! Rule-based event budget estimation service for the Shubakar event platform.
//!
//! Given an event type, a guest count, and an optional total budget, the
//! service returns a per-category allocation of the estimated total over a
//! single JSON endpoint. Every request is a pure computation over a read-only
//! set of estimation rules; there is no model, no persistence, and no
//! per-request state.
//!
//! ## Modules
//! - `api`: HTTP surface (axum router, request/response types)
//! - `config`: environment configuration and rules-file loading
//! - `estimator`: the estimation rules and the allocation computation

pub mod api;
pub mod config;
pub mod estimator;

pub use config::Config;
