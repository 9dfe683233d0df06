//! HTTP API for the budget assistant.
//!
//! ## Endpoints
//!
//! - `GET /` - Liveness banner
//! - `GET /health` - Health check
//! - `POST /predict-budget` - Estimate a budget breakdown for an event

mod routes;
pub mod types;

pub use routes::serve;
pub use types::*;
