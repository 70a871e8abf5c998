//! Web layer for the home-time service.
//!
//! Exposes the lookup as a single JSON endpoint, suitable for running as a
//! serverless HTTP function.

mod dto;
mod routes;
mod state;

pub use dto::ErrorResponse;
pub use routes::{AppError, create_router};
pub use state::AppState;
