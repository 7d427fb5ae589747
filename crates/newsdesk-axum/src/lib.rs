//! Axum web adapter for newsdesk.
//!
//! Exposes the news, comment and auth services over HTTP as JSON page
//! contexts. Routing, authentication extraction and error mapping live
//! here; all business rules stay in `newsdesk-core`.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{create_router, paths};
pub use state::AppState;
