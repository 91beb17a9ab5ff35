//! Web API module for bucketsort.
//!
//! A small JSON API over the image library, consumed by the drag-and-drop
//! browser client.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
