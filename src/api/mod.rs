//! Typed client for the portal's backend REST API.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use client::{PortalApi, PortalClient};
pub use error::ApiError;
pub use types::{AuthResponse, Paginated};
