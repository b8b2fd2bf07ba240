//! HTTP plumbing shared by the auth gateway and the entity services.

pub mod authorizer;
pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
