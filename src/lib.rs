//! # efarm-client
//!
//! Rust client for the eFarm dairy-farm management API. Carries the
//! authentication flow (login, logout, registration, token verification),
//! a durable token store with role-flag session state, navigation guards,
//! and typed wrappers for the dairy entity endpoints (cows, milk records,
//! pregnancies, lactations) plus the admin dashboard aggregates.
//!
//! ARCHITECTURE
//! ============
//! Session state is an explicit, injected [`session::SessionContext`] rather
//! than ambient global state: the [`auth::AuthGateway`] is its sole writer,
//! guards read it, and the request authorizer reads only the token. Every
//! outgoing request goes through [`net::ApiClient`], which attaches the
//! stored token as an `Authorization: Token <value>` header when present.
//!
//! Server-side authorization remains the boundary of record; client-side
//! gating exists to keep the UI honest, not to enforce security.

pub mod auth;
pub mod config;
pub mod guards;
pub mod net;
pub mod services;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
