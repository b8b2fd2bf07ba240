//! Thin per-entity wrappers over the dairy REST endpoints.
//!
//! DESIGN
//! ======
//! Services are free functions taking the shared [`crate::net::ApiClient`]:
//! reads decode into the typed shapes of [`types`], while create/update
//! accept caller-supplied JSON so form layers stay in charge of their own
//! field sets. Authorization happens underneath in the client; nothing here
//! touches session state.

pub mod cows;
pub mod dashboard;
pub mod lactations;
pub mod milk;
pub mod pregnancies;
pub mod types;
