//! Folio web server library.
//!
//! Exposes the building blocks (config, state, error handling, router,
//! handlers, views) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;
