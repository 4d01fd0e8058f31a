//! Client for the hosted content provider (PostgREST-style table API).
//!
//! Every read goes through [`query::Select`], which decodes and validates
//! each returned row before handing typed models to callers.

pub mod channel;
pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod repositories;
pub mod schema;

pub use client::{ContentClient, RemoteConfig};
pub use error::RemoteError;

/// Check that the provider answers with the configured key.
pub async fn health_check(client: &ContentClient) -> Result<(), RemoteError> {
    client.ping().await
}
