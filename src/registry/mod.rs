// ABOUTME: Registry HTTP API access for remote manifest cleanup.
// ABOUTME: Exposes the RegistryClient trait and its reqwest implementation.

mod client;
mod error;
mod http;

pub use client::{DIGEST_HEADER, MANIFEST_LIST_MEDIA_TYPE, RegistryClient};
pub use error::RegistryError;
pub use http::HttpRegistryClient;
