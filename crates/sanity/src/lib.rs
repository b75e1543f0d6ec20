//! HTTP client for the hosted Sanity content lake.
//!
//! Reads go through the query endpoint (CDN-backed by default); the only
//! write this site ever performs is creating a lead-submission draft.

pub mod client;
pub mod error;
pub mod mutation;
pub mod queries;

pub use client::{SanityClient, SanityConfig};
pub use error::SanityError;
