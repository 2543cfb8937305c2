//! HTTP middleware components.

pub mod access;

pub use access::require_api_token;
