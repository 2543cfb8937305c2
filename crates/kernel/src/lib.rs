//! Drakkar Kernel Library
//!
//! Content projection and the HTTP shell that serves it. The main entry
//! point for running the server is the `drakkar` binary; the library is
//! exposed for the binary and for integration testing.

pub mod config;
pub mod envelope;
pub mod error;
pub mod middleware;
pub mod projection;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use envelope::NodeView;
pub use error::{AppError, AppResult};
pub use projection::Projector;
pub use state::AppState;
pub use store::{ContentStore, FileUrlGenerator, MemoryStore};
