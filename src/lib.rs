//! Stratus - view layer of a self-hosted cloud storage backend
//!
//! Turns loaded account records into the JSON payloads served to the web
//! client: the user profile, the storage quota summary and the tag list.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod hashid;
pub mod models;
pub mod serializer;
pub mod server;
pub mod store;

pub use context::AppContext;
pub use error::{StratusError, StratusResult};
