//! docdb-example: a hit counter backed by a MongoDB-compatible document database.
//!
//! Every request to `/` resolves a connection string (directly from the
//! environment or from AWS Secrets Manager), connects to the database,
//! atomically increments a counter document and returns the new value together
//! with the build version.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod secrets;
pub mod settings;
pub mod state;
pub mod store;
pub mod version;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
