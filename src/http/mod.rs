//! HTTP server lifecycle.
//!
//! Plain HTTP only; TLS is expected to terminate at the load balancer in front
//! of the service. The server drains in-flight hits on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
