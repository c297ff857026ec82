//! Small JSON API for posts and comments, kept entirely in memory.
//!
//! Each module focuses on a concrete responsibility:
//!
//! - [`model`] defines the stored entities and the request/response payloads.
//! - [`store`] holds every post and comment for the lifetime of the process.
//! - [`extract`] wraps axum's extractors so bad input becomes an [`error::ApiError`].
//! - [`handlers`] implements the five routes on top of the store.
//! - [`server`] wires the router, request tracing, and graceful shutdown.
//! - [`cli`] parses the command-line interface for the binary.
//!
//! Integration tests drive the router in-process and over a real socket.

pub mod cli;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod server;
pub mod store;
