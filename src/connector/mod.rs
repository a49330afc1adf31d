//! # Connector Layer
//!
//! Adapters for the external collaborators: HTTP clients for the
//! embedding API and the managed vector index, plus in-process
//! stand-ins for tests and local runs.

pub mod adapter;

pub use adapter::*;
