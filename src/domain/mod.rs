//! # Domain Layer
//!
//! Core models and the pure analysis functions that turn raw component
//! source text into a structured profile. This layer is independent of
//! external frameworks and infrastructure.

pub mod analysis;
pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
