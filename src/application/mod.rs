//! # Application Layer
//!
//! Capability interfaces for the external collaborators and the use
//! cases that orchestrate ingestion and retrieval.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
