//! Core types for EcoFinds.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod score;

pub use email::{Email, EmailError};
pub use id::*;
pub use score::EcoScore;
