//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - The hosting page
//! - Logger setup
//! - Error types

pub mod error;
pub mod logging;
pub mod page;
