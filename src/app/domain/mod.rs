//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Shared component property contracts
//! - Application settings

pub mod props;
pub mod settings;

pub use props::{InvalidToastType, MarkdownappProps, ToastType, Toastprops};
pub use settings::AppSettings;
