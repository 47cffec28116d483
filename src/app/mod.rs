//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (props, settings)
//! - `infrastructure/` - External integrations (page, logging, error)
//! - `routes.rs` - The fixed route map
//! - `bootstrap.rs` - Mounts the application, or renders it to a page

pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for convenient external access
pub use bootstrap::{MOUNT_SELECTOR, MountSlot, mount_id};
#[cfg(not(target_arch = "wasm32"))]
pub use bootstrap::render_page;
pub use domain::{AppSettings, MarkdownappProps, ToastType, Toastprops};
pub use infrastructure::error::{AppError, MountError, Result};
pub use routes::Route;
