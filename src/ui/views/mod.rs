//! View components selected by the router, plus the root shells and the
//! toast used by the views.

pub mod error_test;
pub mod markdown_app;
pub mod not_found;
pub mod root;
pub mod toast;

pub use error_test::ErrorTest;
pub use markdown_app::{EditorPage, MarkdownApp};
pub use not_found::NotFound;
pub use root::{App, AppProps, ServerApp, ServerAppProps};
pub use toast::Toast;
