//! MarkPad: a single-page markdown editor shell with client-side routing.

pub mod app;
pub mod ui;
