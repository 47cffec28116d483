//! UI layer - the view components.

pub mod views;
