//! Shared property contracts consumed by the view components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::prelude::*;

/// Inputs of the markdown editor view.
#[derive(Properties, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownappProps {
    /// Current document text, owned by the parent.
    #[prop_or_default]
    pub markdown: String,

    /// Handle to the editor text area; empty until the view is mounted.
    #[prop_or_default]
    #[serde(skip)]
    pub editor_ref: NodeRef,
}

impl MarkdownappProps {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            editor_ref: NodeRef::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastType {
    Success,
    Error,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid toast type '{0}': expected 'success' or 'error'")]
pub struct InvalidToastType(pub String);

impl ToastType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ToastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastType {
    type Err = InvalidToastType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            other => Err(InvalidToastType(other.to_string())),
        }
    }
}

/// Display state of a transient notification.
#[derive(Properties, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toastprops {
    pub is_open: bool,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastType,
}

impl Toastprops {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            is_open: true,
            message: message.into(),
            kind: ToastType::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_open: true,
            message: message.into(),
            kind: ToastType::Error,
        }
    }

    pub fn closed(self) -> Self {
        Self {
            is_open: false,
            ..self
        }
    }
}
