use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mount error: {0}")]
    Mount(#[from] MountError),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Failures while attaching the application to its host page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("invalid mount selector '{0}': expected '#<element-id>'")]
    InvalidSelector(String),

    #[error("mount target '{0}' not found in page")]
    TargetNotFound(String),

    #[error("application is already mounted")]
    AlreadyMounted,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
