//! CLI error types.

use xp_cms::CmsError;
use xp_config::ConfigError;
use xp_markdown::LessonError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Cms(#[from] CmsError),

    #[error("{0}")]
    Lesson(#[from] LessonError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Refusing to write outside the output directory: {0}")]
    InvalidPath(String),
}
