use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or laying out the shell.
///
/// Rendering the default shell never fails; these only surface from custom
/// breakpoints, templates and configuration files.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid breakpoints: {0}")]
    InvalidBreakpoints(String),

    #[error("invalid grid template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("invalid color `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("invalid nav height {0}")]
    InvalidNavHeight(f32),

    #[error("area `{0}` is not part of the grid template")]
    UnknownArea(String),

    #[error("layout failed: {0}")]
    Layout(#[from] taffy::TaffyError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = ShellError> = std::result::Result<T, E>;
