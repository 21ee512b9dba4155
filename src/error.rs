//! Error types for the build pipeline
//!
//! Every failure names the path it concerns. The pipeline returns these to
//! the caller; formatting and exit codes are the CLI's business.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the pipeline
pub type Result<T, E = SlateError> = std::result::Result<T, E>;

/// Top-level build error, tagged by the stage that failed
#[derive(Error, Debug)]
pub enum SlateError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Something the build needs before it can start is missing
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("Missing {}/ directory. {hint}", .path.display())]
    MissingDirectory { path: PathBuf, hint: &'static str },

    #[error("Missing template {}", .path.display())]
    MissingTemplate { path: PathBuf },
}

/// Reading or converting an input failed
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error reading {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error converting {} to HTML", .path.display())]
    Markdown {
        path: PathBuf,
        #[source]
        source: std::fmt::Error,
    },

    #[error("Error parsing template {}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },
}

/// Writing an output file failed
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Error creating directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating {}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error rendering {} with template {template}", .path.display())]
    Template {
        template: String,
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("Error copying {} to {}", .from.display(), .to.display())]
    CopyAsset {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
