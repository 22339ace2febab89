//! Error types for outline loading and beamer rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an outline or rendering it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed outline at \"{title}\": expected layer {expected}, found {found}")]
    MalformedTree {
        title: String,
        expected: usize,
        found: usize,
    },

    #[error("Failed to load outline {path}: {reason}")]
    OutlineLoad { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
