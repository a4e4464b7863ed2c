//! Theme error types

use crate::variant::ThemeVariant;
use std::path::PathBuf;
use thiserror::Error;

/// Theme loading errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Failed to read a theme definition file
    #[error("Failed to read theme definition {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A definition produced no usable entries
    #[error("Theme definition for {variant} contains no colors")]
    Empty { variant: ThemeVariant },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
