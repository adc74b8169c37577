use std::path::PathBuf;
use thiserror::Error;

use crate::state::data::RequiredField;

/// Message shown in the form when any required input is empty
pub const REQUIRED_MESSAGE: &str = "All fields are required.";

/// Errors raised while adding books to a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more required form inputs are empty
    #[error("{}", REQUIRED_MESSAGE)]
    MissingFields(Vec<RequiredField>),

    /// A cover read is already in flight for this catalog
    #[error("A book is already being added, please wait.")]
    CreatePending,

    /// The pending creation this result belongs to is no longer current
    #[error("This book was already added or abandoned.")]
    StaleCreate,

    #[error("Could not read cover image {path}: {source}")]
    CoverRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The selected cover image is empty.")]
    EmptyCover,

    #[error("The selected file is not a supported image.")]
    UnsupportedCover,
}

/// Errors raised while loading the application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
