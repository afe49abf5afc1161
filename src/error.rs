use std::path::PathBuf;

use thiserror::Error;

use crate::TerrainError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error while opening file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Json error: {0}")]
    Json(#[from] json::Error),
    #[error("Invalid settings: {0}")]
    Settings(String),
    #[error("Invalid terrain: {0}")]
    Terrain(#[from] TerrainError),
    #[error("Attempt still in progress after {0} ticks")]
    TickLimit(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
