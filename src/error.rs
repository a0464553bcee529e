use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::spatial::{CellCoord, TileId};

/// Errors surfaced while setting up the engine.
///
/// Everything here happens before the render loop starts. The render path
/// itself has no recoverable failures.
#[derive(Debug)]
pub enum EngineError {
    /// File I/O error
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// JSON parse error
    Json {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },
    /// Unsupported file format (non-JSON)
    UnsupportedFormat(PathBuf),
    /// A configuration value is out of its allowed domain
    InvalidConfig(String),
    /// Two tile definitions share the same id
    DuplicateTile(TileId),
    /// A world cell references a tile the catalog does not define
    UnknownTile {
        /// Cell holding the reference
        cell: CellCoord,
        /// Referenced id
        id: TileId,
    },
    /// A tile image could not be loaded or decoded
    MissingAsset {
        /// Tile that needed the image
        id: TileId,
        /// Image path that failed
        path: PathBuf,
        /// Reason reported by the image provider
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            EngineError::Json { path, source } => {
                write!(f, "JSON parse error in {}: {}", path.display(), source)
            }
            EngineError::UnsupportedFormat(path) => {
                write!(f, "Unsupported file format: {}", path.display())
            }
            EngineError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            EngineError::DuplicateTile(id) => write!(f, "Tile {} is defined twice", id.0),
            EngineError::UnknownTile { cell, id } => write!(
                f,
                "Cell ({}, {}) references unknown tile {}",
                cell.row, cell.col, id.0
            ),
            EngineError::MissingAsset { id, path, reason } => write!(
                f,
                "Failed to load image {} for tile {}: {}",
                path.display(),
                id.0,
                reason
            ),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io { source, .. } => Some(source),
            EngineError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
