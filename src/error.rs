// Error kinds for the conversion pipeline.
//
// Fatal kinds (shape mismatches, missing inputs) abort the run before any
// output file is written. A schema violation is only raised after the
// document already exists on disk and never deletes it.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = WconError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum WconError {
    /// Array dimensions disagree between the centerline, angle, and time
    /// inputs, or the input table has an unusable column layout.
    #[error("invalid input shape: {0}")]
    InvalidInputShape(String),

    /// The arena objects table is required and was not found.
    #[error("missing arena objects file: {}", .0.display())]
    MissingObjectFile(PathBuf),

    /// The written document does not conform to the WCON schema.
    #[error("document failed schema validation: {0}")]
    SchemaViolation(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
