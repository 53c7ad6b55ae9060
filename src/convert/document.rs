// WCON exchange document assembly.
//
// Struct definitions mirror the emitted JSON layout one-to-one; the
// assembler is a single-pass transform from complete inputs to a complete
// document value. Serialization itself lives in io::writer.

use crate::convert::outline::Perimeter;
use crate::convert::types::{ArenaObjects, PoseSeries};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Producer name recorded in metadata and used as the extension block key.
pub const PRODUCER: &str = "wcon-export";

/// WCON timestamps carry an explicit +00:00 offset at second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub who: String,
    pub timestamp: String,
    pub protocol: String,
}

/// Physical unit label per quantity key in the data block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Units {
    pub t: String,
    pub x: String,
    pub y: String,
    pub px: String,
    pub py: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectSet {
    pub circles: ArenaObjects,
}

/// Producer extension block holding the arena landmarks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaBlock {
    pub objects: ObjectSet,
}

/// One tracked entity. All coordinate arrays are time-major: one inner
/// sequence per time sample. `ptail` marks where the reversed right-side
/// half of each 2B-point perimeter loop begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub t: Vec<f64>,
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub px: Vec<Vec<f64>>,
    pub py: Vec<Vec<f64>>,
    pub ptail: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WconDocument {
    pub metadata: Metadata,
    pub units: Units,
    pub comment: String,
    pub note: String,
    #[serde(rename = "@wcon-export")]
    pub arena: ArenaBlock,
    pub data: Vec<TrackRecord>,
}

/// Body-major B x N rows to time-major N x B rows.
fn transpose(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = rows.first().map_or(0, Vec::len);
    (0..n)
        .map(|t| rows.iter().map(|row| row[t]).collect())
        .collect()
}

/// Builds the complete exchange document from the pose series, its
/// reconstructed perimeter, and the arena object set.
///
/// `source_name` is the originating input identifier recorded in the note
/// line; `track_id` names the single emitted record. The generation instant
/// is injected so callers pass `Utc::now()` and tests pin a fixed time.
pub fn assemble(
    series: &PoseSeries,
    perimeter: &Perimeter,
    objects: &ArenaObjects,
    source_name: &str,
    track_id: &str,
    generated_at: DateTime<Utc>,
) -> WconDocument {
    let num_steps = series.samples();

    WconDocument {
        metadata: Metadata {
            who: PRODUCER.to_string(),
            timestamp: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            protocol: format!("Generated by {}", PRODUCER),
        },
        units: Units {
            t: "s".to_string(),
            x: "mm".to_string(),
            y: "mm".to_string(),
            px: "mm".to_string(),
            py: "mm".to_string(),
        },
        comment: "Saved from tracked centerline pose data.".to_string(),
        note: format!(
            "Loaded: {} points from {}, saving {} frames",
            num_steps, source_name, num_steps
        ),
        arena: ArenaBlock {
            objects: ObjectSet {
                circles: objects.clone(),
            },
        },
        data: vec![TrackRecord {
            id: track_id.to_string(),
            t: series.time.clone(),
            x: transpose(&series.x),
            y: transpose(&series.y),
            px: transpose(&perimeter.px),
            py: transpose(&perimeter.py),
            ptail: series.body_points(),
        }],
    }
}
