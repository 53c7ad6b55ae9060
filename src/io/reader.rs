// Delimited numeric input tables.
//
// The pose table holds one row per time sample: elapsed time in column 0,
// then a fixed (x, y, angle) group per body point. The objects table holds
// one circular landmark per row as (center-x, center-y, radius). Positions
// and radii are converted to millimetres on read; angles pass through.

use crate::convert::types::{ArenaObjects, PoseSeries};
use crate::error::{Result, WconError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Length-unit scale factor applied to every position and radius field.
pub const MM_SCALE: f64 = 1e3;

/// Conventional arena objects filename, always read from the working
/// directory.
pub const OBJECTS_FILE: &str = "objects.csv";

/// Parses a delimited table into rows of f64 values.
///
/// Ragged rows are an `InvalidInputShape` error. Non-numeric fields parse
/// as NaN and flow through to the output untouched, like the rest of the
/// pipeline treats non-finite values.
fn read_table<R: Read>(input: R, table: &str) -> Result<Vec<Vec<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                return Err(if matches!(e.kind(), csv::ErrorKind::UnequalLengths { .. }) {
                    WconError::InvalidInputShape(format!("ragged row in {} table: {}", table, e))
                } else {
                    WconError::Csv(e)
                })
            }
        };
        rows.push(
            record
                .iter()
                .map(|field| field.parse::<f64>().unwrap_or(f64::NAN))
                .collect(),
        );
    }
    Ok(rows)
}

/// Reads a pose table: time column followed by (x, y, angle) column groups.
pub fn read_pose_table<R: Read>(input: R) -> Result<PoseSeries> {
    let rows = read_table(input, "pose")?;
    let cols = rows.first().map_or(0, Vec::len);
    if rows.is_empty() || cols < 7 || (cols - 1) % 3 != 0 {
        return Err(WconError::InvalidInputShape(format!(
            "pose table needs 1 time column plus (x, y, angle) groups for at \
             least 2 body points, got {} rows x {} columns",
            rows.len(),
            cols
        )));
    }

    let b = (cols - 1) / 3;
    let column = |offset: usize, scale: f64| -> Vec<Vec<f64>> {
        (0..b)
            .map(|i| rows.iter().map(|row| row[offset + 3 * i] * scale).collect())
            .collect()
    };

    Ok(PoseSeries {
        time: rows.iter().map(|row| row[0]).collect(),
        x: column(1, MM_SCALE),
        y: column(2, MM_SCALE),
        angle: column(3, 1.0),
    })
}

/// Reads the pose table from a file path.
pub fn read_pose_file(path: &Path) -> Result<PoseSeries> {
    read_pose_table(File::open(path)?)
}

/// Reads an objects table of (center-x, center-y, radius) rows.
pub fn read_objects_table<R: Read>(input: R) -> Result<ArenaObjects> {
    let rows = read_table(input, "objects")?;
    if let Some(row) = rows.first() {
        if row.len() != 3 {
            return Err(WconError::InvalidInputShape(format!(
                "objects table rows need exactly 3 columns, got {}",
                row.len()
            )));
        }
    }

    Ok(ArenaObjects {
        x: rows.iter().map(|row| row[0] * MM_SCALE).collect(),
        y: rows.iter().map(|row| row[1] * MM_SCALE).collect(),
        r: rows.iter().map(|row| row[2] * MM_SCALE).collect(),
    })
}

/// Reads the objects table from a file path. A missing file is the fatal
/// `MissingObjectFile` kind, raised before any output exists.
pub fn read_objects_file(path: &Path) -> Result<ArenaObjects> {
    if !path.is_file() {
        return Err(WconError::MissingObjectFile(path.to_path_buf()));
    }
    read_objects_table(File::open(path)?)
}
