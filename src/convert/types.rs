// Core data structures shared across the conversion pipeline.
//
// Pose arrays are held body-major: row `b` carries body point `b` across all
// time samples. The document assembler transposes to time-major on emission.

use crate::error::{Result, WconError};
use serde::{Deserialize, Serialize};

/// A tracked centerline pose series.
///
/// `x`, `y`, and `angle` all have shape B rows x N columns, where B is the
/// number of body points and N the number of time samples (`time.len()`).
#[derive(Debug, Clone)]
pub struct PoseSeries {
    /// Elapsed time per sample, seconds.
    pub time: Vec<f64>,
    /// Centerline x positions, millimetres.
    pub x: Vec<Vec<f64>>,
    /// Centerline y positions, millimetres.
    pub y: Vec<Vec<f64>>,
    /// Per-body-point heading angle, radians.
    pub angle: Vec<Vec<f64>>,
}

impl PoseSeries {
    /// Number of body points (B).
    pub fn body_points(&self) -> usize {
        self.x.len()
    }

    /// Number of time samples (N).
    pub fn samples(&self) -> usize {
        self.time.len()
    }

    /// Checks the shape agreement preconditions: x, y, and angle arrays have
    /// identical B x N shape, every row spans the full time array, and there
    /// are at least two body points.
    pub fn validate_shape(&self) -> Result<()> {
        let b = self.x.len();
        if b < 2 {
            return Err(WconError::InvalidInputShape(format!(
                "need at least 2 body points, got {}",
                b
            )));
        }
        if self.y.len() != b || self.angle.len() != b {
            return Err(WconError::InvalidInputShape(format!(
                "body-point counts disagree: x={}, y={}, angle={}",
                b,
                self.y.len(),
                self.angle.len()
            )));
        }
        let n = self.time.len();
        for (name, rows) in [("x", &self.x), ("y", &self.y), ("angle", &self.angle)] {
            for (i, row) in rows.iter().enumerate() {
                if row.len() != n {
                    return Err(WconError::InvalidInputShape(format!(
                        "{} row {} has {} samples, time array has {}",
                        name,
                        i,
                        row.len(),
                        n
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Fixed circular landmarks in the arena, stored column-wise to match the
/// emitted `circles` block. All values in millimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaObjects {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub r: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(b: usize, n: usize) -> PoseSeries {
        PoseSeries {
            time: vec![0.0; n],
            x: vec![vec![0.0; n]; b],
            y: vec![vec![0.0; n]; b],
            angle: vec![vec![0.0; n]; b],
        }
    }

    #[test]
    fn test_validate_shape_accepts_consistent_series() {
        assert!(series(5, 3).validate_shape().is_ok());
    }

    #[test]
    fn test_validate_shape_rejects_single_body_point() {
        let err = series(1, 3).validate_shape().unwrap_err();
        assert!(matches!(err, WconError::InvalidInputShape(_)));
    }

    #[test]
    fn test_validate_shape_rejects_mismatched_arrays() {
        // 1. y has fewer body points than x
        let mut s = series(4, 2);
        s.y.pop();
        assert!(matches!(
            s.validate_shape().unwrap_err(),
            WconError::InvalidInputShape(_)
        ));

        // 2. one angle row shorter than the time array
        let mut s = series(4, 2);
        s.angle[2].pop();
        assert!(matches!(
            s.validate_shape().unwrap_err(),
            WconError::InvalidInputShape(_)
        ));
    }
}
