// Body outline reconstruction.
//
// Rebuilds a closed 2D perimeter polygon from the 1D centerline-plus-angle
// representation: each centerline point is offset by +/- a tapered half-width
// along its angle direction, and the two boundary traces are stitched into a
// single counter-clockwise loop per time sample.

use crate::convert::types::PoseSeries;
use crate::error::Result;

/// Maximum half-width of the body, millimetres.
pub const MAX_HALF_WIDTH: f64 = 40e-3;

/// Stabilizing offset in the taper profile denominator, keeps the acos
/// argument strictly inside [-1, 1] for small segment counts.
const PROFILE_EPS: f64 = 0.2;

/// Perimeter coordinate arrays, body-major like the inputs: 2B rows of N
/// samples each. Row order is the left boundary 0..B followed by the right
/// boundary reversed, so each column is a closed counter-clockwise loop.
#[derive(Debug, Clone)]
pub struct Perimeter {
    pub px: Vec<Vec<f64>>,
    pub py: Vec<Vec<f64>>,
}

/// Tapered half-width profile over `n_points` body points.
///
/// Zero-ish at the extremities, maximal at the midpoint, following an
/// elliptical arc over the normalized body coordinate. Depends only on the
/// body-point count, so it is computed once per run and shared by every
/// time sample.
pub fn width_profile(n_points: usize) -> Vec<f64> {
    let n_seg = (n_points - 1) as f64;
    (0..n_points)
        .map(|i| {
            let u = (i as f64 - n_seg / 2.0) / (n_seg / 2.0 + PROFILE_EPS);
            MAX_HALF_WIDTH * u.acos().sin().abs()
        })
        .collect()
}

/// Reconstructs the closed body outline for every time sample.
///
/// For body point `i` at angle `theta`, the left boundary point is
/// `(x - r_i cos theta, y - r_i sin theta)` and the right boundary point is
/// `(x + r_i cos theta, y + r_i sin theta)`. The emitted loop is the left
/// trace in body order followed by the right trace in reverse body order;
/// reversing only the second half is what makes the loop close without
/// self-crossing and traverse counter-clockwise.
///
/// Pure function of the series; non-finite angles propagate into the output
/// unchanged rather than being rejected here.
pub fn reconstruct_outline(series: &PoseSeries) -> Result<Perimeter> {
    series.validate_shape()?;

    let b = series.body_points();
    let n = series.samples();
    let r = width_profile(b);

    let mut px = vec![vec![0.0; n]; 2 * b];
    let mut py = vec![vec![0.0; n]; 2 * b];

    for i in 0..b {
        for t in 0..n {
            let theta = series.angle[i][t];
            let dx = r[i] * theta.cos();
            let dy = r[i] * theta.sin();
            px[i][t] = series.x[i][t] - dx;
            py[i][t] = series.y[i][t] - dy;
            // Right boundary lands in the mirrored row so each column reads
            // as left 0..B then right B-1..=0.
            px[2 * b - 1 - i][t] = series.x[i][t] + dx;
            py[2 * b - 1 - i][t] = series.y[i][t] + dy;
        }
    }

    Ok(Perimeter { px, py })
}
