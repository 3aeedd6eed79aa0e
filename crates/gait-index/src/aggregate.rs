use nalgebra::DMatrix;

use crate::error::GaitIndexError;

/// Relative tolerance below which the score range counts as empty.
const DEGENERATE_RANGE_TOLERANCE: f64 = 1e-12;

/// Per-row scores and their normalized summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Row-wise sum of the principal component values.
    pub scores: Vec<f64>,
    /// `scores` min-max rescaled into `[0, 1]`.
    pub row_indices: Vec<f64>,
    /// Arithmetic mean of `row_indices`.
    pub gait_index: f64,
}

/// Sums each row of `projected`, rescales the sums into `[0, 1]` and
/// averages them.
///
/// Fails with [`GaitIndexError::DegenerateScoreRange`] when every row yields
/// the same score, since the rescale would divide by zero.
///
/// ```
/// use gait_index::aggregate::aggregate;
/// use nalgebra::DMatrix;
///
/// let projected = DMatrix::from_row_slice(3, 2, &[0.0, 1.0, 2.0, 2.0, -1.0, 0.0]);
/// let result = aggregate(&projected).unwrap();
/// assert_eq!(result.scores, [1.0, 4.0, -1.0]);
/// assert_eq!(result.row_indices, [0.4, 1.0, 0.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn aggregate(projected: &DMatrix<f64>) -> Result<Aggregate, GaitIndexError> {
    let scores = projected.row_iter().map(|row| row.sum()).collect::<Vec<_>>();

    if scores.is_empty() {
        return Err(GaitIndexError::DegenerateScoreRange { score: f64::NAN });
    }
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range <= DEGENERATE_RANGE_TOLERANCE * max.abs().max(min.abs()).max(1.0) {
        return Err(GaitIndexError::DegenerateScoreRange { score: min });
    }

    let row_indices = scores
        .iter()
        .map(|s| ((s - min) / range).clamp(0.0, 1.0))
        .collect::<Vec<_>>();
    let gait_index = row_indices.iter().sum::<f64>() / row_indices.len() as f64;

    Ok(Aggregate {
        scores,
        row_indices,
        gait_index,
    })
}
