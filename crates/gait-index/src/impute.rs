use gait_stats::descriptive::ColumnStats;
use tracing::trace;

use crate::{error::GaitIndexError, table::FeatureTable};

/// Replaces every missing cell with the mean of its column's valid cells.
///
/// Returns the number of cells filled. A column with no valid cell at all
/// has no mean to impute from and fails with
/// [`GaitIndexError::DegenerateColumn`]; the table is left untouched in that
/// case.
pub fn impute_column_means(table: &mut FeatureTable) -> Result<usize, GaitIndexError> {
    let means = table
        .labels()
        .iter()
        .zip(table.data().column_iter())
        .map(|(label, column)| -> Result<f64, GaitIndexError> {
            let stats = ColumnStats::new(column.iter().copied()).ok_or_else(|| {
                GaitIndexError::DegenerateColumn {
                    label: label.clone(),
                }
            })?;
            trace!(column = %label, mean = stats.mean, missing = stats.missing, "imputing");
            Ok(stats.mean)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut filled = 0;
    for (mean, mut column) in means.into_iter().zip(table.data_mut().column_iter_mut()) {
        for cell in column.iter_mut().filter(|v| v.is_nan()) {
            *cell = mean;
            filled += 1;
        }
    }
    Ok(filled)
}
