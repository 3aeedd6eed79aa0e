use gait_stats::descriptive::ColumnStats;
use tracing::{trace, warn};

use crate::{config::ConstantColumnPolicy, error::GaitIndexError, table::FeatureTable};

/// Z-score normalizes every column of a fully imputed table in place.
///
/// Each cell `x` becomes `(x - mean) / std_dev` using the column's population
/// statistics. Two situations leave nothing to standardize:
///
/// - a column with zero variance
/// - a multi-column table in which every row repeats a single value across
///   all columns, so that all columns carry the same signal
///
/// Both are handled per `policy`: either the call fails with
/// [`GaitIndexError::ConstantColumn`] before any cell is modified, or the
/// affected columns are set to all zeros.
///
/// A table that still has missing cells is rejected with
/// [`GaitIndexError::MissingValues`]; run [`crate::impute`] first.
pub fn standardize(
    table: &mut FeatureTable,
    policy: ConstantColumnPolicy,
) -> Result<(), GaitIndexError> {
    let unimputed = table
        .labels()
        .iter()
        .zip(table.data().column_iter())
        .find(|(_, column)| column.iter().any(|v| v.is_nan()));
    if let Some((label, _)) = unimputed {
        return Err(GaitIndexError::MissingValues {
            label: label.clone(),
        });
    }

    let mut column_stats = Vec::with_capacity(table.labels().len());
    for (label, column) in table.labels().iter().zip(table.data().column_iter()) {
        // Every cell is finite here, so only a zero-row table yields `None`.
        let Some(stats) = ColumnStats::new(column.iter().copied()) else {
            return Err(GaitIndexError::DegenerateColumn {
                label: label.clone(),
            });
        };
        trace!(column = %label, mean = stats.mean, std_dev = stats.std_dev, "standardizing");
        if stats.is_constant() {
            reject_or_warn(policy, std::slice::from_ref(label))?;
            column_stats.push(None);
        } else {
            column_stats.push(Some(stats));
        }
    }

    if has_uniform_rows(table) {
        reject_or_warn(policy, table.labels())?;
        column_stats.fill(None);
    }

    for (stats, mut column) in column_stats
        .into_iter()
        .zip(table.data_mut().column_iter_mut())
    {
        match stats {
            Some(stats) => column.apply(|v| *v = stats.z_score(*v)),
            None => column.fill(0.0),
        }
    }
    Ok(())
}

fn reject_or_warn(policy: ConstantColumnPolicy, labels: &[String]) -> Result<(), GaitIndexError> {
    match policy {
        ConstantColumnPolicy::Fail => Err(GaitIndexError::ConstantColumn {
            labels: labels.to_vec(),
        }),
        ConstantColumnPolicy::Zero => {
            warn!(columns = ?labels, "constant data standardized to zero");
            Ok(())
        }
    }
}

fn has_uniform_rows(table: &FeatureTable) -> bool {
    let (rows, columns) = table.shape();
    rows > 0
        && columns > 1
        && table
            .data()
            .row_iter()
            .all(|row| ColumnStats::new(row.iter().copied()).is_some_and(|s| s.is_constant()))
}
