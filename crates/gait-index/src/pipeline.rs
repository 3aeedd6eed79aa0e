//! Pipeline driver
//!
//! Runs the stages in data-flow order, aborting on the first failure:
//!
//! 1. validate the measurement set
//! 2. align series into a rectangular table
//! 3. impute missing cells with column means
//! 4. standardize columns
//! 5. project onto the leading principal components
//! 6. sum, rescale and average the per-row scores

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::{
    aggregate::{self, Aggregate},
    config::PipelineConfig,
    error::GaitIndexError,
    impute,
    measurement::MeasurementSet,
    reduce::{self, Reduction},
    standardize,
    table::FeatureTable,
};

/// Full outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaitIndexReport {
    /// Mean of `row_indices`, in `[0, 1]`.
    pub gait_index: f64,
    /// Column labels in the order the table was built.
    pub labels: Vec<String>,
    pub rows: usize,
    /// Cells filled by imputation, padding included.
    pub imputed_cells: usize,
    pub explained_variance: Vec<f64>,
    pub explained_variance_ratio: Vec<f64>,
    /// Per-row sum of the principal component values.
    pub scores: Vec<f64>,
    /// Per-row scores rescaled into `[0, 1]`.
    pub row_indices: Vec<f64>,
}

/// Computes the gait index of a measurement set with the default
/// configuration.
///
/// Accepts a [`MeasurementSet`] directly or anything convertible into one,
/// such as [`GaitAngles`](crate::measurement::GaitAngles).
///
/// # Examples
///
/// ```
/// use gait_index::{compute_gait_index, measurement::GaitAngles};
///
/// let angles = GaitAngles {
///     right_knee_angle_min: vec![70.0, 72.0, 68.0, 71.0],
///     right_knee_angle_max: vec![140.0, 138.0, 142.0, 139.0],
///     left_knee_angle_min: vec![69.0, 73.0, 67.0, 70.0],
///     left_knee_angle_max: vec![141.0, 137.0, 143.0, 138.0],
///     torso_angle_min: vec![5.0, 6.0, 4.0, 7.0],
///     torso_angle_max: vec![15.0, 14.0, 16.0, 13.0],
/// };
/// let index = compute_gait_index(angles)?;
/// assert!(index > 0.0 && index < 1.0);
/// # Ok::<(), gait_index::GaitIndexError>(())
/// ```
pub fn compute_gait_index<M>(measurements: M) -> Result<f64, GaitIndexError>
where
    M: Into<MeasurementSet>,
{
    let measurements = measurements.into();
    compute_gait_index_report(&measurements, &PipelineConfig::default())
        .map(|report| report.gait_index)
}

/// Runs the whole pipeline and returns every intermediate summary alongside
/// the gait index.
pub fn compute_gait_index_report(
    measurements: &MeasurementSet,
    config: &PipelineConfig,
) -> Result<GaitIndexReport, GaitIndexError> {
    let _span = debug_span!("gait_index", columns = measurements.len()).entered();

    config.validate()?;
    measurements.validate()?;

    let mut table = FeatureTable::align(measurements);
    let (rows, columns) = table.shape();
    debug!(rows, columns, missing = table.num_missing(), "series aligned");

    let imputed_cells = impute::impute_column_means(&mut table)?;
    debug!(imputed_cells, "missing cells imputed");

    standardize::standardize(&mut table, config.constant_column_policy)?;

    let Reduction {
        projected,
        explained_variance,
        explained_variance_ratio,
    } = reduce::reduce(&table, config.num_components)?;

    let Aggregate {
        scores,
        row_indices,
        gait_index,
    } = aggregate::aggregate(&projected)?;
    debug!(gait_index, "gait index computed");

    Ok(GaitIndexReport {
        gait_index,
        labels: table.labels().to_vec(),
        rows,
        imputed_cells,
        explained_variance,
        explained_variance_ratio,
        scores,
        row_indices,
    })
}
