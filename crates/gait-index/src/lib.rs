//! Gait index computation from joint-angle extrema
//!
//! This crate reduces per-cycle knee and torso angle minima/maxima to a
//! single unit-less score in `[0, 1]`.
//!
//! # Overview
//!
//! The computation is one linear pass over an in-memory table:
//!
//! 1. **Validate** ([`measurement::MeasurementSet::validate`]): reject empty input
//! 2. **Align** ([`table::FeatureTable::align`]): pad ragged series with missing markers
//! 3. **Impute** ([`impute::impute_column_means`]): fill missing cells with column means
//! 4. **Standardize** ([`standardize::standardize`]): z-score every column
//! 5. **Reduce** ([`reduce::reduce`]): project onto the leading principal components
//! 6. **Aggregate** ([`aggregate::aggregate`]): sum components per row, min-max
//!    rescale, and average
//!
//! Degenerate data (an all-missing column, a zero-variance column, identical
//! row scores) is reported as a typed [`GaitIndexError`] instead of leaking
//! `NaN` into the result.
//!
//! The computation holds no state between calls and can run concurrently
//! from any number of threads.
//!
//! # Examples
//!
//! ## Six named series
//!
//! ```
//! use gait_index::{compute_gait_index, measurement::GaitAngles};
//!
//! let angles = GaitAngles {
//!     right_knee_angle_min: vec![70.0, 72.0, 68.0, 71.0],
//!     right_knee_angle_max: vec![140.0, 138.0, 142.0, 139.0],
//!     left_knee_angle_min: vec![69.0, 73.0, 67.0, 70.0],
//!     left_knee_angle_max: vec![141.0, 137.0, 143.0, 138.0],
//!     torso_angle_min: vec![5.0, 6.0, 4.0, 7.0],
//!     torso_angle_max: vec![15.0, 14.0, 16.0],
//! };
//! let index = compute_gait_index(angles)?;
//! assert!((0.0..=1.0).contains(&index));
//! # Ok::<(), gait_index::GaitIndexError>(())
//! ```
//!
//! ## Labelled series with a custom configuration
//!
//! ```
//! use gait_index::{
//!     compute_gait_index_report,
//!     config::{ConstantColumnPolicy, PipelineConfig},
//!     measurement::MeasurementSet,
//! };
//!
//! let set: MeasurementSet = serde_json::from_str(r#"{
//!     "rk_min": [70, 72, 68, 71],
//!     "rk_max": [140, 138, 142, 139],
//!     "lk_min": [69, 73, 67, 70],
//!     "lk_max": [141, 137, 143, 138],
//!     "t_min": [5, 5, 5, 5],
//!     "t_max": [15, 14, 16, 13]
//! }"#)?;
//! let config = PipelineConfig {
//!     constant_column_policy: ConstantColumnPolicy::Zero,
//!     ..PipelineConfig::default()
//! };
//! let report = compute_gait_index_report(&set, &config)?;
//! println!("gait index {:.3}", report.gait_index);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::{GaitIndexError, InvalidInputReason},
    pipeline::{GaitIndexReport, compute_gait_index, compute_gait_index_report},
};

pub mod aggregate;
pub mod config;
pub mod error;
pub mod impute;
pub mod measurement;
pub mod pipeline;
pub mod reduce;
pub mod standardize;
pub mod table;
