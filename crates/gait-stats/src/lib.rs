//! Numeric building blocks for the gait index pipeline.
//!
//! This crate provides the statistics and linear algebra the pipeline needs,
//! without any knowledge of gait measurements:
//!
//! - **Descriptive statistics**: NaN-aware mean, variance and range of a column
//! - **Principal component analysis**: covariance eigen-decomposition with a
//!   deterministic sign convention
//!
//! # Modules
//!
//! - [`descriptive`]: Column statistics that skip missing values
//! - [`pca`]: Principal component fitting and projection
//!
//! # Examples
//!
//! ## Computing column statistics
//!
//! ```
//! use gait_stats::descriptive::ColumnStats;
//!
//! let stats = ColumnStats::new([1.0, 2.0, f64::NAN, 3.0]).unwrap();
//! assert_eq!(stats.mean, 2.0);
//! assert_eq!(stats.missing, 1);
//! ```
//!
//! ## Projecting onto principal components
//!
//! ```
//! use gait_stats::pca::PrincipalComponents;
//! use nalgebra::DMatrix;
//!
//! let data = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, -1.0, -1.0]);
//! let pca = PrincipalComponents::fit(&data, 1).unwrap();
//! let projected = pca.transform(&data);
//! assert_eq!(projected.shape(), (3, 1));
//! ```

pub mod descriptive;
pub mod pca;
