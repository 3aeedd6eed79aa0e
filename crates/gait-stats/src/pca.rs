//! Principal component analysis on dense column-oriented data.
//!
//! Rows are observations, columns are features. The fit computes the sample
//! covariance matrix of the columns and its symmetric eigen-decomposition,
//! keeping the leading eigenvectors in order of descending eigenvalue.
//!
//! # Sign convention
//!
//! An eigenvector is only defined up to sign. To make projections
//! reproducible, every retained axis is oriented by the data it was fitted
//! on: the observation with the largest absolute projected score must score
//! positive. Scores within a relative [`SIGN_TIE_TOLERANCE`] of the largest
//! are ties, resolved in favour of the earliest observation.
//!
//! The rule only looks at observations, never at feature positions, so
//! reordering the columns of the input yields the same projection.

use nalgebra::{DMatrix, DVector, SymmetricEigen};

/// Relative tolerance under which two projected scores count as equally
/// large when choosing an axis orientation.
pub const SIGN_TIE_TOLERANCE: f64 = 1e-9;

/// A fitted principal component basis.
///
/// # Examples
///
/// ```
/// use gait_stats::pca::PrincipalComponents;
/// use nalgebra::DMatrix;
///
/// // Two perfectly correlated features: all variance lies on one axis.
/// let data = DMatrix::from_row_slice(4, 2, &[
///     1.0, 2.0,
///     2.0, 4.0,
///     3.0, 6.0,
///     4.0, 8.0,
/// ]);
/// let pca = PrincipalComponents::fit(&data, 2).unwrap();
/// let ratio = pca.explained_variance_ratio();
/// assert!((ratio[0] - 1.0).abs() < 1e-9);
/// assert!(ratio[1].abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct PrincipalComponents {
    /// Per-feature mean used for centering.
    mean: DVector<f64>,
    /// Loading vectors, one column per retained component (features x components).
    components: DMatrix<f64>,
    /// Variance captured by each retained component, descending.
    explained_variance: Vec<f64>,
    /// Sum of the variances of all features.
    total_variance: f64,
}

impl PrincipalComponents {
    /// Fits `num_components` principal axes to `data`.
    ///
    /// # Returns
    ///
    /// * `Some(PrincipalComponents)` - if `data` has at least one row and
    ///   `1 <= num_components <= data.ncols()`
    /// * `None` - otherwise
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fit(data: &DMatrix<f64>, num_components: usize) -> Option<Self> {
        let (rows, cols) = data.shape();
        if rows == 0 || num_components == 0 || num_components > cols {
            return None;
        }

        let mean = DVector::from_fn(cols, |c, _| data.column(c).mean());
        let centered = center(data, &mean);
        let denominator = rows.saturating_sub(1).max(1) as f64;
        let covariance = (centered.transpose() * &centered) / denominator;

        let eigen = SymmetricEigen::new(covariance);
        let mut order = (0..cols).collect::<Vec<_>>();
        order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));

        let mut components = DMatrix::zeros(cols, num_components);
        let mut explained_variance = Vec::with_capacity(num_components);
        for (k, &idx) in order.iter().take(num_components).enumerate() {
            let mut axis = eigen.eigenvectors.column(idx).into_owned();
            orient(&mut axis, &centered);
            components.set_column(k, &axis);
            // Round-off can push eigenvalues of a singular covariance below zero.
            explained_variance.push(eigen.eigenvalues[idx].max(0.0));
        }

        let total_variance = covariance_trace(&centered, denominator);

        Some(Self {
            mean,
            components,
            explained_variance,
            total_variance,
        })
    }

    /// Number of retained components.
    #[must_use]
    pub fn num_components(&self) -> usize {
        self.components.ncols()
    }

    /// Loading vectors as columns (features x components).
    #[must_use]
    pub fn components(&self) -> &DMatrix<f64> {
        &self.components
    }

    /// Variance captured by each retained component, in descending order.
    #[must_use]
    pub fn explained_variance(&self) -> &[f64] {
        &self.explained_variance
    }

    /// Fraction of the total variance captured by each retained component.
    ///
    /// All ratios are zero when the data has no variance at all.
    #[must_use]
    pub fn explained_variance_ratio(&self) -> Vec<f64> {
        if self.total_variance <= 0.0 {
            return vec![0.0; self.explained_variance.len()];
        }
        self.explained_variance
            .iter()
            .map(|v| v / self.total_variance)
            .collect()
    }

    /// Projects `data` onto the retained axes (rows x components).
    ///
    /// # Panics
    ///
    /// Panics if `data` does not have the same number of columns as the data
    /// the basis was fitted on.
    #[must_use]
    pub fn transform(&self, data: &DMatrix<f64>) -> DMatrix<f64> {
        assert_eq!(
            data.ncols(),
            self.mean.len(),
            "feature count must match the fitted data"
        );
        center(data, &self.mean) * &self.components
    }
}

fn center(data: &DMatrix<f64>, mean: &DVector<f64>) -> DMatrix<f64> {
    let mut centered = data.clone();
    for (c, mut column) in centered.column_iter_mut().enumerate() {
        column.add_scalar_mut(-mean[c]);
    }
    centered
}

fn covariance_trace(centered: &DMatrix<f64>, denominator: f64) -> f64 {
    centered.iter().map(|v| v * v).sum::<f64>() / denominator
}

fn orient(axis: &mut DVector<f64>, centered: &DMatrix<f64>) {
    let scores = centered * &*axis;
    let peak = scores.amax();
    let threshold = peak - peak * SIGN_TIE_TOLERANCE;
    let pivot = scores.iter().copied().find(|s| s.abs() >= threshold);
    if pivot.is_some_and(|s| s < 0.0) {
        axis.neg_mut();
    }
}
