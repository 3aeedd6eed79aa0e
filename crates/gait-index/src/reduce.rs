use gait_stats::pca::PrincipalComponents;
use nalgebra::DMatrix;
use tracing::debug;

use crate::{error::GaitIndexError, table::FeatureTable};

/// Principal component projection of a standardized table.
#[derive(Debug, Clone)]
pub struct Reduction {
    /// Projected values, rows x components, components in descending
    /// explained-variance order.
    pub projected: DMatrix<f64>,
    pub explained_variance: Vec<f64>,
    pub explained_variance_ratio: Vec<f64>,
}

/// Projects the table onto its `num_components` leading principal axes.
///
/// Fails with [`GaitIndexError::InsufficientFeatures`] if the table has
/// fewer columns than requested components. Fewer rows than components is
/// allowed; the surplus components then carry no variance.
///
/// Axis signs follow the convention documented in
/// [`gait_stats::pca`], so the projection is deterministic.
pub fn reduce(table: &FeatureTable, num_components: usize) -> Result<Reduction, GaitIndexError> {
    let (_, available) = table.shape();
    if available < num_components {
        return Err(GaitIndexError::InsufficientFeatures {
            required: num_components,
            available,
        });
    }

    let pca = PrincipalComponents::fit(table.data(), num_components).ok_or_else(|| {
        GaitIndexError::InvalidConfig {
            reason: format!("cannot fit {num_components} components to a {available}-column table"),
        }
    })?;
    let projected = pca.transform(table.data());
    let explained_variance_ratio = pca.explained_variance_ratio();
    debug!(
        explained_variance = ?pca.explained_variance(),
        ratio = ?explained_variance_ratio,
        "principal components fitted"
    );

    Ok(Reduction {
        projected,
        explained_variance: pca.explained_variance().to_vec(),
        explained_variance_ratio,
    })
}
