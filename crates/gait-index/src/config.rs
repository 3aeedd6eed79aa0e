use serde::{Deserialize, Serialize};

use crate::error::GaitIndexError;

/// How standardization treats a column with zero variance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantColumnPolicy {
    /// Abort with [`GaitIndexError::ConstantColumn`].
    #[default]
    Fail,
    /// Standardize every cell of the column to `0.0`.
    Zero,
}

/// Tunable parameters of the gait index pipeline.
///
/// Missing fields take their defaults when deserializing, so `{}` is a valid
/// configuration.
///
/// ```
/// use gait_index::config::{ConstantColumnPolicy, PipelineConfig};
///
/// let config: PipelineConfig = serde_json::from_str(r#"{"constant_column_policy": "zero"}"#)?;
/// assert_eq!(config.num_components, 4);
/// assert_eq!(config.constant_column_policy, ConstantColumnPolicy::Zero);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Number of principal components summed into the per-row score.
    pub num_components: usize,
    pub constant_column_policy: ConstantColumnPolicy,
}

impl PipelineConfig {
    pub const DEFAULT_NUM_COMPONENTS: usize = 4;

    pub fn validate(&self) -> Result<(), GaitIndexError> {
        if self.num_components == 0 {
            return Err(GaitIndexError::InvalidConfig {
                reason: "num_components must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_components: Self::DEFAULT_NUM_COMPONENTS,
            constant_column_policy: ConstantColumnPolicy::default(),
        }
    }
}
