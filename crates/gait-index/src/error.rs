/// Why a measurement set was rejected before any numeric work.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidInputReason {
    #[display("measurement set is empty")]
    EmptySet,
    #[display("column '{label}' has no samples")]
    EmptyColumn { label: String },
    #[display("column '{label}' appears more than once")]
    DuplicateLabel { label: String },
    #[display("column '{label}' is null")]
    NullColumn { label: String },
}

/// Failure of a gait index computation.
///
/// Every failure aborts the whole pipeline; no partial result is produced.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GaitIndexError {
    #[display("invalid input: {reason}")]
    InvalidInput { reason: InvalidInputReason },
    #[display("column '{label}' has no valid values to impute from")]
    DegenerateColumn { label: String },
    #[display("column '{label}' still has missing values")]
    MissingValues { label: String },
    /// A single zero-variance column, or every column when all rows hold
    /// one repeated value.
    #[display("no variance to standardize in column(s) {}", labels.join(", "))]
    ConstantColumn { labels: Vec<String> },
    #[display("at least {required} numeric columns are required, got {available}")]
    InsufficientFeatures { required: usize, available: usize },
    #[display("all rows produce the same gait score ({score})")]
    DegenerateScoreRange { score: f64 },
    #[display("invalid pipeline configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl GaitIndexError {
    pub(crate) fn invalid_input(reason: InvalidInputReason) -> Self {
        Self::InvalidInput { reason }
    }

    /// Returns `true` for failures caused by malformed input or configuration,
    /// as opposed to degenerate statistics of otherwise well-formed data.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::InvalidConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GaitIndexError::invalid_input(InvalidInputReason::EmptyColumn {
            label: "torso_angle_min".to_owned(),
        });
        assert_eq!(
            err.to_string(),
            "invalid input: column 'torso_angle_min' has no samples"
        );

        let err = GaitIndexError::InsufficientFeatures {
            required: 4,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "at least 4 numeric columns are required, got 3"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(GaitIndexError::invalid_input(InvalidInputReason::EmptySet).is_input_error());
        assert!(
            GaitIndexError::InvalidConfig {
                reason: "x".to_owned()
            }
            .is_input_error()
        );
        assert!(
            !GaitIndexError::ConstantColumn {
                labels: vec!["a".to_owned()]
            }
            .is_input_error()
        );
        assert!(!GaitIndexError::DegenerateScoreRange { score: 0.0 }.is_input_error());
        assert!(
            !GaitIndexError::MissingValues {
                label: "a".to_owned()
            }
            .is_input_error()
        );
    }
}
