//! Caller-facing input model
//!
//! A [`MeasurementSet`] maps column labels to sample series and keeps the
//! labels in insertion order. It can be built from arbitrary labelled series,
//! from the six canonical angle features via [`GaitAngles`], or deserialized
//! from a JSON object whose values are arrays of numbers or `null`.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::{GaitIndexError, InvalidInputReason};

/// The six angle-extrema features extracted per gait cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleFeature {
    RightKneeAngleMin,
    RightKneeAngleMax,
    LeftKneeAngleMin,
    LeftKneeAngleMax,
    TorsoAngleMin,
    TorsoAngleMax,
}

impl AngleFeature {
    pub const ALL: [Self; 6] = [
        Self::RightKneeAngleMin,
        Self::RightKneeAngleMax,
        Self::LeftKneeAngleMin,
        Self::LeftKneeAngleMax,
        Self::TorsoAngleMin,
        Self::TorsoAngleMax,
    ];

    /// Canonical column label of the feature.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RightKneeAngleMin => "right_knee_angle_min",
            Self::RightKneeAngleMax => "right_knee_angle_max",
            Self::LeftKneeAngleMin => "left_knee_angle_min",
            Self::LeftKneeAngleMax => "left_knee_angle_max",
            Self::TorsoAngleMin => "torso_angle_min",
            Self::TorsoAngleMax => "torso_angle_max",
        }
    }
}

impl fmt::Display for AngleFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-cycle angle extrema of one recording, one sample per observed step.
///
/// Series may differ in length. Units are whatever the caller measured in;
/// no conversion is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GaitAngles {
    pub right_knee_angle_min: Vec<f64>,
    pub right_knee_angle_max: Vec<f64>,
    pub left_knee_angle_min: Vec<f64>,
    pub left_knee_angle_max: Vec<f64>,
    pub torso_angle_min: Vec<f64>,
    pub torso_angle_max: Vec<f64>,
}

impl GaitAngles {
    /// Returns the series of the given feature.
    #[must_use]
    pub fn series(&self, feature: AngleFeature) -> &[f64] {
        match feature {
            AngleFeature::RightKneeAngleMin => &self.right_knee_angle_min,
            AngleFeature::RightKneeAngleMax => &self.right_knee_angle_max,
            AngleFeature::LeftKneeAngleMin => &self.left_knee_angle_min,
            AngleFeature::LeftKneeAngleMax => &self.left_knee_angle_max,
            AngleFeature::TorsoAngleMin => &self.torso_angle_min,
            AngleFeature::TorsoAngleMax => &self.torso_angle_max,
        }
    }

    /// Assembles a measurement set using caller-chosen labels, given in
    /// [`AngleFeature::ALL`] order.
    ///
    /// Fails if two labels coincide.
    pub fn labelled<S>(self, labels: [S; 6]) -> Result<MeasurementSet, GaitIndexError>
    where
        S: Into<String>,
    {
        let series = [
            self.right_knee_angle_min,
            self.right_knee_angle_max,
            self.left_knee_angle_min,
            self.left_knee_angle_max,
            self.torso_angle_min,
            self.torso_angle_max,
        ];
        MeasurementSet::from_pairs(labels.into_iter().map(Into::<String>::into).zip(series))
    }
}

impl From<GaitAngles> for MeasurementSet {
    fn from(angles: GaitAngles) -> Self {
        let columns = AngleFeature::ALL
            .into_iter()
            .map(|feature| Column {
                label: feature.as_str().to_owned(),
                samples: angles.series(feature).to_vec(),
            })
            .collect();
        Self { columns }
    }
}

/// One labelled sample series.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    /// Samples in observation order; non-finite values mark missing samples.
    pub samples: Vec<f64>,
}

/// Labelled sample series in insertion order, with unique labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    columns: Vec<Column>,
}

impl MeasurementSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(label, samples)` pairs, keeping their order.
    ///
    /// ```
    /// use gait_index::measurement::MeasurementSet;
    ///
    /// let set = MeasurementSet::from_pairs([
    ///     ("a".to_owned(), vec![1.0, 2.0]),
    ///     ("b".to_owned(), vec![3.0]),
    /// ])
    /// .unwrap();
    /// assert_eq!(set.labels().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self, GaitIndexError>
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        let mut set = Self::new();
        for (label, samples) in pairs {
            set.insert(label, samples)?;
        }
        Ok(set)
    }

    /// Appends a column. Fails if the label is already present.
    pub fn insert<S>(&mut self, label: S, samples: Vec<f64>) -> Result<(), GaitIndexError>
    where
        S: Into<String>,
    {
        let label = label.into();
        if self.get(&label).is_some() {
            return Err(GaitIndexError::invalid_input(
                InvalidInputReason::DuplicateLabel { label },
            ));
        }
        self.columns.push(Column { label, samples });
        Ok(())
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.samples.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.label.as_str())
    }

    /// Rejects an empty set or any column without samples.
    ///
    /// Runs before any numeric work so malformed input never yields a
    /// partial computation.
    pub fn validate(&self) -> Result<(), GaitIndexError> {
        if self.is_empty() {
            return Err(GaitIndexError::invalid_input(InvalidInputReason::EmptySet));
        }
        if let Some(column) = self.columns.iter().find(|c| c.samples.is_empty()) {
            return Err(GaitIndexError::invalid_input(
                InvalidInputReason::EmptyColumn {
                    label: column.label.clone(),
                },
            ));
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for MeasurementSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MeasurementSetVisitor;

        impl<'de> Visitor<'de> for MeasurementSetVisitor {
            type Value = MeasurementSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from column label to an array of numbers or nulls")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = MeasurementSet::new();
                while let Some((label, samples)) =
                    map.next_entry::<String, Option<Vec<Option<f64>>>>()?
                {
                    let Some(samples) = samples else {
                        return Err(de::Error::custom(GaitIndexError::invalid_input(
                            InvalidInputReason::NullColumn { label },
                        )));
                    };
                    let samples = samples
                        .into_iter()
                        .map(|v| v.unwrap_or(f64::NAN))
                        .collect();
                    set.insert(label, samples).map_err(de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(MeasurementSetVisitor)
    }
}
