//! Rectangular feature table shared by the pipeline stages
//!
//! [`FeatureTable::align`] is the entry into the numeric part of the
//! pipeline: it pads every series to the length of the longest one with
//! `NaN` markers. Shorter series are treated as having fewer valid
//! observations, so padding always goes at the end.

use nalgebra::DMatrix;

use crate::measurement::MeasurementSet;

/// Labelled rows x columns table of samples.
///
/// Column `c` holds the samples of `labels[c]`. Until imputation has run,
/// cells may contain `NaN` markers for missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    labels: Vec<String>,
    data: DMatrix<f64>,
}

impl FeatureTable {
    /// Pads all series of `measurements` to the longest series length.
    ///
    /// Non-finite samples already present in a series are normalized to
    /// `NaN`, so every missing cell carries the same marker.
    ///
    /// ```
    /// use gait_index::{measurement::MeasurementSet, table::FeatureTable};
    ///
    /// let set = MeasurementSet::from_pairs([
    ///     ("a".to_owned(), vec![1.0, 2.0, 3.0]),
    ///     ("b".to_owned(), vec![4.0]),
    /// ])
    /// .unwrap();
    /// let table = FeatureTable::align(&set);
    /// assert_eq!(table.shape(), (3, 2));
    /// assert!(table.data()[(1, 1)].is_nan());
    /// ```
    #[must_use]
    pub fn align(measurements: &MeasurementSet) -> Self {
        let columns = measurements.columns().collect::<Vec<_>>();
        let rows = columns.iter().map(|c| c.samples.len()).max().unwrap_or(0);
        let data = DMatrix::from_fn(rows, columns.len(), |r, c| {
            match columns[c].samples.get(r) {
                Some(v) if v.is_finite() => *v,
                _ => f64::NAN,
            }
        });
        let labels = columns.iter().map(|c| c.label.clone()).collect();
        Self { labels, data }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut DMatrix<f64> {
        &mut self.data
    }

    /// `(rows, columns)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    #[must_use]
    pub fn num_missing(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }
}
