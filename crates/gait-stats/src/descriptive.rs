/// Descriptive statistics of one data column.
///
/// Non-finite values (`NaN`, `±∞`) are treated as missing observations: they
/// are counted in [`missing`](Self::missing) but excluded from every other
/// measure.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    /// Number of finite values in the column.
    pub count: usize,
    /// Number of missing (non-finite) values in the column.
    pub missing: usize,
    /// The minimum finite value.
    pub min: f64,
    /// The maximum finite value.
    pub max: f64,
    /// The arithmetic mean of the finite values.
    pub mean: f64,
    /// The population variance (divided by `count`).
    pub variance: f64,
    /// The population standard deviation.
    pub std_dev: f64,
}

impl ColumnStats {
    /// Relative tolerance below which a standard deviation counts as zero.
    pub const ZERO_SPREAD_TOLERANCE: f64 = 1e-12;

    /// Computes statistics over the finite values of a column.
    ///
    /// # Returns
    ///
    /// * `Some(ColumnStats)` - if the column contains at least one finite value
    /// * `None` - if the column is empty or every value is missing
    ///
    /// # Examples
    ///
    /// ```
    /// # use gait_stats::descriptive::ColumnStats;
    /// let stats = ColumnStats::new([2.0, f64::NAN, 4.0, 6.0]).unwrap();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.missing, 1);
    /// assert_eq!(stats.mean, 4.0);
    /// assert_eq!(stats.min, 2.0);
    /// assert_eq!(stats.max, 6.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut missing = 0;
        let finite = values
            .into_iter()
            .filter(|v| {
                let keep = v.is_finite();
                if !keep {
                    missing += 1;
                }
                keep
            })
            .collect::<Vec<_>>();

        let count = finite.len();
        if count == 0 {
            return None;
        }

        let n = count as f64;
        let mean = finite.iter().sum::<f64>() / n;
        let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let min = finite.iter().copied().min_by(f64::total_cmp)?;
        let max = finite.iter().copied().max_by(f64::total_cmp)?;

        Some(Self {
            count,
            missing,
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// Returns `true` if the column has (numerically) no spread.
    ///
    /// The tolerance is relative to the magnitude of the mean so that
    /// large-valued columns with round-off noise are still detected.
    ///
    /// ```
    /// # use gait_stats::descriptive::ColumnStats;
    /// assert!(ColumnStats::new([10.0, 10.0, 10.0]).unwrap().is_constant());
    /// assert!(!ColumnStats::new([10.0, 11.0, 10.0]).unwrap().is_constant());
    /// ```
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.std_dev <= Self::ZERO_SPREAD_TOLERANCE * self.mean.abs().max(1.0)
    }

    /// The z-score of `value` under this column's mean and standard deviation.
    #[must_use]
    pub fn z_score(&self, value: f64) -> f64 {
        (value - self.mean) / self.std_dev
    }
}
