/// Descriptive statistics summarizing the members of one bin.
///
/// The variance is the population variance (denominator `count`, not
/// `count - 1`). For an empty input every statistic is NaN and `count` is 0,
/// matching what a numeric reduction over an empty selection yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values.
    pub count: usize,
    /// The arithmetic mean of the values.
    pub mean: f64,
    /// The population variance of the values.
    pub variance: f64,
    /// The population standard deviation of the values.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from values in any order.
    ///
    /// NaN values are not skipped; they propagate into the mean and
    /// the standard deviation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use buckets_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    /// assert_eq!(stats.count, 8);
    /// assert_eq!(stats.mean, 5.0);
    /// assert_eq!(stats.std_dev, 2.0);
    ///
    /// let empty = DescriptiveStats::from_slice(&[]);
    /// assert_eq!(empty.count, 0);
    /// assert!(empty.mean.is_nan());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        Self::from_slice(&values)
    }

    /// Computes descriptive statistics from a slice of values.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self::empty();
        }

        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Self {
            count,
            mean,
            variance,
            std_dev,
        }
    }

    /// Statistics of an empty selection.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
        }
    }

    /// The standard error of the mean, `std_dev / sqrt(count)`.
    ///
    /// NaN when `count` is 0.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn std_error(&self) -> f64 {
        self.std_dev / (self.count as f64).sqrt()
    }
}
