//! Equal-population binning
//!
//! Samples are sorted by `x` and cut into contiguous windows holding a fixed
//! number of samples. Each window yields the mean `x` (the bin center), the
//! mean and population standard deviation of `y`, and the standard error of
//! the mean of `y`.
//!
//! Unlike [`bin_x`](crate::fixed_center::bin_x), no NaN filtering is done: a
//! NaN in a window propagates into that window's statistics. NaN `x` values
//! sort after every other value.
//!
//! # Window Layouts
//!
//! [`WindowLayout::Contiguous`] is the default. Windows start at
//! `0, n, 2n, ...` and the last window runs to the end of the data, so every
//! sample belongs to exactly one window and each window holds between `n` and
//! `2n - 1` samples.
//!
//! [`WindowLayout::Legacy`] reproduces an older index construction that
//! produces one window fewer than there are multiples of `n` (rounded up), and
//! whose non-final windows hold only `n - 1` samples:
//!
//! ```text
//! len = 6, n = 2
//! Contiguous: [0, 2) [2, 4) [4, 6)
//! Legacy:     [0, 1) [2, 6)
//! ```
//!
//! # Examples
//!
//! ```
//! use buckets_stats::equal_population::bin_n;
//!
//! let x = [6.0, 1.0, 4.0, 3.0, 5.0, 2.0];
//! let y = [60.0, 10.0, 40.0, 30.0, 50.0, 20.0];
//! let bins = bin_n(&x, &y, 2).unwrap();
//!
//! assert_eq!(bins.centers, [1.5, 3.5, 5.5]);
//! assert_eq!(bins.means, [15.0, 35.0, 55.0]);
//! assert_eq!(bins.counts, [2, 2, 2]);
//! ```

use std::ops::Range;

use serde::Serialize;

use crate::{
    coerce::{ArrayLike, standard_array},
    descriptive::DescriptiveStats,
    error::{self, BinError},
};

/// Index arithmetic used to cut sorted samples into windows.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum WindowLayout {
    /// Windows of `n` samples; the last window absorbs the remainder.
    #[default]
    #[display("contiguous")]
    Contiguous,
    /// The original off-by-one window arithmetic, kept for reproducing old results.
    #[display("legacy")]
    Legacy,
}

/// Per-window statistics of samples sorted by `x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EqualPopulationBins {
    /// Layout the windows were built with.
    pub layout: WindowLayout,
    /// Index range of each window into the `x`-sorted samples.
    pub windows: Vec<Range<usize>>,
    /// Mean of `x` in each window.
    pub centers: Vec<f64>,
    /// Mean of `y` in each window.
    pub means: Vec<f64>,
    /// Population standard deviation of `y` in each window.
    pub std_devs: Vec<f64>,
    /// Standard error of the mean of `y` in each window.
    pub std_errors: Vec<f64>,
    /// Number of samples in each window.
    pub counts: Vec<usize>,
}

impl EqualPopulationBins {
    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if there are no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Splits the result into `(centers, means, std_devs, std_errors)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.centers, self.means, self.std_devs, self.std_errors)
    }
}

/// Computes the index windows for `len` sorted samples and population `n`.
///
/// # Errors
///
/// Returns [`BinError::ZeroPopulation`] if `n` is 0, and
/// [`BinError::PopulationTooLarge`] if `n` exceeds `len`
/// ([`WindowLayout::Contiguous`]) or is not smaller than `len`
/// ([`WindowLayout::Legacy`]).
///
/// # Examples
///
/// ```
/// # use buckets_stats::equal_population::{windows, WindowLayout};
/// let contiguous = windows(7, 2, WindowLayout::Contiguous).unwrap();
/// assert_eq!(contiguous, [0..2, 2..4, 4..7]);
///
/// let legacy = windows(7, 2, WindowLayout::Legacy).unwrap();
/// assert_eq!(legacy, [0..1, 2..3, 4..7]);
/// ```
pub fn windows(
    len: usize,
    n: usize,
    layout: WindowLayout,
) -> Result<Vec<Range<usize>>, BinError> {
    if n == 0 {
        return Err(BinError::ZeroPopulation);
    }
    let too_large = BinError::PopulationTooLarge { n, len, layout };

    let ranges = match layout {
        WindowLayout::Contiguous => {
            if n > len {
                return Err(too_large);
            }
            let count = len / n;
            (0..count)
                .map(|i| {
                    let start = i * n;
                    let end = if i + 1 == count { len } else { start + n };
                    start..end
                })
                .collect()
        }
        WindowLayout::Legacy => {
            // starts 0, n, ..., (k-1)n; ends start-1 shifted by one window
            let k = len.div_ceil(n);
            if k < 2 {
                return Err(too_large);
            }
            let count = k - 1;
            (0..count)
                .map(|i| {
                    let start = i * n;
                    let end = if i + 1 == count { len } else { start + n - 1 };
                    start..end
                })
                .collect()
        }
    };
    Ok(ranges)
}

/// Bins `y` by `x` into windows of `n` samples each.
///
/// Equivalent to [`bin_n_with_layout`] with [`WindowLayout::Contiguous`].
///
/// # Errors
///
/// Returns an error if `x` and `y` differ in length, if `n` is 0, or if `n`
/// exceeds the number of samples.
pub fn bin_n<'x, 'y, X, Y>(x: X, y: Y, n: usize) -> Result<EqualPopulationBins, BinError>
where
    X: Into<ArrayLike<'x>>,
    Y: Into<ArrayLike<'y>>,
{
    bin_n_with_layout(x, y, n, WindowLayout::Contiguous)
}

/// Bins `y` by `x` into windows of `n` samples each, using the given layout.
///
/// # Errors
///
/// Returns an error if `x` and `y` differ in length, or if `n` is invalid for
/// the layout (see [`windows`]).
pub fn bin_n_with_layout<'x, 'y, X, Y>(
    x: X,
    y: Y,
    n: usize,
    layout: WindowLayout,
) -> Result<EqualPopulationBins, BinError>
where
    X: Into<ArrayLike<'x>>,
    Y: Into<ArrayLike<'y>>,
{
    let x = standard_array(x);
    let y = standard_array(y);
    error::check_paired_len(&x, &y)?;
    let windows = windows(x.len(), n, layout)?;

    let mut order = (0..x.len()).collect::<Vec<_>>();
    // NaN goes last whatever its sign bit
    order.sort_by(|&a, &b| {
        x[a].is_nan()
            .cmp(&x[b].is_nan())
            .then_with(|| x[a].total_cmp(&x[b]))
    });
    let sorted_x = order.iter().map(|&i| x[i]).collect::<Vec<_>>();
    let sorted_y = order.iter().map(|&i| y[i]).collect::<Vec<_>>();

    let mut bins = EqualPopulationBins {
        layout,
        centers: Vec::with_capacity(windows.len()),
        means: Vec::with_capacity(windows.len()),
        std_devs: Vec::with_capacity(windows.len()),
        std_errors: Vec::with_capacity(windows.len()),
        counts: Vec::with_capacity(windows.len()),
        windows: Vec::new(),
    };
    for window in &windows {
        let x_stats = DescriptiveStats::from_slice(&sorted_x[window.clone()]);
        let y_stats = DescriptiveStats::from_slice(&sorted_y[window.clone()]);
        bins.centers.push(x_stats.mean);
        bins.means.push(y_stats.mean);
        bins.std_devs.push(y_stats.std_dev);
        bins.std_errors.push(y_stats.std_error());
        bins.counts.push(y_stats.count);
    }
    bins.windows = windows;

    Ok(bins)
}
