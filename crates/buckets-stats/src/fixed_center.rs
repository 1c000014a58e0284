//! Binning around caller-supplied bin centers
//!
//! Given bin centers `gx`, the bin edges are placed at the midpoints between
//! consecutive centers. The outermost edges are extrapolated by half of the
//! adjacent gap, so the first and last bins are symmetric around their
//! centers:
//!
//! ```text
//! centers:    1       2       4
//! edges:   0.5  1.5     3       5
//! bins:    [ 1 )[  2  )[   4   )
//! ```
//!
//! # Boundary Convention
//!
//! Bins are half-open, `[low, high)`. A sample lying exactly on an interior
//! edge belongs to the bin above it. A sample below the first edge, or at or
//! above the last edge, belongs to no bin.
//!
//! # Missing Values
//!
//! Sample pairs where either `x` or `y` is NaN are discarded before binning.
//!
//! # Examples
//!
//! ```
//! use buckets_stats::fixed_center::bin_x;
//!
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let y = [10.0, 20.0, 30.0, 40.0];
//! let bins = bin_x(&x, &y, &[1.0, 2.0, 3.0, 4.0]).unwrap();
//!
//! assert_eq!(bins.edges, [0.5, 1.5, 2.5, 3.5, 4.5]);
//! assert_eq!(bins.means, [10.0, 20.0, 30.0, 40.0]);
//! assert_eq!(bins.std_devs, [0.0, 0.0, 0.0, 0.0]);
//! assert_eq!(bins.counts, [1, 1, 1, 1]);
//! ```

use std::cmp::Ordering;

use serde::Serialize;

use crate::{
    coerce::{ArrayLike, standard_array},
    descriptive::DescriptiveStats,
    error::{self, BinError},
};

/// Per-bin statistics of `y` for bins centered on the requested centers.
///
/// `means`, `std_devs` and `counts` are aligned with the bin centers: entry
/// `i` describes the bin around `gx[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedCenterBins {
    /// Bin edges; one more than the number of bins.
    pub edges: Vec<f64>,
    /// Mean of `y` in each bin (NaN for an empty bin).
    pub means: Vec<f64>,
    /// Population standard deviation of `y` in each bin (NaN for an empty bin).
    pub std_devs: Vec<f64>,
    /// Number of samples in each bin.
    pub counts: Vec<usize>,
    /// Number of sample pairs discarded because `x` or `y` was NaN.
    pub missing: usize,
    /// Number of retained samples that fell outside every bin.
    pub out_of_range: usize,
}

impl FixedCenterBins {
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

    /// Splits the result into `(means, std_devs, counts)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<usize>) {
        (self.means, self.std_devs, self.counts)
    }
}

/// Computes the bin edges for the given bin centers.
///
/// The result has `centers.len() + 1` entries.
///
/// # Errors
///
/// Returns an error if fewer than two centers are given or if the centers are
/// not strictly increasing.
///
/// # Examples
///
/// ```
/// # use buckets_stats::fixed_center::bin_edges;
/// let edges = bin_edges(&[1.0, 2.0, 4.0]).unwrap();
/// assert_eq!(edges, [0.5, 1.5, 3.0, 5.0]);
/// ```
pub fn bin_edges(centers: &[f64]) -> Result<Vec<f64>, BinError> {
    check_centers(centers)?;

    let first_gap = centers[1] - centers[0];
    let last_gap = centers[centers.len() - 1] - centers[centers.len() - 2];

    let mut edges = Vec::with_capacity(centers.len() + 1);
    edges.push(centers[0] - first_gap / 2.0);
    edges.extend(centers.windows(2).map(|w| w[0] + (w[1] - w[0]) / 2.0));
    edges.push(centers[centers.len() - 1] + last_gap / 2.0);
    Ok(edges)
}

fn check_centers(centers: &[f64]) -> Result<(), BinError> {
    if centers.len() < 2 {
        return Err(BinError::TooFewCenters { len: centers.len() });
    }
    // NaN compares as unordered and is rejected here too
    if let Some(index) = centers
        .windows(2)
        .position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less))
    {
        return Err(BinError::CentersNotIncreasing { index: index + 1 });
    }
    Ok(())
}

/// Returns the index of the bin `value` falls into.
///
/// With `edges` sorted in ascending order, the result `i` satisfies
/// `edges[i - 1] <= value < edges[i]`. Values below `edges[0]` map to `0` and
/// values at or above the last edge map to `edges.len()`. NaN maps to
/// `edges.len()`.
///
/// # Examples
///
/// ```
/// # use buckets_stats::fixed_center::digitize;
/// let edges = [0.0, 1.0, 2.0];
/// assert_eq!(digitize(-0.5, &edges), 0);
/// assert_eq!(digitize(0.0, &edges), 1);
/// assert_eq!(digitize(1.0, &edges), 2);
/// assert_eq!(digitize(2.0, &edges), 3);
/// ```
#[must_use]
pub fn digitize(value: f64, edges: &[f64]) -> usize {
    if value.is_nan() {
        return edges.len();
    }
    edges.partition_point(|edge| *edge <= value)
}

/// Bins `y` by `x` into bins centered on `centers`.
///
/// See the [module documentation](self) for the edge construction and the
/// boundary convention.
///
/// # Errors
///
/// Returns an error if `x` and `y` differ in length, or if `centers` has
/// fewer than two entries or is not strictly increasing.
pub fn bin_x<'x, 'y, 'c, X, Y, C>(x: X, y: Y, centers: C) -> Result<FixedCenterBins, BinError>
where
    X: Into<ArrayLike<'x>>,
    Y: Into<ArrayLike<'y>>,
    C: Into<ArrayLike<'c>>,
{
    let x = standard_array(x);
    let y = standard_array(y);
    let centers = standard_array(centers);

    error::check_paired_len(&x, &y)?;
    let edges = bin_edges(&centers)?;

    let num_bins = centers.len();
    let mut members = vec![Vec::new(); num_bins];
    let mut missing = 0;
    let mut out_of_range = 0;
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        if xv.is_nan() || yv.is_nan() {
            missing += 1;
            continue;
        }
        let bin = digitize(xv, &edges);
        if (1..=num_bins).contains(&bin) {
            members[bin - 1].push(yv);
        } else {
            out_of_range += 1;
        }
    }

    let stats = members
        .iter()
        .map(|values| DescriptiveStats::from_slice(values))
        .collect::<Vec<_>>();

    Ok(FixedCenterBins {
        edges,
        means: stats.iter().map(|s| s.mean).collect(),
        std_devs: stats.iter().map(|s| s.std_dev).collect(),
        counts: stats.iter().map(|s| s.count).collect(),
        missing,
        out_of_range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_sample_in_own_bin() {
        let bins = bin_x(
            &[1.0, 2.0, 3.0, 4.0],
            &[10.0, 20.0, 30.0, 40.0],
            &[1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();
        assert_eq!(bins.edges, [0.5, 1.5, 2.5, 3.5, 4.5]);
        assert_eq!(bins.means, [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(bins.std_devs, [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(bins.counts, [1, 1, 1, 1]);
        assert_eq!(bins.missing, 0);
        assert_eq!(bins.out_of_range, 0);
    }

    #[test]
    fn test_uneven_centers_edges() {
        let edges = bin_edges(&[0.0, 1.0, 3.0, 7.0]).unwrap();
        assert_eq!(edges, [-0.5, 0.5, 2.0, 5.0, 9.0]);
    }

    #[test]
    fn test_output_length_matches_centers() {
        let centers = [0.0, 10.0, 20.0, 30.0, 40.0];
        let bins = bin_x(&[1.0, 2.0], &[1.0, 2.0], &centers).unwrap();
        assert_eq!(bins.len(), centers.len());
        assert_eq!(bins.means.len(), centers.len());
        assert_eq!(bins.std_devs.len(), centers.len());
        assert_eq!(bins.edges.len(), centers.len() + 1);
    }

    #[test]
    fn test_counts_sum_to_len_when_in_range() {
        let x = [0.1, 0.4, 0.9, 1.2, 1.9, 2.5, 2.6, 3.4];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let bins = bin_x(&x, &y, &[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(bins.counts.iter().sum::<usize>(), x.len());
        assert_eq!(bins.counts, [2, 2, 1, 3]);
        assert_eq!(bins.means, [1.5, 3.5, 5.0, 7.0]);
        assert_eq!(bins.std_devs[0], 0.5);
    }

    #[test]
    fn test_nan_pairs_are_dropped() {
        let x = [1.0, f64::NAN, 2.0, 2.1, 3.0];
        let y = [1.0, 100.0, f64::NAN, 4.0, 5.0];
        let bins = bin_x(&x, &y, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(bins.missing, 2);
        assert_eq!(bins.counts, [1, 1, 1]);
        assert_eq!(bins.means, [1.0, 4.0, 5.0]);
    }

    #[test]
    fn test_empty_bin_is_nan() {
        let x = [1.0, 1.1, 3.0];
        let y = [2.0, 4.0, 6.0];
        let bins = bin_x(&x, &y, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(bins.counts, [2, 0, 1]);
        assert_eq!(bins.means[0], 3.0);
        assert_eq!(bins.std_devs[0], 1.0);
        assert!(bins.means[1].is_nan());
        assert!(bins.std_devs[1].is_nan());
        assert_eq!(bins.means[2], 6.0);
    }

    #[test]
    fn test_boundary_is_left_closed() {
        // edges: [0.5, 1.5, 2.5]
        let x = [0.5, 1.5, 2.5, 0.4999];
        let y = [1.0, 2.0, 3.0, 4.0];
        let bins = bin_x(&x, &y, &[1.0, 2.0]).unwrap();
        assert_eq!(bins.counts, [1, 1]);
        assert_eq!(bins.means, [1.0, 2.0]);
        assert_eq!(bins.out_of_range, 2);
    }

    #[test]
    fn test_into_parts() {
        let bins = bin_x(vec![1.0_f64, 2.0], vec![5.0_f64, 7.0], vec![1.0_f64, 2.0]).unwrap();
        let (means, std_devs, counts) = bins.into_parts();
        assert_eq!(means, [5.0, 7.0]);
        assert_eq!(std_devs, [0.0, 0.0]);
        assert_eq!(counts, [1, 1]);
    }

    #[test]
    fn test_integer_input() {
        let bins = bin_x(vec![1_i32, 2, 2], vec![3_i32, 4, 6], vec![1_i32, 2]).unwrap();
        assert_eq!(bins.means, [3.0, 5.0]);
        assert_eq!(bins.counts, [1, 2]);
    }

    #[test]
    fn test_digitize_nan_is_out_of_range() {
        assert_eq!(digitize(f64::NAN, &[0.0, 1.0]), 2);
    }

    #[test]
    fn test_length_mismatch() {
        let err = bin_x(&[1.0, 2.0], &[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, BinError::LengthMismatch { x_len: 2, y_len: 1 });
    }

    #[test]
    fn test_too_few_centers() {
        let err = bin_x(&[1.0], &[1.0], &[1.0]).unwrap_err();
        assert_eq!(err, BinError::TooFewCenters { len: 1 });
    }

    #[test]
    fn test_centers_not_increasing() {
        let err = bin_edges(&[1.0, 2.0, 2.0]).unwrap_err();
        assert_eq!(err, BinError::CentersNotIncreasing { index: 2 });

        let err = bin_edges(&[f64::NAN, 1.0]).unwrap_err();
        assert_eq!(err, BinError::CentersNotIncreasing { index: 1 });
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let bins = bin_x(&[1.0], &[1.0], &[1.0, 2.0]).unwrap();
        let json = serde_json::to_value(&bins).unwrap();
        assert_eq!(json["means"][0], 1.0);
        assert!(json["means"][1].is_null());
        assert_eq!(json["counts"][1], 0);
    }
}
