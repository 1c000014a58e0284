//! Binned summary statistics over paired samples.
//!
//! Given scattered `(x, y)` samples, this crate groups them into bins along
//! `x` and summarizes `y` within each bin (mean, population standard
//! deviation, count, standard error). Typical uses are error bars for plots
//! and smoothing noisy measurements.
//!
//! Two binning strategies are provided:
//!
//! - **Fixed-center binning** ([`bin_x`]): bins around caller-supplied centers,
//!   with edges at the midpoints between consecutive centers
//! - **Equal-population binning** ([`bin_n`]): samples sorted by `x` and cut
//!   into windows holding a fixed number of samples
//!
//! # Modules
//!
//! - [`coerce`]: Conversion of array-like input into dense `f64` sequences
//! - [`descriptive`]: Per-bin mean, standard deviation and standard error
//! - [`fixed_center`]: Binning around fixed bin centers
//! - [`equal_population`]: Binning into equal-population windows
//!
//! # Examples
//!
//! ## Binning around fixed centers
//!
//! ```
//! use buckets_stats::bin_x;
//!
//! let x = [0.9, 1.1, 2.2, 2.9, 3.1];
//! let y = [1.0, 3.0, 5.0, 7.0, 9.0];
//! let bins = bin_x(&x, &y, &[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(bins.means, [2.0, 5.0, 8.0]);
//! assert_eq!(bins.counts, [2, 1, 2]);
//! ```
//!
//! ## Binning into equal-population windows
//!
//! ```
//! use buckets_stats::bin_n;
//!
//! let x = [4.0, 3.0, 2.0, 1.0];
//! let y = [1.0, 1.0, 3.0, 3.0];
//! let bins = bin_n(&x, &y, 2).unwrap();
//! assert_eq!(bins.centers, [1.5, 3.5]);
//! assert_eq!(bins.means, [3.0, 1.0]);
//! assert_eq!(bins.std_errors, [0.0, 0.0]);
//! ```

pub use self::{
    equal_population::{EqualPopulationBins, WindowLayout, bin_n, bin_n_with_layout},
    error::BinError,
    fixed_center::{FixedCenterBins, bin_x},
};

pub mod coerce;
pub mod descriptive;
pub mod equal_population;
pub mod error;
pub mod fixed_center;
