use crate::equal_population::WindowLayout;

/// Errors reported when the inputs of a binning call are inconsistent.
///
/// Both binners validate their inputs up front; nothing is partially computed
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BinError {
    #[display("x and y must have the same length (x: {x_len}, y: {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[display("at least two bin centers are required, got {len}")]
    TooFewCenters { len: usize },
    #[display("bin centers must be strictly increasing (violated at index {index})")]
    CentersNotIncreasing { index: usize },
    #[display("bin population must be at least 1")]
    ZeroPopulation,
    #[display("bin population {n} is too large for {len} samples with {layout} windows")]
    PopulationTooLarge {
        n: usize,
        len: usize,
        layout: WindowLayout,
    },
}

pub(crate) fn check_paired_len(x: &[f64], y: &[f64]) -> Result<(), BinError> {
    if x.len() == y.len() {
        Ok(())
    } else {
        Err(BinError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        })
    }
}
