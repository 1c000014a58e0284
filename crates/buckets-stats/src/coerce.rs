//! Conversion of array-like input into dense `f64` sequences
//!
//! Both binners accept their samples through [`ArrayLike`], a closed set of
//! input representations. [`standard_array`] turns any of them into a single
//! canonical form, a `Cow<[f64]>`:
//!
//! - A borrowed `f64` slice is passed through untouched (no copy). Callers get
//!   a view into their own buffer, not an isolated copy.
//! - An owned `Vec<f64>` is moved in without copying.
//! - Anything else (fixed-size arrays, other primitive element types) is
//!   converted element by element, preserving order.
//!
//! # Examples
//!
//! ```
//! use std::borrow::Cow;
//!
//! use buckets_stats::coerce::standard_array;
//!
//! let data = vec![1.0, 2.0, 3.0];
//! assert!(matches!(standard_array(&data), Cow::Borrowed(_)));
//!
//! let ints: &[i32] = &[1, 2, 3];
//! assert_eq!(&*standard_array(ints), &[1.0, 2.0, 3.0]);
//! ```

use std::borrow::Cow;

/// Array-like numeric input accepted by the binners.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum ArrayLike<'a> {
    /// Already dense; used as-is.
    Dense(&'a [f64]),
    /// Owned buffer; moved in.
    Owned(Vec<f64>),
}

impl<'a> ArrayLike<'a> {
    /// Returns the dense form of this input.
    ///
    /// Borrowed input stays borrowed.
    #[must_use]
    pub fn into_dense(self) -> Cow<'a, [f64]> {
        match self {
            ArrayLike::Dense(values) => Cow::Borrowed(values),
            ArrayLike::Owned(values) => Cow::Owned(values),
        }
    }
}

impl<'a> From<&'a Vec<f64>> for ArrayLike<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        ArrayLike::Dense(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ArrayLike<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        ArrayLike::Dense(values.as_slice())
    }
}

impl<const N: usize> From<[f64; N]> for ArrayLike<'_> {
    fn from(values: [f64; N]) -> Self {
        ArrayLike::Owned(values.to_vec())
    }
}

macro_rules! impl_numeric_from {
    (lossless: $($ty:ty),* $(,)?) => {
        $(
            impl From<&[$ty]> for ArrayLike<'_> {
                fn from(values: &[$ty]) -> Self {
                    ArrayLike::Owned(values.iter().copied().map(f64::from).collect())
                }
            }

            impl_numeric_from!(@owned $ty);
        )*
    };
    (lossy: $($ty:ty),* $(,)?) => {
        $(
            impl From<&[$ty]> for ArrayLike<'_> {
                #[expect(clippy::cast_precision_loss)]
                fn from(values: &[$ty]) -> Self {
                    ArrayLike::Owned(values.iter().map(|&v| v as f64).collect())
                }
            }

            impl_numeric_from!(@owned $ty);
        )*
    };
    (@owned $ty:ty) => {
        impl From<&Vec<$ty>> for ArrayLike<'_> {
            fn from(values: &Vec<$ty>) -> Self {
                ArrayLike::from(values.as_slice())
            }
        }

        impl From<Vec<$ty>> for ArrayLike<'_> {
            fn from(values: Vec<$ty>) -> Self {
                ArrayLike::from(values.as_slice())
            }
        }

        impl<const N: usize> From<[$ty; N]> for ArrayLike<'_> {
            fn from(values: [$ty; N]) -> Self {
                ArrayLike::from(values.as_slice())
            }
        }
    };
}

impl_numeric_from!(lossless: f32, i8, i16, i32, u8, u16, u32);
// 64-bit integers above 2^53 round to the nearest f64
impl_numeric_from!(lossy: i64, u64, usize);

/// Converts array-like input into a dense `f64` sequence.
///
/// This is a no-op for input that is already a dense `f64` slice or vector.
#[must_use]
pub fn standard_array<'a, A>(values: A) -> Cow<'a, [f64]>
where
    A: Into<ArrayLike<'a>>,
{
    values.into().into_dense()
}
