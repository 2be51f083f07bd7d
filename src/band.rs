//! Computation of the lower and upper boundaries of an error band.

use std::fmt::{Display, Formatter};
use ndarray::ArrayView1;
use crate::Error;

/// Error attached to each point of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorSpec<'a> {
    /// The same error for all points: the band spans `z ± e`.
    Uniform(f64),
    /// One error per point, applied on both sides.
    Symmetric(&'a [f64]),
    /// One `(lower, upper)` error per point: the band spans
    /// `z - lower` to `z + upper`.
    Asymmetric(&'a [f64], &'a [f64]),
}

impl<'a> From<f64> for ErrorSpec<'a> {
    fn from(e: f64) -> Self { ErrorSpec::Uniform(e) }
}

impl<'a> From<&'a [f64]> for ErrorSpec<'a> {
    fn from(e: &'a [f64]) -> Self { ErrorSpec::Symmetric(e) }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ErrorSpec<'a> {
    fn from(e: &'a [f64; N]) -> Self { ErrorSpec::Symmetric(e) }
}

impl<'a> From<&'a Vec<f64>> for ErrorSpec<'a> {
    fn from(e: &'a Vec<f64>) -> Self { ErrorSpec::Symmetric(e) }
}

impl<'a> From<(&'a [f64], &'a [f64])> for ErrorSpec<'a> {
    fn from((lo, hi): (&'a [f64], &'a [f64])) -> Self {
        ErrorSpec::Asymmetric(lo, hi)
    }
}

impl<'a, const N: usize> From<(&'a [f64; N], &'a [f64; N])>
for ErrorSpec<'a> {
    fn from((lo, hi): (&'a [f64; N], &'a [f64; N])) -> Self {
        ErrorSpec::Asymmetric(lo, hi)
    }
}

impl<'a> From<(&'a Vec<f64>, &'a Vec<f64>)> for ErrorSpec<'a> {
    fn from((lo, hi): (&'a Vec<f64>, &'a Vec<f64>)) -> Self {
        ErrorSpec::Asymmetric(lo, hi)
    }
}

/// Lower and upper boundaries of an error band.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Axis along which the band extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The band spans the y-direction (from `yerr`).
    Vertical,
    /// The band spans the x-direction (from `xerr`).
    Horizontal,
}

/// Recoverable conditions reported to the user instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    XerrIgnored,
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::XerrIgnored =>
                write!(f, "Setting both `yerr` and `xerr` is not \
                           supported. Ignore `xerr`."),
        }
    }
}

/// Return the boundaries of the band around `z` described by `err`.
///
/// Sequences in `err` must have the same length as `z`, otherwise
/// [`Error::ErrorLength`] is returned.
///
/// # Example
///
/// ```
/// use errorfill::band::{extrema, ErrorSpec};
/// let b = extrema(&[0., 1., 2.], &ErrorSpec::Uniform(1.))?;
/// assert_eq!(b.lower, [-1., 0., 1.]);
/// assert_eq!(b.upper, [1., 2., 3.]);
/// # Ok::<(), errorfill::Error>(())
/// ```
pub fn extrema(z: &[f64], err: &ErrorSpec<'_>) -> Result<Band, Error> {
    let zv = ArrayView1::from(z);
    let (lower, upper) = match *err {
        ErrorSpec::Uniform(e) => (&zv - e, &zv + e),
        ErrorSpec::Symmetric(e) => {
            let e = same_len(z.len(), e)?;
            (&zv - &e, &zv + &e)
        }
        ErrorSpec::Asymmetric(lo, hi) => {
            let lo = same_len(z.len(), lo)?;
            let hi = same_len(z.len(), hi)?;
            (&zv - &lo, &zv + &hi)
        }
    };
    Ok(Band { lower: lower.to_vec(), upper: upper.to_vec() })
}

fn same_len(n: usize, e: &[f64]) -> Result<ArrayView1<'_, f64>, Error> {
    if e.len() == n {
        Ok(ArrayView1::from(e))
    } else {
        Err(Error::ErrorLength { expected: n, got: e.len() })
    }
}

/// Choose which of `yerr` and `xerr` gives the band.  `yerr` wins
/// when both are present, in which case a warning is returned.
pub fn select<'a>(
    yerr: Option<ErrorSpec<'a>>, xerr: Option<ErrorSpec<'a>>
) -> (Option<(Orientation, ErrorSpec<'a>)>, Option<Warning>) {
    match (yerr, xerr) {
        (Some(y), Some(_)) =>
            (Some((Orientation::Vertical, y)), Some(Warning::XerrIgnored)),
        (Some(y), None) => (Some((Orientation::Vertical, y)), None),
        (None, Some(x)) => (Some((Orientation::Horizontal, x)), None),
        (None, None) => (None, None),
    }
}
