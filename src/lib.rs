//! Line plots with a shaded error band, drawn with the [Matplotlib][]
//! Python visualization library.
//!
//! Usage
//! -----
//!
//! Draw `y` versus `x` and fill the region `y ± yerr` with the color
//! of the line:
//!
//! ```
//! let (fig, [[mut ax]]) = errorfill::subplots()?;
//! let x: Vec<_> = (0 .. 50).map(|i| i as f64 / 8.).collect();
//! let y: Vec<_> = x.iter().map(|x| x.sin()).collect();
//! let (_lines, fill) = ax.errorfill(&x, &y).yerr(0.2).label("sin").plot()?;
//! assert!(fill.is_some());
//! fig.save().to_file("target/Errorfill.pdf")?;
//! # Ok::<(), errorfill::Error>(())
//! ```
//!
//! The error may be a scalar, one value per point or a pair of
//! sequences for asymmetric bounds (see [`ErrorSpec`]).  The drawing
//! surface is always an explicit [`Axes`]; its color cycle provides
//! the color when none is given.
//!
//! [Matplotlib]: https://matplotlib.org/

use std::path::Path;
use lazy_static::lazy_static;
use log::{debug, warn};
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::{PyDict, PyList},
};
use numpy::PyArray1;

pub mod band;
pub use band::{Band, ErrorSpec, Orientation, Warning};

macro_rules! getattr {
    ($py: ident, $lib: expr, $f: literal) => {
        $lib.getattr($py, intern!($py, $f))
    };
}

macro_rules! meth {
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| {
            $obj.call_method1(py, intern!(py, stringify!($m)), $args)
        })
    };
}

/// Possible errors of the plotting functions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    #[error("The matplotlib library has not been found.\n\
             Please install it.  See https://matplotlib.org/\n\
             If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554")]
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    #[error("A path contains an element that is not a directory or \
             does not exist")]
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    #[error("Permission denied to access or create the filesystem path")]
    PermissionError,
    /// `x` and `y` do not have the same length.
    #[error("x has length {x} but y has length {y}")]
    DataLength { x: usize, y: usize },
    /// A sequence of errors does not match the length of the data.
    #[error("Error sequence of length {got} given for data of \
             length {expected}")]
    ErrorLength { expected: usize, got: usize },
    /// Other Python errors.
    #[error("Python error: {0}")]
    Python(#[from] PyErr),
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import_bound(py, intern!(py, $m)).map(|m| m.unbind()))
}}

lazy_static! {
    // Import matplotlib modules.
    static ref FIGURE: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.figure")
    };
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    static ref PATCHES: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.patches")
    };
    static ref COLORS: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.colors")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}


/// Trait expressing that `Self` can be converted to a numpy.ndarray.
/// Matplotlib artists keep a reference to the arrays they are given,
/// so the data is copied.
pub trait Data {
    fn to_numpy(&self, py: Python<'_>) -> PyObject;
}

impl<T> Data for T where T: AsRef<[f64]> + ?Sized {
    fn to_numpy(&self, py: Python<'_>) -> PyObject {
        PyArray1::from_slice_bound(py, self.as_ref()).into_any().unbind()
    }
}

/// A set of axes on which error bands are drawn.
#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

#[inline(always)]
fn grid<const R: usize, const C: usize, U>(
    mut f: impl FnMut(usize, usize) -> U) -> [[U; C]; R] {
    let mut r = 0;
    [(); R].map(|_| {
        let mut c = 0;
        let row = [(); C].map(|_| {
            let y = f(r, c);
            c += 1;
            y });
        r += 1;
        row })
}

impl Figure {
    /// Return a new `Figure` not managed by pyplot.
    pub fn new() -> Result<Figure, Error> {
        let figure = pymod!(FIGURE)?;
        Python::with_gil(|py| {
            let fig = getattr!(py, figure, "Figure")?.call0(py)?;
            Ok(Self { fig })
        })
    }

    /// Return a `R`×`C` grid of axes belonging to this figure.
    pub fn subplots<const R: usize, const C: usize>(
        &self) -> Result<[[Axes; C]; R], Error> {
        Python::with_gil(|py| {
            // Always a 2D array of axes.
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item("squeeze", false)?;
            let axs = self.fig.call_method_bound(
                py, intern!(py, "subplots"), (R, C), Some(&kwargs))?;
            let mut err = None;
            let axes = grid(|r, c| {
                match axs.call_method1(py, intern!(py, "item"), (r, c)) {
                    Ok(ax) => Axes { ax },
                    Err(e) => {
                        err.get_or_insert(e);
                        Axes { ax: py.None() }
                    }
                }
            });
            match err {
                Some(e) => Err(Error::Python(e)),
                None => Ok(axes),
            }
        })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None }
    }
}

/// Options to save a [`Figure`] to a file.
pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
}

impl Savefig {
    /// Set the resolution in dots per inch.  A non-positive value
    /// restores Matplotlib's default.
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        self.dpi = if dpi > 0. { Some(dpi) } else { None };
        self
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?;
            }
            self.fig.call_method_bound(
                py, intern!(py, "savefig"),
                (path,), Some(&kwargs)
            ).map_err(|e| {
                if e.is_instance_of::<PyFileNotFoundError>(py) {
                    Error::FileNotFoundError
                } else if e.is_instance_of::<PyPermissionError>(py) {
                    Error::PermissionError
                } else {
                    Error::Python(e)
                }
            })?;
            Ok(())
        })
    }
}


/// Create a new figure managed by pyplot.
pub fn figure() -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = getattr!(py, pyplot, "figure")?.call0(py)?;
        Ok(Figure { fig })
    })
}

/// Create a figure managed by pyplot together with a `R`×`C` grid
/// of axes.
pub fn subplots<const R: usize, const C: usize>(
) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Display all open figures.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        getattr!(py, pyplot, "show")?.call0(py)?;
        Ok(())
    })
}


impl Axes {
    /// Plot `y` versus `x` as a line and, if an error is given with
    /// [`ErrorFill::yerr`] or [`ErrorFill::xerr`], fill the region
    /// delimited by the errors.
    ///
    /// # Example
    ///
    /// ```
    /// let (fig, [[mut ax]]) = errorfill::subplots()?;
    /// let x = [0., 1., 2., 3.];
    /// ax.errorfill(&x, &[1., 4., 2., 3.]).yerr(&[0.5, 1., 0.2, 0.4])
    ///     .color("tab:red").alpha_fill(0.2).plot()?;
    /// ax.errorfill(&x, &[0., 1., 3., 2.]).xerr(0.1).plot()?;
    /// fig.save().to_file("target/Errorfill_xy.pdf")?;
    /// # Ok::<(), errorfill::Error>(())
    /// ```
    // The builder mutably borrows `self` to reflect that the final
    // `.plot()` mutates the underlying Python object.
    #[must_use]
    pub fn errorfill<'a>(&'a mut self, x: &'a [f64], y: &'a [f64]
    ) -> ErrorFill<'a> {
        ErrorFill { axes: self,
                    x, y,
                    yerr: None,
                    xerr: None,
                    options: LineOptions::new(),
                    alpha_fill: 0.3,
                    label_fill: "" }
    }

    pub fn set_title(&mut self, v: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlabel, (label,))?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylabel, (label,))?;
        Ok(self)
    }

    /// Place a legend listing the labelled lines and error bands.
    pub fn legend(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, legend, ())?;
        Ok(self)
    }
}

#[derive(Clone)]
struct LineOptions<'a> {
    color: Option<&'a str>,
    linestyle: Option<&'a str>,
    linewidth: Option<f64>,
    marker: Option<&'a str>,
    alpha: f64,
    label: &'a str,
}

impl<'a> LineOptions<'a> {
    fn new() -> LineOptions<'static> {
        LineOptions { color: None, linestyle: None, linewidth: None,
                      marker: None, alpha: 1., label: "" }
    }

    /// Keyword arguments for `Axes.plot`.  Unset options are left to
    /// Matplotlib's rcParams.
    fn kwargs<'py>(&self, py: Python<'py>, color: &PyObject
    ) -> PyResult<Bound<'py, PyDict>> {
        let kwargs = PyDict::new_bound(py);
        kwargs.set_item("color", color)?;
        kwargs.set_item("alpha", self.alpha)?;
        if let Some(ls) = self.linestyle {
            kwargs.set_item("linestyle", ls)?
        }
        if let Some(w) = self.linewidth {
            kwargs.set_item("linewidth", w)?
        }
        if let Some(m) = self.marker {
            kwargs.set_item("marker", m)?
        }
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        Ok(kwargs)
    }
}

/// Options for a line with an error band (see [`Axes::errorfill`]).
#[must_use]
pub struct ErrorFill<'a> {
    axes: &'a Axes,
    x: &'a [f64],
    y: &'a [f64],
    yerr: Option<ErrorSpec<'a>>,
    xerr: Option<ErrorSpec<'a>>,
    options: LineOptions<'a>,
    alpha_fill: f64,
    label_fill: &'a str,
}

impl<'a> ErrorFill<'a> {
    /// Error on `y`.  The band spans vertically.
    pub fn yerr(mut self, e: impl Into<ErrorSpec<'a>>) -> Self {
        self.yerr = Some(e.into());
        self
    }

    /// Error on `x`.  The band spans horizontally.  Ignored (with a
    /// warning) if [`ErrorFill::yerr`] is also set.
    pub fn xerr(mut self, e: impl Into<ErrorSpec<'a>>) -> Self {
        self.xerr = Some(e.into());
        self
    }

    /// Color of both the line and the band.  By default, the next
    /// color of the axes' color cycle is used.
    pub fn color(mut self, color: &'a str) -> Self {
        self.options.color = Some(color);
        self
    }

    pub fn linestyle(mut self, ls: &'a str) -> Self {
        self.options.linestyle = Some(ls);
        self
    }

    /// Width of the line in points.
    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.linewidth = Some(w);
        self
    }

    pub fn marker(mut self, marker: &'a str) -> Self {
        self.options.marker = Some(marker);
        self
    }

    /// Opacity of the line.  Also scales the band opacity.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.options.alpha = alpha;
        self
    }

    /// Opacity of the band relative to the line: the band is drawn
    /// with opacity `alpha * alpha_fill`.  Default: `0.3`.
    pub fn alpha_fill(mut self, alpha_fill: f64) -> Self {
        self.alpha_fill = alpha_fill;
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    /// Legend label of the band.
    pub fn label_fill(mut self, label: &'a str) -> Self {
        self.label_fill = label;
        self
    }

    /// The color to use for all the elements: the requested one or
    /// the next one of the axes' cycle.
    fn resolve_color(&self, py: Python<'_>) -> PyResult<PyObject> {
        match self.options.color {
            Some(c) => Ok(c.into_py(py)),
            None => self.axes.ax.getattr(py, intern!(py, "_get_lines"))?
                .call_method0(py, intern!(py, "get_next_color")),
        }
    }

    /// Draw the line and the band.  Return the plotted lines and the
    /// filled region, `None` if no error was given.
    pub fn plot(self) -> Result<(Line2D, Option<PolyCollection>), Error> {
        if self.x.len() != self.y.len() {
            return Err(Error::DataLength { x: self.x.len(),
                                           y: self.y.len() })
        }
        let (selected, warning) = band::select(self.yerr, self.xerr);
        if let Some(w) = warning {
            warn!("{}", w);
        }
        // Compute the band before drawing anything so that shape
        // errors leave the axes untouched.
        let band = match selected {
            Some((o, err)) => {
                let z = match o {
                    Orientation::Vertical => self.y,
                    Orientation::Horizontal => self.x,
                };
                Some((o, band::extrema(z, &err)?))
            }
            None => None,
        };
        let patches = pymod!(PATCHES)?;
        Python::with_gil(|py| {
            let ax = &self.axes.ax;
            let color = self.resolve_color(py)?;
            debug!("errorfill: {} points, color {}", self.x.len(),
                   color.bind(py));
            let kwargs = self.options.kwargs(py, &color)?;
            let lines = ax.call_method_bound(
                py, intern!(py, "plot"),
                (self.x.to_numpy(py), self.y.to_numpy(py)), Some(&kwargs))?;
            let lines = Line2D { lines: lines.extract(py)? };
            let (o, band) = match band {
                Some(b) => b,
                None => return Ok((lines, None)),
            };
            let alpha = self.options.alpha * self.alpha_fill;
            debug!("errorfill: {:?} band, alpha {}", o, alpha);
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item("color", &color)?;
            kwargs.set_item("alpha", alpha)?;
            let (fill_between, base) = match o {
                Orientation::Vertical =>
                    (intern!(py, "fill_between"), self.x),
                Orientation::Horizontal =>
                    (intern!(py, "fill_betweenx"), self.y),
            };
            let coll = ax.call_method_bound(
                py, fill_between,
                (base.to_numpy(py), band.upper.to_numpy(py),
                 band.lower.to_numpy(py)),
                Some(&kwargs))?;
            // Filled regions do not render correctly in legends.  The
            // legend entry is carried by an invisible rectangle with
            // the same color and opacity.
            if !self.label_fill.is_empty() {
                kwargs.set_item("label", self.label_fill)?;
            }
            let proxy = getattr!(py, patches, "Rectangle")?
                .call_bound(py, ((0, 0), 0, 0), Some(&kwargs))?;
            ax.call_method1(py, intern!(py, "add_patch"), (proxy,))?;
            Ok((lines, Some(PolyCollection { coll })))
        })
    }
}


/// Return the hexadecimal representation "#rrggbb" of the
/// Matplotlib color `c`.
fn to_hex(py: Python<'_>, colors: &Py<PyModule>, c: Bound<'_, PyAny>
) -> PyResult<String> {
    getattr!(py, colors, "to_hex")?.call1(py, (c,))?.extract(py)
}

/// The lines drawn by [`ErrorFill::plot`].
#[derive(Debug)]
pub struct Line2D {
    lines: Py<PyList>,
}

impl Line2D {
    pub fn len(&self) -> usize {
        Python::with_gil(|py| self.lines.bind(py).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn label(&self, label: &str) -> Result<&Self, Error> {
        Python::with_gil(|py| -> PyResult<()> {
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item("label", label)?;
            for l in self.lines.bind(py).iter() {
                l.call_method("set", (), Some(&kwargs))?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    /// Color of the first line as "#rrggbb".
    pub fn color(&self) -> Result<String, Error> {
        let colors = pymod!(COLORS)?;
        Python::with_gil(|py| {
            let c = self.lines.bind(py).get_item(0)?
                .call_method0(intern!(py, "get_color"))?;
            Ok(to_hex(py, colors, c)?)
        })
    }

    /// Opacity of the first line.
    pub fn alpha(&self) -> Result<Option<f64>, Error> {
        Python::with_gil(|py| {
            let a = self.lines.bind(py).get_item(0)?
                .call_method0(intern!(py, "get_alpha"))?;
            Ok(a.extract()?)
        })
    }
}

/// The filled region of an error band.
#[derive(Debug)]
pub struct PolyCollection {
    coll: PyObject,
}

impl PolyCollection {
    pub fn label(&self, label: &str) -> Result<&Self, Error> {
        meth!(self.coll, set_label, (label,))?;
        Ok(self)
    }

    /// Face color of the region as "#rrggbb" (without opacity).
    pub fn color(&self) -> Result<String, Error> {
        let colors = pymod!(COLORS)?;
        Python::with_gil(|py| {
            let c = self.coll.bind(py)
                .call_method0(intern!(py, "get_facecolor"))?
                .get_item(0)?;
            Ok(to_hex(py, colors, c)?)
        })
    }

    pub fn alpha(&self) -> Result<Option<f64>, Error> {
        Python::with_gil(|py| {
            Ok(self.coll.call_method0(py, intern!(py, "get_alpha"))?
               .extract(py)?)
        })
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    const X: [f64; 3] = [0., 1., 2.];

    /// Number of elements of the artist list `attr` of `ax`.
    fn count(ax: &Axes, attr: &str) -> usize {
        Python::with_gil(|py| {
            ax.ax.getattr(py, attr).unwrap().bind(py).len().unwrap()
        })
    }

    /// Bounding box `(xmin, xmax, ymin, ymax)` of the filled region.
    fn extents(fill: &PolyCollection) -> (f64, f64, f64, f64) {
        Python::with_gil(|py| {
            let paths = fill.coll.call_method0(py, "get_paths").unwrap();
            let mut e = (f64::INFINITY, f64::NEG_INFINITY,
                         f64::INFINITY, f64::NEG_INFINITY);
            for p in paths.bind(py).iter().unwrap() {
                let v: Vec<Vec<f64>> = p.unwrap().getattr("vertices").unwrap()
                    .call_method0("tolist").unwrap().extract().unwrap();
                for xy in v {
                    e.0 = e.0.min(xy[0]);
                    e.1 = e.1.max(xy[0]);
                    e.2 = e.2.min(xy[1]);
                    e.3 = e.3.max(xy[1]);
                }
            }
            e
        })
    }

    #[test]
    fn a_basic_pdf() -> Result<(), Error> {
        let (fig, [[mut ax]]) = subplots()?;
        dbg!(&fig);
        let x: Vec<_> = (0 .. 50).map(|i| i as f64 / 8.).collect();
        let y: Vec<_> = x.iter().map(|x| x.sin()).collect();
        let (lines, fill) = ax.errorfill(&x, &y).yerr(0.2)
            .label("sin").label_fill("error").plot()?;
        assert_eq!(lines.len(), 1);
        assert!(fill.is_some());
        ax.legend()?;
        fig.save().to_file("target/a_basic.pdf")?;
        Ok(())
    }

    #[test]
    fn a_basic_grid() -> Result<(), Error> {
        let fig = Figure::new()?;
        let [[mut ax0, mut ax1],
             [mut ax2, mut ax3]] = fig.subplots()?;
        let y = [1., 4., 2., 3.];
        let x = [1., 2., 3., 4.];
        ax0.errorfill(&x, &y).yerr(0.5).plot()?;
        ax1.errorfill(&x, &y).yerr(&[0.1, 0.2, 0.3, 0.4]).marker("o").plot()?;
        ax2.errorfill(&x, &y).yerr((&[0.1, 0.1, 0.1, 0.1],
                                    &[1., 0.5, 0.5, 1.]))
            .linestyle("--").plot()?;
        ax3.errorfill(&x, &y).xerr(0.25).color("r").linewidth(3.).plot()?;
        ax3.set_title("xerr")?.set_xlabel("x")?.set_ylabel("y")?;
        fig.save().dpi(72.).to_file("target/a_basic_grid.pdf")?;
        Ok(())
    }

    #[test]
    fn no_error_no_fill() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (lines, fill) = ax.errorfill(&X, &X).label("line").plot()?;
        assert_eq!(lines.len(), 1);
        assert!(fill.is_none());
        assert_eq!(count(&ax, "lines"), 1);
        assert_eq!(count(&ax, "collections"), 0);
        assert_eq!(count(&ax, "patches"), 0);
        Ok(())
    }

    #[test]
    fn vertical_band() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (_, fill) = ax.errorfill(&X, &X).yerr(1.).plot()?;
        let fill = fill.expect("a filled region");
        assert_eq!(extents(&fill), (0., 2., -1., 3.));
        assert_eq!(count(&ax, "collections"), 1);
        // The legend proxy.
        assert_eq!(count(&ax, "patches"), 1);
        Ok(())
    }

    #[test]
    fn horizontal_band() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (_, fill) = ax.errorfill(&X, &X).xerr(&[1., 0.5, 1.]).plot()?;
        let fill = fill.expect("a filled region");
        assert_eq!(extents(&fill), (-1., 3., 0., 2.));
        Ok(())
    }

    #[test]
    fn asymmetric_band() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (_, fill) = ax.errorfill(&X, &X)
            .yerr((&[0.5, 0.5, 0.5], &[2., 2., 2.])).plot()?;
        assert_eq!(extents(&fill.expect("a filled region")),
                   (0., 2., -0.5, 4.));
        Ok(())
    }

    #[test]
    fn yerr_takes_precedence() -> Result<(), Error> {
        let _ = env_logger::builder().is_test(true).try_init();
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (_, fill) = ax.errorfill(&X, &X).yerr(1.).xerr(5.).plot()?;
        assert_eq!(extents(&fill.expect("a filled region")),
                   (0., 2., -1., 3.));
        assert_eq!(count(&ax, "collections"), 1);
        assert_eq!(count(&ax, "patches"), 1);
        Ok(())
    }

    #[test]
    fn fill_opacity() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (lines, fill) = ax.errorfill(&X, &X).yerr(1.)
            .alpha(0.5).alpha_fill(0.3).plot()?;
        assert_eq!(lines.alpha()?, Some(0.5));
        let a = fill.expect("a filled region").alpha()?
            .expect("an opacity");
        assert!((a - 0.15).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn default_fill_opacity() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (_, fill) = ax.errorfill(&X, &X).yerr(1.).plot()?;
        let a = fill.expect("a filled region").alpha()?
            .expect("an opacity");
        assert!((a - 0.3).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn shared_cycled_color() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (l0, f0) = ax.errorfill(&X, &X).yerr(1.).plot()?;
        let (l1, f1) = ax.errorfill(&X, &X).xerr(1.).plot()?;
        let (f0, f1) = (f0.expect("a fill"), f1.expect("a fill"));
        assert_eq!(l0.color()?, f0.color()?);
        assert_eq!(l1.color()?, f1.color()?);
        assert_ne!(l0.color()?, l1.color()?);
        Ok(())
    }

    #[test]
    fn explicit_color() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        let (l, f) = ax.errorfill(&X, &X).yerr(1.).color("red").plot()?;
        assert_eq!(l.color()?, "#ff0000");
        assert_eq!(f.expect("a fill").color()?, "#ff0000");
        Ok(())
    }

    #[test]
    fn data_length_mismatch() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        match ax.errorfill(&X, &[1., 2.]).yerr(1.).plot() {
            Err(Error::DataLength { x: 3, y: 2 }) => (),
            r => panic!("unexpected result: {:?}", r),
        }
        assert_eq!(count(&ax, "lines"), 0);
        Ok(())
    }

    #[test]
    fn error_length_mismatch() -> Result<(), Error> {
        let [[mut ax]] = Figure::new()?.subplots()?;
        match ax.errorfill(&X, &X).yerr(&[1., 2.]).plot() {
            Err(Error::ErrorLength { expected: 3, got: 2 }) => (),
            r => panic!("unexpected result: {:?}", r),
        }
        assert_eq!(count(&ax, "lines"), 0);
        assert_eq!(count(&ax, "collections"), 0);
        Ok(())
    }

    #[test]
    fn relabel() -> Result<(), Error> {
        let (fig, [[mut ax]]) = subplots()?;
        let (lines, fill) = ax.errorfill(&X, &X).yerr(0.5).plot()?;
        lines.label("data")?;
        fill.expect("a fill").label("band")?;
        ax.legend()?;
        fig.save().to_file("target/relabel.pdf")?;
        Ok(())
    }

    #[test]
    fn save_missing_dir() -> Result<(), Error> {
        let fig = Figure::new()?;
        let [[mut ax]] = fig.subplots()?;
        ax.errorfill(&X, &X).yerr(1.).plot()?;
        match fig.save().to_file("target/no/such/dir/plot.pdf") {
            Err(Error::FileNotFoundError) => Ok(()),
            r => panic!("unexpected result: {:?}", r),
        }
    }
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
