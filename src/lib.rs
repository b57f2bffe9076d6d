use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use ndarray::Array2;

pub mod chart;
pub mod error;
pub mod lda;
mod macros;
pub mod methods;
pub mod prelude;
pub mod utils;

pub use error::{BoxError, Error};

use chart::ChartConfig;

/// Whether progress output is compiled in (the `verbose` cargo feature,
/// enabled by default).
pub const VERBOSE: bool = cfg!(feature = "verbose");

/// A fit-and-reduce capability: maps an `n × d` sample matrix to an `n × 2`
/// coordinate matrix. Implementations wrap an external algorithm and must
/// keep rows in input order.
pub trait Reducer {
    /// Unsupervised fit-and-reduce on the feature matrix alone.
    fn reduce(&self, records: &Array2<f64>) -> Result<Array2<f64>, BoxError>;

    /// Supervised fit-and-reduce. The default ignores the labels and
    /// delegates to [`Reducer::reduce`]; label-aware methods override this.
    fn reduce_supervised(
        &self,
        records: &Array2<f64>,
        labels: &[usize],
    ) -> Result<Array2<f64>, BoxError> {
        let _ = labels;
        self.reduce(records)
    }
}

/// One named entry in a comparison run. Position in the method slice
/// determines the subplot position in the rendered grid.
pub struct Method {
    pub name: String,
    /// Dispatch flag, fixed at configuration time: `true` routes the fit
    /// through [`Reducer::reduce_supervised`] with the label vector.
    pub requires_labels: bool,
    reducer: Box<dyn Reducer>,
}

impl Method {
    /// An unsupervised method: fit on the sample matrix alone.
    pub fn new(name: impl Into<String>, reducer: Box<dyn Reducer>) -> Self {
        Method {
            name: name.into(),
            requires_labels: false,
            reducer,
        }
    }

    /// A supervised method: fit on the sample matrix and the label vector.
    pub fn supervised(name: impl Into<String>, reducer: Box<dyn Reducer>) -> Self {
        Method {
            name: name.into(),
            requires_labels: true,
            reducer,
        }
    }

    fn project(&self, records: &Array2<f64>, labels: &[usize]) -> Result<Array2<f64>, BoxError> {
        if self.requires_labels {
            self.reducer.reduce_supervised(records, labels)
        } else {
            self.reducer.reduce(records)
        }
    }
}

/// The 2D coordinates one method produced, plus its wall-clock cost.
#[derive(Debug, Clone)]
pub struct Projection {
    pub name: String,
    /// `n × 2`, same row order as the input matrix.
    pub coords: Array2<f64>,
    pub elapsed: Duration,
}

/// Apply every method to `records`, strictly in input order, and collect one
/// [`Projection`] per method.
///
/// Each output is validated against the shape contract (input row count,
/// exactly two columns) before the next method runs. Any reducer failure or
/// contract violation aborts the whole run; there is no skipping and no
/// partial result.
pub fn project_all(
    records: &Array2<f64>,
    labels: &[usize],
    methods: &[Method],
) -> Result<Vec<Projection>, Error> {
    if methods.is_empty() {
        return Err(Error::NoMethods);
    }
    if labels.len() != records.nrows() {
        return Err(Error::LabelLength {
            expected: records.nrows(),
            got: labels.len(),
        });
    }

    let pb = match VERBOSE {
        true => {
            let pb = ProgressBar::new(methods.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40} {pos}/{len} Methods | {msg}")
                    .unwrap()
                    .progress_chars("=>-"),
            );
            Some(pb)
        }
        false => None,
    };

    let mut projections = Vec::with_capacity(methods.len());

    for method in methods {
        if let Some(pb) = &pb {
            pb.set_message(method.name.clone());
        }

        let start = Instant::now();
        let coords = method
            .project(records, labels)
            .map_err(|source| Error::Method {
                name: method.name.clone(),
                source,
            })?;
        let elapsed = start.elapsed();

        if coords.nrows() != records.nrows() {
            return Err(Error::RowMismatch {
                method: method.name.clone(),
                expected: records.nrows(),
                got: coords.nrows(),
            });
        }
        if coords.ncols() != 2 {
            return Err(Error::ColumnCount {
                method: method.name.clone(),
                got: coords.ncols(),
            });
        }

        projections.push(Projection {
            name: method.name.clone(),
            coords,
            elapsed,
        });

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    Ok(projections)
}

/// Run the full comparison: project through every method, then render the
/// grid of scatterplots to the configured path.
///
/// Returns the projections so callers can inspect coordinates and timings.
/// Rendering happens only after every method succeeded, so a failed method
/// leaves no figure behind.
pub fn run_comparison(
    records: &Array2<f64>,
    labels: &[usize],
    methods: &[Method],
    config: Option<ChartConfig>,
) -> Result<Vec<Projection>, Error> {
    let projections = project_all(records, labels, methods)?;
    chart::chart_grid(&projections, labels, config)?;
    Ok(projections)
}
