//! Fisher linear discriminant projection.
//!
//! The classic supervised companion to PCA: project onto the directions that
//! maximise between-class scatter relative to within-class scatter. The
//! generalized eigenproblem `Sb·w = λ·Sw·w` is reduced to a pair of symmetric
//! eigendecompositions via the inverse square root of `Sw`, which
//! `linfa-linalg` solves in pure Rust.

use linfa_linalg::eigh::*;
use ndarray::{s, Array1, Array2, Axis};

use crate::{BoxError, Reducer};

/// Linear discriminant analysis with a fixed 2-component output.
///
/// A dataset with `c` classes has at most `c - 1` discriminant directions,
/// so the input must carry at least 3 distinct labels.
#[derive(Debug, Clone, Default)]
pub struct Lda;

impl Lda {
    pub fn new() -> Self {
        Lda
    }
}

impl Reducer for Lda {
    fn reduce(&self, _records: &Array2<f64>) -> Result<Array2<f64>, BoxError> {
        Err("linear discriminant analysis requires class labels; configure it as a supervised method".into())
    }

    fn reduce_supervised(
        &self,
        records: &Array2<f64>,
        labels: &[usize],
    ) -> Result<Array2<f64>, BoxError> {
        fisher_projection(records, labels)
    }
}

/// Project `records` onto the two leading discriminant axes.
fn fisher_projection(records: &Array2<f64>, labels: &[usize]) -> Result<Array2<f64>, BoxError> {
    let n = records.nrows();
    let d = records.ncols();
    if n == 0 || d == 0 {
        return Err("the sample matrix must have at least one row and one column".into());
    }
    if labels.len() != n {
        return Err(format!("{} labels for {} rows", labels.len(), n).into());
    }

    let mut classes: Vec<usize> = labels.to_vec();
    classes.sort_unstable();
    classes.dedup();
    if classes.len() < 3 {
        return Err(format!(
            "a 2-component discriminant projection needs at least 3 classes, got {}",
            classes.len()
        )
        .into());
    }

    let overall_mean = records
        .mean_axis(Axis(0))
        .ok_or("failed to compute the overall mean")?;

    // Per-class means and counts
    let n_classes = classes.len();
    let mut class_means = Array2::<f64>::zeros((n_classes, d));
    let mut class_counts = vec![0usize; n_classes];
    for (i, label) in labels.iter().enumerate() {
        let idx = classes.binary_search(label).expect("label seen above");
        class_counts[idx] += 1;
        for j in 0..d {
            class_means[[idx, j]] += records[[i, j]];
        }
    }
    for (idx, &count) in class_counts.iter().enumerate() {
        for j in 0..d {
            class_means[[idx, j]] /= count as f64;
        }
    }

    // Within-class scatter
    let mut within = Array2::<f64>::zeros((d, d));
    for (i, label) in labels.iter().enumerate() {
        let idx = classes.binary_search(label).expect("label seen above");
        for a in 0..d {
            let da = records[[i, a]] - class_means[[idx, a]];
            for b in 0..d {
                let db = records[[i, b]] - class_means[[idx, b]];
                within[[a, b]] += da * db;
            }
        }
    }

    // Between-class scatter
    let mut between = Array2::<f64>::zeros((d, d));
    for (idx, &count) in class_counts.iter().enumerate() {
        for a in 0..d {
            let da = class_means[[idx, a]] - overall_mean[a];
            for b in 0..d {
                let db = class_means[[idx, b]] - overall_mean[b];
                between[[a, b]] += count as f64 * da * db;
            }
        }
    }

    // Ridge keeps the within-scatter invertible for degenerate inputs
    let ridge = 1e-9 + 1e-6 * within.diag().sum().abs() / d as f64;
    for i in 0..d {
        within[[i, i]] += ridge;
    }

    // Sw^(-1/2) via symmetric eigendecomposition
    let (w_vals, w_vecs) = within.eigh()?;
    let inv_sqrt_vals: Array1<f64> = w_vals.mapv(|v| 1.0 / v.max(1e-12).sqrt());
    let inv_root = (&w_vecs * &inv_sqrt_vals).dot(&w_vecs.t());

    // Symmetric whitened between-scatter, then its leading eigenvectors
    let mut m = inv_root.dot(&between).dot(&inv_root);
    m = (&m + &m.t()) * 0.5;
    let (m_vals, m_vecs) = m.eigh()?;
    let (_, m_vecs) = sort_eig_desc(m_vals, m_vecs);
    let leading = m_vecs.slice(s![.., ..2]).to_owned();

    // Map the whitened directions back and project the centered samples
    let axes = inv_root.dot(&leading);
    let centered = records - &overall_mean.view().insert_axis(Axis(0));
    Ok(centered.dot(&axes))
}

/// Reorder an eigendecomposition by descending eigenvalue.
fn sort_eig_desc(vals: Array1<f64>, vecs: Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let mut order: Vec<usize> = (0..vals.len()).collect();
    order.sort_by(|&a, &b| {
        vals[b]
            .partial_cmp(&vals[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let sorted_vals = Array1::from_iter(order.iter().map(|&i| vals[i]));
    let sorted_vecs = vecs.select(Axis(1), &order);
    (sorted_vals, sorted_vecs)
}
