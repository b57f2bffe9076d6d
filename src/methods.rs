//! Stock [`Reducer`] adapters over the linfa ecosystem, plus the
//! [`standard_suite`] configuration the demo binary runs.
//!
//! Each adapter fits its wrapped algorithm on the given sample matrix and
//! returns the 2-column embedding; the algorithms themselves live in their
//! respective crates.

use linfa::traits::{Fit, Predict, Transformer};
use linfa::DatasetBase;
use linfa_ica::fast_ica::{FastIca, GFunc};
use linfa_kernel::{Kernel, KernelMethod, KernelType};
use linfa_reduction::random_projection::{GaussianRandomProjection, SparseRandomProjection};
use linfa_reduction::{DiffusionMap, Pca};
use linfa_tsne::TSneParams;
use ndarray::Array2;

use crate::lda::Lda;
use crate::{BoxError, Method, Reducer};

/// Principal component analysis (linfa-reduction).
#[derive(Debug, Clone, Default)]
pub struct PcaReducer {
    whiten: bool,
}

impl PcaReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescale components to unit variance after projection.
    pub fn whitened() -> Self {
        PcaReducer { whiten: true }
    }
}

impl Reducer for PcaReducer {
    fn reduce(&self, records: &Array2<f64>) -> Result<Array2<f64>, BoxError> {
        let dataset = DatasetBase::from(records.clone());
        let pca = Pca::params(2).whiten(self.whiten).fit(&dataset)?;
        Ok(pca.predict(dataset.records()))
    }
}

/// Gaussian random projection (linfa-reduction).
#[derive(Debug, Clone, Default)]
pub struct GaussianRpReducer;

impl Reducer for GaussianRpReducer {
    fn reduce(&self, records: &Array2<f64>) -> Result<Array2<f64>, BoxError> {
        let dataset = DatasetBase::from(records.clone());
        let proj = GaussianRandomProjection::<f64>::params()
            .target_dim(2)
            .fit(&dataset)?;
        let reduced = proj.transform(&dataset);
        Ok(reduced.records().to_owned())
    }
}

/// Sparse (Achlioptas) random projection (linfa-reduction).
#[derive(Debug, Clone, Default)]
pub struct SparseRpReducer;

impl Reducer for SparseRpReducer {
    fn reduce(&self, records: &Array2<f64>) -> Result<Array2<f64>, BoxError> {
        let dataset = DatasetBase::from(records.clone());
        let proj = SparseRandomProjection::<f64>::params()
            .target_dim(2)
            .fit(&dataset)?;
        let reduced = proj.transform(&dataset);
        Ok(reduced.records().to_owned())
    }
}

/// FastICA independent component analysis (linfa-ica).
#[derive(Debug, Clone)]
pub struct FastIcaReducer {
    /// Log-cosh contrast parameter, in `[1, 2]`.
    alpha: f64,
}

impl Default for FastIcaReducer {
    fn default() -> Self {
        FastIcaReducer { alpha: 1.0 }
    }
}

impl Reducer for FastIcaReducer {
    fn reduce(&self, records: &Array2<f64>) -> Result<Array2<f64>, BoxError> {
        let dataset = DatasetBase::from(records.clone());
        let ica = FastIca::params()
            .ncomponents(2)
            .gfunc(GFunc::Logcosh(self.alpha))
            .fit(&dataset)?;
        Ok(ica.predict(dataset.records()))
    }
}

/// Diffusion-map spectral embedding over a sparse Gaussian kernel
/// (linfa-reduction + linfa-kernel).
#[derive(Debug, Clone)]
pub struct DiffusionMapReducer {
    /// Neighbors kept per row in the sparse kernel.
    sparsity: usize,
    /// Gaussian kernel bandwidth.
    eps: f64,
    /// Diffusion steps applied to the operator.
    steps: usize,
}

impl Default for DiffusionMapReducer {
    fn default() -> Self {
        DiffusionMapReducer {
            sparsity: 15,
            eps: 2.0,
            steps: 1,
        }
    }
}

impl Reducer for DiffusionMapReducer {
    fn reduce(&self, records: &Array2<f64>) -> Result<Array2<f64>, BoxError> {
        let kernel = Kernel::params()
            .kind(KernelType::Sparse(self.sparsity))
            .method(KernelMethod::Gaussian(self.eps))
            .transform(records.view());

        let dmap = DiffusionMap::<f64>::params(2)
            .steps(self.steps)
            .transform(&kernel)?;
        Ok(dmap.embedding().to_owned())
    }
}

/// Barnes-Hut t-SNE (linfa-tsne). Stochastic: two runs on the same input
/// may produce different embeddings.
#[derive(Debug, Clone)]
pub struct TsneReducer {
    perplexity: f64,
    approx_threshold: f64,
}

impl Default for TsneReducer {
    fn default() -> Self {
        TsneReducer {
            perplexity: 10.0,
            approx_threshold: 0.1,
        }
    }
}

impl Reducer for TsneReducer {
    fn reduce(&self, records: &Array2<f64>) -> Result<Array2<f64>, BoxError> {
        let coords = TSneParams::embedding_size(2)
            .perplexity(self.perplexity)
            .approx_threshold(self.approx_threshold)
            .transform(records.clone())?;
        Ok(coords)
    }
}

/// The fixed eight-method comparison the demo runs: one supervised entry
/// (LDA) and seven unsupervised ones, in the order they appear in the grid.
pub fn standard_suite() -> Vec<Method> {
    vec![
        Method::new("PCA", Box::new(PcaReducer::new())),
        Method::new("Whitened PCA", Box::new(PcaReducer::whitened())),
        Method::supervised("LDA", Box::new(Lda::new())),
        Method::new(
            "Gaussian Random Projection",
            Box::new(GaussianRpReducer),
        ),
        Method::new("Sparse Random Projection", Box::new(SparseRpReducer)),
        Method::new("FastICA", Box::new(FastIcaReducer::default())),
        Method::new("Diffusion Map", Box::new(DiffusionMapReducer::default())),
        Method::new("t-SNE", Box::new(TsneReducer::default())),
    ]
}
