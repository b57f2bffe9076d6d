//! Convenience re-exports for the common comparison workflow.

pub use crate::chart::{chart_grid, class_palette, grid_dims, ChartConfig, ChartConfigBuilder};
pub use crate::error::{BoxError, Error};
pub use crate::lda::Lda;
pub use crate::methods::{
    standard_suite, DiffusionMapReducer, FastIcaReducer, GaussianRpReducer, PcaReducer,
    SparseRpReducer, TsneReducer,
};
pub use crate::utils::{distinct_classes, format_duration, generate_test_data, standardize};
pub use crate::{project_all, run_comparison, Method, Projection, Reducer, VERBOSE};
