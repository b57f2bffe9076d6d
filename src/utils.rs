use ndarray::{Array2, Axis};
use rand::Rng;

/// Standardize each column in place: subtract the column mean and divide by
/// the column standard deviation. Constant columns are left centered but
/// undivided so no NaN can appear.
pub fn standardize(records: &mut Array2<f64>) {
    let n = records.nrows();
    if n == 0 {
        return;
    }

    for mut column in records.axis_iter_mut(Axis(1)) {
        let mean = column.iter().sum::<f64>() / n as f64;
        let var = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        let std = var.sqrt();
        let scale = if std > f64::EPSILON { std } else { 1.0 };

        column.mapv_inplace(|v| (v - mean) / scale);
    }
}

/// Generate a uniform-random sample matrix, used by tests and benchmarks.
pub fn generate_test_data(num_samples: usize, num_features: usize) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    Array2::from_shape_fn((num_samples, num_features), |_| rng.gen::<f64>())
}

/// Number of distinct classes in a label vector.
pub fn distinct_classes(labels: &[usize]) -> usize {
    let mut classes = labels.to_vec();
    classes.sort_unstable();
    classes.dedup();
    classes.len()
}

/// Format an elapsed duration as `HH:MM:SS`.
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
