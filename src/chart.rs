use hsl::HSL;
use num_traits::Float;
use plotters::prelude::*;

use crate::{error::Error, Projection};

/// The default caption for the figure
const CAPTION: &str = "reduce-compare";

/// The default path where the figure will be saved
const PATH: &str = "comparison.png";

/// Configuration structure for the figure: caption, path, canvas size and
/// per-subplot styling.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub caption: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub marker_size: u32,
}

impl ChartConfig {
    /// Builder pattern for configuring the figure
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::default()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            caption: CAPTION.to_string(),
            path: PATH.to_string(),
            width: 1500,
            height: 1500,
            margin: 10,
            marker_size: 3,
        }
    }
}

/// Builder pattern for `ChartConfig` to allow flexible configuration
#[derive(Default)]
pub struct ChartConfigBuilder {
    caption: Option<String>,
    path: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    margin: Option<u32>,
    marker_size: Option<u32>,
}

impl ChartConfigBuilder {
    /// Set the caption drawn across the top of the figure
    pub fn caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    /// Set the path where the figure will be saved
    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Set the width of the figure in pixels
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height of the figure in pixels
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the margin around each subplot
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set the scatter marker radius in pixels
    pub fn marker_size(mut self, marker_size: u32) -> Self {
        self.marker_size = Some(marker_size);
        self
    }

    /// Build and return the final `ChartConfig`
    pub fn build(self) -> ChartConfig {
        let defaults = ChartConfig::default();
        ChartConfig {
            caption: self.caption.unwrap_or(defaults.caption),
            path: self.path.unwrap_or(defaults.path),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            margin: self.margin.unwrap_or(defaults.margin),
            marker_size: self.marker_size.unwrap_or(defaults.marker_size),
        }
    }
}

/// Grid shape for `n` subplots: near-square, row-major, large enough to hold
/// every entry. Eight methods land on the classic 3×3 grid with one empty
/// cell.
pub fn grid_dims(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let cols = (n as f64).sqrt().ceil() as usize;
    let rows = (n + cols - 1) / cols;
    (rows, cols)
}

/// Assign one HSL-spaced color per distinct label, keyed by the sorted label
/// values so the palette is deterministic across runs.
pub fn class_palette(labels: &[usize]) -> Vec<(usize, RGBColor)> {
    let mut unique: Vec<usize> = labels.to_vec();
    unique.sort_unstable();
    unique.dedup();

    unique
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            // Evenly distribute hues across the spectrum, keeping saturation
            // and lightness constant
            let hue = i as f64 * 360.0 / unique.len() as f64;
            let color = HSL {
                h: hue,
                s: 0.7,
                l: 0.6,
            }
            .to_rgb();
            (label, RGBColor(color.0, color.1, color.2))
        })
        .collect()
}

/// Axis range for one coordinate column, padded by 10% so markers at the
/// extremes are not clipped. Degenerate ranges (single point, constant
/// column) fall back to a unit window.
fn padded_range<F: Float>(values: impl Iterator<Item = F>) -> (F, F) {
    let (min, max) = values.fold((F::infinity(), F::neg_infinity()), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return (-F::one(), F::one());
    }

    let span = max - min;
    if span <= F::zero() {
        return (min - F::one(), max + F::one());
    }

    let pad = F::from(0.1).unwrap() * span;
    (min - pad, max + pad)
}

/// Render one subplot per projection into a row-major grid and save the
/// figure to `config.path`.
///
/// Every point is a filled circle in its class color with a contrasting
/// edge stroke; subplot titles are the method names, axes are labelled
/// "Component 1" / "Component 2". Cells past the last projection stay empty.
pub fn chart_grid(
    projections: &[Projection],
    labels: &[usize],
    config: Option<ChartConfig>,
) -> Result<(), Error> {
    let config = config.unwrap_or_default();
    let palette = class_palette(labels);

    let root =
        BitMapBackend::new(&config.path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| Error::Chart { source: e.into() })?;

    let titled = root
        .titled(&config.caption, ("sans-serif", 30))
        .map_err(|e| Error::Chart { source: e.into() })?;

    let (rows, cols) = grid_dims(projections.len());
    let cells = titled.split_evenly((rows, cols));

    for (projection, cell) in projections.iter().zip(cells.iter()) {
        let coords = &projection.coords;
        let (min_x, max_x) = padded_range(coords.column(0).iter().cloned());
        let (min_y, max_y) = padded_range(coords.column(1).iter().cloned());

        let mut chart = ChartBuilder::on(cell)
            .caption(&projection.name, ("sans-serif", 20))
            .margin(config.margin)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(min_x..max_x, min_y..max_y)
            .map_err(|e| Error::Chart { source: e.into() })?;

        chart
            .configure_mesh()
            .x_desc("Component 1")
            .y_desc("Component 2")
            .x_labels(5)
            .y_labels(5)
            .draw()
            .map_err(|e| Error::Chart { source: e.into() })?;

        // Class-colored fill
        chart
            .draw_series(coords.rows().into_iter().zip(labels.iter()).map(
                |(row, label)| {
                    let color = palette
                        .iter()
                        .find(|(l, _)| l == label)
                        .map(|(_, color)| *color)
                        .unwrap_or(RED);
                    Circle::new(
                        (row[0], row[1]),
                        config.marker_size as i32,
                        ShapeStyle {
                            color: color.into(),
                            filled: true,
                            stroke_width: 0,
                        },
                    )
                },
            ))
            .map_err(|e| Error::Chart { source: e.into() })?;

        // Contrasting edge stroke over each marker
        chart
            .draw_series(coords.rows().into_iter().map(|row| {
                Circle::new(
                    (row[0], row[1]),
                    config.marker_size as i32,
                    ShapeStyle {
                        color: BLACK.mix(0.6),
                        filled: false,
                        stroke_width: 1,
                    },
                )
            }))
            .map_err(|e| Error::Chart { source: e.into() })?;
    }

    root.present().map_err(|e| Error::Chart { source: e.into() })?;

    Ok(())
}
