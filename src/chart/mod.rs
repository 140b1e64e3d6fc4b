//! Scenario chart rendering with the [`plotters`] crate
//!
//! Each scenario block owns one [`ScenarioChart`]: every record in the
//! block overlays its curves on the shared axes, and the chart is rendered
//! once as a 1200x800 PNG when the block ends.

use crate::{
    analyzer::CurveSeries,
    error::{AppError, Result},
};
use plotters::prelude::*;
use std::path::Path;

/// Chart resolution in pixels
const CHART_SIZE: (u32, u32) = (1200, 800);

/// One chart shared by all records of a scenario block
#[derive(Debug, Clone)]
pub struct ScenarioChart {
    title: String,
    curves: Vec<CurveSeries>,
}

impl ScenarioChart {
    /// Create an empty chart with the given title
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            curves: Vec::new(),
        }
    }

    /// Overlay one curve on the chart
    pub fn add_curve(&mut self, curve: CurveSeries) {
        self.curves.push(curve);
    }

    /// Get the chart title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of curves added so far
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Whether the chart has anything to draw
    pub fn is_empty(&self) -> bool {
        self.curves.iter().all(|c| c.points.is_empty())
    }

    /// Data range across all curves, padded so a flat series stays visible
    fn data_ranges(&self) -> ((f64, f64), (f64, f64)) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for (x, y) in self
            .curves
            .iter()
            .flat_map(|c| c.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
        {
            x_min = x_min.min(*x);
            x_max = x_max.max(*x);
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }

        if !x_min.is_finite() {
            return ((0.0, 1.0), (0.0, 1.0));
        }

        if x_max - x_min < f64::EPSILON {
            x_max = x_min + 1.0;
        }
        if y_max - y_min < f64::EPSILON {
            y_max = y_min + 1.0;
        }

        ((x_min, x_max), (y_min, y_max))
    }

    /// Render the chart as a PNG file
    pub fn render(&self, path: &Path) -> Result<()> {
        if self.is_empty() {
            return Err(AppError::chart(format!(
                "nothing to draw for chart {:?}",
                self.title
            )));
        }

        let ((x_min, x_max), (y_min, y_max)) = self.data_ranges();

        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| AppError::chart(format!("failed to clear drawing area: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| AppError::chart(format!("failed to configure chart: {}", e)))?;

        chart
            .configure_mesh()
            .x_desc("Time [s]")
            .y_desc("Measurement [b/ms], [s] or [#]")
            .label_style(("sans-serif", 16))
            .draw()
            .map_err(|e| AppError::chart(format!("failed to draw axes: {}", e)))?;

        for (index, curve) in self.curves.iter().enumerate() {
            let color = Palette99::pick(index).to_rgba();
            chart
                .draw_series(LineSeries::new(curve.points.iter().copied(), &color))
                .map_err(|e| AppError::chart(format!("failed to draw series: {}", e)))?
                .label(curve.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .label_font(("sans-serif", 16))
            .draw()
            .map_err(|e| AppError::chart(format!("failed to draw legend: {}", e)))?;

        root.present()
            .map_err(|e| AppError::chart(format!("failed to save chart to {:?}: {}", path, e)))?;

        Ok(())
    }
}

/// Build a filesystem-safe chart file name for a scenario
pub fn chart_file_name(index: usize, scenario: &str) -> String {
    let slug: String = scenario
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        format!("scenario_{:02}.png", index)
    } else {
        format!("scenario_{:02}_{}.png", index, slug)
    }
}
