//! Figures for sampling runs. Requires the `plot` feature.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::estimate::EstimateTrace;
use crate::geom::{Point, Square};
use plotters::prelude::*;
use std::f64::consts::PI;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum PlotError {
    /// Tried to draw a figure of an empty trace
    EmptyTrace,
    /// The backend failed to render or write the figure
    Render { msg: String },
}

impl PlotError {
    fn render<E: fmt::Display>(err: E) -> Self {
        PlotError::Render {
            msg: err.to_string(),
        }
    }
}

impl std::error::Error for PlotError {}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTrace => write!(f, "cannot draw an empty trace"),
            Self::Render { msg } => write!(f, "rendering failed: {}", msg),
        }
    }
}

/// Draw the running estimate against the observation count as an SVG
/// scatter, with a red reference line at true π.
///
/// # Example
///
/// ```no_run
/// use mcpi::estimate::BatchEstimator;
/// use mcpi::plot::convergence_figure;
/// use mcpi::traits::PiEstimator;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(42);
/// let trace = BatchEstimator::default().trace(10_000, &mut rng);
///
/// convergence_figure(&trace, "convergence.svg").unwrap();
/// ```
pub fn convergence_figure<P: AsRef<Path>>(
    trace: &EstimateTrace,
    path: P,
) -> Result<(), PlotError> {
    if trace.is_empty() {
        return Err(PlotError::EmptyTrace);
    }

    let (lo, hi) = trace
        .iter()
        .fold((PI, PI), |(lo, hi), &est| (lo.min(est), hi.max(est)));
    let n = trace.len() as f64;

    let root = SVGBackend::new(path.as_ref(), (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..(n + 1.0), (lo - 0.1)..(hi + 0.1))
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_desc("observations")
        .y_desc("pi_estimate")
        .draw()
        .map_err(PlotError::render)?;

    chart
        .draw_series(
            trace
                .observations()
                .map(|(k, est)| Circle::new((k as f64, est), 2, BLUE.filled())),
        )
        .map_err(PlotError::render)?;

    chart
        .draw_series(LineSeries::new(vec![(0.0, PI), (n + 1.0, PI)], &RED))
        .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)
}

/// Draw a classified sample as an SVG scatter: the square and its inscribed
/// circle outlined in black, with hits drawn in red and misses in blue.
///
/// # Example
///
/// ```no_run
/// use mcpi::estimate::BatchEstimator;
/// use mcpi::plot::sample_scatter;
/// use mcpi::traits::PiEstimator;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(42);
/// let estimator = BatchEstimator::default();
/// let points = estimator.classified_sample(1_000, &mut rng);
///
/// sample_scatter(estimator.square(), &points, "scatter.svg").unwrap();
/// ```
pub fn sample_scatter<P: AsRef<Path>>(
    square: &Square,
    points: &[(Point, bool)],
    path: P,
) -> Result<(), PlotError> {
    let (xa, xb) = square.x_bounds();
    let (ya, yb) = square.y_bounds();
    let pad = square.side() * 0.05;

    let root = SVGBackend::new(path.as_ref(), (600, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::render)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((xa - pad)..(xb + pad), (ya - pad)..(yb + pad))
        .map_err(PlotError::render)?;

    chart.configure_mesh().draw().map_err(PlotError::render)?;

    chart
        .draw_series(LineSeries::new(
            vec![(xa, ya), (xb, ya), (xb, yb), (xa, yb), (xa, ya)],
            &BLACK,
        ))
        .map_err(PlotError::render)?;

    let circle = square.inscribed_circle();
    let center = circle.center();
    let radius = circle.radius();
    chart
        .draw_series(LineSeries::new(
            (0..=360).map(|deg| {
                let theta = f64::from(deg).to_radians();
                (
                    radius.mul_add(theta.cos(), center.x),
                    radius.mul_add(theta.sin(), center.y),
                )
            }),
            &BLACK,
        ))
        .map_err(PlotError::render)?;

    let hits = points.iter().filter(|(_, hit)| *hit);
    chart
        .draw_series(hits.map(|&(pt, _)| Circle::new((pt.x, pt.y), 2, RED.filled())))
        .map_err(PlotError::render)?;

    let misses = points.iter().filter(|(_, hit)| !*hit);
    chart
        .draw_series(misses.map(|&(pt, _)| Circle::new((pt.x, pt.y), 2, BLUE.filled())))
        .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)
}
