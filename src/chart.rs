//! Chart data for the metrics line chart.
//!
//! `chart_points` reshapes a patient's readings into per-session points and
//! `ChartLayout` maps those points onto SVG coordinates.

use crate::patient::Patient;

pub const ANXIETY_COLOR: &str = "#8884d8";
pub const STABILITY_COLOR: &str = "#82ca9d";

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MAX_Y_TICKS: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub session: String,
    pub anxiety: f64,
    pub stability: f64,
}

impl ChartPoint {
    /// Text shown while the pointer rests on one of this session's dots.
    pub fn readout(&self) -> String {
        format!(
            "{}: {} {}, {} {}",
            self.session,
            Series::Anxiety.label(),
            self.anxiety,
            Series::Stability.label(),
            self.stability
        )
    }
}

/// One point per session, labelled "Session 1", "Session 2", ...
pub fn chart_points(patient: &Patient) -> Vec<ChartPoint> {
    patient
        .metrics
        .readings()
        .iter()
        .enumerate()
        .map(|(i, reading)| ChartPoint {
            session: format!("Session {}", i + 1),
            anxiety: reading.anxiety,
            stability: reading.stability,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Anxiety,
    Stability,
}

impl Series {
    pub fn label(&self) -> &'static str {
        match self {
            Series::Anxiety => "Anxiety",
            Series::Stability => "Stability",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Series::Anxiety => ANXIETY_COLOR,
            Series::Stability => STABILITY_COLOR,
        }
    }
}

/// SVG coordinates for a two-series line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub anxiety: Vec<(f64, f64)>,
    pub stability: Vec<(f64, f64)>,
    pub x_labels: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
}

impl ChartLayout {
    /// The y range always includes 0 and extends to the lowest and highest
    /// readings, widened to whole ticks.
    pub fn new(width: f64, height: f64, points: &[ChartPoint]) -> Self {
        let values = || points.iter().flat_map(|p| [p.anxiety, p.stability]);
        let low = values().fold(0.0_f64, f64::min).floor() as i64;
        let high = (values().fold(0.0_f64, f64::max).ceil() as i64).max(low + 1);
        let step = ((high - low) as u64).div_ceil(MAX_Y_TICKS).max(1) as i64;
        let y_min = low.div_euclid(step) * step;
        let y_max = y_min + ((high - y_min) as u64).div_ceil(step as u64) as i64 * step;

        let mut layout = Self {
            width,
            height,
            y_min: y_min as f64,
            y_max: y_max as f64,
            anxiety: Vec::with_capacity(points.len()),
            stability: Vec::with_capacity(points.len()),
            x_labels: Vec::with_capacity(points.len()),
            y_ticks: Vec::new(),
        };

        for (i, point) in points.iter().enumerate() {
            let x = layout.x_at(i, points.len());
            let anxiety_y = layout.y_at(point.anxiety);
            let stability_y = layout.y_at(point.stability);
            layout.anxiety.push((x, anxiety_y));
            layout.stability.push((x, stability_y));
            layout.x_labels.push((x, point.session.clone()));
        }

        let y_ticks = (y_min..=y_max)
            .step_by(step as usize)
            .map(|v| (layout.y_at(v as f64), v.to_string()))
            .collect();
        layout.y_ticks = y_ticks;

        layout
    }

    pub fn plot_left(&self) -> f64 {
        MARGIN_LEFT
    }

    pub fn plot_right(&self) -> f64 {
        self.width - MARGIN_RIGHT
    }

    pub fn plot_top(&self) -> f64 {
        MARGIN_TOP
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - MARGIN_BOTTOM
    }

    /// Coordinates for `series` in SVG `points` attribute form.
    pub fn polyline(&self, series: Series) -> String {
        self.coords(series)
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn coords(&self, series: Series) -> &[(f64, f64)] {
        match series {
            Series::Anxiety => &self.anxiety,
            Series::Stability => &self.stability,
        }
    }

    fn x_at(&self, index: usize, count: usize) -> f64 {
        let plot_width = self.plot_right() - self.plot_left();
        if count <= 1 {
            return self.plot_left() + plot_width / 2.0;
        }
        self.plot_left() + plot_width * index as f64 / (count - 1) as f64
    }

    fn y_at(&self, value: f64) -> f64 {
        let plot_height = self.plot_bottom() - self.plot_top();
        let clamped = value.clamp(self.y_min, self.y_max);
        let fraction = (clamped - self.y_min) / (self.y_max - self.y_min);
        self.plot_top() + plot_height * (1.0 - fraction)
    }
}
