use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Point in plot-local pixel space (origin at the plot area's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Distance from the host surface origin to the plot area's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotOffset {
    pub left: f64,
    pub top: f64,
}

impl PlotOffset {
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Data-space position keyed by axis name (`x`, `x2`, `y`, `y2`, ...).
///
/// Axis names follow the usual convention: the first character is the axis
/// direction and an optional numeric suffix selects a secondary axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisPosition(IndexMap<String, f64>);

impl AxisPosition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a position on the primary `x`/`y` axes.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new().with("x", x).with("y", y)
    }

    #[must_use]
    pub fn with(mut self, axis: impl Into<String>, value: f64) -> Self {
        self.insert(axis, value);
        self
    }

    pub fn insert(&mut self, axis: impl Into<String>, value: f64) {
        self.0.insert(axis.into(), value);
    }

    #[must_use]
    pub fn get(&self, axis: &str) -> Option<f64> {
        self.0.get(axis).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(axis, value)| (axis.as_str(), *value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One data sample. Series keep samples sorted ascending by `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Host-owned data series as seen by the crosshair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub data: Vec<Sample>,
    pub color: Color,
    #[serde(default = "default_x_axis")]
    pub x_axis: String,
    #[serde(default = "default_y_axis")]
    pub y_axis: String,
}

impl Series {
    #[must_use]
    pub fn new(data: Vec<Sample>, color: Color) -> Self {
        Self {
            data,
            color,
            x_axis: default_x_axis(),
            y_axis: default_y_axis(),
        }
    }

    /// Binds the series to named axes, e.g. `("x2", "y2")`.
    #[must_use]
    pub fn with_axes(mut self, x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        self.x_axis = x_axis.into();
        self.y_axis = y_axis.into();
        self
    }

    /// Data-space position of the sample at `index` on this series' axes.
    #[must_use]
    pub fn sample_position(&self, index: usize) -> Option<AxisPosition> {
        let sample = self.data.get(index)?;
        Some(
            AxisPosition::new()
                .with(self.x_axis.as_str(), sample.x)
                .with(self.y_axis.as_str(), sample.y),
        )
    }
}

fn default_x_axis() -> String {
    "x".to_owned()
}

fn default_y_axis() -> String {
    "y".to_owned()
}
