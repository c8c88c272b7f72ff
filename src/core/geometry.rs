use indexmap::IndexMap;

use crate::core::{AxisPosition, LinearScale, PixelPoint, PlotOffset};
use crate::error::{CrosshairError, CrosshairResult};

/// Coordinate transforms and plot metrics provided by the host chart.
///
/// Pixel positions are plot-local. `data_to_pixel` returns `None` when the
/// position does not name an axis for both directions.
pub trait PlotGeometry {
    fn pixel_to_data(&self, pixel: PixelPoint) -> AxisPosition;
    fn data_to_pixel(&self, position: &AxisPosition) -> Option<PixelPoint>;
    fn plot_width(&self) -> f64;
    fn plot_height(&self) -> f64;
    fn plot_offset(&self) -> PlotOffset;
}

/// Plot geometry with any number of named linear axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPlotGeometry {
    width: f64,
    height: f64,
    offset: PlotOffset,
    x_axes: IndexMap<String, LinearScale>,
    y_axes: IndexMap<String, LinearScale>,
}

impl LinearPlotGeometry {
    pub fn new(width: f64, height: f64) -> CrosshairResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(CrosshairError::InvalidData(format!(
                "plot size must be finite and > 0: width={width}, height={height}"
            )));
        }
        Ok(Self {
            width,
            height,
            offset: PlotOffset::default(),
            x_axes: IndexMap::new(),
            y_axes: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn with_offset(mut self, left: f64, top: f64) -> Self {
        self.offset = PlotOffset::new(left, top);
        self
    }

    /// Adds (or replaces) a horizontal axis. Names must start with `x`.
    pub fn with_x_axis(
        mut self,
        name: impl Into<String>,
        domain_start: f64,
        domain_end: f64,
    ) -> CrosshairResult<Self> {
        let name = validate_axis_name(name.into(), 'x')?;
        self.x_axes
            .insert(name, LinearScale::new(domain_start, domain_end)?);
        Ok(self)
    }

    /// Adds (or replaces) a vertical axis. Names must start with `y`; larger
    /// values are drawn higher up.
    pub fn with_y_axis(
        mut self,
        name: impl Into<String>,
        domain_start: f64,
        domain_end: f64,
    ) -> CrosshairResult<Self> {
        let name = validate_axis_name(name.into(), 'y')?;
        self.y_axes
            .insert(name, LinearScale::new(domain_start, domain_end)?.inverted());
        Ok(self)
    }

    pub fn set_offset(&mut self, offset: PlotOffset) {
        self.offset = offset;
    }

    #[must_use]
    pub fn x_axis(&self, name: &str) -> Option<LinearScale> {
        self.x_axes.get(name).copied()
    }

    #[must_use]
    pub fn y_axis(&self, name: &str) -> Option<LinearScale> {
        self.y_axes.get(name).copied()
    }
}

impl PlotGeometry for LinearPlotGeometry {
    fn pixel_to_data(&self, pixel: PixelPoint) -> AxisPosition {
        let mut position = AxisPosition::new();
        for (name, scale) in &self.x_axes {
            position.insert(name.as_str(), scale.pixel_to_domain(pixel.x, self.width));
        }
        for (name, scale) in &self.y_axes {
            position.insert(name.as_str(), scale.pixel_to_domain(pixel.y, self.height));
        }
        position
    }

    fn data_to_pixel(&self, position: &AxisPosition) -> Option<PixelPoint> {
        // Later axes win when a position names several of the same direction.
        let x = self
            .x_axes
            .iter()
            .filter_map(|(name, scale)| {
                position
                    .get(name)
                    .map(|value| scale.domain_to_pixel(value, self.width))
            })
            .last()?;
        let y = self
            .y_axes
            .iter()
            .filter_map(|(name, scale)| {
                position
                    .get(name)
                    .map(|value| scale.domain_to_pixel(value, self.height))
            })
            .last()?;
        Some(PixelPoint::new(x, y))
    }

    fn plot_width(&self) -> f64 {
        self.width
    }

    fn plot_height(&self) -> f64 {
        self.height
    }

    fn plot_offset(&self) -> PlotOffset {
        self.offset
    }
}

fn validate_axis_name(name: String, direction: char) -> CrosshairResult<String> {
    let mut chars = name.chars();
    let valid = chars.next() == Some(direction) && chars.all(|c| c.is_ascii_digit());
    if !valid {
        return Err(CrosshairError::InvalidData(format!(
            "axis name `{name}` must be `{direction}` optionally followed by a number"
        )));
    }
    Ok(name)
}
