use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CrosshairError, CrosshairResult};
use crate::render::Color;

/// Which crosshair parts are drawn.
///
/// The compact string form is any combination of `x` (vertical line), `y`
/// (horizontal line) and `d` (marker dots at the snapped sample), e.g.
/// `"xy"` or `"xd"`. The empty string and `"none"` disable the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CrosshairMode {
    vertical: bool,
    horizontal: bool,
    marker: bool,
}

impl CrosshairMode {
    pub const DISABLED: Self = Self::new(false, false, false);
    pub const VERTICAL: Self = Self::new(true, false, false);
    pub const HORIZONTAL: Self = Self::new(false, true, false);
    pub const BOTH: Self = Self::new(true, true, false);

    #[must_use]
    pub const fn new(vertical: bool, horizontal: bool, marker: bool) -> Self {
        Self {
            vertical,
            horizontal,
            marker,
        }
    }

    #[must_use]
    pub const fn with_marker(mut self) -> Self {
        self.marker = true;
        self
    }

    #[must_use]
    pub const fn shows_vertical(self) -> bool {
        self.vertical
    }

    #[must_use]
    pub const fn shows_horizontal(self) -> bool {
        self.horizontal
    }

    #[must_use]
    pub const fn shows_marker(self) -> bool {
        self.marker
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.vertical || self.horizontal || self.marker
    }
}

impl FromStr for CrosshairMode {
    type Err = CrosshairError;

    fn from_str(input: &str) -> CrosshairResult<Self> {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("none") {
            return Ok(Self::DISABLED);
        }

        let mut mode = Self::DISABLED;
        for flag in input.chars() {
            let slot = match flag {
                'x' => &mut mode.vertical,
                'y' => &mut mode.horizontal,
                'd' => &mut mode.marker,
                other => {
                    return Err(CrosshairError::InvalidConfig(format!(
                        "unknown crosshair mode flag `{other}` in `{input}`"
                    )));
                }
            };
            if *slot {
                return Err(CrosshairError::InvalidConfig(format!(
                    "duplicate crosshair mode flag `{flag}` in `{input}`"
                )));
            }
            *slot = true;
        }
        Ok(mode)
    }
}

impl fmt::Display for CrosshairMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_enabled() {
            return f.write_str("none");
        }
        for (enabled, flag) in [(self.vertical, "x"), (self.horizontal, "y"), (self.marker, "d")] {
            if enabled {
                f.write_str(flag)?;
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for CrosshairMode {
    type Error = CrosshairError;

    fn try_from(value: String) -> CrosshairResult<Self> {
        value.parse()
    }
}

impl From<CrosshairMode> for String {
    fn from(mode: CrosshairMode) -> Self {
        mode.to_string()
    }
}

/// Stroke color of marker dots.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStroke {
    /// Use the color of the series the dot belongs to.
    #[default]
    SeriesColor,
    Fixed(Color),
}

impl MarkerStroke {
    #[must_use]
    pub fn resolve(self, series_color: Color) -> Color {
        match self {
            Self::SeriesColor => series_color,
            Self::Fixed(color) => color,
        }
    }
}

/// Marker dot appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotStyle {
    pub radius: f64,
    pub line_width: f64,
    pub stroke: MarkerStroke,
    pub fill_color: Option<Color>,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            radius: 2.0,
            line_width: 2.0,
            stroke: MarkerStroke::SeriesColor,
            fill_color: None,
        }
    }
}

/// Crosshair options, fixed once the plugin is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairConfig {
    pub mode: CrosshairMode,
    pub color: Color,
    pub line_width: f64,
    /// Series whose samples the pointer snaps to; `None` tracks the raw pointer.
    pub snap_to_series_index: Option<usize>,
    pub dot_style: DotStyle,
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        Self {
            mode: CrosshairMode::DISABLED,
            color: Color::from_rgba8(170, 0, 0, 0.8),
            line_width: 1.0,
            snap_to_series_index: None,
            dot_style: DotStyle::default(),
        }
    }
}

impl CrosshairConfig {
    #[must_use]
    pub fn new(mode: CrosshairMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_snap_to_series(mut self, series_index: usize) -> Self {
        self.snap_to_series_index = Some(series_index);
        self
    }

    #[must_use]
    pub fn with_dot_style(mut self, dot_style: DotStyle) -> Self {
        self.dot_style = dot_style;
        self
    }

    pub fn validate(self) -> CrosshairResult<Self> {
        super::validation::validate_crosshair_config(self)
    }

    /// Half-pixel shift that keeps odd-width lines on the pixel grid.
    #[must_use]
    pub fn crisp_line_offset(self) -> f64 {
        if self.line_width % 2.0 != 0.0 { 0.5 } else { 0.0 }
    }

    #[must_use]
    pub fn draws_markers(self) -> bool {
        self.mode.shows_marker() && self.snap_to_series_index.is_some()
    }
}
