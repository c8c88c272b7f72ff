use smallvec::SmallVec;
use tracing::warn;

use crate::error::CrosshairResult;
use crate::render::{DrawSurface, LinePrimitive, MarkerPrimitive};

/// Primitives for one crosshair overlay pass.
///
/// Primitives that fail validation are dropped on insertion so malformed
/// geometry never reaches the drawing surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayFrame {
    pub lines: SmallVec<[LinePrimitive; 2]>,
    pub markers: Vec<MarkerPrimitive>,
}

impl OverlayFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the line was dropped.
    pub fn push_line(&mut self, line: LinePrimitive) -> bool {
        match line.validate() {
            Ok(()) => {
                self.lines.push(line);
                true
            }
            Err(err) => {
                warn!(error = %err, "dropping crosshair guide line");
                false
            }
        }
    }

    /// Returns `false` when the marker was dropped.
    pub fn push_marker(&mut self, marker: MarkerPrimitive) -> bool {
        match marker.validate() {
            Ok(()) => {
                self.markers.push(marker);
                true
            }
            Err(err) => {
                warn!(error = %err, "dropping crosshair marker");
                false
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.markers.is_empty()
    }

    /// Paints lines first, then markers in insertion order.
    pub fn paint(&self, surface: &mut dyn DrawSurface) -> CrosshairResult<()> {
        for line in &self.lines {
            surface.stroke_line(line)?;
        }
        for marker in &self.markers {
            surface.draw_marker(marker)?;
        }
        Ok(())
    }
}
