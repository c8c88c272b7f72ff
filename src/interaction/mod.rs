use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

/// Pointer events the crosshair subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    Move,
    Leave,
}

/// Pointer event in host surface coordinates (plot offset not yet removed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Leave,
}

impl PointerEvent {
    #[must_use]
    pub fn kind(self) -> PointerEventKind {
        match self {
            Self::Move { .. } => PointerEventKind::Move,
            Self::Leave => PointerEventKind::Leave,
        }
    }
}

/// Public crosshair state exposed to host applications.
///
/// `position == None` means the crosshair is hidden. `snapped_index` is only
/// set while a snapped position is active.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CrosshairState {
    pub position: Option<PixelPoint>,
    pub locked: bool,
    pub snapped_index: Option<usize>,
}

impl CrosshairState {
    #[must_use]
    pub fn is_active(self) -> bool {
        self.position.is_some()
    }
}

/// Clamps a plot-local point into `[0, width] x [0, height]`.
///
/// Infinite coordinates land on the matching plot edge. Returns `None` when
/// either coordinate is NaN so it never reaches drawing calls.
#[must_use]
pub fn clamp_to_plot(point: PixelPoint, width: f64, height: f64) -> Option<PixelPoint> {
    if point.x.is_nan() || point.y.is_nan() {
        return None;
    }
    Some(PixelPoint::new(
        point.x.clamp(0.0, width.max(0.0)),
        point.y.clamp(0.0, height.max(0.0)),
    ))
}

/// Owner of the crosshair position and lock flag.
///
/// The tracker is the only writer of `CrosshairState`; the overlay pass reads
/// snapshots through `state`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionTracker {
    state: CrosshairState,
}

impl PositionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(self) -> CrosshairState {
        self.state
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.state.is_active()
    }

    #[must_use]
    pub fn is_locked(self) -> bool {
        self.state.locked
    }

    /// Stores a plot-local position; non-finite points hide the crosshair.
    pub fn set_position(&mut self, position: Option<PixelPoint>, snapped_index: Option<usize>) {
        match position.filter(|point| point.is_finite()) {
            Some(point) => {
                self.state.position = Some(point);
                self.state.snapped_index = snapped_index;
            }
            None => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.state.position = None;
        self.state.snapped_index = None;
    }

    pub fn lock(&mut self) {
        self.state.locked = true;
    }

    pub fn unlock(&mut self) {
        self.state.locked = false;
    }
}
