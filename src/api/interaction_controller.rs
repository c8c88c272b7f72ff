use tracing::{debug, warn};

use crate::core::PixelPoint;
use crate::interaction::{PointerEvent, clamp_to_plot};

use super::{ChartHost, CrosshairPlugin, SnapResult, resolve_snap};

impl CrosshairPlugin {
    /// Entry point for pointer events delivered through the subscriptions
    /// taken by `attach`. Events are ignored while detached.
    pub fn handle_pointer_event<H: ChartHost + ?Sized>(&mut self, host: &mut H, event: PointerEvent) {
        if !self.is_attached() {
            debug!(?event, "crosshair detached; ignoring pointer event");
            return;
        }
        match event {
            PointerEvent::Move { x, y } => self.pointer_move(host, x, y),
            PointerEvent::Leave => self.pointer_leave(host),
        }
    }

    /// Tracks the pointer at host coordinates `(x, y)`.
    pub fn pointer_move<H: ChartHost + ?Sized>(&mut self, host: &mut H, x: f64, y: f64) {
        if self.tracker.is_locked() {
            return;
        }

        if host.is_region_selection_active() {
            if self.tracker.is_active() {
                self.tracker.clear();
                host.request_redraw();
            }
            return;
        }

        let offset = host.plot_offset();
        let raw = PixelPoint::new(x - offset.left, y - offset.top);
        let Some(clamped) = clamp_to_plot(raw, host.plot_width(), host.plot_height()) else {
            warn!(x, y, "NaN pointer position; hiding crosshair");
            if self.tracker.is_active() {
                self.tracker.clear();
                host.request_redraw();
            }
            return;
        };

        match self.config.snap_to_series_index {
            None => self.tracker.set_position(Some(clamped), None),
            Some(series_index) => match snap_pointer(&*host, series_index, clamped) {
                Some(snap) => self
                    .tracker
                    .set_position(Some(snap.pixel), Some(snap.sample_index)),
                None => {
                    warn!(series_index, "no sample to snap to; hiding crosshair");
                    self.tracker.clear();
                }
            },
        }
        host.request_redraw();
    }

    /// Hides the crosshair when the pointer leaves the plot, unless locked.
    pub fn pointer_leave<H: ChartHost + ?Sized>(&mut self, host: &mut H) {
        if self.tracker.is_locked() || !self.tracker.is_active() {
            return;
        }
        self.tracker.clear();
        host.request_redraw();
    }
}

fn snap_pointer<H: ChartHost + ?Sized>(
    host: &H,
    series_index: usize,
    pixel: PixelPoint,
) -> Option<SnapResult> {
    let series = host.series_list().get(series_index)?;
    let target_x = host.pixel_to_data(pixel).get(&series.x_axis)?;
    resolve_snap(host, series, target_x)
}
