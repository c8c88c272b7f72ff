use tracing::warn;

use crate::core::AxisPosition;
use crate::interaction::clamp_to_plot;

use super::{ChartHost, CrosshairPlugin};

impl CrosshairPlugin {
    /// Moves the crosshair to a data-space position, or hides it with `None`.
    ///
    /// Applies even while locked and always requests a redraw.
    pub fn set_crosshair<H: ChartHost + ?Sized>(
        &mut self,
        host: &mut H,
        position: Option<&AxisPosition>,
    ) {
        let pixel = position.and_then(|position| {
            let pixel = host
                .data_to_pixel(position)
                .and_then(|pixel| clamp_to_plot(pixel, host.plot_width(), host.plot_height()));
            if pixel.is_none() {
                warn!(?position, "crosshair position cannot be mapped to the plot; hiding");
            }
            pixel
        });
        self.tracker.set_position(pixel, None);
        host.request_redraw();
    }

    pub fn clear_crosshair<H: ChartHost + ?Sized>(&mut self, host: &mut H) {
        self.set_crosshair(host, None);
    }

    /// Optionally moves the crosshair, then stops it from following the pointer.
    pub fn lock_crosshair<H: ChartHost + ?Sized>(
        &mut self,
        host: &mut H,
        position: Option<&AxisPosition>,
    ) {
        if position.is_some() {
            self.set_crosshair(host, position);
        }
        self.tracker.lock();
    }

    /// Resumes pointer tracking. Position and redraw state are left alone.
    pub fn unlock_crosshair(&mut self) {
        self.tracker.unlock();
    }
}
