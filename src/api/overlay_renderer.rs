use crate::error::CrosshairResult;
use crate::render::{DrawSurface, LinePrimitive, MarkerPrimitive, OverlayFrame, with_saved_state};

use super::{ChartHost, CrosshairPlugin};

impl CrosshairPlugin {
    /// Default overlay primitives for the current state, in plot-local pixels.
    ///
    /// Empty when the mode is disabled or the crosshair is hidden.
    #[must_use]
    pub fn overlay_frame<H: ChartHost + ?Sized>(&self, host: &H) -> OverlayFrame {
        let mut frame = OverlayFrame::new();
        let config = self.config;
        let state = self.tracker.state();
        let Some(position) = state.position.filter(|_| config.mode.is_enabled()) else {
            return frame;
        };

        let adjust = config.crisp_line_offset();
        if config.mode.shows_vertical() {
            let x = position.x.floor() + adjust;
            frame.push_line(LinePrimitive::new(
                x,
                0.0,
                x,
                host.plot_height(),
                config.line_width,
                config.color,
            ));
        }
        if config.mode.shows_horizontal() {
            let y = position.y.floor() + adjust;
            frame.push_line(LinePrimitive::new(
                0.0,
                y,
                host.plot_width(),
                y,
                config.line_width,
                config.color,
            ));
        }

        if let Some(index) = state.snapped_index.filter(|_| config.draws_markers()) {
            let dot = config.dot_style;
            // Reverse order so earlier series end up on top.
            for series in host.series_list().iter().rev() {
                let Some(center) = series
                    .sample_position(index)
                    .and_then(|position| host.data_to_pixel(&position))
                else {
                    continue;
                };
                frame.push_marker(MarkerPrimitive {
                    x: center.x,
                    y: center.y,
                    radius: dot.radius,
                    stroke_width: dot.line_width,
                    stroke_color: dot.stroke.resolve(series.color),
                    fill_color: dot.fill_color,
                });
            }
        }

        frame
    }

    /// Overlay pass, called by the host once per redraw cycle with a surface
    /// translated to the plot origin.
    ///
    /// Paints the guide lines, marker dots and the `on_draw` hook inside one
    /// save/restore scope. When the crosshair is hidden only `on_clear` runs.
    pub fn draw_overlay<H: ChartHost + ?Sized>(
        &mut self,
        host: &H,
        surface: &mut dyn DrawSurface,
    ) -> CrosshairResult<()> {
        if !self.config.mode.is_enabled() {
            return Ok(());
        }

        let state = self.tracker.state();
        if !state.is_active() {
            if let Some(on_clear) = self.hooks.on_clear.as_mut() {
                on_clear();
            }
            return Ok(());
        }

        let frame = self.overlay_frame(host);
        let on_draw = &mut self.hooks.on_draw;
        with_saved_state(surface, |surface| {
            frame.paint(surface)?;
            if let Some(on_draw) = on_draw.as_mut() {
                on_draw(&state, surface)?;
            }
            Ok(())
        })
    }
}
