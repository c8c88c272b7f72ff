use std::f64::consts::TAU;

use cairo::{Context, LineJoin};

use crate::error::{CrosshairError, CrosshairResult};
use crate::render::{Color, DrawSurface, LinePrimitive, MarkerPrimitive};

/// `DrawSurface` over an external Cairo context (for example the overlay pass
/// of a GTK `DrawingArea` callback).
///
/// The host translates the context to the plot origin before handing it over.
pub struct CairoSurface<'a> {
    context: &'a Context,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }
}

impl DrawSurface for CairoSurface<'_> {
    fn save(&mut self) -> CrosshairResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> CrosshairResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn stroke_line(&mut self, line: &LinePrimitive) -> CrosshairResult<()> {
        apply_color(self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        self.context.set_line_join(LineJoin::Round);
        self.context.new_path();
        self.context.move_to(line.x1, line.y1);
        self.context.line_to(line.x2, line.y2);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke crosshair line", err))
    }

    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> CrosshairResult<()> {
        self.context.new_path();
        self.context.arc(marker.x, marker.y, marker.radius, 0.0, TAU);
        if let Some(fill) = marker.fill_color {
            apply_color(self.context, fill);
            self.context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill crosshair marker", err))?;
        }
        if marker.stroke_width > 0.0 {
            apply_color(self.context, marker.stroke_color);
            self.context.set_line_width(marker.stroke_width);
            self.context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke crosshair marker", err))?;
        } else {
            self.context.new_path();
        }
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> CrosshairError {
    CrosshairError::Surface(format!("{prefix}: {err}"))
}
