use crate::error::CrosshairResult;
use crate::render::{LinePrimitive, MarkerPrimitive};

/// Drawing surface handed to the overlay by the host chart.
///
/// The surface is already translated into plot-local coordinates. Style and
/// clip changes made between `save` and `restore` must not outlive the pair.
pub trait DrawSurface {
    fn save(&mut self) -> CrosshairResult<()>;
    fn restore(&mut self) -> CrosshairResult<()>;
    fn stroke_line(&mut self, line: &LinePrimitive) -> CrosshairResult<()>;
    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> CrosshairResult<()>;
}

/// Runs `draw` between `save` and `restore`.
///
/// `restore` is issued even when `draw` fails; the first error wins.
pub fn with_saved_state<T>(
    surface: &mut dyn DrawSurface,
    draw: impl FnOnce(&mut dyn DrawSurface) -> CrosshairResult<T>,
) -> CrosshairResult<T> {
    surface.save()?;
    let drawn = draw(&mut *surface);
    let restored = surface.restore();
    match (drawn, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Err(err), _) | (Ok(_), Err(err)) => Err(err),
    }
}
