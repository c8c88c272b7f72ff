mod frame;
mod primitives;
mod recording_surface;
mod surface;

pub use frame::OverlayFrame;
pub use primitives::{Color, LinePrimitive, MarkerPrimitive};
pub use recording_surface::{RecordingSurface, SurfaceOp};
pub use surface::{DrawSurface, with_saved_state};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
