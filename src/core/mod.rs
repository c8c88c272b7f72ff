pub mod geometry;
pub mod scale;
pub mod types;

pub use geometry::{LinearPlotGeometry, PlotGeometry};
pub use scale::LinearScale;
pub use types::{AxisPosition, PixelPoint, PlotOffset, Sample, Series};
