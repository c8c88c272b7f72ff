//! chart-crosshair: crosshair overlay for 2-D charts.
//!
//! The crate tracks a crosshair position from pointer events or explicit API
//! calls, optionally snaps it to the nearest sample of a series, supports
//! locking, and paints guide lines plus marker dots through a backend-agnostic
//! drawing surface. Coordinate transforms, series storage and event wiring
//! stay with the host chart behind the `PlotGeometry` and `ChartHost` traits.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartHost, CrosshairConfig, CrosshairMode, CrosshairPlugin};
pub use error::{CrosshairError, CrosshairResult};
