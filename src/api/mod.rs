//! Public crosshair API: configuration, the per-chart plugin and the host
//! contract it runs against.

mod crosshair_config;
mod crosshair_controller;
mod crosshair_plugin;
mod headless_host;
mod hooks;
mod host;
mod interaction_controller;
mod json_contract;
mod overlay_renderer;
mod snap_resolver;
mod validation;

pub use crosshair_config::{CrosshairConfig, CrosshairMode, DotStyle, MarkerStroke};
pub use crosshair_plugin::CrosshairPlugin;
pub use headless_host::HeadlessChartHost;
pub use hooks::{ClearHook, CrosshairHooks, DrawHook};
pub use host::{ChartHost, SubscriptionId};
pub use json_contract::{CROSSHAIR_CONFIG_JSON_SCHEMA_V1, CrosshairConfigJsonContractV1};
pub use snap_resolver::{SnapResult, nearest_sample_index, resolve_snap};
