use serde::{Deserialize, Serialize};

use crate::core::{PlotGeometry, Series};
use crate::interaction::PointerEventKind;

/// Handle returned by the host for one pointer subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

/// Runtime services the crosshair consumes from the host chart.
pub trait ChartHost: PlotGeometry {
    /// Series in draw order.
    fn series_list(&self) -> &[Series];

    /// Whether a region selection drag is in progress. Hosts without
    /// selection support keep the default.
    fn is_region_selection_active(&self) -> bool {
        false
    }

    /// Schedules an overlay redraw; coalescing is up to the host.
    fn request_redraw(&mut self);

    fn subscribe_pointer(&mut self, kind: PointerEventKind) -> SubscriptionId;

    fn unsubscribe_pointer(&mut self, id: SubscriptionId);
}
