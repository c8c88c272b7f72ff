use indexmap::IndexMap;

use crate::core::{AxisPosition, LinearPlotGeometry, PixelPoint, PlotGeometry, PlotOffset, Series};
use crate::interaction::PointerEventKind;

use super::{ChartHost, SubscriptionId};

/// In-memory `ChartHost` used by tests and headless embedding.
///
/// Redraw requests are only counted; subscriptions are bookkept so callers
/// can check that teardown released them.
#[derive(Debug, Clone)]
pub struct HeadlessChartHost {
    geometry: LinearPlotGeometry,
    series: Vec<Series>,
    region_selection_active: bool,
    redraw_requests: usize,
    subscriptions: IndexMap<SubscriptionId, PointerEventKind>,
    next_subscription_id: u64,
}

impl HeadlessChartHost {
    #[must_use]
    pub fn new(geometry: LinearPlotGeometry) -> Self {
        Self {
            geometry,
            series: Vec::new(),
            region_selection_active: false,
            redraw_requests: 0,
            subscriptions: IndexMap::new(),
            next_subscription_id: 1,
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn set_series(&mut self, series: Vec<Series>) {
        self.series = series;
    }

    #[must_use]
    pub fn geometry(&self) -> &LinearPlotGeometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut LinearPlotGeometry {
        &mut self.geometry
    }

    pub fn set_region_selection_active(&mut self, active: bool) {
        self.region_selection_active = active;
    }

    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Returns the pending redraw count and resets it.
    pub fn take_redraw_requests(&mut self) -> usize {
        std::mem::take(&mut self.redraw_requests)
    }

    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_subscribed(&self, kind: PointerEventKind) -> bool {
        self.subscriptions.values().any(|entry| *entry == kind)
    }
}

impl PlotGeometry for HeadlessChartHost {
    fn pixel_to_data(&self, pixel: PixelPoint) -> AxisPosition {
        self.geometry.pixel_to_data(pixel)
    }

    fn data_to_pixel(&self, position: &AxisPosition) -> Option<PixelPoint> {
        self.geometry.data_to_pixel(position)
    }

    fn plot_width(&self) -> f64 {
        self.geometry.plot_width()
    }

    fn plot_height(&self) -> f64 {
        self.geometry.plot_height()
    }

    fn plot_offset(&self) -> PlotOffset {
        self.geometry.plot_offset()
    }
}

impl ChartHost for HeadlessChartHost {
    fn series_list(&self) -> &[Series] {
        &self.series
    }

    fn is_region_selection_active(&self) -> bool {
        self.region_selection_active
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn subscribe_pointer(&mut self, kind: PointerEventKind) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscriptions.insert(id, kind);
        id
    }

    fn unsubscribe_pointer(&mut self, id: SubscriptionId) {
        self.subscriptions.shift_remove(&id);
    }
}
