use smallvec::SmallVec;
use tracing::debug;

use crate::error::CrosshairResult;
use crate::interaction::{CrosshairState, PointerEventKind, PositionTracker};

use super::{ChartHost, CrosshairConfig, CrosshairHooks, SubscriptionId};

/// Crosshair overlay bound to one host chart instance.
///
/// Each chart owns its own plugin value; nothing is shared between instances.
/// All entry points run synchronously on the host's event/redraw thread.
#[derive(Debug)]
pub struct CrosshairPlugin {
    pub(super) config: CrosshairConfig,
    pub(super) hooks: CrosshairHooks,
    pub(super) tracker: PositionTracker,
    pub(super) subscriptions: SmallVec<[SubscriptionId; 2]>,
}

impl CrosshairPlugin {
    /// Validates `config` and creates an inactive, unlocked crosshair.
    pub fn new(config: CrosshairConfig) -> CrosshairResult<Self> {
        Self::with_hooks(config, CrosshairHooks::default())
    }

    pub fn with_hooks(config: CrosshairConfig, hooks: CrosshairHooks) -> CrosshairResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            hooks,
            tracker: PositionTracker::new(),
            subscriptions: SmallVec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> CrosshairConfig {
        self.config
    }

    #[must_use]
    pub fn crosshair_state(&self) -> CrosshairState {
        self.tracker.state()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Subscribes to pointer-move and pointer-leave on `host`.
    ///
    /// Does nothing when the mode is disabled or the plugin is already attached.
    pub fn attach<H: ChartHost + ?Sized>(&mut self, host: &mut H) {
        if !self.config.mode.is_enabled() || self.is_attached() {
            return;
        }
        for kind in [PointerEventKind::Move, PointerEventKind::Leave] {
            let id = host.subscribe_pointer(kind);
            debug!(?kind, subscription = id.0, "crosshair subscribed to pointer events");
            self.subscriptions.push(id);
        }
    }

    /// Releases every pointer subscription taken by `attach`.
    pub fn detach<H: ChartHost + ?Sized>(&mut self, host: &mut H) {
        for id in self.subscriptions.drain(..) {
            host.unsubscribe_pointer(id);
            debug!(subscription = id.0, "crosshair unsubscribed from pointer events");
        }
    }
}
