use std::fmt;

use crate::error::CrosshairResult;
use crate::interaction::CrosshairState;
use crate::render::DrawSurface;

/// Called after the default overlay was painted, inside the same save/restore
/// scope, e.g. to draw coordinate labels next to the crosshair.
pub type DrawHook = Box<dyn FnMut(&CrosshairState, &mut dyn DrawSurface) -> CrosshairResult<()>>;

/// Called on overlay passes where the crosshair is hidden so consumers can
/// remove whatever they drew from `DrawHook`.
pub type ClearHook = Box<dyn FnMut()>;

/// Optional consumer callbacks.
#[derive(Default)]
pub struct CrosshairHooks {
    pub(super) on_draw: Option<DrawHook>,
    pub(super) on_clear: Option<ClearHook>,
}

impl CrosshairHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_draw(
        mut self,
        hook: impl FnMut(&CrosshairState, &mut dyn DrawSurface) -> CrosshairResult<()> + 'static,
    ) -> Self {
        self.on_draw = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_clear(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_clear = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for CrosshairHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrosshairHooks")
            .field("on_draw", &self.on_draw.is_some())
            .field("on_clear", &self.on_clear.is_some())
            .finish()
    }
}
