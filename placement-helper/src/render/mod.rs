use crate::render::ghost::GhostBlocks;
use crate::render::outliner::Outliner;
use crate::settings::ArrowSettings;

pub mod arrow;
pub mod ghost;
pub mod outliner;

/// Everything a placement helper may draw with during a frame.
pub struct RenderContext<'a, S> {
    pub ghosts: &'a mut dyn GhostBlocks<S>,
    pub outliner: &'a mut dyn Outliner,
    pub arrow: ArrowSettings,
}

impl<'a, S> RenderContext<'a, S> {
    pub fn new(ghosts: &'a mut dyn GhostBlocks<S>, outliner: &'a mut dyn Outliner) -> Self {
        Self {
            ghosts,
            outliner,
            arrow: ArrowSettings::default(),
        }
    }

    pub fn with_arrow_settings(mut self, arrow: ArrowSettings) -> Self {
        self.arrow = arrow;
        self
    }
}
