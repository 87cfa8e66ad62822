use placement_core::position::BlockPos;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum GhostAlpha {
    /// Fades in and out over time.
    #[default]
    Breathing,
    Fixed(f32),
}

/// A request to preview `state` at `pos`.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostBlock<S> {
    /// Identifies who owns the preview. A new request in the same slot
    /// replaces the old one.
    pub slot: &'static str,
    pub state: S,
    pub pos: BlockPos,
    pub alpha: GhostAlpha,
}

/// Host-side ghost block renderer.
pub trait GhostBlocks<S> {
    fn show_ghost_state(&mut self, ghost: GhostBlock<S>);
}

/// In-memory collector for hosts that draw the collected ghosts themselves.
impl<S> GhostBlocks<S> for Vec<GhostBlock<S>> {
    fn show_ghost_state(&mut self, ghost: GhostBlock<S>) {
        self.retain(|shown| shown.slot != ghost.slot);
        self.push(ghost);
    }
}
