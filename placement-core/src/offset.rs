use std::fmt;
use std::sync::Arc;

use crate::position::BlockPos;

type StateTransform<S> = Arc<dyn Fn(S) -> S + Send + Sync>;

/// The outcome of asking a placement helper where a block should go.
///
/// A successful offset carries the position the block should be placed at,
/// optionally a ghost state to preview there, and a transform that is applied
/// to that state before it is shown or placed.
pub struct PlacementOffset<S> {
    pos: Option<BlockPos>,
    ghost_state: Option<S>,
    transform: StateTransform<S>,
}

impl<S: 'static> PlacementOffset<S> {
    /// No valid position could be found.
    pub fn fail() -> Self {
        Self {
            pos: None,
            ghost_state: None,
            transform: Arc::new(|state| state),
        }
    }

    pub fn success(pos: BlockPos) -> Self {
        Self {
            pos: Some(pos),
            ..Self::fail()
        }
    }

    pub fn success_with(pos: BlockPos, transform: impl Fn(S) -> S + Send + Sync + 'static) -> Self {
        Self {
            pos: Some(pos),
            ghost_state: None,
            transform: Arc::new(transform),
        }
    }
}

impl<S> PlacementOffset<S> {
    pub fn with_ghost_state(mut self, ghost_state: S) -> Self {
        self.ghost_state = Some(ghost_state);
        self
    }

    pub fn is_successful(&self) -> bool {
        self.pos.is_some()
    }

    pub fn pos(&self) -> Option<BlockPos> {
        self.pos
    }

    pub fn has_ghost_state(&self) -> bool {
        self.ghost_state.is_some()
    }

    pub fn ghost_state(&self) -> Option<&S> {
        self.ghost_state.as_ref()
    }

    pub fn transform(&self, state: S) -> S {
        (self.transform)(state)
    }
}

impl<S: Clone> PlacementOffset<S> {
    /// The ghost state with this offset's transform applied.
    pub fn transformed_ghost_state(&self) -> Option<S> {
        self.ghost_state
            .clone()
            .map(|state| self.transform(state))
    }
}

impl<S: Clone> Clone for PlacementOffset<S> {
    fn clone(&self) -> Self {
        Self {
            pos: self.pos,
            ghost_state: self.ghost_state.clone(),
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for PlacementOffset<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacementOffset")
            .field("pos", &self.pos)
            .field("ghost_state", &self.ghost_state)
            .finish_non_exhaustive()
    }
}
