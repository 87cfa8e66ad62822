use placement_core::errors::Result;
use placement_core::offset::PlacementOffset;
use placement_core::position::BlockPos;
use placement_core::predicate::Predicate;
use tracing::{debug, instrument};

use crate::hit::BlockHitResult;
use crate::render::arrow::render_arrow;
use crate::render::ghost::{GhostAlpha, GhostBlock, GhostBlocks};
use crate::render::RenderContext;

/// An item stack the player may be holding.
pub trait HeldItem<S> {
    /// The default state of the block this item places, if it places one.
    fn placed_state(&self) -> Option<S>;
}

/// Suggests an alternate position for a block based on where the player is
/// looking, and previews it.
pub trait PlacementHelper {
    type World: ?Sized;
    type State: Clone + 'static;
    type Item: HeldItem<Self::State> + 'static;

    /// Tested with the items held in the player's hands. The helper is
    /// active when this accepts one of them.
    fn item_predicate(&self) -> Predicate<Self::Item>;

    /// Tested with the block state the player is looking at.
    fn state_predicate(&self) -> Predicate<Self::State>;

    /// Returns [`PlacementOffset::fail`] if no valid offset could be found,
    /// otherwise a successful offset at the position the block should be
    /// placed at.
    fn get_offset(
        &self,
        world: &Self::World,
        state: &Self::State,
        pos: BlockPos,
        ray: &BlockHitResult,
    ) -> PlacementOffset<Self::State>;

    /// Like [`PlacementHelper::get_offset`], but previews the block the held
    /// item would actually place instead of the helper's own ghost state.
    fn get_offset_for_held(
        &self,
        world: &Self::World,
        state: &Self::State,
        pos: BlockPos,
        ray: &BlockHitResult,
        held_item: &Self::Item,
    ) -> PlacementOffset<Self::State> {
        let offset = self.get_offset(world, state, pos, ray);

        match held_item.placed_state() {
            Some(placed) => offset.with_ghost_state(placed),
            None => offset,
        }
    }

    /// Only called with successful offsets.
    fn render_at(
        &self,
        _pos: BlockPos,
        _state: &Self::State,
        _ray: &BlockHitResult,
        offset: &PlacementOffset<Self::State>,
        context: &mut RenderContext<'_, Self::State>,
    ) {
        self.display_ghost(offset, context.ghosts);
    }

    /// Shows the transformed ghost state at the offset's position.
    fn display_ghost(
        &self,
        offset: &PlacementOffset<Self::State>,
        ghosts: &mut dyn GhostBlocks<Self::State>,
    ) {
        let (Some(pos), Some(state)) = (offset.pos(), offset.transformed_ghost_state()) else {
            return;
        };

        debug!(slot = self.slot(), %pos, "Displaying placement ghost");

        ghosts.show_ghost_state(GhostBlock {
            slot: self.slot(),
            state,
            pos,
            alpha: GhostAlpha::Breathing,
        });
    }

    /// Draws an arrow from the looked-at block towards the offset, lying in
    /// the plane of the face that was hit.
    #[instrument(level = "trace", skip(self, offset, context))]
    fn render_arrow_to(
        &self,
        pos: BlockPos,
        ray: &BlockHitResult,
        offset: &PlacementOffset<Self::State>,
        context: &mut RenderContext<'_, Self::State>,
    ) -> Result<()> {
        let Some(target) = offset.pos() else {
            return Ok(());
        };

        render_arrow(
            context.outliner,
            pos.center(),
            target.center(),
            ray.face,
            &context.arrow,
        )
    }

    /// Identifies this helper's previews.
    fn slot(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn matches_item(&self, item: &Self::Item) -> bool {
        self.item_predicate().test(item)
    }

    fn matches_state(&self, state: &Self::State) -> bool {
        self.state_predicate().test(state)
    }
}
