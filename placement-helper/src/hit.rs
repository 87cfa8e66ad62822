use placement_core::position::{BlockPos, Vec3d};
use placement_core::types::Direction;

/// Where a ray cast from the player's view met a block.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlockHitResult {
    /// The exact point the ray hit.
    pub location: Vec3d,
    /// The cell that was hit.
    pub pos: BlockPos,
    /// The face of the cell that was hit.
    pub face: Direction,
}

impl BlockHitResult {
    pub fn new(location: Vec3d, pos: BlockPos, face: Direction) -> Self {
        Self {
            location,
            pos,
            face,
        }
    }
}
