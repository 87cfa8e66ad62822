use std::fmt;

use derive_more::{Deref, From};
use glam::IVec3;

use crate::types::Direction;

pub use glam::DVec3;

/// A point in continuous world space.
pub type Vec3d = DVec3;

/// The integer coordinates of a unit cell of the block grid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deref, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos(IVec3);

impl BlockPos {
    pub const ZERO: Self = Self(IVec3::ZERO);

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    /// The cell that contains `point`.
    pub fn containing(point: Vec3d) -> Self {
        Self(point.floor().as_ivec3())
    }

    /// The point in the middle of the cell.
    pub fn center(&self) -> Vec3d {
        self.0.as_dvec3() + Vec3d::splat(0.5)
    }

    pub fn offset(&self, direction: Direction) -> Self {
        self.relative(direction, 1)
    }

    pub fn relative(&self, direction: Direction, distance: i32) -> Self {
        Self(self.0 + direction.get_normal() * distance)
    }

    pub fn as_ivec3(&self) -> IVec3 {
        self.0
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockPos{{x={}, y={}, z={}}}", self.x, self.y, self.z)
    }
}
