//! Ordering of the six grid directions by how close they are to a hit.
//!
//! The vector from a cell's center to the hit point is compared against the
//! unit vector of every direction; the closest direction comes first. Callers
//! use the result to pick the side of a block that a new block should go on.

use itertools::Itertools;
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::errors::{PlacementError, Result};
use crate::position::{BlockPos, Vec3d};
use crate::predicate::Predicate;
use crate::types::{Axis, Direction};

/// Ranks directions by their distance to a hit vector, optionally restricted
/// by a filter.
#[derive(Debug, Clone, Default)]
pub struct DirectionRanker {
    include: Predicate<Direction>,
}

impl DirectionRanker {
    /// A ranker that considers all six directions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered(include: Predicate<Direction>) -> Self {
        Self { include }
    }

    /// Adds `include` on top of the current filter.
    pub fn with_filter(self, include: Predicate<Direction>) -> Self {
        Self {
            include: self.include.and(include),
        }
    }

    pub fn only_axis(self, axis: Axis) -> Self {
        self.with_filter(Direction::on_axis(axis))
    }

    pub fn except_axis(self, axis: Axis) -> Self {
        self.with_filter(Direction::off_axis(axis))
    }

    /// Ranks the accepted directions against `hit - center`.
    ///
    /// Directions that are equally close keep their ordinal order. Coordinates
    /// are expected to be finite; non-finite input never panics but gives an
    /// unspecified order.
    #[instrument(level = "trace", skip(self))]
    pub fn rank(&self, center: Vec3d, hit: Vec3d) -> Vec<Direction> {
        let center_to_hit = hit - center;

        Direction::iter()
            .filter(|direction| self.include.test(direction))
            .map(|direction| (direction, direction.get_unit_vector().distance(center_to_hit)))
            .sorted_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(direction, _)| direction)
            .collect()
    }

    pub fn rank_block(&self, pos: BlockPos, hit: Vec3d) -> Vec<Direction> {
        self.rank(pos.center(), hit)
    }

    /// Same as [`DirectionRanker::rank`], but rejects non-finite input.
    pub fn try_rank(&self, center: Vec3d, hit: Vec3d) -> Result<Vec<Direction>> {
        if !hit.is_finite() {
            return Err(PlacementError::NonFiniteHit(hit));
        }

        if !center.is_finite() {
            return Err(PlacementError::NonFiniteCenter(center));
        }

        Ok(self.rank(center, hit))
    }
}

pub fn ordered_by_distance(pos: BlockPos, hit: Vec3d) -> Vec<Direction> {
    DirectionRanker::new().rank_block(pos, hit)
}

pub fn ordered_by_distance_filtered(
    pos: BlockPos,
    hit: Vec3d,
    include: Predicate<Direction>,
) -> Vec<Direction> {
    DirectionRanker::filtered(include).rank_block(pos, hit)
}

pub fn try_ordered_by_distance(
    pos: BlockPos,
    hit: Vec3d,
    include: Predicate<Direction>,
) -> Result<Vec<Direction>> {
    DirectionRanker::filtered(include).try_rank(pos.center(), hit)
}

pub fn ordered_by_distance_only_axis(pos: BlockPos, hit: Vec3d, axis: Axis) -> Vec<Direction> {
    DirectionRanker::new().only_axis(axis).rank_block(pos, hit)
}

pub fn ordered_by_distance_only_axis_filtered(
    pos: BlockPos,
    hit: Vec3d,
    axis: Axis,
    include: Predicate<Direction>,
) -> Vec<Direction> {
    DirectionRanker::new()
        .only_axis(axis)
        .with_filter(include)
        .rank_block(pos, hit)
}

pub fn ordered_by_distance_except_axis(pos: BlockPos, hit: Vec3d, axis: Axis) -> Vec<Direction> {
    DirectionRanker::new().except_axis(axis).rank_block(pos, hit)
}

pub fn ordered_by_distance_except_axis_filtered(
    pos: BlockPos,
    hit: Vec3d,
    axis: Axis,
    include: Predicate<Direction>,
) -> Vec<Direction> {
    DirectionRanker::new()
        .except_axis(axis)
        .with_filter(include)
        .rank_block(pos, hit)
}

pub fn ordered_by_distance_except_axes(
    pos: BlockPos,
    hit: Vec3d,
    first: Axis,
    second: Axis,
) -> Vec<Direction> {
    ordered_by_distance_except_axis_filtered(pos, hit, first, Direction::off_axis(second))
}

pub fn ordered_by_distance_except_axes_filtered(
    pos: BlockPos,
    hit: Vec3d,
    first: Axis,
    second: Axis,
    include: Predicate<Direction>,
) -> Vec<Direction> {
    ordered_by_distance_except_axis_filtered(
        pos,
        hit,
        first,
        Direction::off_axis(second).and(include),
    )
}
