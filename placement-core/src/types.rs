use glam::{DVec3, IVec3};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::predicate::Predicate;

#[derive(Debug, Copy, Clone, Display, IntoStaticStr, EnumIter, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::X | Self::Z)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Y)
    }

    /// Picks the component of a triple that belongs to this axis.
    pub fn choose<T>(&self, x: T, y: T, z: T) -> T {
        match self {
            Self::X => x,
            Self::Y => y,
            Self::Z => z,
        }
    }

    /// The two directions lying on this axis, negative one first.
    pub fn get_directions(&self) -> [Direction; 2] {
        [
            Direction::from_axis_and_direction(*self, AxisDirection::Negative),
            Direction::from_axis_and_direction(*self, AxisDirection::Positive),
        ]
    }
}

#[derive(Debug, Copy, Clone, Display, IntoStaticStr, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    Positive,
    Negative,
}

impl AxisDirection {
    pub fn get_step(&self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

/// One of the six axis-aligned directions of the block grid.
///
/// The declaration order is the ordinal order used by the game
/// (down, up, north, south, west, east). Iterating with
/// [`strum::IntoEnumIterator`] yields the directions in that order, and
/// ranking relies on it to order directions that are equally close.
///
/// Minecraft coordinates are structured as follows:
/// - +X is east / -X is west
/// - +Y is up / -Y is down
/// - +Z is south / -Z is north
#[derive(Debug, Copy, Clone, Display, IntoStaticStr, EnumIter, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    pub fn from_axis_and_direction(axis: Axis, axis_direction: AxisDirection) -> Self {
        match (axis, axis_direction) {
            (Axis::X, AxisDirection::Positive) => Self::East,
            (Axis::X, AxisDirection::Negative) => Self::West,
            (Axis::Y, AxisDirection::Positive) => Self::Up,
            (Axis::Y, AxisDirection::Negative) => Self::Down,
            (Axis::Z, AxisDirection::Positive) => Self::South,
            (Axis::Z, AxisDirection::Negative) => Self::North,
        }
    }

    pub fn get_axis(&self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    pub fn get_axis_direction(&self) -> AxisDirection {
        match self {
            Self::Up | Self::South | Self::East => AxisDirection::Positive,
            Self::Down | Self::North | Self::West => AxisDirection::Negative,
        }
    }

    pub fn get_opposite(&self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// The integer offset to the neighbouring cell in this direction.
    pub fn get_normal(&self) -> IVec3 {
        let step = self.get_axis_direction().get_step();

        match self.get_axis() {
            Axis::X => IVec3::new(step, 0, 0),
            Axis::Y => IVec3::new(0, step, 0),
            Axis::Z => IVec3::new(0, 0, step),
        }
    }

    pub fn get_unit_vector(&self) -> DVec3 {
        self.get_normal().as_dvec3()
    }

    /// Accepts only the directions lying on `axis`.
    pub fn on_axis(axis: Axis) -> Predicate<Direction> {
        Predicate::new(move |direction: &Direction| direction.get_axis() == axis)
    }

    /// Accepts every direction not lying on `axis`.
    pub fn off_axis(axis: Axis) -> Predicate<Direction> {
        Predicate::new(move |direction: &Direction| direction.get_axis() != axis)
    }
}
