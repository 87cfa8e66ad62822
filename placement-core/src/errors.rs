use thiserror::Error;

use crate::position::Vec3d;

#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    #[error("Hit vector must have finite coordinates, got {0}")]
    NonFiniteHit(Vec3d),
    #[error("Cell center must have finite coordinates, got {0}")]
    NonFiniteCenter(Vec3d),
    #[error("Unable to build an arrow from {center} to {target}")]
    DegenerateArrow { center: Vec3d, target: Vec3d },
}

pub type Result<T> = std::result::Result<T, PlacementError>;
