pub mod helper;
pub mod hit;
pub mod render;
pub mod settings;

// Re-export the grid model so helpers only need this crate
pub use placement_core::{errors, offset, position, predicate, ranking, types};
