use std::collections::HashMap;

use placement_core::position::Vec3d;

/// A straight line segment drawn in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutlineLine {
    pub start: Vec3d,
    pub end: Vec3d,
    pub width: f32,
}

/// Host-side line renderer.
///
/// Lines are keyed by a slot; showing a line in a slot that is already in use
/// replaces the previous one.
pub trait Outliner {
    fn show_line(&mut self, slot: String, line: OutlineLine);
}

/// In-memory collector for hosts that draw the collected lines themselves.
impl Outliner for HashMap<String, OutlineLine> {
    fn show_line(&mut self, slot: String, line: OutlineLine) {
        self.insert(slot, line);
    }
}
