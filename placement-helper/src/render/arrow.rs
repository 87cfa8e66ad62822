use placement_core::errors::{PlacementError, Result};
use placement_core::position::Vec3d;
use placement_core::types::Direction;
use tracing::{instrument, trace};

use crate::render::outliner::{OutlineLine, Outliner};
use crate::settings::ArrowSettings;

/// Draws an arrow pointing from `center` towards `target`.
///
/// The arrow head is made of two lines that spread out inside the plane
/// perpendicular to `arrow_plane`, which is normally the face the player is
/// looking at. When the arrow points straight along `arrow_plane` the head
/// collapses and both lines run along the shaft. Nothing is drawn when
/// `target` equals `center`.
#[instrument(level = "trace", skip(outliner, settings))]
pub fn render_arrow(
    outliner: &mut dyn Outliner,
    center: Vec3d,
    target: Vec3d,
    arrow_plane: Direction,
    settings: &ArrowSettings,
) -> Result<()> {
    let direction = (target - center)
        .try_normalize()
        .ok_or(PlacementError::DegenerateArrow { center, target })?;
    let facing = arrow_plane.get_unit_vector();

    let side_a = normalize_or_zero(direction.cross(facing));
    let side_b = normalize_or_zero(facing.cross(direction));

    let start = center + direction;
    let shift = direction * (settings.distance_from_center - 1.0);
    let head = center + direction * settings.head_back;

    let end_a = head + side_a * settings.head_width;
    let end_b = head + side_b * settings.head_width;

    trace!(?start, ?end_a, ?end_b, "Showing placement arrow");

    outliner.show_line(
        format!("placementArrowA{center}{target}"),
        OutlineLine {
            start: start + shift,
            end: end_a + shift,
            width: settings.line_width,
        },
    );
    outliner.show_line(
        format!("placementArrowB{center}{target}"),
        OutlineLine {
            start: start + shift,
            end: end_b + shift,
            width: settings.line_width,
        },
    );

    Ok(())
}

/// Vectors shorter than this have no usable direction.
const MIN_SIDE_LENGTH: f64 = 1.0e-4;

fn normalize_or_zero(side: Vec3d) -> Vec3d {
    if side.length() < MIN_SIDE_LENGTH {
        Vec3d::ZERO
    } else {
        side.normalize()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lines(outliner: &HashMap<String, OutlineLine>) -> (OutlineLine, OutlineLine) {
        let mut lines = outliner
            .iter()
            .map(|(slot, line)| (slot.clone(), *line))
            .collect::<Vec<_>>();
        lines.sort_by(|(a, _), (b, _)| a.cmp(b));

        assert_eq!(lines.len(), 2);
        assert!(lines[0].0.starts_with("placementArrowA"));
        assert!(lines[1].0.starts_with("placementArrowB"));

        (lines[0].1, lines[1].1)
    }

    #[test]
    fn arrow_towards_east_on_top_face() {
        let mut outliner: HashMap<String, OutlineLine> = HashMap::new();
        let center = Vec3d::splat(0.5);
        let target = Vec3d::new(1.5, 0.5, 0.5);

        render_arrow(&mut outliner, center, target, Direction::Up, &ArrowSettings::default())
            .unwrap();

        let (a, b) = lines(&outliner);

        assert_eq!(a.start, Vec3d::new(1.5, 0.5, 0.5));
        assert_eq!(a.end, Vec3d::new(1.25, 0.5, 0.75));
        assert_eq!(b.start, Vec3d::new(1.5, 0.5, 0.5));
        assert_eq!(b.end, Vec3d::new(1.25, 0.5, 0.25));
        assert_eq!(a.width, 1.0 / 16.0);
    }

    #[test]
    fn arrow_is_shifted_by_distance_from_center() {
        let mut outliner: HashMap<String, OutlineLine> = HashMap::new();
        let settings = ArrowSettings::default().with_distance_from_center(2.0);

        render_arrow(
            &mut outliner,
            Vec3d::splat(0.5),
            Vec3d::new(0.5, 0.5, 3.5),
            Direction::East,
            &settings,
        )
        .unwrap();

        let (a, b) = lines(&outliner);

        assert_eq!(a.start, Vec3d::new(0.5, 0.5, 2.5));
        assert_eq!(a.end, Vec3d::new(0.5, 0.75, 2.25));
        assert_eq!(b.end, Vec3d::new(0.5, 0.25, 2.25));
    }

    #[test]
    fn same_arrow_reuses_its_slots() {
        let mut outliner: HashMap<String, OutlineLine> = HashMap::new();
        let center = Vec3d::splat(0.5);
        let target = Vec3d::new(0.5, 1.5, 0.5);

        for _ in 0..3 {
            render_arrow(&mut outliner, center, target, Direction::North, &ArrowSettings::default())
                .unwrap();
        }

        assert_eq!(outliner.len(), 2);
    }

    #[test]
    fn zero_length_arrow_draws_nothing() {
        let mut outliner: HashMap<String, OutlineLine> = HashMap::new();
        let center = Vec3d::splat(0.5);
        let settings = ArrowSettings::default();

        let result = render_arrow(&mut outliner, center, center, Direction::Up, &settings);
        assert_eq!(
            result,
            Err(PlacementError::DegenerateArrow {
                center,
                target: center
            })
        );

        assert!(outliner.is_empty());
    }

    #[test]
    fn arrow_along_the_face_normal_collapses_its_head() {
        let mut outliner: HashMap<String, OutlineLine> = HashMap::new();
        let center = Vec3d::splat(0.5);
        let target = Vec3d::new(0.5, 1.5, 0.5);

        render_arrow(&mut outliner, center, target, Direction::Up, &ArrowSettings::default())
            .unwrap();

        let (a, b) = lines(&outliner);

        for line in [a, b] {
            assert_eq!(line.start, Vec3d::new(0.5, 1.5, 0.5));
            assert_eq!(line.end, Vec3d::new(0.5, 1.25, 0.5));
        }

        // Pointing away from the face behaves the same way
        outliner.clear();
        let below = Vec3d::new(0.5, -1.5, 0.5);
        render_arrow(&mut outliner, center, below, Direction::Up, &ArrowSettings::default())
            .unwrap();

        let (a, b) = lines(&outliner);
        assert_eq!(a.end, Vec3d::new(0.5, -0.25, 0.5));
        assert_eq!(b.end, a.end);
    }
}
