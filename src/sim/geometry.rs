//! Drawing geometry: pad-local strokes to world-space collision segments
//!
//! Everything here is pure and re-derived on every call from the player's
//! current position, heading, and size. Nothing is cached, so collision
//! geometry always reflects a shrinking or spinning player exactly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Drawing, Player};
use crate::consts::{DISPLAY_SCALE, PAD_SIZE};
use crate::rotate_point;

/// A world-space line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) / 2.0
    }
}

/// Axis-aligned bounding box of a drawing, in pad-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Bounding box over every point of every stroke.
///
/// An empty drawing yields the degenerate zero box (not infinities), which
/// keeps the downstream mount-offset arithmetic finite.
pub fn drawing_bounds(drawing: &Drawing) -> Bounds {
    let mut points = drawing.iter().flatten();
    let Some(&first) = points.next() else {
        return Bounds::default();
    };
    let mut bounds = Bounds { min: first, max: first };
    for &p in points {
        bounds.min = bounds.min.min(p);
        bounds.max = bounds.max.max(p);
    }
    bounds
}

/// Summed Euclidean length of every stroke segment in a drawing
pub fn total_stroke_length(drawing: &Drawing) -> f32 {
    drawing
        .iter()
        .flat_map(|stroke| stroke.windows(2))
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}

/// Pad-to-world scale factor for a player's weapon.
///
/// Proportional to current size, so a shrinking player's weapon shrinks with
/// it and a dead player's weapon degenerates to nothing.
#[inline]
pub fn weapon_scale(size: f32) -> f32 {
    (size / PAD_SIZE) * DISPLAY_SCALE
}

/// Pad-local mount offset that butts the drawing's left edge against the
/// body's forward edge
#[inline]
fn mount_offset(player: &Player, scale: f32) -> Vec2 {
    let bounds = drawing_bounds(&player.drawing);
    Vec2::new(player.size / 2.0 - bounds.min.x * scale, 0.0)
}

/// The player's weapon strokes as world-space segments: mount-offset, scale,
/// rotate by heading, translate to position. Empty drawing yields no segments.
pub fn weapon_segments(player: &Player) -> Vec<Segment> {
    let scale = weapon_scale(player.size);
    let offset = mount_offset(player, scale);

    let mut segments = Vec::new();
    for stroke in &player.drawing {
        for pair in stroke.windows(2) {
            let local_a = offset + pair[0] * scale;
            let local_b = offset + pair[1] * scale;
            segments.push(Segment::new(
                rotate_point(local_a, player.angle) + player.pos,
                rotate_point(local_b, player.angle) + player.pos,
            ));
        }
    }
    segments
}

/// The four edges of the player's square body in world space, wound
/// counter-clockwise from the back-left corner
pub fn body_segments(player: &Player) -> [Segment; 4] {
    let half = player.size / 2.0;
    let corners = [
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
    .map(|c| rotate_point(c, player.angle) + player.pos);

    std::array::from_fn(|i| Segment::new(corners[i], corners[(i + 1) % 4]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlayerId;
    use proptest::prelude::*;

    fn player_with(drawing: Drawing) -> Player {
        let mut player = Player::starting(PlayerId::One);
        player.drawing = drawing;
        player
    }

    #[test]
    fn test_bounds_empty_drawing_is_zero_box() {
        let bounds = drawing_bounds(&Drawing::new());
        assert_eq!(bounds, Bounds::default());
        assert_eq!(bounds.width(), 0.0);
    }

    #[test]
    fn test_bounds_spans_all_strokes() {
        let drawing = vec![
            vec![Vec2::new(-5.0, 2.0), Vec2::new(3.0, 4.0)],
            vec![Vec2::new(0.0, -10.0), Vec2::new(8.0, 1.0)],
        ];
        let bounds = drawing_bounds(&drawing);
        assert_eq!(bounds.min, Vec2::new(-5.0, -10.0));
        assert_eq!(bounds.max, Vec2::new(8.0, 4.0));
    }

    #[test]
    fn test_total_stroke_length() {
        // 3-4-5 triangle legs plus a separate 10-long stroke
        let drawing = vec![
            vec![Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(3.0, 4.0)],
            vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)],
        ];
        assert!((total_stroke_length(&drawing) - 17.0).abs() < 1e-5);
        // Single-point strokes contribute nothing
        assert_eq!(total_stroke_length(&vec![vec![Vec2::ONE]]), 0.0);
    }

    #[test]
    fn test_weapon_scale_zero_at_zero_size() {
        assert_eq!(weapon_scale(0.0), 0.0);
        // Reference size: 20/80 * 2.0
        assert!((weapon_scale(20.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_weapon_segments_empty_drawing() {
        let player = player_with(Drawing::new());
        assert!(weapon_segments(&player).is_empty());
    }

    #[test]
    fn test_weapon_mounts_on_forward_edge() {
        // Unrotated player: the drawing's leftmost point must land exactly on
        // the body's forward (+x) edge
        let mut player = player_with(vec![vec![Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0)]]);
        player.angle = 0.0;
        let segments = weapon_segments(&player);
        assert_eq!(segments.len(), 1);
        assert!((segments[0].a.x - (player.pos.x + player.size / 2.0)).abs() < 1e-4);
        assert!((segments[0].a.y - player.pos.y).abs() < 1e-4);
    }

    #[test]
    fn test_weapon_segments_follow_rotation() {
        let mut player = player_with(vec![vec![Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0)]]);
        player.angle = std::f32::consts::FRAC_PI_2;
        let segments = weapon_segments(&player);
        // Facing +y: the weapon extends below the body in +y, not +x
        assert!((segments[0].a.x - player.pos.x).abs() < 1e-4);
        assert!(segments[0].a.y > player.pos.y);
    }

    #[test]
    fn test_body_segments_form_closed_square() {
        let mut player = player_with(Drawing::new());
        player.angle = 0.7;
        let segments = body_segments(&player);
        for i in 0..4 {
            // Each edge ends where the next begins
            assert_eq!(segments[i].b, segments[(i + 1) % 4].a);
            // Edge length equals the body size
            assert!((segments[i].a.distance(segments[i].b) - player.size).abs() < 1e-4);
        }
    }

    proptest! {
        #[test]
        fn prop_weapon_scale_monotonic(a in 0.0f32..100.0, b in 0.0f32..100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(weapon_scale(lo) <= weapon_scale(hi));
        }
    }
}
