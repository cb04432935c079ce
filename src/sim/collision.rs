//! Proximity tests between line segments
//!
//! Weapons and bodies are both bags of line segments, so the entire combat
//! system rests on two distance primitives. The segment-to-segment test is a
//! deliberate approximation: it takes the minimum over the four endpoint-to-
//! opposite-segment distances and skips the interior crossing case. Two thin
//! segments can therefore pass through each other's middles undetected in a
//! single frame; in practice the collision threshold is wide enough and the
//! repeated resolver passes frequent enough that this matches how the game is
//! meant to feel. Swapping in an exact predicate would change gameplay.

use glam::Vec2;

use super::geometry::Segment;

/// Distance from point `p` to the segment `a`-`b`.
///
/// Closest-point projection with the parameter clamped to [0, 1]; a
/// zero-length segment degenerates to plain point-to-point distance.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Approximate minimum distance between two segments: the smallest of the
/// four endpoint-to-opposite-segment distances. Symmetric in its arguments.
pub fn segment_min_distance(s: &Segment, t: &Segment) -> f32 {
    let d1 = point_segment_distance(s.a, t.a, t.b);
    let d2 = point_segment_distance(s.b, t.a, t.b);
    let d3 = point_segment_distance(t.a, s.a, s.b);
    let d4 = point_segment_distance(t.b, s.a, s.b);
    d1.min(d2).min(d3).min(d4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_segment_distance_projects_onto_interior() {
        // Point above the middle of a horizontal segment
        let d = point_segment_distance(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_point_segment_distance_clamps_to_endpoints() {
        // Point beyond the far end: distance to the endpoint, not the line
        let d = point_segment_distance(
            Vec2::new(13.0, 4.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_point_segment_distance_degenerate_segment() {
        let a = Vec2::new(2.0, 2.0);
        let p = Vec2::new(5.0, 6.0);
        assert_eq!(point_segment_distance(p, a, a), p.distance(a));
    }

    #[test]
    fn test_segment_min_distance_parallel() {
        let s = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let t = Segment::new(Vec2::new(0.0, 4.0), Vec2::new(10.0, 4.0));
        assert!((segment_min_distance(&s, &t) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_min_distance_touching_endpoint() {
        let s = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0));
        let t = Segment::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 0.0));
        assert!(segment_min_distance(&s, &t) < 1e-6);
    }

    #[test]
    fn test_segment_min_distance_crossing_is_approximate() {
        // A perfect X crossing: the exact distance is 0, but the endpoint
        // approximation reports the nearest endpoint-to-segment distance.
        // This is load-bearing gameplay behavior, not a bug.
        let s = Segment::new(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0));
        let t = Segment::new(Vec2::new(0.0, -10.0), Vec2::new(0.0, 10.0));
        let d = segment_min_distance(&s, &t);
        assert!((d - 10.0).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_segment_min_distance_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
            cx in -100.0f32..100.0, cy in -100.0f32..100.0,
            dx in -100.0f32..100.0, dy in -100.0f32..100.0,
        ) {
            let s = Segment::new(Vec2::new(ax, ay), Vec2::new(bx, by));
            let t = Segment::new(Vec2::new(cx, cy), Vec2::new(dx, dy));
            prop_assert_eq!(segment_min_distance(&s, &t), segment_min_distance(&t, &s));
        }

        #[test]
        fn prop_degenerate_segment_is_point_distance(
            px in -100.0f32..100.0, py in -100.0f32..100.0,
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
        ) {
            let p = Vec2::new(px, py);
            let a = Vec2::new(ax, ay);
            prop_assert_eq!(point_segment_distance(p, a, a), p.distance(a));
        }
    }
}
