//! Data-driven combat balance
//!
//! Everything that tunes how a fight feels lives here, so it can be adjusted
//! (or loaded from data by the embedding layer) without touching the resolver.

use serde::{Deserialize, Serialize};

use crate::consts::DISPLAY_SCALE;

/// Combat and movement balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Collision half-width of a rendered weapon stroke, in world pixels
    pub stroke_hit_radius: f32,
    /// Multiplier widening the hit radius into the collision threshold
    pub hit_slop: f32,
    /// Size lost by the victim per landed hit
    pub damage_amount: f32,
    /// Resolver invocations a victim is immune for after taking a hit
    pub damage_cooldown: u32,
    /// Base separation push applied on any contact, in pixels
    pub base_push: f32,
    /// Extra push per pixel of overlap depth
    pub overlap_push: f32,
    /// Resolver passes per frame; repeated passes work residual overlap out
    /// of a single frame, at the cost of faster cooldown decay during
    /// sustained contact
    pub collision_passes: u32,
    /// Stroke length at which drawn weapons halve a player's speed
    pub area_divisor: f32,
    /// Speed floor so even the most elaborate weapon can still move
    pub min_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            stroke_hit_radius: 3.0 * DISPLAY_SCALE,
            hit_slop: 1.2,
            damage_amount: 0.1,
            damage_cooldown: 10,
            base_push: 3.0,
            overlap_push: 0.5,
            collision_passes: 3,
            area_divisor: 200.0,
            min_speed: 0.5,
        }
    }
}

impl Tuning {
    /// Distance below which two segments count as touching
    #[inline]
    pub fn collision_threshold(&self) -> f32 {
        self.stroke_hit_radius * self.hit_slop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let tuning = Tuning::default();
        assert!((tuning.collision_threshold() - 7.2).abs() < 1e-6);
    }

    #[test]
    fn test_tuning_round_trips_through_json() {
        let tuning = Tuning {
            collision_passes: 5,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }
}
