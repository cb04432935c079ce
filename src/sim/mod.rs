//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame stepping only
//! - Input arrives as an explicit per-frame snapshot
//! - No rendering or platform dependencies
//!
//! Coordinates are world pixels, angles are radians, and sizes/speeds are in
//! pixels per frame. One call to [`step_frame`] is one simulated frame.

pub mod collision;
pub mod combat;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod tuning;

pub use collision::{point_segment_distance, segment_min_distance};
pub use combat::{resolve_combat, CombatReport};
pub use geometry::{
    body_segments, drawing_bounds, total_stroke_length, weapon_scale, weapon_segments, Bounds,
    Segment,
};
pub use state::{Drawing, Field, MatchPhase, MatchState, Player, PlayerId, Stroke};
pub use tick::{step_frame, FrameInput, FrameSnapshot, PlayerInput, PlayerView};
pub use tuning::Tuning;
