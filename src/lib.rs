//! Doodle Duel - draw a weapon, then fight with it
//!
//! Two players each sketch a freehand weapon onto a small drawing pad, then
//! pilot square tanks around a bounded field, swinging their drawings at each
//! other. Weapon strokes damage the opposing body on contact; driving off the
//! field is fatal (the player shrinks away to nothing).
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, combat, match state)
//!
//! Input capture, rendering, and the animation loop are the embedding layer's
//! job: it feeds a [`sim::FrameInput`] snapshot into [`sim::step_frame`] once
//! per frame and draws from the returned [`sim::FrameSnapshot`].

pub mod sim;

pub use sim::{
    FrameInput, FrameSnapshot, MatchPhase, MatchState, PlayerId, PlayerInput, Tuning,
};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World dimensions (the coordinate space players move in)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Play field rectangle (leaving it is fatal)
    pub const FIELD_X: f32 = 100.0;
    pub const FIELD_Y: f32 = 100.0;
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Edge length of the square drawing pad (pad-local stroke coordinates
    /// span -PAD_SIZE/2 ..= PAD_SIZE/2 on both axes)
    pub const PAD_SIZE: f32 = 80.0;
    /// Rendering exaggeration applied to weapon drawings in world space
    pub const DISPLAY_SCALE: f32 = 2.0;

    /// Player defaults
    pub const BASE_SPEED: f32 = 3.0;
    pub const ROTATION_SPEED: f32 = 0.05;
    pub const BASE_SIZE: f32 = 20.0;
    /// Shrink rate while off the field (size units per frame)
    pub const FALL_SPEED: f32 = 0.3;
    /// Horizontal offset of each starting position from world center
    pub const START_OFFSET: f32 = 100.0;

    /// Player colors (packed RGB, for the rendering layer)
    pub const PLAYER1_COLOR: u32 = 0x4CAF50; // green
    pub const PLAYER2_COLOR: u32 = 0xFF5722; // orange
}

/// Rotate a point about the origin by `angle` radians
#[inline]
pub fn rotate_point(p: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}
