//! Match state and core simulation types
//!
//! The whole match lives in one [`MatchState`] aggregate so the embedding
//! layer can run several independent matches (and tests can build them
//! freely) without any ambient globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{self, Bounds, Segment};
use super::tuning::Tuning;
use crate::consts::*;

/// One continuous freehand line, as pad-local points (origin at pad center)
pub type Stroke = Vec<Vec2>;

/// A player's full weapon design: every committed stroke, in draw order.
/// Empty is valid (no weapon, full speed, nothing to hit with).
pub type Drawing = Vec<Stroke>;

/// Which of the two players an external call refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The opposing player
    #[inline]
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Player 1 is sketching their weapon
    Player1Drawing,
    /// Player 2 is sketching their weapon
    Player2Drawing,
    /// Both tanks are live on the field
    Playing,
    Player1Win,
    Player2Win,
}

impl MatchPhase {
    /// The player currently allowed to submit strokes, if any
    pub fn drawing_player(self) -> Option<PlayerId> {
        match self {
            MatchPhase::Player1Drawing => Some(PlayerId::One),
            MatchPhase::Player2Drawing => Some(PlayerId::Two),
            _ => None,
        }
    }

    pub fn is_win(self) -> bool {
        matches!(self, MatchPhase::Player1Win | MatchPhase::Player2Win)
    }
}

/// The rectangular play area; a player whose center leaves it starts
/// shrinking and never recovers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            x: FIELD_X,
            y: FIELD_Y,
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    /// Containment test, inclusive on all four edges
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.x
            && pos.x <= self.x + self.width
            && pos.y >= self.y
            && pos.y <= self.y + self.height
    }
}

/// One tank: a square body plus the weapon drawing mounted on its front
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position in world coordinates
    pub pos: Vec2,
    /// Heading in radians (0 = facing +x)
    pub angle: f32,
    /// Speed before the weapon-weight penalty
    pub base_speed: f32,
    /// Speed actually driven with, fixed once when play begins
    pub speed: f32,
    /// Turn rate in radians per frame
    pub rotation_speed: f32,
    /// Healthy body edge length
    pub base_size: f32,
    /// Current body edge length; 0 means dead
    pub size: f32,
    /// Packed RGB identity color for the rendering layer
    pub color: u32,
    /// Shrink rate per frame once off the field
    pub fall_speed: f32,
    /// One-way latch: set when the player's center leaves the field, cleared
    /// only by a full match reset
    pub left_field: bool,
    /// Resolver invocations remaining before this player can be hurt again
    pub damage_timer: u32,
    /// The weapon this player drew
    pub drawing: Drawing,
}

impl Player {
    /// A player at its mirrored starting pose
    pub fn starting(id: PlayerId) -> Self {
        let (x_offset, angle, color) = match id {
            PlayerId::One => (-START_OFFSET, 0.0, PLAYER1_COLOR),
            PlayerId::Two => (START_OFFSET, std::f32::consts::PI, PLAYER2_COLOR),
        };
        Self {
            pos: Vec2::new(WORLD_WIDTH / 2.0 + x_offset, WORLD_HEIGHT / 2.0),
            angle,
            base_speed: BASE_SPEED,
            speed: BASE_SPEED,
            rotation_speed: ROTATION_SPEED,
            base_size: BASE_SIZE,
            size: BASE_SIZE,
            color,
            fall_speed: FALL_SPEED,
            left_field: false,
            damage_timer: 0,
            drawing: Drawing::new(),
        }
    }

    /// Shrink by `amount`, never below zero
    #[inline]
    pub fn shrink(&mut self, amount: f32) {
        self.size = (self.size - amount).max(0.0);
    }

    /// Regrow toward the healthy size, never above it
    #[inline]
    pub fn regrow(&mut self, amount: f32) {
        if self.size < self.base_size {
            self.size = (self.size + amount).min(self.base_size);
        }
    }

    /// Fix the driving speed from the committed weapon: longer total stroke
    /// length trades mobility for reach, floored so nobody is immobile
    pub fn derive_speed(&mut self, tuning: &Tuning) {
        let length = geometry::total_stroke_length(&self.drawing);
        let slowdown = 1.0 / (1.0 + length / tuning.area_divisor);
        self.speed = (self.base_speed * slowdown).max(tuning.min_speed);
    }
}

/// Complete match state: both players, the field, the phase, and balance
/// numbers. The external call surface (stroke submission, phase advance,
/// per-frame stepping, reset) hangs off this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: MatchPhase,
    pub field: Field,
    pub tuning: Tuning,
    /// Players in id order: `[player 1, player 2]`
    pub players: [Player; 2],
    /// Midpoint of the closest touching segment pair seen in the most recent
    /// frame with contact, for the rendering layer's spark effects
    pub last_contact: Option<Vec2>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// A fresh match at the start of player 1's drawing phase
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    /// A fresh match with custom balance numbers
    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            phase: MatchPhase::Player1Drawing,
            field: Field::default(),
            tuning,
            players: [Player::starting(PlayerId::One), Player::starting(PlayerId::Two)],
            last_contact: None,
        }
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Append a committed stroke to `id`'s weapon. Valid only during that
    /// player's drawing phase; silently ignored otherwise.
    pub fn submit_stroke(&mut self, id: PlayerId, stroke: Stroke) {
        if self.phase.drawing_player() != Some(id) {
            return;
        }
        self.player_mut(id).drawing.push(stroke);
    }

    /// Advance drawing -> drawing -> playing. Entering `Playing` fixes both
    /// players' speeds from their committed weapons. No-op in every other
    /// phase.
    pub fn advance_phase(&mut self) {
        match self.phase {
            MatchPhase::Player1Drawing => {
                self.phase = MatchPhase::Player2Drawing;
            }
            MatchPhase::Player2Drawing => {
                let tuning = self.tuning.clone();
                for player in &mut self.players {
                    player.derive_speed(&tuning);
                }
                self.phase = MatchPhase::Playing;
                log::info!(
                    "match started: speeds {:.2} / {:.2}",
                    self.players[0].speed,
                    self.players[1].speed
                );
            }
            _ => {}
        }
    }

    /// Sample the win condition. Player 1's death is checked first, so a
    /// frame where both sizes hit zero is a player 2 win.
    pub fn evaluate_win(&mut self) {
        if self.phase != MatchPhase::Playing {
            return;
        }
        if self.players[0].size <= 0.0 {
            self.phase = MatchPhase::Player2Win;
            log::info!("player 2 wins");
        } else if self.players[1].size <= 0.0 {
            self.phase = MatchPhase::Player1Win;
            log::info!("player 1 wins");
        }
    }

    /// From a win phase, start a fresh match: cleared drawings, mirrored
    /// starting poses, player 1 drawing again. No-op mid-match.
    pub fn reset(&mut self) {
        if !self.phase.is_win() {
            return;
        }
        let tuning = self.tuning.clone();
        *self = Self::with_tuning(tuning);
        log::info!("match reset");
    }

    /// Bounding box of `id`'s weapon in pad-local coordinates
    pub fn drawing_bounds(&self, id: PlayerId) -> Bounds {
        geometry::drawing_bounds(&self.player(id).drawing)
    }

    /// `id`'s weapon strokes as world-space collision segments, derived from
    /// the player's current position, heading, and size
    pub fn weapon_segments(&self, id: PlayerId) -> Vec<Segment> {
        geometry::weapon_segments(self.player(id))
    }
}
