//! Per-frame simulation step
//!
//! The embedding layer's animation loop calls [`step_frame`] once per frame
//! with a snapshot of the directional input flags. One frame is: motion for
//! both players, the multi-pass combat resolution, then the win check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combat::resolve_combat;
use super::state::{MatchPhase, MatchState, Player};

/// Directional input flags for one player, sampled once per frame by the
/// input collaborator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub reverse: bool,
}

/// Input snapshot for one frame, both players
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameInput {
    pub p1: PlayerInput,
    pub p2: PlayerInput,
}

/// One player's public state, as the rendering layer needs it
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub angle: f32,
    pub size: f32,
    pub color: u32,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            pos: player.pos,
            angle: player.angle,
            size: player.size,
            color: player.color,
        }
    }
}

/// What the rendering layer sees after a frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: MatchPhase,
    pub players: [PlayerView; 2],
    /// Where the most recent weapon contact happened, for spark effects
    pub last_contact: Option<Vec2>,
}

impl FrameSnapshot {
    fn of(state: &MatchState) -> Self {
        Self {
            phase: state.phase,
            players: [
                PlayerView::from(&state.players[0]),
                PlayerView::from(&state.players[1]),
            ],
            last_contact: state.last_contact,
        }
    }
}

/// Advance the match by one frame. Outside the playing phase this mutates
/// nothing and just reports the current state.
pub fn step_frame(state: &mut MatchState, input: &FrameInput) -> FrameSnapshot {
    if state.phase != MatchPhase::Playing {
        return FrameSnapshot::of(state);
    }

    let field = state.field;
    update_motion(&mut state.players[0], &input.p1, &field);
    update_motion(&mut state.players[1], &input.p2, &field);

    let report = resolve_combat(state);
    if report.contact {
        state.last_contact = report.contact_point;
    }

    state.evaluate_win();

    FrameSnapshot::of(state)
}

/// Steering, movement, and the field rule for one player.
///
/// A player whose latch is set only falls: no steering, no movement, no
/// recovery. Everyone else turns and drives from the input flags, then the
/// field test either regrows them toward full size (inside, inclusive
/// bounds) or trips the latch and shrinks them immediately (outside — there
/// is no grace frame).
fn update_motion(player: &mut Player, input: &PlayerInput, field: &super::state::Field) {
    if player.left_field {
        player.shrink(player.fall_speed);
        return;
    }

    if input.turn_left {
        player.angle -= player.rotation_speed;
    }
    if input.turn_right {
        player.angle += player.rotation_speed;
    }

    let heading = Vec2::new(player.angle.cos(), player.angle.sin());
    if input.forward {
        player.pos += heading * player.speed;
    }
    if input.reverse {
        player.pos -= heading * player.speed;
    }

    if field.contains(player.pos) {
        player.regrow(player.fall_speed * 2.0);
    } else {
        log::debug!("player left the field at {:?}", player.pos);
        player.left_field = true;
        player.shrink(player.fall_speed);
    }
}
