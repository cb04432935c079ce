//! Weapon contact resolution: damage, cooldowns, and separation
//!
//! One resolver invocation checks three segment-set pairings - weapon vs
//! weapon, and each weapon vs the opposing body - then applies damage and a
//! single push-apart impulse. Bodies never damage bodies: only drawn weapons
//! hurt. The resolver runs several times per frame (see
//! [`Tuning::collision_passes`]) because a single pass can leave fast-moving
//! players overlapped; repeated passes walk them apart within the same frame.

use glam::Vec2;

use super::collision::segment_min_distance;
use super::geometry::{body_segments, weapon_segments, Segment};
use super::state::{MatchState, Player};
use super::tuning::Tuning;

/// What the resolver did across all passes of one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatReport {
    /// Any pair of segments came within the collision threshold
    pub contact: bool,
    /// Midpoint of the closest touching segment pair, when contact occurred
    pub contact_point: Option<Vec2>,
    /// `hits[i]` - player `i + 1` took damage this frame
    pub hits: [bool; 2],
}

/// How a segment-set pairing affects damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairKind {
    /// Weapon on weapon: sparks and push, no damage
    WeaponWeapon,
    /// Player 1's weapon against player 2's body
    Weapon1Body2,
    /// Player 2's weapon against player 1's body
    Weapon2Body1,
}

/// Run the full per-frame resolution: `tuning.collision_passes` invocations
/// over both players. Skipped entirely while either player is off the field
/// (a falling player is collision-immune).
pub fn resolve_combat(state: &mut MatchState) -> CombatReport {
    let tuning = state.tuning.clone();
    let mut report = CombatReport::default();

    for _ in 0..tuning.collision_passes {
        let pass = resolve_pass(&mut state.players, &tuning);
        report.contact |= pass.contact;
        report.hits[0] |= pass.hits[0];
        report.hits[1] |= pass.hits[1];
        if pass.contact_point.is_some() {
            report.contact_point = pass.contact_point;
        }
    }

    if report.hits[0] {
        log::debug!("player 1 hit, size now {:.2}", state.players[0].size);
    }
    if report.hits[1] {
        log::debug!("player 2 hit, size now {:.2}", state.players[1].size);
    }

    report
}

/// One resolver invocation: cooldown tick, the three pair checks, damage,
/// and a single separation impulse.
fn resolve_pass(players: &mut [Player; 2], tuning: &Tuning) -> CombatReport {
    let [p1, p2] = players;

    if p1.left_field || p2.left_field {
        return CombatReport::default();
    }

    // Cooldowns tick once per invocation, not per frame, so sustained contact
    // re-damages a little faster than the raw frame count suggests
    p1.damage_timer = p1.damage_timer.saturating_sub(1);
    p2.damage_timer = p2.damage_timer.saturating_sub(1);

    let w1 = weapon_segments(p1);
    let w2 = weapon_segments(p2);
    let b1 = body_segments(p1);
    let b2 = body_segments(p2);

    let threshold = tuning.collision_threshold();
    let mut contact = false;
    let mut contact_point = None;
    let mut min_distance = f32::INFINITY;
    let mut weapon1_hits = false;
    let mut weapon2_hits = false;

    let pairs: [(&[Segment], &[Segment], PairKind); 3] = [
        (&w1, &w2, PairKind::WeaponWeapon),
        (&w1, &b2, PairKind::Weapon1Body2),
        (&b1, &w2, PairKind::Weapon2Body1),
    ];

    for (set_a, set_b, kind) in pairs {
        if set_a.is_empty() || set_b.is_empty() {
            continue;
        }
        for seg_a in set_a {
            for seg_b in set_b {
                let dist = segment_min_distance(seg_a, seg_b);
                if dist >= threshold {
                    continue;
                }
                contact = true;
                match kind {
                    PairKind::Weapon1Body2 if p2.damage_timer == 0 => weapon1_hits = true,
                    PairKind::Weapon2Body1 if p1.damage_timer == 0 => weapon2_hits = true,
                    _ => {}
                }
                if dist < min_distance {
                    min_distance = dist;
                    contact_point = Some(seg_a.midpoint());
                }
            }
        }
    }

    // Damage lands at most once per victim per invocation, then the victim's
    // cooldown blocks further hits for a while
    if weapon1_hits {
        p2.shrink(tuning.damage_amount);
        p2.damage_timer = tuning.damage_cooldown;
    }
    if weapon2_hits {
        p1.shrink(tuning.damage_amount);
        p1.damage_timer = tuning.damage_cooldown;
    }

    if contact {
        separate(p1, p2, threshold, min_distance, tuning);
    }

    CombatReport {
        contact,
        contact_point,
        hits: [weapon2_hits, weapon1_hits],
    }
}

/// Push both players apart along the line between their centers; deeper
/// overlap pushes harder. Coincident centers give no usable direction, so
/// the push is skipped for that invocation.
fn separate(p1: &mut Player, p2: &mut Player, threshold: f32, min_distance: f32, tuning: &Tuning) {
    let delta = p2.pos - p1.pos;
    let distance = delta.length();
    if distance <= 0.0 {
        return;
    }

    let overlap = (threshold - min_distance).max(0.0);
    let push = (tuning.base_push + overlap * tuning.overlap_push) * (delta / distance);
    p1.pos -= push;
    p2.pos += push;
}
