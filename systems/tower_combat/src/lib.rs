#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Cooldown gating between target assignment and the world.
//!
//! Target pairings say which zombie each tower should engage; this system
//! turns a pairing into `Command::FireProjectile` only when the tower's
//! cooldown has fully elapsed. The world re-validates range and liveness on
//! application, so a stale pairing costs nothing.

use outbreak_defence_core::{Command, TowerTarget, TowerView};

/// Emits a fire command for every pairing whose tower is ready to shoot.
///
/// Both the view and the pairings are ordered by tower id, so the two are
/// walked in lockstep and the output order is deterministic.
pub fn fire_commands(towers: &TowerView, targets: &[TowerTarget], out: &mut Vec<Command>) {
    let mut pairings = targets.iter().peekable();

    for tower in towers.iter() {
        // Skip pairings for towers missing from the view, such as ones
        // sold after the assignment was computed.
        while pairings
            .peek()
            .is_some_and(|pairing| pairing.tower < tower.id)
        {
            let _ = pairings.next();
        }
        let Some(&&pairing) = pairings.peek() else {
            break;
        };
        if pairing.tower != tower.id {
            continue;
        }
        let _ = pairings.next();

        if tower.ready_in.is_zero() {
            out.push(Command::FireProjectile {
                tower: pairing.tower,
                target: pairing.target,
            });
        }
    }
}
