//! Cooldown gating of fire commands.

use std::time::Duration;

use outbreak_defence_core::{
    Command, Position, TowerId, TowerKind, TowerSnapshot, TowerTarget, TowerView, ZombieId,
};
use outbreak_defence_system_tower_combat::fire_commands;

fn tower(id: u32, ready_in_ms: u64) -> TowerSnapshot {
    TowerSnapshot {
        id: TowerId::new(id),
        kind: TowerKind::Basic,
        level: 1,
        position: Position::new(0.0, 0.0),
        damage: 15,
        range: 150.0,
        ready_in: Duration::from_millis(ready_in_ms),
        recoil: 0.0,
        upgrade_cost: 100,
        sell_value: 50,
        target: None,
    }
}

fn pairing(tower: u32, target: u32) -> TowerTarget {
    TowerTarget {
        tower: TowerId::new(tower),
        target: ZombieId::new(target),
    }
}

fn fire(tower: u32, target: u32) -> Command {
    Command::FireProjectile {
        tower: TowerId::new(tower),
        target: ZombieId::new(target),
    }
}

#[test]
fn ready_towers_fire_at_their_pairing() {
    let towers = TowerView::from_snapshots(vec![tower(0, 0), tower(1, 0)]);
    let mut out = Vec::new();

    fire_commands(&towers, &[pairing(0, 7), pairing(1, 3)], &mut out);

    assert_eq!(out, vec![fire(0, 7), fire(1, 3)]);
}

#[test]
fn cooling_towers_hold_their_fire() {
    let towers = TowerView::from_snapshots(vec![tower(0, 400), tower(1, 0)]);
    let mut out = Vec::new();

    fire_commands(&towers, &[pairing(0, 7), pairing(1, 3)], &mut out);

    assert_eq!(out, vec![fire(1, 3)]);
}

#[test]
fn towers_without_a_pairing_stay_silent() {
    let towers = TowerView::from_snapshots(vec![tower(0, 0), tower(1, 0)]);
    let mut out = Vec::new();

    fire_commands(&towers, &[pairing(1, 3)], &mut out);

    assert_eq!(out, vec![fire(1, 3)]);
}

#[test]
fn pairings_for_missing_towers_are_dropped() {
    let towers = TowerView::from_snapshots(vec![tower(2, 0)]);
    let mut out = Vec::new();

    fire_commands(&towers, &[pairing(0, 1), pairing(2, 5)], &mut out);

    assert_eq!(out, vec![fire(2, 5)]);
}

#[test]
fn no_pairings_means_no_commands() {
    let towers = TowerView::from_snapshots(vec![tower(0, 0)]);
    let mut out = Vec::new();

    fire_commands(&towers, &[], &mut out);

    assert!(out.is_empty());
}
