//! Target assignment over snapshot views.

use std::time::Duration;

use outbreak_defence_core::{
    Position, TowerId, TowerKind, TowerSnapshot, TowerTarget, TowerView, ZombieId, ZombieKind,
    ZombieSnapshot, ZombieView,
};
use outbreak_defence_system_tower_targeting::select_targets;

fn tower(id: u32, position: Position, range: f32, target: Option<ZombieId>) -> TowerSnapshot {
    TowerSnapshot {
        id: TowerId::new(id),
        kind: TowerKind::Basic,
        level: 1,
        position,
        damage: 15,
        range,
        ready_in: Duration::ZERO,
        recoil: 0.0,
        upgrade_cost: 100,
        sell_value: 50,
        target,
    }
}

fn zombie(id: u32, position: Position) -> ZombieSnapshot {
    ZombieSnapshot {
        id: ZombieId::new(id),
        kind: ZombieKind::Normal,
        position,
        health: 100.0,
        max_health: 100.0,
        slow_factor: 1.0,
    }
}

fn pairing(tower: u32, target: u32) -> TowerTarget {
    TowerTarget {
        tower: TowerId::new(tower),
        target: ZombieId::new(target),
    }
}

#[test]
fn the_nearest_zombie_in_range_is_selected() {
    let towers = TowerView::from_snapshots(vec![tower(0, Position::new(0.0, 0.0), 100.0, None)]);
    let zombies = ZombieView::from_snapshots(vec![
        zombie(0, Position::new(80.0, 0.0)),
        zombie(1, Position::new(30.0, 0.0)),
    ]);

    assert_eq!(select_targets(&towers, &zombies), vec![pairing(0, 1)]);
}

#[test]
fn zombies_out_of_range_are_ignored() {
    let towers = TowerView::from_snapshots(vec![tower(0, Position::new(0.0, 0.0), 50.0, None)]);
    let zombies = ZombieView::from_snapshots(vec![zombie(0, Position::new(120.0, 0.0))]);

    assert!(select_targets(&towers, &zombies).is_empty());
}

#[test]
fn a_tracked_zombie_is_kept_even_when_another_comes_closer() {
    let towers = TowerView::from_snapshots(vec![tower(
        0,
        Position::new(0.0, 0.0),
        100.0,
        Some(ZombieId::new(5)),
    )]);
    let zombies = ZombieView::from_snapshots(vec![
        zombie(5, Position::new(90.0, 0.0)),
        zombie(6, Position::new(10.0, 0.0)),
    ]);

    assert_eq!(select_targets(&towers, &zombies), vec![pairing(0, 5)]);
}

#[test]
fn a_tracked_zombie_that_left_range_is_replaced() {
    let towers = TowerView::from_snapshots(vec![tower(
        0,
        Position::new(0.0, 0.0),
        100.0,
        Some(ZombieId::new(5)),
    )]);
    let zombies = ZombieView::from_snapshots(vec![
        zombie(5, Position::new(150.0, 0.0)),
        zombie(6, Position::new(40.0, 0.0)),
    ]);

    assert_eq!(select_targets(&towers, &zombies), vec![pairing(0, 6)]);
}

#[test]
fn a_dead_tracked_zombie_is_replaced() {
    let towers = TowerView::from_snapshots(vec![tower(
        0,
        Position::new(0.0, 0.0),
        100.0,
        Some(ZombieId::new(9)),
    )]);
    let zombies = ZombieView::from_snapshots(vec![zombie(2, Position::new(60.0, 0.0))]);

    assert_eq!(select_targets(&towers, &zombies), vec![pairing(0, 2)]);
}

#[test]
fn exact_distance_ties_favor_the_lower_id() {
    let towers = TowerView::from_snapshots(vec![tower(0, Position::new(0.0, 0.0), 100.0, None)]);
    let zombies = ZombieView::from_snapshots(vec![
        zombie(3, Position::new(50.0, 0.0)),
        zombie(1, Position::new(0.0, 50.0)),
        zombie(2, Position::new(-50.0, 0.0)),
    ]);

    assert_eq!(select_targets(&towers, &zombies), vec![pairing(0, 1)]);
}

#[test]
fn assignments_follow_tower_id_order() {
    let towers = TowerView::from_snapshots(vec![
        tower(4, Position::new(200.0, 0.0), 100.0, None),
        tower(1, Position::new(0.0, 0.0), 100.0, None),
    ]);
    let zombies = ZombieView::from_snapshots(vec![
        zombie(0, Position::new(10.0, 0.0)),
        zombie(1, Position::new(210.0, 0.0)),
    ]);

    assert_eq!(
        select_targets(&towers, &zombies),
        vec![pairing(1, 0), pairing(4, 1)]
    );
}
