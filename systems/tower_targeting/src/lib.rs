#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure target assignment for towers.
//!
//! A tower keeps the zombie it is already tracking for as long as that
//! zombie stays alive and within range; switching targets mid-burn would
//! waste shots already committed to the old one. Once the tracked zombie
//! dies or walks out of range the nearest live zombie in range is assigned
//! instead, with ties broken by the lower zombie identifier so replays stay
//! deterministic.

use outbreak_defence_core::{geometry, Position, TowerTarget, TowerView, ZombieSnapshot, ZombieView};

/// Computes the target pairing for every tower that has a zombie in range.
///
/// The result is ordered by tower identifier because the input views are.
#[must_use]
pub fn select_targets(towers: &TowerView, zombies: &ZombieView) -> Vec<TowerTarget> {
    let mut assignments = Vec::new();

    for tower in towers.iter() {
        let retained = tower.target.and_then(|current| {
            zombies
                .iter()
                .find(|zombie| {
                    zombie.id == current
                        && geometry::distance(tower.position, zombie.position) <= tower.range
                })
                .map(|zombie| zombie.id)
        });

        let chosen = retained.or_else(|| {
            nearest_in_range(zombies, tower.position, tower.range).map(|zombie| zombie.id)
        });

        if let Some(target) = chosen {
            assignments.push(TowerTarget {
                tower: tower.id,
                target,
            });
        }
    }

    assignments
}

fn nearest_in_range<'a>(
    zombies: &'a ZombieView,
    position: Position,
    range: f32,
) -> Option<&'a ZombieSnapshot> {
    let range_squared = range * range;
    let mut best: Option<(&ZombieSnapshot, f32)> = None;

    for zombie in zombies.iter() {
        let dist_squared = geometry::distance_squared(position, zombie.position);
        if dist_squared > range_squared {
            continue;
        }
        let closer = match best {
            None => true,
            // The view is ordered by id, so on an exact tie the earlier
            // (lower-id) candidate wins by keeping the strict comparison.
            Some((_, best_dist)) => dist_squared < best_dist,
        };
        if closer {
            best = Some((zombie, dist_squared));
        }
    }

    best.map(|(zombie, _)| zombie)
}
