//! Tower entities: cooldown bookkeeping, recoil decay, and upgrade growth.

use std::time::Duration;

use outbreak_defence_core::{
    GridCoord, Position, ProjectileKind, TowerId, TowerKind, ZombieId, MAX_TOWER_LEVEL,
    MIN_FIRE_COOLDOWN,
};

/// Barrel kick applied when a tower fires, in world units.
const FIRE_RECOIL: f32 = 5.0;
/// Recoil decay per millisecond of simulated time.
const RECOIL_DECAY_PER_MS: f32 = 0.01;

#[derive(Clone, Debug)]
pub(crate) struct Tower {
    pub(crate) id: TowerId,
    pub(crate) kind: TowerKind,
    pub(crate) level: u8,
    pub(crate) position: Position,
    pub(crate) cell: GridCoord,
    pub(crate) damage: u32,
    pub(crate) range: f32,
    cooldown: Duration,
    pub(crate) ready_in: Duration,
    pub(crate) recoil: f32,
    pub(crate) upgrade_cost: u32,
    pub(crate) sell_value: u32,
    pub(crate) projectile: ProjectileKind,
    pub(crate) target: Option<ZombieId>,
}

impl Tower {
    pub(crate) fn build(id: TowerId, kind: TowerKind, position: Position, cell: GridCoord) -> Self {
        let stats = kind.stats();
        Self {
            id,
            kind,
            level: 1,
            position,
            cell,
            damage: stats.damage,
            range: stats.range,
            cooldown: stats.fire_cooldown,
            ready_in: Duration::ZERO,
            recoil: 0.0,
            upgrade_cost: stats.upgrade_cost,
            sell_value: stats.sell_value,
            projectile: stats.projectile,
            target: None,
        }
    }

    pub(crate) fn tick(&mut self, dt: Duration) {
        self.ready_in = self.ready_in.saturating_sub(dt);
        if self.recoil > 0.0 {
            self.recoil -= RECOIL_DECAY_PER_MS * dt.as_millis() as f32;
            if self.recoil < 0.0 {
                self.recoil = 0.0;
            }
        }
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.ready_in.is_zero()
    }

    pub(crate) fn fire_at(&mut self, target: ZombieId) {
        self.ready_in = self.cooldown;
        self.recoil = FIRE_RECOIL;
        self.target = Some(target);
    }

    pub(crate) fn at_max_level(&self) -> bool {
        self.level >= MAX_TOWER_LEVEL
    }

    /// Applies one level of upgrade growth.
    ///
    /// Damage and costs grow by the floored ×1.5 / ×1.3 schedule, range by
    /// floored ×1.1, and the fire cooldown shrinks by ×0.9 down to the
    /// 200 ms floor. Callers must check the level cap first.
    pub(crate) fn upgrade(&mut self) -> u8 {
        self.level += 1;
        self.damage = self.damage * 3 / 2;
        self.range = (self.range * 1.1).floor();
        self.cooldown = shrink_cooldown(self.cooldown);
        self.upgrade_cost = self.upgrade_cost * 3 / 2;
        self.sell_value = self.sell_value * 13 / 10;
        self.level
    }
}

fn shrink_cooldown(cooldown: Duration) -> Duration {
    let shrunk = Duration::from_millis(cooldown.as_millis() as u64 * 9 / 10);
    shrunk.max(MIN_FIRE_COOLDOWN)
}
