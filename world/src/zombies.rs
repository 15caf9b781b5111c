//! Zombie entities: path following, damage intake, and slow effects.

use std::time::Duration;

use outbreak_defence_core::{geometry, Position, SlowEffect, ZombieId, ZombieKind};

#[derive(Clone, Debug)]
pub(crate) struct Zombie {
    pub(crate) id: ZombieId,
    pub(crate) kind: ZombieKind,
    pub(crate) position: Position,
    pub(crate) health: f32,
    pub(crate) max_health: f32,
    speed: f32,
    reward: u32,
    pub(crate) life_damage: u32,
    pub(crate) radius: f32,
    pub(crate) slow_factor: f32,
    slow_remaining: Duration,
    path_cursor: usize,
    alive: bool,
    reached_end: bool,
}

impl Zombie {
    pub(crate) fn spawn(id: ZombieId, kind: ZombieKind, start: Position) -> Self {
        let stats = kind.stats();
        Self {
            id,
            kind,
            position: start,
            health: stats.max_health,
            max_health: stats.max_health,
            speed: stats.speed,
            reward: stats.reward,
            life_damage: stats.life_damage,
            radius: stats.radius,
            slow_factor: 1.0,
            slow_remaining: Duration::ZERO,
            path_cursor: 0,
            alive: true,
            reached_end: false,
        }
    }

    pub(crate) const fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) const fn has_reached_end(&self) -> bool {
        self.reached_end
    }

    /// Marks the zombie dead after it leaked through the end of the path.
    pub(crate) fn expire(&mut self) {
        self.alive = false;
    }

    /// Advances the zombie along the path polyline.
    ///
    /// Movement covers `speed × slow_factor × dt` world units. When the next
    /// waypoint is closer than the step the zombie snaps onto it and the
    /// cursor advances; any leftover distance is forfeited until the next
    /// tick. Arrival at the final waypoint sets the reached-end flag.
    pub(crate) fn advance(&mut self, dt: Duration, path: &[Position]) {
        if !self.alive || self.reached_end {
            return;
        }

        if !self.slow_remaining.is_zero() {
            self.slow_remaining = self.slow_remaining.saturating_sub(dt);
            if self.slow_remaining.is_zero() {
                self.slow_factor = 1.0;
            }
        }

        if self.path_cursor + 1 >= path.len() {
            self.reached_end = true;
            return;
        }

        let waypoint = path[self.path_cursor + 1];
        let remaining = geometry::distance(self.position, waypoint);
        let step = self.speed * self.slow_factor * dt.as_secs_f32();

        if remaining <= step {
            self.position = waypoint;
            self.path_cursor += 1;
            if self.path_cursor + 1 >= path.len() {
                self.reached_end = true;
            }
        } else {
            let (dx, dy) = geometry::direction(self.position, waypoint);
            self.position = Position::new(
                self.position.x() + dx * step,
                self.position.y() + dy * step,
            );
        }
    }

    /// Applies damage and returns the kill reward exactly once.
    ///
    /// Returns zero for non-lethal hits and for hits landing on a zombie
    /// that already died, so rewards can never be granted twice.
    pub(crate) fn take_damage(&mut self, amount: f32) -> u32 {
        if !self.alive {
            return 0;
        }

        self.health -= amount;
        if self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
            return self.reward;
        }

        0
    }

    /// Merges a slow effect: the strongest factor and the longest duration win.
    pub(crate) fn apply_slow(&mut self, effect: SlowEffect) {
        self.slow_factor = self.slow_factor.min(effect.factor);
        self.slow_remaining = self.slow_remaining.max(effect.duration);
    }
}
