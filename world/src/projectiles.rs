//! Projectiles in flight and the explosions splash impacts leave behind.

use std::time::Duration;

use outbreak_defence_core::{geometry, Position, ProjectileId, ProjectileKind, ZombieId};

/// Displacement per millisecond is `speed × this` world units.
const STEP_SCALE: f32 = 0.06;

/// Visual lifetime of an explosion after its damage has been dealt.
pub(crate) const EXPLOSION_LIFETIME: Duration = Duration::from_millis(300);

#[derive(Clone, Debug)]
pub(crate) struct Projectile {
    pub(crate) id: ProjectileId,
    pub(crate) kind: ProjectileKind,
    pub(crate) position: Position,
    pub(crate) damage: u32,
    pub(crate) target: ZombieId,
    pub(crate) traveled: f32,
    velocity: (f32, f32),
    age: Duration,
    target_hit: bool,
    dead: bool,
}

impl Projectile {
    pub(crate) fn launch(
        id: ProjectileId,
        kind: ProjectileKind,
        position: Position,
        target: ZombieId,
        aim: Position,
        damage: u32,
    ) -> Self {
        let profile = kind.profile();
        let (dx, dy) = geometry::direction(position, aim);
        Self {
            id,
            kind,
            position,
            damage,
            target,
            traveled: 0.0,
            velocity: (dx * profile.speed, dy * profile.speed),
            age: Duration::ZERO,
            target_hit: false,
            dead: false,
        }
    }

    pub(crate) const fn is_dead(&self) -> bool {
        self.dead
    }

    pub(crate) fn expire(&mut self) {
        self.dead = true;
    }

    pub(crate) const fn has_hit_target(&self) -> bool {
        self.target_hit
    }

    pub(crate) fn mark_target_hit(&mut self) {
        self.target_hit = true;
    }

    /// Advances the projectile, homing onto `aim` when the target is still
    /// alive. Beam projectiles snap to the aim point and expire on their
    /// timer; everything else flies with a fixed displacement per
    /// millisecond and expires once its travel budget is spent.
    pub(crate) fn advance(&mut self, dt: Duration, aim: Option<Position>) {
        if self.dead {
            return;
        }

        if let Some(lifetime) = self.kind.lifetime() {
            if let Some(aim) = aim {
                self.position = aim;
            }
            self.age = self.age.saturating_add(dt);
            if self.age >= lifetime {
                self.dead = true;
            }
            return;
        }

        let profile = self.kind.profile();
        if let Some(aim) = aim {
            let (dx, dy) = geometry::direction(self.position, aim);
            self.velocity = (dx * profile.speed, dy * profile.speed);
        }

        let scale = dt.as_millis() as f32 * STEP_SCALE;
        let step_x = self.velocity.0 * scale;
        let step_y = self.velocity.1 * scale;
        self.position = Position::new(self.position.x() + step_x, self.position.y() + step_y);
        self.traveled += (step_x * step_x + step_y * step_y).sqrt();

        if self.traveled >= profile.max_range {
            self.dead = true;
        }
    }

    /// Circle-overlap hit test against a zombie body.
    pub(crate) fn overlaps(&self, zombie_position: Position, zombie_radius: f32) -> bool {
        geometry::circles_overlap(
            self.position,
            self.kind.profile().radius,
            zombie_position,
            zombie_radius,
        )
    }
}

/// Expanding blast left behind by a splash impact. Damage is dealt when the
/// explosion is constructed; afterwards it only decays for rendering.
#[derive(Clone, Debug)]
pub(crate) struct Explosion {
    pub(crate) position: Position,
    pub(crate) radius: f32,
    age: Duration,
}

impl Explosion {
    pub(crate) fn new(position: Position, radius: f32) -> Self {
        Self {
            position,
            radius,
            age: Duration::ZERO,
        }
    }

    pub(crate) fn decay(&mut self, dt: Duration) {
        self.age = self.age.saturating_add(dt);
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.age >= EXPLOSION_LIFETIME
    }

    /// Expansion progress in `[0, 1]`.
    pub(crate) fn progress(&self) -> f32 {
        (self.age.as_secs_f32() / EXPLOSION_LIFETIME.as_secs_f32()).min(1.0)
    }
}
