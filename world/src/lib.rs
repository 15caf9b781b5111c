#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Outbreak Defence.
//!
//! The world owns every entity collection and the economy counters. All
//! mutation flows through [`apply`], which re-validates each command against
//! current state, mutates deterministically, and broadcasts [`Event`] values
//! describing what changed. Read access goes through the [`query`] module,
//! which captures immutable snapshot views for systems and adapters.

mod map;
mod projectiles;
mod towers;
mod zombies;

use std::time::Duration;

use outbreak_defence_core::{
    geometry, BuildError, Command, ConfigError, Event, GameConfig, GamePhase, Position,
    ProjectileId, ProjectileKind, SellError, TowerId, UpgradeError, WaveError, ZombieId,
};

use map::Map;
use projectiles::{Explosion, Projectile};
use towers::Tower;
use zombies::Zombie;

/// Projectiles spawn this far from the tower center, along the aim line.
const BARREL_LENGTH: f32 = 20.0;
/// Gold granted for clearing a wave is `WAVE_BONUS_BASE + next_wave × WAVE_BONUS_PER_WAVE`.
const WAVE_BONUS_BASE: u32 = 50;
const WAVE_BONUS_PER_WAVE: u32 = 10;
/// Score granted per point of kill reward.
const SCORE_PER_REWARD: u32 = 10;

/// Represents the authoritative Outbreak Defence world state.
#[derive(Debug)]
pub struct World {
    config: GameConfig,
    map: Map,
    phase: GamePhase,
    gold: u32,
    lives: u32,
    score: u32,
    wave: u32,
    wave_active: bool,
    towers: Vec<Tower>,
    zombies: Vec<Zombie>,
    projectiles: Vec<Projectile>,
    explosions: Vec<Explosion>,
    next_tower: u32,
    next_zombie: u32,
    next_projectile: u32,
}

impl World {
    /// Creates a new world from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let map = Map::new(
            config.width,
            config.height,
            config.tile_size,
            config.path_points(),
        );
        Ok(Self {
            gold: config.starting_gold,
            lives: config.starting_lives,
            score: 0,
            wave: 1,
            wave_active: false,
            phase: GamePhase::Playing,
            map,
            towers: Vec::new(),
            zombies: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
            next_tower: 0,
            next_zombie: 0,
            next_projectile: 0,
            config,
        })
    }

    /// Seed feeding the deterministic wave generator.
    #[must_use]
    pub fn wave_seed(&self) -> u64 {
        self.config.wave_seed
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    if world.phase == GamePhase::GameOver {
        match command {
            Command::Restart => restart(world, out_events),
            Command::RequestWave => out_events.push(Event::WaveRequestRejected {
                reason: WaveError::GameOver,
            }),
            _ => {}
        }
        return;
    }

    if world.phase == GamePhase::Paused
        && !matches!(command, Command::TogglePause | Command::Restart)
    {
        return;
    }

    match command {
        Command::Tick { dt } => tick(world, dt, out_events),
        Command::BuildTower { kind, at } => match world.map.cell_at(at) {
            None => out_events.push(Event::BuildRejected {
                kind,
                reason: BuildError::OutOfBounds,
            }),
            Some(cell) if !world.map.can_build(cell) => out_events.push(Event::BuildRejected {
                kind,
                reason: BuildError::Occupied,
            }),
            Some(_) if world.gold < kind.stats().cost => out_events.push(Event::BuildRejected {
                kind,
                reason: BuildError::InsufficientGold,
            }),
            Some(cell) => {
                world.gold -= kind.stats().cost;
                let id = TowerId::new(world.next_tower);
                world.next_tower += 1;
                let center = world.map.cell_center(cell);
                world.towers.push(Tower::build(id, kind, center, cell));
                world.map.place_tower(cell, id);
                out_events.push(Event::TowerBuilt {
                    tower: id,
                    kind,
                    cell,
                });
                out_events.push(Event::GoldChanged { gold: world.gold });
            }
        },
        Command::SellTower { tower } => {
            match world.towers.iter().position(|entry| entry.id == tower) {
                None => out_events.push(Event::SellRejected {
                    tower,
                    reason: SellError::MissingTower,
                }),
                Some(index) => {
                    let sold = world.towers.remove(index);
                    world.gold += sold.sell_value;
                    world.map.remove_tower(sold.cell);
                    out_events.push(Event::TowerSold {
                        tower,
                        refund: sold.sell_value,
                    });
                    out_events.push(Event::GoldChanged { gold: world.gold });
                }
            }
        }
        Command::UpgradeTower { tower } => {
            match world.towers.iter_mut().find(|entry| entry.id == tower) {
                None => out_events.push(Event::UpgradeRejected {
                    tower,
                    reason: UpgradeError::MissingTower,
                }),
                Some(entry) if entry.at_max_level() => out_events.push(Event::UpgradeRejected {
                    tower,
                    reason: UpgradeError::MaxLevel,
                }),
                Some(entry) if world.gold < entry.upgrade_cost => {
                    out_events.push(Event::UpgradeRejected {
                        tower,
                        reason: UpgradeError::InsufficientGold,
                    });
                }
                Some(entry) => {
                    let cost = entry.upgrade_cost;
                    let level = entry.upgrade();
                    world.gold -= cost;
                    out_events.push(Event::TowerUpgraded { tower, level });
                    out_events.push(Event::GoldChanged { gold: world.gold });
                }
            }
        }
        Command::RequestWave => {
            if world.wave_active {
                out_events.push(Event::WaveRequestRejected {
                    reason: WaveError::AlreadyInProgress,
                });
            } else {
                world.wave_active = true;
                out_events.push(Event::WaveStarted { wave: world.wave });
            }
        }
        Command::SpawnZombie { kind } => {
            if !world.wave_active {
                return;
            }
            let id = ZombieId::new(world.next_zombie);
            world.next_zombie += 1;
            world.zombies.push(Zombie::spawn(id, kind, world.map.start()));
            out_events.push(Event::ZombieSpawned { zombie: id, kind });
        }
        Command::FireProjectile { tower, target } => {
            let Some(aim) = world
                .zombies
                .iter()
                .find(|zombie| zombie.id == target && zombie.is_alive())
                .map(|zombie| zombie.position)
            else {
                return;
            };
            let Some(entry) = world.towers.iter_mut().find(|entry| entry.id == tower) else {
                return;
            };
            if !entry.is_ready() || geometry::distance(entry.position, aim) > entry.range {
                return;
            }

            let (dx, dy) = geometry::direction(entry.position, aim);
            let origin = Position::new(
                entry.position.x() + dx * BARREL_LENGTH,
                entry.position.y() + dy * BARREL_LENGTH,
            );
            let id = ProjectileId::new(world.next_projectile);
            world.next_projectile += 1;
            let kind = entry.projectile;
            world
                .projectiles
                .push(Projectile::launch(id, kind, origin, target, aim, entry.damage));
            entry.fire_at(target);
            out_events.push(Event::ProjectileFired {
                tower,
                projectile: id,
                kind,
            });
        }
        Command::CompleteWave => {
            if !world.wave_active || world.zombies.iter().any(Zombie::is_alive) {
                return;
            }
            world.wave_active = false;
            world.wave += 1;
            let bonus = WAVE_BONUS_BASE + world.wave * WAVE_BONUS_PER_WAVE;
            world.gold += bonus;
            out_events.push(Event::WaveCompleted {
                wave: world.wave - 1,
                bonus,
            });
            out_events.push(Event::WaveChanged { wave: world.wave });
            out_events.push(Event::GoldChanged { gold: world.gold });
        }
        Command::TogglePause => {
            world.phase = match world.phase {
                GamePhase::Playing => GamePhase::Paused,
                GamePhase::Paused => GamePhase::Playing,
                GamePhase::GameOver => GamePhase::GameOver,
            };
            out_events.push(Event::PhaseChanged { phase: world.phase });
        }
        Command::Restart => restart(world, out_events),
    }
}

struct PendingExplosion {
    position: Position,
    radius: f32,
    damage: f32,
}

fn tick(world: &mut World, dt: Duration, out_events: &mut Vec<Event>) {
    out_events.push(Event::TimeAdvanced { dt });

    for tower in world.towers.iter_mut() {
        tower.tick(dt);
    }

    // Zombie movement and end-of-path life deduction.
    let path = world.map.path();
    let mut lives = world.lives;
    for zombie in world.zombies.iter_mut() {
        zombie.advance(dt, path);
        if zombie.has_reached_end() && zombie.is_alive() {
            zombie.expire();
            lives = lives.saturating_sub(zombie.life_damage);
            out_events.push(Event::ZombieReachedEnd {
                zombie: zombie.id,
                life_damage: zombie.life_damage,
            });
            out_events.push(Event::LivesChanged { lives });
        }
    }
    world.lives = lives;
    if world.lives == 0 {
        world.phase = GamePhase::GameOver;
        out_events.push(Event::PhaseChanged {
            phase: GamePhase::GameOver,
        });
        out_events.push(Event::GameOver {
            score: world.score,
            wave: world.wave,
        });
    }

    // Projectile flight and hit resolution. Splash impacts are buffered and
    // detonated after the loop so a blast never damages through a collection
    // that is still being iterated.
    let mut pending_explosions: Vec<PendingExplosion> = Vec::new();
    let mut kills: Vec<(ZombieId, u32)> = Vec::new();
    for projectile in world.projectiles.iter_mut() {
        if projectile.is_dead() {
            continue;
        }

        let aim = world
            .zombies
            .iter()
            .find(|zombie| zombie.id == projectile.target && zombie.is_alive())
            .map(|zombie| zombie.position);
        projectile.advance(dt, aim);

        if projectile.kind.lifetime().is_some() {
            // Beam: damages its target every tick while both persist.
            if aim.is_some() {
                if let Some(zombie) = world
                    .zombies
                    .iter_mut()
                    .find(|zombie| zombie.id == projectile.target && zombie.is_alive())
                {
                    let reward = zombie.take_damage(projectile.damage as f32);
                    if reward > 0 {
                        kills.push((zombie.id, reward));
                    }
                }
            }
            continue;
        }

        if projectile.kind == ProjectileKind::Sniper && projectile.has_hit_target() {
            continue;
        }

        let Some(zombie) = world
            .zombies
            .iter_mut()
            .find(|zombie| zombie.id == projectile.target && zombie.is_alive())
        else {
            continue;
        };
        if !projectile.overlaps(zombie.position, zombie.radius) {
            continue;
        }

        match projectile.kind {
            ProjectileKind::Splash => {
                if let Some(radius) = projectile.kind.splash_radius() {
                    pending_explosions.push(PendingExplosion {
                        position: projectile.position,
                        radius,
                        damage: projectile.damage as f32,
                    });
                }
                projectile.expire();
            }
            ProjectileKind::Sniper => {
                let reward = zombie.take_damage(projectile.damage as f32);
                if reward > 0 {
                    kills.push((zombie.id, reward));
                }
                projectile.mark_target_hit();
            }
            ProjectileKind::Ice => {
                let reward = zombie.take_damage(projectile.damage as f32);
                if reward > 0 {
                    kills.push((zombie.id, reward));
                }
                if let Some(effect) = projectile.kind.slow_effect() {
                    zombie.apply_slow(effect);
                }
                projectile.expire();
            }
            ProjectileKind::Normal | ProjectileKind::Rapid | ProjectileKind::Laser => {
                let reward = zombie.take_damage(projectile.damage as f32);
                if reward > 0 {
                    kills.push((zombie.id, reward));
                }
                projectile.expire();
            }
        }
    }

    // Detonate buffered splash impacts: full damage at the blast center,
    // falling off to half at the edge of the combined radii.
    for pending in pending_explosions {
        for zombie in world.zombies.iter_mut() {
            if !zombie.is_alive() || zombie.has_reached_end() {
                continue;
            }
            let dist = geometry::distance(pending.position, zombie.position);
            let reach = pending.radius + zombie.radius;
            if dist <= reach {
                let factor = 1.0 - 0.5 * (dist / reach);
                let reward = zombie.take_damage(pending.damage * factor);
                if reward > 0 {
                    kills.push((zombie.id, reward));
                }
            }
        }
        world
            .explosions
            .push(Explosion::new(pending.position, pending.radius));
    }

    for explosion in world.explosions.iter_mut() {
        explosion.decay(dt);
    }

    for (zombie, reward) in kills {
        world.gold += reward;
        world.score += reward * SCORE_PER_REWARD;
        out_events.push(Event::ZombieKilled { zombie, reward });
        out_events.push(Event::GoldChanged { gold: world.gold });
        out_events.push(Event::ScoreChanged { score: world.score });
    }

    world.zombies.retain(Zombie::is_alive);
    world.projectiles.retain(|projectile| !projectile.is_dead());
    world.explosions.retain(|explosion| !explosion.is_dead());
}

fn restart(world: &mut World, out_events: &mut Vec<Event>) {
    world.gold = world.config.starting_gold;
    world.lives = world.config.starting_lives;
    world.score = 0;
    world.wave = 1;
    world.wave_active = false;
    world.towers.clear();
    world.zombies.clear();
    world.projectiles.clear();
    world.explosions.clear();
    world.next_tower = 0;
    world.next_zombie = 0;
    world.next_projectile = 0;
    world.map.reset();
    world.phase = GamePhase::Playing;

    out_events.push(Event::PhaseChanged {
        phase: GamePhase::Playing,
    });
    out_events.push(Event::GoldChanged { gold: world.gold });
    out_events.push(Event::LivesChanged { lives: world.lives });
    out_events.push(Event::ScoreChanged { score: world.score });
    out_events.push(Event::WaveChanged { wave: world.wave });
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use outbreak_defence_core::{
        geometry, ExplosionSnapshot, GamePhase, Position, ProjectileSnapshot, ProjectileView,
        TowerId, TowerSnapshot, TowerView, ZombieSnapshot, ZombieView,
    };

    /// Current game phase.
    #[must_use]
    pub fn phase(world: &World) -> GamePhase {
        world.phase
    }

    /// Current gold balance.
    #[must_use]
    pub fn gold(world: &World) -> u32 {
        world.gold
    }

    /// Lives remaining before the game ends.
    #[must_use]
    pub fn lives(world: &World) -> u32 {
        world.lives
    }

    /// Current score.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score
    }

    /// Wave number currently in progress, or the next one to start.
    #[must_use]
    pub fn wave(world: &World) -> u32 {
        world.wave
    }

    /// Reports whether a wave is currently spawning or being fought.
    #[must_use]
    pub fn wave_in_progress(world: &World) -> bool {
        world.wave_active
    }

    /// Number of grid columns on the board.
    #[must_use]
    pub fn grid_columns(world: &World) -> u32 {
        world.map.columns()
    }

    /// Number of grid rows on the board.
    #[must_use]
    pub fn grid_rows(world: &World) -> u32 {
        world.map.rows()
    }

    /// Side length of a square grid cell in world units.
    #[must_use]
    pub fn tile_size(world: &World) -> f32 {
        world.map.tile_size()
    }

    /// The path polyline zombies walk, from entry to exit.
    #[must_use]
    pub fn path(world: &World) -> &[Position] {
        world.map.path()
    }

    /// Captures a read-only view of all towers, in deterministic order.
    #[must_use]
    pub fn tower_view(world: &World) -> TowerView {
        let snapshots: Vec<TowerSnapshot> = world
            .towers
            .iter()
            .map(|tower| TowerSnapshot {
                id: tower.id,
                kind: tower.kind,
                level: tower.level,
                position: tower.position,
                damage: tower.damage,
                range: tower.range,
                ready_in: tower.ready_in,
                recoil: tower.recoil,
                upgrade_cost: tower.upgrade_cost,
                sell_value: tower.sell_value,
                target: tower.target,
            })
            .collect();
        TowerView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of all live zombies, in deterministic order.
    #[must_use]
    pub fn zombie_view(world: &World) -> ZombieView {
        let snapshots: Vec<ZombieSnapshot> = world
            .zombies
            .iter()
            .filter(|zombie| zombie.is_alive() && !zombie.has_reached_end())
            .map(|zombie| ZombieSnapshot {
                id: zombie.id,
                kind: zombie.kind,
                position: zombie.position,
                health: zombie.health,
                max_health: zombie.max_health,
                slow_factor: zombie.slow_factor,
            })
            .collect();
        ZombieView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of all projectiles in flight.
    #[must_use]
    pub fn projectile_view(world: &World) -> ProjectileView {
        let snapshots: Vec<ProjectileSnapshot> = world
            .projectiles
            .iter()
            .filter(|projectile| !projectile.is_dead())
            .map(|projectile| ProjectileSnapshot {
                id: projectile.id,
                kind: projectile.kind,
                position: projectile.position,
                target: Some(projectile.target),
                traveled: projectile.traveled,
            })
            .collect();
        ProjectileView::from_snapshots(snapshots)
    }

    /// Snapshots of the active explosions for rendering layers.
    #[must_use]
    pub fn explosions(world: &World) -> Vec<ExplosionSnapshot> {
        world
            .explosions
            .iter()
            .map(|explosion| ExplosionSnapshot {
                position: explosion.position,
                radius: explosion.radius,
                progress: explosion.progress(),
            })
            .collect()
    }

    /// Tower whose footprint contains the provided point, if any.
    #[must_use]
    pub fn tower_at(world: &World, position: Position) -> Option<TowerId> {
        world
            .towers
            .iter()
            .find(|tower| {
                geometry::distance(position, tower.position) < tower.kind.stats().radius
            })
            .map(|tower| tower.id)
    }
}
