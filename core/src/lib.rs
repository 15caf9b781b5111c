#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Outbreak Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems and
//! UI layers to react to deterministically. Systems consume event streams,
//! query immutable snapshots, and respond exclusively with new command
//! batches. The archetype catalogs for towers, zombies, and projectiles also
//! live here so every crate agrees on the literal tuning numbers.

pub mod geometry;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest level a tower can reach through upgrades.
pub const MAX_TOWER_LEVEL: u8 = 3;

/// Floor applied to a tower's fire cooldown when upgrades shrink it.
pub const MIN_FIRE_COOLDOWN: Duration = Duration::from_millis(200);

/// A point in continuous world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f32,
    y: f32,
}

impl Position {
    /// Creates a new position from world-unit coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate in world units.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate in world units.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

/// Location of a single grid cell expressed as column and row indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    column: u32,
    row: u32,
}

impl GridCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Unique identifier assigned to a tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TowerId(u32);

impl TowerId {
    /// Creates a new tower identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a zombie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZombieId(u32);

impl ZombieId {
    /// Creates a new zombie identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(u32);

impl ProjectileId {
    /// Creates a new projectile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Lifecycle phase of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// The simulation advances on every tick.
    Playing,
    /// Ticks are ignored while the screen stays live but static.
    Paused,
    /// Lives reached zero; the session only accepts `Restart`.
    GameOver,
}

/// Types of towers the player can construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Balanced single-target tower.
    Basic,
    /// Long-range, slow-firing, high-damage tower.
    Sniper,
    /// Short-range tower with a very fast fire cadence.
    Rapid,
    /// Mid-range tower whose shells detonate into area damage.
    Splash,
}

impl TowerKind {
    /// All constructible tower kinds in catalog order.
    pub const ALL: [TowerKind; 4] = [Self::Basic, Self::Sniper, Self::Rapid, Self::Splash];

    /// Level-one combat and economy statistics for the tower kind.
    #[must_use]
    pub const fn stats(self) -> TowerStats {
        match self {
            Self::Basic => TowerStats {
                damage: 15,
                range: 150.0,
                fire_cooldown: Duration::from_millis(1000),
                cost: 100,
                upgrade_cost: 100,
                sell_value: 50,
                radius: 20.0,
                projectile: ProjectileKind::Normal,
            },
            Self::Sniper => TowerStats {
                damage: 80,
                range: 350.0,
                fire_cooldown: Duration::from_millis(2500),
                cost: 250,
                upgrade_cost: 200,
                sell_value: 125,
                radius: 20.0,
                projectile: ProjectileKind::Sniper,
            },
            Self::Rapid => TowerStats {
                damage: 8,
                range: 120.0,
                fire_cooldown: Duration::from_millis(200),
                cost: 200,
                upgrade_cost: 150,
                sell_value: 100,
                radius: 20.0,
                projectile: ProjectileKind::Rapid,
            },
            Self::Splash => TowerStats {
                damage: 30,
                range: 180.0,
                fire_cooldown: Duration::from_millis(1500),
                cost: 350,
                upgrade_cost: 250,
                sell_value: 175,
                radius: 20.0,
                projectile: ProjectileKind::Splash,
            },
        }
    }

    /// Static catalog entry used by UI layers to describe the tower.
    #[must_use]
    pub const fn info(self) -> TowerInfo {
        match self {
            Self::Basic => TowerInfo {
                name: "Basic Tower",
                cost: 100,
                description: "Balanced damage and range.",
            },
            Self::Sniper => TowerInfo {
                name: "Sniper Tower",
                cost: 250,
                description: "Very long range, heavy single hits.",
            },
            Self::Rapid => TowerInfo {
                name: "Rapid Tower",
                cost: 200,
                description: "Short range, relentless fire rate.",
            },
            Self::Splash => TowerInfo {
                name: "Splash Tower",
                cost: 350,
                description: "Shells explode and damage groups.",
            },
        }
    }
}

/// Level-one statistics shared by every tower of a kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerStats {
    /// Damage applied per projectile at level one.
    pub damage: u32,
    /// Targeting radius in world units.
    pub range: f32,
    /// Minimum time between successive shots.
    pub fire_cooldown: Duration,
    /// Gold deducted when the tower is built.
    pub cost: u32,
    /// Gold required for the next upgrade.
    pub upgrade_cost: u32,
    /// Gold refunded when the tower is sold.
    pub sell_value: u32,
    /// Footprint radius used for click selection.
    pub radius: f32,
    /// Projectile archetype the tower fires.
    pub projectile: ProjectileKind,
}

/// Display catalog entry for a tower kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TowerInfo {
    /// Human-readable tower name.
    pub name: &'static str,
    /// Gold required to build the tower.
    pub cost: u32,
    /// One-line description shown in build menus.
    pub description: &'static str,
}

/// Types of zombies the wave generator can field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZombieKind {
    /// Baseline walker.
    Normal,
    /// Fragile but quick.
    Fast,
    /// Slow, heavily armored.
    Tank,
    /// Wave-capping monster.
    Boss,
}

impl ZombieKind {
    /// Combat statistics for the zombie kind.
    #[must_use]
    pub const fn stats(self) -> ZombieStats {
        match self {
            Self::Normal => ZombieStats {
                max_health: 100.0,
                speed: 30.0,
                reward: 10,
                life_damage: 1,
                radius: 12.0,
            },
            Self::Fast => ZombieStats {
                max_health: 60.0,
                speed: 60.0,
                reward: 15,
                life_damage: 1,
                radius: 10.0,
            },
            Self::Tank => ZombieStats {
                max_health: 300.0,
                speed: 20.0,
                reward: 30,
                life_damage: 2,
                radius: 16.0,
            },
            Self::Boss => ZombieStats {
                max_health: 1000.0,
                speed: 15.0,
                reward: 100,
                life_damage: 5,
                radius: 20.0,
            },
        }
    }
}

/// Statistics shared by every zombie of a kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZombieStats {
    /// Hit points at spawn.
    pub max_health: f32,
    /// Walk speed in world units per second.
    pub speed: f32,
    /// Gold granted when the zombie dies to damage.
    pub reward: u32,
    /// Lives lost if the zombie reaches the end of the path alive.
    pub life_damage: u32,
    /// Body radius used for collision tests.
    pub radius: f32,
}

/// Projectile archetypes fired by towers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Homing shot that dies on its first hit.
    Normal,
    /// High-velocity round that passes through its designated target.
    Sniper,
    /// Small fast shot for rapid-fire towers.
    Rapid,
    /// Slow shell that detonates into an area effect on impact.
    Splash,
    /// Instant beam that damages its target every tick for a short burst.
    Laser,
    /// Chilling shot that slows its target on hit.
    Ice,
}

impl ProjectileKind {
    /// Flight profile for the projectile kind.
    #[must_use]
    pub const fn profile(self) -> ProjectileProfile {
        match self {
            Self::Normal => ProjectileProfile {
                speed: 10.0,
                radius: 4.0,
                max_range: 400.0,
            },
            Self::Sniper => ProjectileProfile {
                speed: 20.0,
                radius: 3.0,
                max_range: 800.0,
            },
            Self::Rapid => ProjectileProfile {
                speed: 15.0,
                radius: 3.0,
                max_range: 300.0,
            },
            Self::Splash => ProjectileProfile {
                speed: 6.0,
                radius: 6.0,
                max_range: 350.0,
            },
            Self::Laser => ProjectileProfile {
                speed: 100.0,
                radius: 2.0,
                max_range: 500.0,
            },
            Self::Ice => ProjectileProfile {
                speed: 8.0,
                radius: 5.0,
                max_range: 350.0,
            },
        }
    }

    /// Radius of the area effect spawned on impact, if any.
    #[must_use]
    pub const fn splash_radius(self) -> Option<f32> {
        match self {
            Self::Splash => Some(50.0),
            _ => None,
        }
    }

    /// Slow effect applied to the target on hit, if any.
    #[must_use]
    pub const fn slow_effect(self) -> Option<SlowEffect> {
        match self {
            Self::Ice => Some(SlowEffect {
                factor: 0.5,
                duration: Duration::from_millis(2000),
            }),
            _ => None,
        }
    }

    /// Fixed lifetime for projectiles that expire on a timer instead of
    /// travel distance.
    #[must_use]
    pub const fn lifetime(self) -> Option<Duration> {
        match self {
            Self::Laser => Some(Duration::from_millis(100)),
            _ => None,
        }
    }
}

/// Flight parameters shared by every projectile of a kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileProfile {
    /// Nominal velocity magnitude.
    pub speed: f32,
    /// Collision radius in world units.
    pub radius: f32,
    /// Maximum travel distance before the projectile expires.
    pub max_range: f32,
}

/// Temporary multiplicative speed reduction applied to a zombie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlowEffect {
    /// Speed multiplier while the effect is active (1.0 is nominal).
    pub factor: f32,
    /// Time the effect lasts from application.
    pub duration: Duration,
}

/// A single scheduled spawn within a wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnEntry {
    /// Kind of zombie to release.
    pub kind: ZombieKind,
    /// Delay before the spawn, measured from the previous spawn.
    pub delay: Duration,
}

/// Ordered spawn schedule produced by the wave generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavePlan {
    wave: u32,
    entries: Vec<SpawnEntry>,
}

impl WavePlan {
    /// Creates a plan for the provided wave number.
    #[must_use]
    pub fn new(wave: u32, entries: Vec<SpawnEntry>) -> Self {
        Self { wave, entries }
    }

    /// Wave number the plan belongs to.
    #[must_use]
    pub const fn wave(&self) -> u32 {
        self.wave
    }

    /// Scheduled spawns in release order.
    #[must_use]
    pub fn entries(&self) -> &[SpawnEntry] {
        &self.entries
    }

    /// Consumes the plan, yielding the underlying entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<SpawnEntry> {
        self.entries
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests construction of a tower at the cell containing a point.
    BuildTower {
        /// Kind of tower to construct.
        kind: TowerKind,
        /// Click location in world units.
        at: Position,
    },
    /// Requests removal of an existing tower, refunding its sell value.
    SellTower {
        /// Identifier of the tower targeted for removal.
        tower: TowerId,
    },
    /// Requests a level upgrade for an existing tower.
    UpgradeTower {
        /// Identifier of the tower targeted for upgrade.
        tower: TowerId,
    },
    /// Requests the start of the next wave.
    RequestWave,
    /// Requests that a zombie of the given kind enter at the path start.
    SpawnZombie {
        /// Kind of zombie to spawn.
        kind: ZombieKind,
    },
    /// Requests that a tower fire at the designated zombie.
    FireProjectile {
        /// Tower attempting to fire.
        tower: TowerId,
        /// Zombie the shot is aimed at.
        target: ZombieId,
    },
    /// Declares the active wave finished once no zombies remain.
    CompleteWave,
    /// Toggles between the playing and paused phases.
    TogglePause,
    /// Resets economy, entities, and wave state for a fresh session.
    Restart,
}

/// Events broadcast by the world (and wave generator) after processing.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Reports the new gold balance after any economy mutation.
    GoldChanged {
        /// Current gold balance.
        gold: u32,
    },
    /// Reports the remaining lives after a zombie leaked through.
    LivesChanged {
        /// Current lives remaining.
        lives: u32,
    },
    /// Reports the new score after a kill.
    ScoreChanged {
        /// Current score.
        score: u32,
    },
    /// Reports that the wave counter moved to a new value.
    WaveChanged {
        /// Wave number now pending or in progress.
        wave: u32,
    },
    /// Confirms that a wave began spawning.
    WaveStarted {
        /// Wave number that started.
        wave: u32,
    },
    /// Carries the deterministic spawn schedule for a started wave.
    WavePlanReady {
        /// Wave number the plan belongs to.
        wave: u32,
        /// Ordered spawn schedule.
        plan: WavePlan,
    },
    /// Confirms that a wave fully cleared.
    WaveCompleted {
        /// Wave number that completed.
        wave: u32,
        /// Gold granted as the completion bonus.
        bonus: u32,
    },
    /// Reports that a wave request was rejected.
    WaveRequestRejected {
        /// Specific reason the request failed.
        reason: WaveError,
    },
    /// Confirms that a tower was built.
    TowerBuilt {
        /// Identifier assigned to the tower by the world.
        tower: TowerId,
        /// Kind of tower that was built.
        kind: TowerKind,
        /// Grid cell the tower occupies.
        cell: GridCoord,
    },
    /// Confirms that a tower was sold.
    TowerSold {
        /// Identifier of the tower that was removed.
        tower: TowerId,
        /// Gold refunded to the player.
        refund: u32,
    },
    /// Confirms that a tower was upgraded.
    TowerUpgraded {
        /// Identifier of the upgraded tower.
        tower: TowerId,
        /// Level the tower now holds.
        level: u8,
    },
    /// Reports that a build request was rejected.
    BuildRejected {
        /// Kind of tower requested.
        kind: TowerKind,
        /// Specific reason the build failed.
        reason: BuildError,
    },
    /// Reports that an upgrade request was rejected.
    UpgradeRejected {
        /// Identifier of the tower targeted for upgrade.
        tower: TowerId,
        /// Specific reason the upgrade failed.
        reason: UpgradeError,
    },
    /// Reports that a sell request was rejected.
    SellRejected {
        /// Identifier of the tower targeted for removal.
        tower: TowerId,
        /// Specific reason the sale failed.
        reason: SellError,
    },
    /// Confirms that a tower fired a projectile.
    ProjectileFired {
        /// Tower that fired.
        tower: TowerId,
        /// Identifier assigned to the projectile.
        projectile: ProjectileId,
        /// Archetype of the fired projectile.
        kind: ProjectileKind,
    },
    /// Confirms that a zombie entered the maze.
    ZombieSpawned {
        /// Identifier assigned to the zombie.
        zombie: ZombieId,
        /// Kind of zombie that spawned.
        kind: ZombieKind,
    },
    /// Confirms that a zombie died to damage.
    ZombieKilled {
        /// Identifier of the dead zombie.
        zombie: ZombieId,
        /// Gold granted for the kill.
        reward: u32,
    },
    /// Confirms that a zombie reached the end of the path alive.
    ZombieReachedEnd {
        /// Identifier of the leaked zombie.
        zombie: ZombieId,
        /// Lives deducted by the leak.
        life_damage: u32,
    },
    /// Announces a game phase transition.
    PhaseChanged {
        /// Phase that became active.
        phase: GamePhase,
    },
    /// Announces the terminal game-over transition.
    GameOver {
        /// Final score.
        score: u32,
        /// Wave the run ended on.
        wave: u32,
    },
}

/// Reasons a tower build request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum BuildError {
    /// The click landed outside the grid.
    #[error("location is outside the map")]
    OutOfBounds,
    /// The cell is a path cell or already holds a tower.
    #[error("cell is not buildable")]
    Occupied,
    /// The player cannot afford the tower.
    #[error("not enough gold")]
    InsufficientGold,
}

/// Reasons a tower upgrade request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum UpgradeError {
    /// No tower with the provided identifier exists.
    #[error("tower not found")]
    MissingTower,
    /// The tower already reached the maximum level.
    #[error("tower is already at maximum level")]
    MaxLevel,
    /// The player cannot afford the upgrade.
    #[error("not enough gold")]
    InsufficientGold,
}

/// Reasons a tower sell request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum SellError {
    /// No tower with the provided identifier exists.
    #[error("tower not found")]
    MissingTower,
}

/// Reasons a wave request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum WaveError {
    /// A wave is already spawning or still has zombies alive.
    #[error("a wave is already in progress")]
    AlreadyInProgress,
    /// The session already ended.
    #[error("the game is over")]
    GameOver,
}

/// Configuration precondition violations detected before a session starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ConfigError {
    /// An explicit path was provided with fewer than two points.
    #[error("a path requires at least two points")]
    PathTooShort,
    /// The tile size must be positive.
    #[error("tile size must be greater than zero")]
    ZeroTileSize,
    /// The board must fit at least one tile.
    #[error("board dimensions are smaller than a single tile")]
    BoardTooSmall,
}

/// A single path waypoint as written in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// Horizontal coordinate in world units.
    pub x: f32,
    /// Vertical coordinate in world units.
    pub y: f32,
}

/// Session tuning loaded from a TOML file or assembled in code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in world units.
    pub width: f32,
    /// Board height in world units.
    pub height: f32,
    /// Side length of a square grid cell.
    pub tile_size: f32,
    /// Gold balance at session start.
    pub starting_gold: u32,
    /// Lives at session start.
    pub starting_lives: u32,
    /// Seed feeding the deterministic wave generator.
    pub wave_seed: u64,
    /// Explicit path polyline; empty selects the built-in S-shaped path.
    pub path: Vec<PathPoint>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
            tile_size: 40.0,
            starting_gold: 500,
            starting_lives: 20,
            wave_seed: 0x6f75_7462_7265_616b,
            path: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Validates the configuration, failing fast on malformed input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0.0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.width < self.tile_size || self.height < self.tile_size {
            return Err(ConfigError::BoardTooSmall);
        }
        if !self.path.is_empty() && self.path.len() < 2 {
            return Err(ConfigError::PathTooShort);
        }
        Ok(())
    }

    /// Resolves the path polyline, falling back to the built-in S shape.
    #[must_use]
    pub fn path_points(&self) -> Vec<Position> {
        if self.path.len() >= 2 {
            return self
                .path
                .iter()
                .map(|point| Position::new(point.x, point.y))
                .collect();
        }
        default_path(self.width, self.height)
    }
}

/// The built-in S-shaped path spanning a board of the given dimensions.
#[must_use]
pub fn default_path(width: f32, height: f32) -> Vec<Position> {
    const MARGIN: f32 = 60.0;
    vec![
        Position::new(MARGIN, height * 0.2),
        Position::new(width * 0.3, height * 0.2),
        Position::new(width * 0.3, height * 0.8),
        Position::new(width * 0.7, height * 0.8),
        Position::new(width * 0.7, height * 0.5),
        Position::new(width - MARGIN, height * 0.5),
    ]
}

/// Immutable representation of a single tower's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerSnapshot {
    /// Identifier allocated to the tower by the world.
    pub id: TowerId,
    /// Kind of tower that was constructed.
    pub kind: TowerKind,
    /// Current upgrade level, starting at one.
    pub level: u8,
    /// Center of the tower in world units.
    pub position: Position,
    /// Damage applied per projectile at the current level.
    pub damage: u32,
    /// Targeting radius at the current level.
    pub range: f32,
    /// Time remaining until the tower may fire again.
    pub ready_in: Duration,
    /// Cosmetic recoil offset decaying back to zero.
    pub recoil: f32,
    /// Gold required for the next upgrade.
    pub upgrade_cost: u32,
    /// Gold refunded when the tower is sold.
    pub sell_value: u32,
    /// Zombie the tower is currently aiming at, if any.
    pub target: Option<ZombieId>,
}

/// Read-only snapshot describing all towers in the world.
#[derive(Clone, Debug, Default)]
pub struct TowerView {
    snapshots: Vec<TowerSnapshot>,
}

impl TowerView {
    /// Creates a new tower view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<TowerSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured tower snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &TowerSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TowerSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single live zombie used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZombieSnapshot {
    /// Unique identifier assigned to the zombie.
    pub id: ZombieId,
    /// Kind of zombie.
    pub kind: ZombieKind,
    /// Current location in world units.
    pub position: Position,
    /// Remaining hit points.
    pub health: f32,
    /// Hit points at spawn.
    pub max_health: f32,
    /// Active speed multiplier (1.0 when no slow applies).
    pub slow_factor: f32,
}

/// Read-only snapshot describing all live zombies in the world.
#[derive(Clone, Debug, Default)]
pub struct ZombieView {
    snapshots: Vec<ZombieSnapshot>,
}

impl ZombieView {
    /// Creates a new zombie view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ZombieSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured zombie snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &ZombieSnapshot> {
        self.snapshots.iter()
    }

    /// Reports whether no live zombies were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ZombieSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single projectile used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileSnapshot {
    /// Unique identifier assigned to the projectile.
    pub id: ProjectileId,
    /// Archetype of the projectile.
    pub kind: ProjectileKind,
    /// Current location in world units.
    pub position: Position,
    /// Zombie the projectile is homing toward, if still designated.
    pub target: Option<ZombieId>,
    /// Distance traveled since firing.
    pub traveled: f32,
}

/// Read-only snapshot describing all projectiles in flight.
#[derive(Clone, Debug, Default)]
pub struct ProjectileView {
    snapshots: Vec<ProjectileSnapshot>,
}

impl ProjectileView {
    /// Creates a new projectile view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ProjectileSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured projectile snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectileSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ProjectileSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of an active explosion used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplosionSnapshot {
    /// Center of the blast in world units.
    pub position: Position,
    /// Full blast radius.
    pub radius: f32,
    /// Expansion progress in `[0, 1]` for fade-out rendering.
    pub progress: f32,
}

/// Pairing of a tower with the zombie it should engage this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TowerTarget {
    /// Tower holding the target.
    pub tower: TowerId,
    /// Zombie selected as the target.
    pub target: ZombieId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn ids_round_trip_through_bincode() {
        assert_round_trip(&TowerId::new(42));
        assert_round_trip(&ZombieId::new(7));
        assert_round_trip(&ProjectileId::new(1_000));
    }

    #[test]
    fn kinds_round_trip_through_bincode() {
        assert_round_trip(&TowerKind::Splash);
        assert_round_trip(&ZombieKind::Boss);
        assert_round_trip(&ProjectileKind::Ice);
    }

    #[test]
    fn wave_plan_round_trips_through_bincode() {
        let plan = WavePlan::new(
            3,
            vec![
                SpawnEntry {
                    kind: ZombieKind::Normal,
                    delay: Duration::ZERO,
                },
                SpawnEntry {
                    kind: ZombieKind::Fast,
                    delay: Duration::from_millis(850),
                },
            ],
        );
        assert_round_trip(&plan);
    }

    #[test]
    fn rejection_reasons_round_trip_through_bincode() {
        assert_round_trip(&BuildError::InsufficientGold);
        assert_round_trip(&UpgradeError::MaxLevel);
        assert_round_trip(&WaveError::AlreadyInProgress);
    }

    #[test]
    fn tower_catalog_matches_info_costs() {
        for kind in TowerKind::ALL {
            assert_eq!(kind.stats().cost, kind.info().cost);
        }
    }

    #[test]
    fn basic_tower_stats_match_catalog() {
        let stats = TowerKind::Basic.stats();
        assert_eq!(stats.damage, 15);
        assert_eq!(stats.range, 150.0);
        assert_eq!(stats.fire_cooldown, Duration::from_millis(1000));
        assert_eq!(stats.projectile, ProjectileKind::Normal);
    }

    #[test]
    fn splash_projectile_declares_area_effect() {
        assert_eq!(ProjectileKind::Splash.splash_radius(), Some(50.0));
        assert_eq!(ProjectileKind::Normal.splash_radius(), None);
    }

    #[test]
    fn ice_projectile_declares_slow_effect() {
        let slow = ProjectileKind::Ice.slow_effect().expect("slow effect");
        assert_eq!(slow.factor, 0.5);
        assert_eq!(slow.duration, Duration::from_millis(2000));
        assert!(ProjectileKind::Rapid.slow_effect().is_none());
    }

    #[test]
    fn laser_projectile_expires_on_timer() {
        assert_eq!(
            ProjectileKind::Laser.lifetime(),
            Some(Duration::from_millis(100))
        );
        assert!(ProjectileKind::Sniper.lifetime().is_none());
    }

    #[test]
    fn default_config_validates() {
        GameConfig::default().validate().expect("valid default");
    }

    #[test]
    fn single_point_path_fails_fast() {
        let config = GameConfig {
            path: vec![PathPoint { x: 0.0, y: 0.0 }],
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PathTooShort));
    }

    #[test]
    fn degenerate_board_fails_fast() {
        let config = GameConfig {
            width: 10.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::BoardTooSmall));

        let config = GameConfig {
            tile_size: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTileSize));
    }

    #[test]
    fn default_path_spans_the_board() {
        let path = default_path(960.0, 640.0);
        assert!(path.len() >= 2);
        assert_eq!(path[0].x(), 60.0);
        assert_eq!(path[path.len() - 1].x(), 900.0);
    }
}
