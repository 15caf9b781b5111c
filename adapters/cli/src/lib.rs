#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless session harness that wires the world and systems together.
//!
//! Each frame runs a fixed pipeline. Player commands queued since the last
//! frame are applied first. Wave generation then reacts to the events it has
//! not yet seen and publishes any new wave plan, the spawner and the
//! targeting/combat pair turn those events and the current snapshot views
//! into commands, and finally the accumulated commands plus a single
//! `Command::Tick` are applied. Events produced after the systems ran are
//! carried over so the systems observe every event exactly once.

use std::time::Duration;

use outbreak_defence_core::{Command, ConfigError, Event, GameConfig, GamePhase};
use outbreak_defence_system_spawning::Spawning;
use outbreak_defence_system_tower_combat::fire_commands;
use outbreak_defence_system_tower_targeting::select_targets;
use outbreak_defence_system_wave_generation::WaveGeneration;
use outbreak_defence_world::{apply, query, World};

/// Owns a world plus the simulation systems and advances them in lockstep.
#[derive(Debug)]
pub struct Session {
    world: World,
    wave_generation: WaveGeneration,
    spawning: Spawning,
    carried: Vec<Event>,
    inbox: Vec<Command>,
    speed: f32,
}

impl Session {
    /// Builds a session around a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let world = World::new(config)?;
        let wave_generation = WaveGeneration::new(world.wave_seed());
        Ok(Self {
            world,
            wave_generation,
            spawning: Spawning::new(),
            carried: Vec::new(),
            inbox: Vec::new(),
            speed: 1.0,
        })
    }

    /// Sets the simulation speed multiplier applied to every frame's `dt`.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Queues a player command for the next frame.
    pub fn queue(&mut self, command: Command) {
        self.inbox.push(command);
    }

    /// Read-only access to the underlying world for queries.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Convenience accessor for the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        query::phase(&self.world)
    }

    /// Advances the session by one frame and returns the events it produced.
    pub fn frame(&mut self, dt: Duration) -> Vec<Event> {
        // f64 keeps whole-nanosecond results for ordinary multipliers,
        // which f32 scaling does not.
        let dt = dt.mul_f64(f64::from(self.speed));

        // Events the systems have not observed yet, starting with the tail
        // of the previous frame.
        let mut inputs = std::mem::take(&mut self.carried);
        let mut produced = Vec::new();

        for command in self.inbox.drain(..) {
            apply(&mut self.world, command, &mut produced);
        }
        inputs.extend(produced.iter().cloned());

        let mut generated = Vec::new();
        self.wave_generation.handle(&inputs, &mut generated);
        inputs.extend(generated.iter().cloned());
        produced.append(&mut generated);

        let zombies = query::zombie_view(&self.world);
        let towers = query::tower_view(&self.world);
        let mut commands = Vec::new();
        self.spawning.handle(&inputs, &zombies, &mut commands);
        let targets = select_targets(&towers, &zombies);
        fire_commands(&towers, &targets, &mut commands);

        // Everything from here on is observed by the systems next frame.
        let mut late = Vec::new();
        for command in commands {
            apply(&mut self.world, command, &mut late);
        }
        apply(&mut self.world, Command::Tick { dt }, &mut late);

        self.carried = late.clone();
        produced.append(&mut late);
        produced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outbreak_defence_core::{PathPoint, TowerKind};

    fn config() -> GameConfig {
        GameConfig {
            width: 400.0,
            height: 200.0,
            tile_size: 40.0,
            starting_gold: 500,
            starting_lives: 20,
            wave_seed: 7,
            path: vec![PathPoint { x: 20.0, y: 100.0 }, PathPoint { x: 380.0, y: 100.0 }],
        }
    }

    #[test]
    fn queued_commands_apply_on_the_next_frame() {
        let mut session = Session::new(config()).expect("valid config");
        session.queue(Command::BuildTower {
            kind: TowerKind::Basic,
            at: outbreak_defence_core::Position::new(60.0, 140.0),
        });

        let events = session.frame(Duration::ZERO);
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::TowerBuilt { .. })));
        assert_eq!(query::gold(session.world()), 400);
    }

    #[test]
    fn the_speed_multiplier_scales_advanced_time() {
        let mut session = Session::new(config()).expect("valid config");
        session.set_speed(2.0);

        let events = session.frame(Duration::from_millis(100));
        assert!(events.contains(&Event::TimeAdvanced {
            dt: Duration::from_millis(200),
        }));
    }

    #[test]
    fn a_requested_wave_spawns_within_two_frames() {
        let mut session = Session::new(config()).expect("valid config");
        session.queue(Command::RequestWave);

        // Frame one: the wave starts and the plan is published.
        let events = session.frame(Duration::from_millis(16));
        assert!(events.contains(&Event::WaveStarted { wave: 1 }));
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::WavePlanReady { wave: 1, .. })));

        // Frame two: the spawner has seen the plan and the elapsed time.
        let events = session.frame(Duration::from_millis(16));
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::ZombieSpawned { .. })));
    }
}
