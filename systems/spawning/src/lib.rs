#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Stateful scheduler that releases zombies according to the wave plan.
//!
//! The system installs the queue carried by `WavePlanReady`, accumulates
//! elapsed time from `TimeAdvanced` events, and emits `Command::SpawnZombie`
//! whenever the queue head's delay has been reached. Delays are measured
//! from the previous spawn: the accumulator resets to zero after every
//! release. Once the queue is drained and the battlefield is clear of live
//! zombies it emits `Command::CompleteWave` exactly once.

use std::collections::VecDeque;
use std::time::Duration;

use outbreak_defence_core::{Command, Event, SpawnEntry, ZombieView};

#[derive(Debug)]
struct ActiveWave {
    queue: VecDeque<SpawnEntry>,
    accumulator: Duration,
}

/// Stateful system that turns wave plans into timed spawn commands.
#[derive(Debug, Default)]
pub struct Spawning {
    active: Option<ActiveWave>,
}

impl Spawning {
    /// Creates a new scheduler with no wave in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes events and the current zombie view to emit spawn commands.
    pub fn handle(&mut self, events: &[Event], zombies: &ZombieView, out: &mut Vec<Command>) {
        let mut spawned = 0usize;

        for event in events {
            match event {
                Event::WavePlanReady { plan, .. } => {
                    self.active = Some(ActiveWave {
                        queue: plan.clone().into_entries().into(),
                        accumulator: Duration::ZERO,
                    });
                }
                Event::TimeAdvanced { dt } => {
                    if let Some(active) = self.active.as_mut() {
                        active.accumulator = active.accumulator.saturating_add(*dt);
                        while let Some(&entry) = active.queue.front() {
                            if active.accumulator < entry.delay {
                                break;
                            }
                            let _ = active.queue.pop_front();
                            out.push(Command::SpawnZombie { kind: entry.kind });
                            active.accumulator = Duration::ZERO;
                            spawned += 1;
                        }
                    }
                }
                Event::GameOver { .. } => {
                    self.active = None;
                }
                _ => {}
            }
        }

        // Completion only once every scheduled zombie has spawned and died
        // or leaked; spawns emitted this frame are not yet in the view.
        if spawned == 0 {
            if let Some(active) = &self.active {
                if active.queue.is_empty() && zombies.is_empty() {
                    out.push(Command::CompleteWave);
                    self.active = None;
                }
            }
        }
    }
}
