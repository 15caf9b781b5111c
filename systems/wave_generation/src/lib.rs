#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic wave generation system.
//!
//! Turns `WaveStarted` events into `WavePlanReady` events carrying the full
//! spawn schedule for the wave. Generation is a pure function of the wave
//! number and the global seed: each wave derives its own seed through
//! sha256, which feeds a SplitMix64 stream for the composition rolls, so
//! replaying a session with the same seed reproduces every wave exactly.

use std::time::Duration;

use outbreak_defence_core::{Event, SpawnEntry, WavePlan, ZombieKind};
use sha2::{Digest, Sha256};

/// Baseline entry count before the per-wave growth is applied.
const BASE_ENTRY_COUNT: u32 = 5;
/// Additional entries per wave number.
const ENTRIES_PER_WAVE: u32 = 3;
/// Spawn cadence starts here and tightens as waves progress.
const BASE_SPAWN_INTERVAL_MS: u64 = 1_000;
/// Cadence reduction per wave number, in milliseconds.
const SPAWN_INTERVAL_STEP_MS: u64 = 50;
/// The cadence never tightens below this floor.
const MIN_SPAWN_INTERVAL_MS: u64 = 300;
/// Every this-many waves ends with an extra boss entry.
const BOSS_WAVE_PERIOD: u32 = 5;

/// Pure system that generates deterministic [`WavePlan`] values for waves.
#[derive(Clone, Copy, Debug)]
pub struct WaveGeneration {
    seed: u64,
}

impl WaveGeneration {
    /// Creates a new generator bound to the provided global seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Consumes `WaveStarted` events and emits [`Event::WavePlanReady`].
    pub fn handle(&self, events: &[Event], out_events: &mut Vec<Event>) {
        for event in events {
            if let Event::WaveStarted { wave } = event {
                out_events.push(Event::WavePlanReady {
                    wave: *wave,
                    plan: generate(*wave, self.seed),
                });
            }
        }
    }
}

/// Generates the spawn schedule for a wave.
///
/// The wave fields `5 + 3 × wave` entries whose kinds are rolled with
/// wave-gated odds, cadenced at `max(300, 1000 − 50 × wave)` milliseconds.
/// Every fifth wave appends one boss entry behind the entire queue.
#[must_use]
pub fn generate(wave: u32, seed: u64) -> WavePlan {
    let interval = spawn_interval(wave);
    let count = BASE_ENTRY_COUNT + ENTRIES_PER_WAVE * wave;
    let mut rng = SplitMix64::new(derive_wave_seed(seed, wave));

    let mut entries = Vec::with_capacity(count as usize + 1);
    for index in 0..count {
        entries.push(SpawnEntry {
            kind: roll_kind(wave, rng.next_unit()),
            delay: interval * index,
        });
    }

    if wave % BOSS_WAVE_PERIOD == 0 {
        entries.push(SpawnEntry {
            kind: ZombieKind::Boss,
            delay: interval * count,
        });
    }

    WavePlan::new(wave, entries)
}

/// Spawn cadence for the wave.
#[must_use]
pub fn spawn_interval(wave: u32) -> Duration {
    let reduction = SPAWN_INTERVAL_STEP_MS.saturating_mul(u64::from(wave));
    let interval = BASE_SPAWN_INTERVAL_MS
        .saturating_sub(reduction)
        .max(MIN_SPAWN_INTERVAL_MS);
    Duration::from_millis(interval)
}

fn roll_kind(wave: u32, roll: f64) -> ZombieKind {
    if wave >= 8 && roll < 0.05 {
        ZombieKind::Boss
    } else if wave >= 4 && roll < 0.25 {
        ZombieKind::Tank
    } else if wave >= 2 && roll < 0.4 {
        ZombieKind::Fast
    } else {
        ZombieKind::Normal
    }
}

fn derive_wave_seed(seed: u64, wave: u32) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(wave.to_le_bytes());
    let digest = hasher.finalize();
    let bytes: [u8; 8] = digest[0..8].try_into().expect("sha256 digest slice length");
    u64::from_le_bytes(bytes)
}

#[derive(Debug)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_unit(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / ((1u64 << 53) as f64);
        let value = self.next_u64() >> 11;
        (value as f64) * SCALE
    }
}
