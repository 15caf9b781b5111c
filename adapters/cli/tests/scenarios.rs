//! Full-session scenarios over the assembled pipeline.

use std::time::Duration;

use outbreak_defence_cli::Session;
use outbreak_defence_core::{
    Command, Event, GameConfig, GamePhase, PathPoint, Position, TowerKind,
};
use outbreak_defence_world::query;

fn config(starting_lives: u32) -> GameConfig {
    GameConfig {
        width: 400.0,
        height: 200.0,
        tile_size: 40.0,
        starting_gold: 500,
        starting_lives,
        wave_seed: 7,
        path: vec![
            PathPoint { x: 20.0, y: 100.0 },
            PathPoint { x: 380.0, y: 100.0 },
        ],
    }
}

fn session(starting_lives: u32) -> Session {
    Session::new(config(starting_lives)).expect("valid config")
}

#[test]
fn a_basic_tower_pays_for_its_first_kill() {
    let mut session = session(20);

    // Midway along the path so the zombie stays in range for many shots.
    session.queue(Command::BuildTower {
        kind: TowerKind::Basic,
        at: Position::new(180.0, 60.0),
    });
    let events = session.frame(Duration::ZERO);
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::TowerBuilt { .. })));
    assert_eq!(query::gold(session.world()), 400);

    session.queue(Command::RequestWave);
    let dt = Duration::from_millis(16);
    let mut first_kill = None;
    for _ in 0..1_000 {
        let events = session.frame(dt);
        if let Some(kill) = events
            .iter()
            .find(|event| matches!(event, Event::ZombieKilled { .. }))
        {
            first_kill = Some(kill.clone());
            break;
        }
    }

    // A normal zombie takes seven 15-damage hits and pays out 10 gold.
    match first_kill {
        Some(Event::ZombieKilled { reward, .. }) => assert_eq!(reward, 10),
        other => panic!("expected a kill, got {other:?}"),
    }
    assert_eq!(query::gold(session.world()), 410);
    assert_eq!(query::score(session.world()), 100);
    assert_eq!(query::lives(session.world()), 20);
}

#[test]
fn leaks_burn_lives_until_the_base_falls() {
    let mut session = session(3);
    session.queue(Command::RequestWave);

    let dt = Duration::from_millis(100);
    let mut first_leak_frame = None;
    let mut game_over = None;
    for _ in 0..400 {
        let events = session.frame(dt);
        if first_leak_frame.is_none()
            && events
                .iter()
                .any(|event| matches!(event, Event::ZombieReachedEnd { .. }))
        {
            first_leak_frame = Some(events.clone());
        }
        if let Some(end) = events
            .iter()
            .find(|event| matches!(event, Event::GameOver { .. }))
        {
            game_over = Some(end.clone());
            break;
        }
    }

    let first_leak = first_leak_frame.expect("a zombie leaks with no towers built");
    assert!(first_leak.contains(&Event::LivesChanged { lives: 2 }));

    match game_over {
        Some(Event::GameOver { wave, .. }) => assert_eq!(wave, 1),
        other => panic!("expected game over, got {other:?}"),
    }
    assert_eq!(query::phase(session.world()), GamePhase::GameOver);
    assert_eq!(query::lives(session.world()), 0);

    // A dead session ignores further time and wave requests.
    session.queue(Command::RequestWave);
    let events = session.frame(dt);
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::TimeAdvanced { .. })));
    assert!(events.contains(&Event::WaveRequestRejected {
        reason: outbreak_defence_core::WaveError::GameOver,
    }));
}

#[test]
fn clearing_the_first_wave_pays_the_bonus() {
    let mut session = session(20);
    session.queue(Command::RequestWave);

    let dt = Duration::from_millis(100);
    let mut completion = None;
    for _ in 0..600 {
        let events = session.frame(dt);
        if let Some(done) = events
            .iter()
            .find(|event| matches!(event, Event::WaveCompleted { .. }))
        {
            completion = Some((done.clone(), events.clone()));
            break;
        }
    }

    // With no towers all eight zombies leak, the field clears, and the
    // completion bonus for finishing wave one is 50 + 2 * 10.
    let (done, events) = completion.expect("the wave eventually clears");
    assert_eq!(done, Event::WaveCompleted { wave: 1, bonus: 70 });
    assert!(events.contains(&Event::WaveChanged { wave: 2 }));
    assert_eq!(query::gold(session.world()), 570);
    assert_eq!(query::wave(session.world()), 2);
    assert_eq!(query::lives(session.world()), 12);
}

#[test]
fn identical_sessions_replay_identically() {
    let run = || {
        let mut session = session(20);
        session.queue(Command::BuildTower {
            kind: TowerKind::Basic,
            at: Position::new(180.0, 60.0),
        });
        session.queue(Command::RequestWave);

        let mut log = Vec::new();
        for _ in 0..600 {
            log.extend(session.frame(Duration::from_millis(16)));
        }
        (
            log,
            query::gold(session.world()),
            query::score(session.world()),
            query::lives(session.world()),
        )
    };

    assert_eq!(run(), run());
}
