//! Headless hotbar симуляция
//!
//! Local participant + seeded key-masher bot, 1000 тиков без рендера.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;

use hotbar_simulation::{
    create_headless_app, DeterministicRng, InputKey, LocallyControlled, LoadoutConfig,
    Participant, PlayerKeyPressed, SpawnAnchor,
};

/// Клавиши, которые жмёт бот
const BOT_KEYS: [InputKey; 11] = [
    InputKey::Digit(1),
    InputKey::Digit(2),
    InputKey::Digit(3),
    InputKey::Digit(4),
    InputKey::Letter('F'),
    InputKey::Letter('Q'),
    InputKey::Letter('Y'),
    InputKey::Letter('U'),
    InputKey::Letter('I'),
    InputKey::Letter('O'),
    InputKey::MouseLeft,
];

/// Вероятность нажатия за tick
const PRESS_CHANCE: f64 = 0.3;

fn main() {
    let seed = 42;
    println!("Starting hotbar headless simulation (seed: {})", seed);

    let (mut app, journal) = create_headless_app(seed);

    app.insert_resource(LoadoutConfig::load())
        // Один fixed tick на update, независимо от wall clock
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )));

    let anchor = app
        .world_mut()
        .spawn(Transform::from_xyz(0.0, 1.8, 0.0))
        .id();
    let player = app
        .world_mut()
        .spawn((
            Participant { network_id: 1 },
            LocallyControlled,
            SpawnAnchor(Some(anchor)),
        ))
        .id();

    // Remote copy: получает клавиши, но остаётся inert
    app.world_mut().spawn(Participant { network_id: 2 });

    let mut presses = 0usize;

    for tick in 0..1000 {
        let key = {
            let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
            if rng.rng.gen_bool(PRESS_CHANCE) {
                Some(BOT_KEYS[rng.rng.gen_range(0..BOT_KEYS.len())])
            } else {
                None
            }
        };

        if let Some(key) = key {
            app.world_mut().send_event(PlayerKeyPressed {
                participant: player,
                key,
            });
            presses += 1;
        }

        app.update();

        if tick % 100 == 0 {
            println!(
                "Tick {}: {} presses, {} spawned, {} alive",
                tick,
                presses,
                journal.spawned().len(),
                journal.alive_count()
            );
        }
    }

    println!(
        "Simulation complete! {} presses, {} spawned, {} despawned, {} still alive",
        presses,
        journal.spawned().len(),
        journal.despawned().len(),
        journal.alive_count()
    );
}
