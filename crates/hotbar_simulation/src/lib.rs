//! Hotbar Simulation Core
//!
//! ECS-ядро на Bevy 0.16: локальный hotbar игрока + cooldown-gated spawn authority.
//!
//! Два компонента:
//! - Inventory (hotbar слоты, выбор, размещение, удаление с подтверждением)
//! - Spawner (ammo/cooldown, spawn через внешний authority, scheduled despawn)
//!
//! Scene layer (render, network replication) — снаружи: шлёт `PlayerKeyPressed`,
//! ставит `LocallyControlled`, подставляет `SpawnService`, читает output events.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod input;
pub mod inventory;
pub mod logger;
pub mod shared;
pub mod spawner;

// Re-exports для удобства
pub use components::*;
pub use config::{ConfigError, LoadoutConfig};
pub use input::{InputAction, InputKey, InputPlugin, ModalPanels, PanelHandle, PlayerKeyPressed};
pub use inventory::{DisplayToggled, Hotbar, HotbarError, InventoryPlugin, ItemKindId};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};
pub use shared::SimClock;
pub use spawner::{
    Armory, DespawnQueue, LocalSpawnAuthority, ObjectHandle, SpawnAnchor, SpawnAuthority,
    SpawnService, SpawnerPlugin,
};

/// Порядок выполнения внутри одного FixedUpdate tick
///
/// 1. Setup — binding table, init local participants
/// 2. Route — authority + modal gate
/// 3. Fire — spawner читает selection ДО применения hotbar команд этого tick'а
/// 4. Inventory — hotbar state machine
/// 5. Expire — despawn истёкших объектов
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadoutSet {
    Setup,
    Route,
    Fire,
    Inventory,
    Expire,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// LoadoutConfig не перезаписывается, если уже вставлен до plugin'а.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .init_resource::<LoadoutConfig>()
            .init_resource::<SimClock>()
            .register_type::<Participant>()
            .register_type::<LocallyControlled>()
            .configure_sets(
                FixedUpdate,
                (
                    LoadoutSet::Setup,
                    LoadoutSet::Route,
                    LoadoutSet::Fire,
                    LoadoutSet::Inventory,
                    LoadoutSet::Expire,
                )
                    .chain(),
            )
            .add_systems(FixedFirst, shared::sync_sim_clock)
            .add_plugins((InputPlugin, InventoryPlugin, SpawnerPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// SimulationPlugin + LocalSpawnAuthority. Journal authority возвращается отдельно,
/// чтобы host мог читать spawn/despawn историю.
pub fn create_headless_app(seed: u64) -> (App, spawner::SpawnJournal) {
    init_logger();

    let authority = LocalSpawnAuthority::new();
    let journal = authority.journal();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(SimulationPlugin)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(SpawnService::new(authority));

    (app, journal)
}
