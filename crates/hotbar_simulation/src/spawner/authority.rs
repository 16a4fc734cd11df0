//! Spawn authority — внешний сервис создания/удаления networked объектов
//!
//! # Архитектура
//! - Ядро держит только opaque `ObjectHandle`, сам объект живёт у authority
//! - `SpawnService` resource хранит `Box<dyn SpawnAuthority>` (network layer подставляет свой)
//! - `LocalSpawnAuthority` — in-process arena для headless host и тестов,
//!   пишет все вызовы в shared `SpawnJournal`

use bevy::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Opaque handle заспавненного объекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub struct ObjectHandle(pub u64);

/// Что заспавнить и где (scale всегда unit для projectiles)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind_index: usize,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthorityError {
    /// Объект уже удалён другим путём (collision и т.п.)
    #[error("object {0:?} is not alive")]
    UnknownHandle(ObjectHandle),
}

/// Внешний spawn authority (replicates create/destroy остальным participants)
pub trait SpawnAuthority: Send + Sync {
    fn spawn(&mut self, request: &SpawnRequest) -> ObjectHandle;

    fn despawn(&mut self, handle: ObjectHandle) -> Result<(), AuthorityError>;
}

/// Resource: активный spawn authority
#[derive(Resource)]
pub struct SpawnService(pub Box<dyn SpawnAuthority>);

impl SpawnService {
    pub fn new(authority: impl SpawnAuthority + 'static) -> Self {
        Self(Box::new(authority))
    }
}

// ============================================================================
// LocalSpawnAuthority
// ============================================================================

/// Запись в journal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthorityCall {
    Spawn {
        request: SpawnRequest,
        handle: ObjectHandle,
    },
    Despawn {
        handle: ObjectHandle,
        was_alive: bool,
    },
}

#[derive(Debug, Default)]
struct JournalState {
    next_handle: u64,
    alive: HashSet<ObjectHandle>,
    calls: Vec<AuthorityCall>,
}

/// Shared view на состояние LocalSpawnAuthority (clone = тот же journal)
#[derive(Debug, Clone, Default)]
pub struct SpawnJournal(Arc<Mutex<JournalState>>);

impl SpawnJournal {
    fn lock(&self) -> MutexGuard<'_, JournalState> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn calls(&self) -> Vec<AuthorityCall> {
        self.lock().calls.clone()
    }

    pub fn spawned(&self) -> Vec<(SpawnRequest, ObjectHandle)> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                AuthorityCall::Spawn { request, handle } => Some((*request, *handle)),
                AuthorityCall::Despawn { .. } => None,
            })
            .collect()
    }

    pub fn despawned(&self) -> Vec<ObjectHandle> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                AuthorityCall::Despawn { handle, .. } => Some(*handle),
                AuthorityCall::Spawn { .. } => None,
            })
            .collect()
    }

    pub fn is_alive(&self, handle: ObjectHandle) -> bool {
        self.lock().alive.contains(&handle)
    }

    pub fn alive_count(&self) -> usize {
        self.lock().alive.len()
    }

    /// Объект уничтожен вне scheduler'а (collision и т.п.)
    pub fn destroy_externally(&self, handle: ObjectHandle) -> bool {
        self.lock().alive.remove(&handle)
    }
}

/// In-process spawn authority (headless host, тесты)
#[derive(Debug, Clone, Default)]
pub struct LocalSpawnAuthority {
    journal: SpawnJournal,
}

impl LocalSpawnAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn journal(&self) -> SpawnJournal {
        self.journal.clone()
    }
}

impl SpawnAuthority for LocalSpawnAuthority {
    fn spawn(&mut self, request: &SpawnRequest) -> ObjectHandle {
        let mut state = self.journal.lock();
        state.next_handle += 1;
        let handle = ObjectHandle(state.next_handle);

        state.alive.insert(handle);
        state.calls.push(AuthorityCall::Spawn {
            request: *request,
            handle,
        });
        handle
    }

    fn despawn(&mut self, handle: ObjectHandle) -> Result<(), AuthorityError> {
        let mut state = self.journal.lock();
        let was_alive = state.alive.remove(&handle);
        state.calls.push(AuthorityCall::Despawn { handle, was_alive });

        if was_alive {
            Ok(())
        } else {
            Err(AuthorityError::UnknownHandle(handle))
        }
    }
}
