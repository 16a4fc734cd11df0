//! DespawnQueue — отложенный despawn заспавненных объектов
//!
//! Min-heap по (deadline, sequence). Дренится каждый tick, никаких blocking waits.
//! Одинаковые deadlines истекают в порядке выстрелов. Cancel не поддерживается.

use bevy::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use super::ObjectHandle;

/// Запланированный despawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PendingDespawn {
    pub deadline: Duration,
    sequence: u64,
    pub handle: ObjectHandle,
    /// Participant, чей выстрел создал объект
    pub owner: Entity,
}

#[derive(Resource, Debug, Default)]
pub struct DespawnQueue {
    heap: BinaryHeap<Reverse<PendingDespawn>>,
    next_sequence: u64,
}

impl DespawnQueue {
    pub fn schedule(&mut self, handle: ObjectHandle, owner: Entity, deadline: Duration) -> PendingDespawn {
        let pending = PendingDespawn {
            deadline,
            sequence: self.next_sequence,
            handle,
            owner,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(pending));
        pending
    }

    /// Забрать следующий истёкший (deadline <= now)
    pub fn pop_due(&mut self, now: Duration) -> Option<PendingDespawn> {
        let Reverse(next) = self.heap.peek()?;
        if next.deadline > now {
            return None;
        }
        self.heap.pop().map(|Reverse(pending)| pending)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_pop_due_respects_deadline() {
        let mut queue = DespawnQueue::default();
        queue.schedule(ObjectHandle(1), Entity::PLACEHOLDER, secs(5));

        assert_eq!(queue.pop_due(secs(4)), None);
        assert_eq!(queue.len(), 1);

        let due = queue.pop_due(secs(5)).unwrap();
        assert_eq!(due.handle, ObjectHandle(1));
        assert!(queue.is_empty());

        // Consumed exactly once
        assert_eq!(queue.pop_due(secs(100)), None);
    }

    #[test]
    fn test_earliest_deadline_first() {
        let mut queue = DespawnQueue::default();
        queue.schedule(ObjectHandle(1), Entity::PLACEHOLDER, secs(10));
        queue.schedule(ObjectHandle(2), Entity::PLACEHOLDER, secs(3));
        queue.schedule(ObjectHandle(3), Entity::PLACEHOLDER, secs(7));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(secs(10)))
            .map(|p| p.handle)
            .collect();
        assert_eq!(order, vec![ObjectHandle(2), ObjectHandle(3), ObjectHandle(1)]);
    }

    #[test]
    fn test_equal_deadlines_expire_in_fire_order() {
        let mut queue = DespawnQueue::default();
        queue.schedule(ObjectHandle(9), Entity::PLACEHOLDER, secs(2));
        queue.schedule(ObjectHandle(4), Entity::PLACEHOLDER, secs(2));

        assert_eq!(queue.pop_due(secs(2)).map(|p| p.handle), Some(ObjectHandle(9)));
        assert_eq!(queue.pop_due(secs(2)).map(|p| p.handle), Some(ObjectHandle(4)));
    }
}
