// ABOUTME: Binding lifecycle - attach and release numbers for a subscriber
//
// Enforces the binding invariants: a number has at most one owner, an owner
// holds at most MAX_PER_SUBSCRIBER numbers, and only FREE numbers can be
// bound. The subscriber side of the relationship is derived by scanning;
// no reverse index is kept.

use super::{PhoneState, PoolError, ResourcePool, SubscriberId, MAX_PER_SUBSCRIBER};
use crate::validate::phone;
use chrono::Local;

impl ResourcePool {
    /// Bind `number` to `subscriber`.
    ///
    /// Fails on bad number syntax, a subscriber already at the cap, an
    /// unknown number, or a number that is not FREE. On success the entry
    /// becomes ASSIGNED with the current local time as its assignment stamp.
    pub fn bind(&mut self, subscriber: SubscriberId, number: &str) -> Result<(), PoolError> {
        if !phone::is_valid_number(number) {
            return Err(PoolError::InvalidNumber(number.to_string()));
        }
        if self.count_for(subscriber) >= MAX_PER_SUBSCRIBER {
            return Err(PoolError::CapacityExceeded {
                subscriber,
                limit: MAX_PER_SUBSCRIBER,
            });
        }

        let index = self
            .find(number)
            .ok_or_else(|| PoolError::NotFound(number.to_string()))?;
        let entry = &mut self.entries_mut()[index];
        if entry.state != PhoneState::Free {
            return Err(PoolError::StateConflict {
                number: number.to_string(),
                state: entry.state,
            });
        }

        entry.state = PhoneState::Assigned;
        entry.owner = Some(subscriber);
        entry.assigned_at = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
        tracing::info!(subscriber, number, "number bound");
        Ok(())
    }

    /// Release `number` from `subscriber`, resetting it to FREE.
    ///
    /// Fails when the number is unknown, not ASSIGNED, or owned by a
    /// different subscriber.
    pub fn unbind(&mut self, subscriber: SubscriberId, number: &str) -> Result<(), PoolError> {
        let index = self
            .find(number)
            .ok_or_else(|| PoolError::NotFound(number.to_string()))?;
        let entry = &mut self.entries_mut()[index];
        if entry.state != PhoneState::Assigned || entry.owner != Some(subscriber) {
            return Err(PoolError::StateConflict {
                number: number.to_string(),
                state: entry.state,
            });
        }

        entry.reset();
        tracing::info!(subscriber, number, "number released");
        Ok(())
    }

    /// Release every number assigned to `subscriber`, returning how many were
    /// reset. Callers must run this before deleting a subscriber record.
    pub fn unbind_all(&mut self, subscriber: SubscriberId) -> usize {
        let mut released = 0;
        for entry in self.entries_mut() {
            if entry.state == PhoneState::Assigned && entry.owner == Some(subscriber) {
                entry.reset();
                released += 1;
            }
        }
        if released > 0 {
            tracing::info!(subscriber, released, "all numbers released");
        }
        released
    }

    /// How many numbers `subscriber` currently holds
    pub fn count_for(&self, subscriber: SubscriberId) -> usize {
        self.entries()
            .iter()
            .filter(|r| r.state == PhoneState::Assigned && r.owner == Some(subscriber))
            .count()
    }

    /// The numbers `subscriber` currently holds, in insertion order
    pub fn list_for(&self, subscriber: SubscriberId) -> Vec<String> {
        self.entries()
            .iter()
            .filter(|r| r.state == PhoneState::Assigned && r.owner == Some(subscriber))
            .map(|r| r.number.clone())
            .collect()
    }

    /// True when `number` is bindable in principle: absent from the pool, or
    /// present and FREE. A released number is reusable.
    pub fn is_unique(&self, number: &str) -> bool {
        match self.find(number) {
            None => true,
            Some(index) => self.entries()[index].state == PhoneState::Free,
        }
    }
}
