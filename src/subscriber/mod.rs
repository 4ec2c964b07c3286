// ABOUTME: Bounded subscriber record store with slot-reuse ids
//
// A subscriber id is the record's slot index and stays stable for the life of
// the record; the number pool stores these ids as owners. Deleting frees the
// slot for reuse, so the UI flow must release a subscriber's numbers before
// deleting the record.

pub mod codec;

use thiserror::Error;

/// Maximum number of subscriber records
pub const MAX_SUBSCRIBERS: usize = 20;

/// Failures raised by subscriber store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Every slot is occupied
    #[error("subscriber store is full ({limit} records)")]
    Full {
        /// The fixed record limit
        limit: usize,
    },

    /// No record at the given id
    #[error("no subscriber with id {0}")]
    NotFound(i32),

    /// A record with this id card already exists
    #[error("id card {0} is already registered")]
    DuplicateIdCard(String),
}

/// Orderings offered by the listing views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lexicographic by name
    Name,
    /// Youngest first
    AgeAscending,
    /// Oldest first
    AgeDescending,
    /// Lexicographic by id card
    IdCard,
}

/// A single subscriber record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub name: String,
    pub gender: String,
    pub age: i32,
    pub id_card: String,
    pub job: String,
    pub address: String,
}

/// Fixed-size store of subscriber records
#[derive(Debug, Default)]
pub struct SubscriberStore {
    slots: Vec<Option<Subscriber>>,
}

impl SubscriberStore {
    /// Empty store with all slots free
    pub fn new() -> Self {
        Self {
            slots: vec![None; MAX_SUBSCRIBERS],
        }
    }

    /// Number of active records
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when no records exist
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a record into the first free slot, returning its id.
    ///
    /// Rejects a duplicate id card; the id card is the natural key.
    pub fn add(&mut self, subscriber: Subscriber) -> Result<i32, StoreError> {
        if self.find_by_id_card(&subscriber.id_card).is_some() {
            return Err(StoreError::DuplicateIdCard(subscriber.id_card));
        }
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(StoreError::Full {
                limit: MAX_SUBSCRIBERS,
            })?;
        self.slots[slot] = Some(subscriber);
        Ok(slot as i32)
    }

    /// Record with the given id, if active
    pub fn get(&self, id: i32) -> Option<&Subscriber> {
        usize::try_from(id)
            .ok()
            .and_then(|slot| self.slots.get(slot))
            .and_then(Option::as_ref)
    }

    /// Replace the record at `id`
    pub fn update(&mut self, id: i32, subscriber: Subscriber) -> Result<(), StoreError> {
        let slot = self.occupied_slot(id)?;
        self.slots[slot] = Some(subscriber);
        Ok(())
    }

    /// Remove the record at `id`, freeing the slot for reuse.
    ///
    /// The caller is responsible for having released the subscriber's numbers
    /// first; the store has no view of the pool.
    pub fn remove(&mut self, id: i32) -> Result<Subscriber, StoreError> {
        let slot = self.occupied_slot(id)?;
        self.slots[slot].take().ok_or(StoreError::NotFound(id))
    }

    /// Id of the record holding this id card
    pub fn find_by_id_card(&self, id_card: &str) -> Option<i32> {
        self.iter()
            .find(|(_, s)| s.id_card == id_card)
            .map(|(id, _)| id)
    }

    /// Ids of every record with this exact name (names are not unique)
    pub fn find_by_name(&self, name: &str) -> Vec<i32> {
        self.iter()
            .filter(|(_, s)| s.name == name)
            .map(|(id, _)| id)
            .collect()
    }

    /// True when no active record holds this id card
    pub fn is_id_card_unique(&self, id_card: &str) -> bool {
        self.find_by_id_card(id_card).is_none()
    }

    /// Ids of every active record ordered per `order`. The sort is stable,
    /// so ties keep slot order.
    pub fn sorted_ids(&self, order: SortOrder) -> Vec<i32> {
        let mut records: Vec<(i32, &Subscriber)> = self.iter().collect();
        match order {
            SortOrder::Name => records.sort_by(|a, b| a.1.name.cmp(&b.1.name)),
            SortOrder::AgeAscending => records.sort_by_key(|&(_, s)| s.age),
            SortOrder::AgeDescending => records.sort_by_key(|&(_, s)| std::cmp::Reverse(s.age)),
            SortOrder::IdCard => records.sort_by(|a, b| a.1.id_card.cmp(&b.1.id_card)),
        }
        records.into_iter().map(|(id, _)| id).collect()
    }

    /// Active records with their ids, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &Subscriber)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, s)| s.as_ref().map(|sub| (slot as i32, sub)))
    }

    /// Place a record at an explicit slot; used by the codec on load
    pub(crate) fn place(&mut self, slot: usize, subscriber: Subscriber) -> bool {
        if slot >= self.slots.len() {
            return false;
        }
        self.slots[slot] = Some(subscriber);
        true
    }

    /// Drop all records; used by the codec before a load
    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    fn occupied_slot(&self, id: i32) -> Result<usize, StoreError> {
        let slot = usize::try_from(id).map_err(|_| StoreError::NotFound(id))?;
        match self.slots.get(slot) {
            Some(Some(_)) => Ok(slot),
            _ => Err(StoreError::NotFound(id)),
        }
    }
}
