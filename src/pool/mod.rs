// ABOUTME: Phone-number resource pool - growable inventory with tri-state lifecycle
//
// The pool owns an insertion-ordered sequence of number resources. Numbers are
// created only by segment generation and never individually deleted; releasing
// a number resets it to FREE. Capacity grows by doubling and never shrinks.
// All lookups are linear scans, which is fine at the few-thousand-entry scale
// this tool runs at.

pub mod binding;
pub mod catalog;
pub mod codec;
pub mod error;

pub use error::PoolError;

use crate::validate::phone;
use std::fmt;

/// Opaque handle into the external subscriber store
pub type SubscriberId = i32;

/// Initial pool capacity before any growth
pub const INITIAL_CAPACITY: usize = 100;

/// Maximum numbers a single subscriber may hold at once
pub const MAX_PER_SUBSCRIBER: usize = 5;

/// Full phone numbers are always exactly this many digits
pub const NUMBER_LEN: usize = 11;

/// Lifecycle state of a single number resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneState {
    /// Available for assignment
    Free,
    /// Bound to a subscriber
    Assigned,
    /// Reserved state kept for data-file compatibility; no public transition
    /// leads here
    Inactive,
}

impl PhoneState {
    /// On-disk code for this state
    pub const fn code(self) -> i32 {
        match self {
            Self::Free => 0,
            Self::Assigned => 1,
            Self::Inactive => 2,
        }
    }

    /// Decode an on-disk state code
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Free),
            1 => Some(Self::Assigned),
            2 => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for PhoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Free => "FREE",
            Self::Assigned => "ASSIGNED",
            Self::Inactive => "INACTIVE",
        };
        f.write_str(label)
    }
}

/// A single number resource in the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneResource {
    /// The 11-digit number string
    pub number: String,
    /// Current lifecycle state
    pub state: PhoneState,
    /// Owning subscriber; set iff `state == Assigned`
    pub owner: Option<SubscriberId>,
    /// Local assignment timestamp, `YYYY-MM-DD HH:MM:SS`; set iff assigned
    pub assigned_at: Option<String>,
}

impl PhoneResource {
    /// A fresh FREE resource for `number`
    fn free(number: String) -> Self {
        Self {
            number,
            state: PhoneState::Free,
            owner: None,
            assigned_at: None,
        }
    }

    /// Reset to FREE, clearing owner and timestamp but keeping the number
    pub(crate) fn reset(&mut self) {
        self.state = PhoneState::Free;
        self.owner = None;
        self.assigned_at = None;
    }
}

/// Growable pool of number resources, insertion-ordered
#[derive(Debug)]
pub struct ResourcePool {
    entries: Vec<PhoneResource>,
    capacity: usize,
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourcePool {
    /// Create an empty pool with the fixed initial capacity
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Number of resources currently in the pool
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the pool holds no resources
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current capacity; always >= `len()`, never shrinks
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resource at `index`, if any
    pub fn get(&self, index: usize) -> Option<&PhoneResource> {
        self.entries.get(index)
    }

    /// All resources in insertion order
    pub fn entries(&self) -> &[PhoneResource] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<PhoneResource> {
        &mut self.entries
    }

    /// Ensure capacity for at least `required_total` resources.
    ///
    /// No-op when the current capacity suffices; otherwise doubles until it
    /// covers the requirement, amortizing growth cost across generations.
    pub fn grow_to(&mut self, required_total: usize) {
        if required_total <= self.capacity {
            return;
        }
        let mut new_capacity = self.capacity * 2;
        while new_capacity < required_total {
            new_capacity *= 2;
        }
        self.entries.reserve(new_capacity - self.entries.len());
        self.capacity = new_capacity;
    }

    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.entries.len());
        self.capacity = capacity;
    }

    /// Index of `number` in the pool, or None. O(count).
    pub fn find(&self, number: &str) -> Option<usize> {
        self.entries.iter().position(|r| r.number == number)
    }

    /// Generate up to `count` numbers from a segment prefix.
    ///
    /// Suffixes are zero-padded sequential integers starting at 0. Candidates
    /// that already exist are skipped, so overlapping ranges are idempotent.
    /// A `count` beyond the suffix space is silently clamped. Returns the
    /// number of resources actually added (always >= 1 on success).
    pub fn generate_segment(&mut self, prefix: &str, count: usize) -> Result<usize, PoolError> {
        if !phone::is_valid_segment(prefix) {
            return Err(PoolError::InvalidSegment(prefix.to_string()));
        }
        if count == 0 {
            return Err(PoolError::InvalidCount);
        }

        let suffix_len = NUMBER_LEN - prefix.len();

        // Clamp to the representable suffix range
        let max_suffix = 10usize.pow(suffix_len as u32);
        let count = count.min(max_suffix);

        self.grow_to(self.entries.len() + count);

        let mut added = 0;
        for suffix in 0..count {
            let number = format!("{prefix}{suffix:0suffix_len$}");
            if self.find(&number).is_none() {
                self.entries.push(PhoneResource::free(number));
                added += 1;
            }
        }

        if added == 0 {
            return Err(PoolError::Exhausted);
        }
        tracing::debug!(prefix, added, "generated segment");
        Ok(added)
    }

    /// Generate `per_prefix` numbers for each prefix, returning the total
    /// added. Failed prefixes are logged and skipped; used to seed the
    /// national-prefix catalog at startup.
    pub fn batch_generate<S: AsRef<str>>(&mut self, prefixes: &[S], per_prefix: usize) -> usize {
        let mut total = 0;
        for prefix in prefixes {
            let prefix = prefix.as_ref();
            match self.generate_segment(prefix, per_prefix) {
                Ok(added) => total += added,
                Err(err) => tracing::warn!(prefix, %err, "segment generation skipped"),
            }
        }
        total
    }
}
