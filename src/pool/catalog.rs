// ABOUTME: Read-only browse views over the pool for interactive number selection
//
// Categories are the first 2 digits of a number, segments the first 3. All
// views look at FREE entries only. Sampling shuffles candidate indices and
// truncates, giving a uniform-ish pick without enumerating every match up
// front.

use super::{PhoneState, ResourcePool};
use rand::seq::SliceRandom;

/// Fallback category list shown when the pool has no FREE entries, so the
/// browse UI stays navigable on an exhausted pool
pub const DEFAULT_CATEGORIES: [&str; 7] = ["13", "14", "15", "16", "17", "18", "19"];

impl ResourcePool {
    /// Distinct 2-digit prefixes among FREE entries, first-seen order, capped
    /// at `max`. Falls back to [`DEFAULT_CATEGORIES`] when none exist.
    pub fn categories(&self, max: usize) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for entry in self.free_entries() {
            if categories.len() >= max {
                break;
            }
            let category = &entry.number[..2];
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }

        if categories.is_empty() {
            categories = DEFAULT_CATEGORIES
                .iter()
                .take(max)
                .map(ToString::to_string)
                .collect();
        }
        categories
    }

    /// Distinct 3-digit prefixes among FREE entries within `category`,
    /// first-seen order, capped at `max`
    pub fn segments_of(&self, category: &str, max: usize) -> Vec<String> {
        let mut segments: Vec<String> = Vec::new();
        for entry in self.free_entries() {
            if segments.len() >= max {
                break;
            }
            if !entry.number.starts_with(category) {
                continue;
            }
            let segment = &entry.number[..3];
            if !segments.iter().any(|s| s == segment) {
                segments.push(segment.to_string());
            }
        }
        segments
    }

    /// Up to `max` FREE numbers within `segment`, randomly sampled.
    /// A segment is always 3 digits; anything else matches nothing.
    pub fn sample_by_segment(&self, segment: &str, max: usize) -> Vec<String> {
        if segment.len() != 3 {
            return Vec::new();
        }
        self.sample_where(max, |number| number.starts_with(segment))
    }

    /// Up to `max` FREE numbers from the whole pool, randomly sampled
    pub fn sample_available(&self, max: usize) -> Vec<String> {
        self.sample_where(max, |_| true)
    }

    /// FREE entries in the whole pool
    pub fn available_count(&self) -> usize {
        self.free_entries().count()
    }

    /// FREE entries within a 2-digit category
    pub fn count_by_category(&self, category: &str) -> usize {
        if category.len() != 2 {
            return 0;
        }
        self.free_entries()
            .filter(|e| e.number.starts_with(category))
            .count()
    }

    /// FREE entries within a 3-digit segment
    pub fn count_by_segment(&self, segment: &str) -> usize {
        if segment.len() != 3 {
            return 0;
        }
        self.free_entries()
            .filter(|e| e.number.starts_with(segment))
            .count()
    }

    fn free_entries(&self) -> impl Iterator<Item = &super::PhoneResource> {
        self.entries()
            .iter()
            .filter(|e| e.state == PhoneState::Free)
    }

    fn sample_where<F: Fn(&str) -> bool>(&self, max: usize, matches: F) -> Vec<String> {
        if max == 0 {
            return Vec::new();
        }
        let mut indices: Vec<usize> = self
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.state == PhoneState::Free && matches(&e.number))
            .map(|(i, _)| i)
            .collect();

        // thread_rng is seeded once per process; rapid successive calls
        // still produce fresh picks
        indices.shuffle(&mut rand::thread_rng());
        indices.truncate(max);
        indices
            .into_iter()
            .map(|i| self.entries()[i].number.clone())
            .collect()
    }
}

/// Stable ascending sort for deterministic display of a shortlist
pub fn sort_lexicographic(numbers: &mut [String]) {
    numbers.sort();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::ResourcePool;

    fn browse_pool() -> ResourcePool {
        let mut pool = ResourcePool::new();
        pool.batch_generate(&["138", "139", "150"], 20);
        pool
    }

    #[test]
    fn test_categories_first_seen_order() {
        let pool = browse_pool();
        assert_eq!(pool.categories(10), vec!["13", "15"]);
        assert_eq!(pool.categories(1), vec!["13"]);
    }

    #[test]
    fn test_categories_fall_back_when_pool_exhausted() {
        let mut pool = ResourcePool::new();
        pool.generate_segment("138", 2).unwrap();
        pool.bind(1, "13800000000").unwrap();
        pool.bind(1, "13800000001").unwrap();

        assert_eq!(pool.categories(10), DEFAULT_CATEGORIES.to_vec());
        assert_eq!(pool.categories(3), vec!["13", "14", "15"]);
    }

    #[test]
    fn test_segments_of_category() {
        let pool = browse_pool();
        assert_eq!(pool.segments_of("13", 10), vec!["138", "139"]);
        assert_eq!(pool.segments_of("15", 10), vec!["150"]);
        assert!(pool.segments_of("17", 10).is_empty());
    }

    #[test]
    fn test_counts_track_free_entries_only() {
        let mut pool = browse_pool();
        assert_eq!(pool.available_count(), 60);
        assert_eq!(pool.count_by_category("13"), 40);
        assert_eq!(pool.count_by_segment("138"), 20);

        pool.bind(5, "13800000000").unwrap();
        assert_eq!(pool.available_count(), 59);
        assert_eq!(pool.count_by_category("13"), 39);
        assert_eq!(pool.count_by_segment("138"), 19);
    }

    #[test]
    fn test_sample_by_segment_respects_segment_and_max() {
        let pool = browse_pool();
        let sample = pool.sample_by_segment("138", 5);
        assert_eq!(sample.len(), 5);
        assert!(sample.iter().all(|n| n.starts_with("138")));

        // No duplicates in a sample
        for number in &sample {
            assert_eq!(sample.iter().filter(|n| *n == number).count(), 1);
        }

        // Fewer candidates than requested returns all of them
        assert_eq!(pool.sample_by_segment("150", 100).len(), 20);
        assert!(pool.sample_by_segment("1380", 5).is_empty());
        assert!(pool.sample_by_segment("170", 5).is_empty());
    }

    #[test]
    fn test_sample_available_spans_pool() {
        let pool = browse_pool();
        assert_eq!(pool.sample_available(3).len(), 3);
        assert_eq!(pool.sample_available(0).len(), 0);
    }

    #[test]
    fn test_sort_lexicographic_ascending() {
        let mut numbers = vec![
            "15000000001".to_string(),
            "13800000009".to_string(),
            "13900000000".to_string(),
        ];
        sort_lexicographic(&mut numbers);
        assert_eq!(
            numbers,
            vec!["13800000009", "13900000000", "15000000001"]
        );
    }
}
