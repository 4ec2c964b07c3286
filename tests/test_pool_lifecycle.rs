// ABOUTME: Integration tests for segment generation and catalog browsing

use numdesk::pool::{catalog::sort_lexicographic, PhoneState, PoolError, ResourcePool};
use pretty_assertions::assert_eq;

#[test]
fn test_generated_numbers_are_sequential_from_prefix() {
    let mut pool = ResourcePool::new();
    let added = pool.generate_segment("138", 3).unwrap();

    assert_eq!(added, 3);
    let numbers: Vec<&str> = pool.entries().iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, vec!["13800000000", "13800000001", "13800000002"]);
    assert!(pool.entries().iter().all(|r| r.state == PhoneState::Free));
}

#[test]
fn test_generation_clamps_to_suffix_space() {
    let mut pool = ResourcePool::new();
    // Seven-digit prefix leaves four suffix digits, so at most 10000 numbers
    let added = pool.generate_segment("1380001", 50_000).unwrap();

    assert_eq!(added, 10_000);
    assert_eq!(pool.len(), 10_000);
}

#[test]
fn test_regeneration_skips_existing_numbers() {
    let mut pool = ResourcePool::new();
    pool.generate_segment("138", 10).unwrap();

    // Same prefix again: every candidate collides
    assert_eq!(pool.generate_segment("138", 10), Err(PoolError::Exhausted));
    assert_eq!(pool.len(), 10);

    // Asking for more succeeds with only the new tail counted
    let added = pool.generate_segment("138", 15).unwrap();
    assert_eq!(added, 5);
    assert_eq!(pool.len(), 15);
}

#[test]
fn test_capacity_doubles_as_segments_accumulate() {
    let mut pool = ResourcePool::new();
    assert_eq!(pool.capacity(), 100);

    pool.generate_segment("138", 80).unwrap();
    assert_eq!(pool.capacity(), 100);

    pool.generate_segment("139", 80).unwrap();
    assert_eq!(pool.capacity(), 200);
}

#[test]
fn test_categories_follow_free_entries() {
    let mut pool = ResourcePool::new();
    pool.generate_segment("138", 5).unwrap();
    pool.generate_segment("150", 5).unwrap();
    pool.generate_segment("139", 5).unwrap();

    // First-seen order over FREE entries, by leading two digits
    assert_eq!(pool.categories(10), vec!["13", "15"]);
    assert_eq!(pool.segments_of("13", 10), vec!["138", "139"]);
    assert_eq!(pool.segments_of("15", 10), vec!["150"]);
}

#[test]
fn test_empty_pool_offers_default_categories() {
    let pool = ResourcePool::new();
    assert_eq!(
        pool.categories(10),
        vec!["13", "14", "15", "16", "17", "18", "19"]
    );
    assert!(pool.segments_of("13", 10).is_empty());
}

#[test]
fn test_sampling_respects_segment_and_limit() {
    let mut pool = ResourcePool::new();
    pool.generate_segment("138", 30).unwrap();
    pool.generate_segment("139", 30).unwrap();

    let sample = pool.sample_by_segment("138", 9);
    assert_eq!(sample.len(), 9);
    assert!(sample.iter().all(|n| n.starts_with("138")));

    // Samples never repeat a number
    let mut sorted = sample.clone();
    sort_lexicographic(&mut sorted);
    sorted.dedup();
    assert_eq!(sorted.len(), 9);
}

#[test]
fn test_assigned_numbers_leave_the_catalog() {
    let mut pool = ResourcePool::new();
    pool.generate_segment("138", 5).unwrap();
    for i in 0..5 {
        pool.bind(1 + i, &format!("1380000000{i}")).unwrap();
    }

    assert_eq!(pool.available_count(), 0);
    assert!(pool.sample_by_segment("138", 9).is_empty());
    assert_eq!(pool.categories(10).len(), 7); // back to the defaults
}
