// Host-side tests for WPM arithmetic and high-score persistence.

use typefall_core::*;

#[test]
fn word_count_splits_on_whitespace() {
    assert_eq!(word_count(TARGET_PHRASE), 9);
    assert_eq!(word_count("cat"), 1);
    assert_eq!(word_count("  a  b "), 2);
}

#[test]
fn live_wpm_is_zero_before_any_typed_time() {
    assert_eq!(live_wpm(9, 0, 43, 0.0), 0.0);
    assert_eq!(live_wpm(9, 5, 43, 0.0), 0.0);
    assert_eq!(live_wpm(0, 0, 0, 0.0), 0.0);
}

#[test]
fn live_wpm_scales_with_typed_fraction() {
    // Half the phrase of 10 words in 30 s is 10 wpm.
    let wpm = live_wpm(10, 20, 40, 30_000.0);
    assert!((wpm - 10.0).abs() < 1e-9, "got {}", wpm);
}

#[test]
fn final_wpm_rounds_and_guards() {
    assert_eq!(final_wpm(9, 60_000.0), 9);
    assert_eq!(final_wpm(1, 6_000.0), 10);
    assert_eq!(final_wpm(2, 9_000.0), 13);
    assert_eq!(final_wpm(1, 7_000.0), 9);
    assert_eq!(final_wpm(9, 0.0), 0);
}

#[test]
fn memory_store_round_trips_values() {
    let mut store = MemoryStore::default();
    assert_eq!(store.get("k"), None);
    store.set("k", "12");
    assert_eq!(store.get("k").as_deref(), Some("12"));
    let seeded = MemoryStore::with_value("k", "3");
    assert_eq!(seeded.get("k").as_deref(), Some("3"));
}

#[test]
fn high_score_load_defaults_to_zero() {
    let hs = HighScore::load(MemoryStore::default(), HIGH_SCORE_KEY);
    assert_eq!(hs.best(), 0);
}

#[test]
fn high_score_load_ignores_garbage() {
    let hs = HighScore::load(MemoryStore::with_value(HIGH_SCORE_KEY, "fast"), HIGH_SCORE_KEY);
    assert_eq!(hs.best(), 0);
    let hs = HighScore::load(MemoryStore::with_value(HIGH_SCORE_KEY, " 42 "), HIGH_SCORE_KEY);
    assert_eq!(hs.best(), 42);
}

#[test]
fn record_only_persists_strict_improvements() {
    let mut hs = HighScore::load(MemoryStore::with_value(HIGH_SCORE_KEY, "30"), HIGH_SCORE_KEY);
    assert!(!hs.record(30), "a tie is not a new high score");
    assert!(!hs.record(12));
    assert_eq!(hs.store().get(HIGH_SCORE_KEY).as_deref(), Some("30"));

    assert!(hs.record(31));
    assert_eq!(hs.best(), 31);
    assert_eq!(hs.store().get(HIGH_SCORE_KEY).as_deref(), Some("31"));
}

#[test]
fn first_run_with_zero_wpm_is_not_a_record() {
    let mut hs = HighScore::load(MemoryStore::default(), HIGH_SCORE_KEY);
    assert!(!hs.record(0));
    assert_eq!(hs.store().get(HIGH_SCORE_KEY), None);
}
