// Host-side tests for the typing state machine driven through `Game`.

use rand::prelude::*;
use std::time::Duration;
use typefall_core::*;

type TestGame = Game<RecordingTones, MemoryStore>;

fn make_game(phrase: &str) -> TestGame {
    Game::new(
        GameConfig::with_phrase(phrase),
        RecordingTones::default(),
        MemoryStore::default(),
    )
    .expect("valid config")
}

fn make_game_with_best(phrase: &str, best: &str) -> TestGame {
    Game::new(
        GameConfig::with_phrase(phrase),
        RecordingTones::default(),
        MemoryStore::with_value(HIGH_SCORE_KEY, best),
    )
    .expect("valid config")
}

// One host frame: deliver keys, run the gameplay and cosmetic steps, expire presses.
fn tick(game: &mut TestGame, keys: &[&str], dt_ms: u64) {
    for k in keys {
        game.input_mut().key_down(k);
    }
    game.update(Duration::from_millis(dt_ms));
    game.animate();
    game.input_mut().end_frame();
}

fn type_str(game: &mut TestGame, text: &str, dt_ms: u64) {
    let keys: Vec<String> = text.chars().map(|c| c.to_string()).collect();
    let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    tick(game, &refs, dt_ms);
}

#[test]
fn cat_walks_waiting_playing_done() {
    let mut game = make_game("cat");
    assert_eq!(game.session().state(), GameState::Waiting);

    tick(&mut game, &["c"], 16);
    assert_eq!(game.session().state(), GameState::Playing);
    assert_eq!(game.session().cursor(), 1);

    tick(&mut game, &["a"], 16);
    assert_eq!(game.session().state(), GameState::Playing);

    tick(&mut game, &["t"], 16);
    assert_eq!(game.session().state(), GameState::Done);
    assert_eq!(game.session().cursor(), 3);
    assert_eq!(game.session().dead_letters().len(), 3);
    let chars: Vec<char> = game
        .session()
        .dead_letters()
        .iter()
        .map(|l| l.character)
        .collect();
    assert_eq!(chars, vec!['c', 'a', 't']);
}

#[test]
fn leading_wrong_key_is_rejected_and_run_still_completes() {
    let mut game = make_game("cat");
    tick(&mut game, &["x"], 16);
    assert_eq!(game.session().state(), GameState::Waiting);
    assert_eq!(game.session().cursor(), 0);
    assert!(game.session().dead_letters().is_empty());
    let played = &game.audio().sink().played;
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].waveform, Waveform::Saw);
    assert_eq!(played[0].frequency_hz, INCORRECT_HZ);
    assert!(game.session().shake_strength() > 0.0);

    type_str(&mut game, "cat", 16);
    assert_eq!(game.session().state(), GameState::Done);
    assert_eq!(game.session().dead_letters().len(), 3);
    let sines = game
        .audio()
        .sink()
        .played
        .iter()
        .filter(|t| t.waveform == Waveform::Sine)
        .count();
    assert_eq!(sines, 3);
}

#[test]
fn shift_and_uppercase_type_lowercase() {
    let mut game = make_game("cat");
    tick(&mut game, &["Shift", "C", "A", "T"], 16);
    assert_eq!(game.session().state(), GameState::Done);
}

#[test]
fn typed_time_accrues_only_while_playing() {
    let mut game = make_game("cat");
    tick(&mut game, &[], 1000);
    assert_eq!(game.session().elapsed_typed_ms(), 0.0);

    tick(&mut game, &["c"], 100);
    assert!((game.session().elapsed_typed_ms() - 100.0).abs() < 1e-6);
    tick(&mut game, &[], 250);
    assert!((game.session().elapsed_typed_ms() - 350.0).abs() < 1e-6);

    // The completing frame does not add its own delta.
    type_str(&mut game, "at", 40);
    let frozen = game.session().elapsed_typed_ms();
    assert!((frozen - 350.0).abs() < 1e-6);
    tick(&mut game, &[], 5000);
    assert_eq!(game.session().elapsed_typed_ms(), frozen);
}

#[test]
fn nine_words_in_a_minute_is_nine_wpm() {
    let phrase = "a b c d e f g h i";
    let mut game = make_game(phrase);
    tick(&mut game, &["a"], 0);
    tick(&mut game, &[], 60_000);
    type_str(&mut game, &phrase[1..], 0);

    assert_eq!(game.session().state(), GameState::Done);
    let summary = game.session().summary().expect("summary after done");
    assert_eq!(summary.wpm, 9);
    assert!(summary.new_high_score);
    assert_eq!(summary.previous_best, 0);
}

#[test]
fn beating_the_high_score_updates_and_persists_it() {
    let phrase = "a b c d e f g h i";
    let mut game = make_game_with_best(phrase, "5");
    assert_eq!(game.session().high_score_wpm(), 5);
    tick(&mut game, &["a"], 0);
    tick(&mut game, &[], 60_000);
    type_str(&mut game, &phrase[1..], 0);

    let summary = game.session().summary().expect("summary after done");
    assert!(summary.new_high_score);
    assert_eq!(summary.previous_best, 5);
    assert_eq!(game.session().high_score_wpm(), 9);
    assert_eq!(game.high_score().best(), 9);
    assert_eq!(
        game.high_score().store().get(HIGH_SCORE_KEY).as_deref(),
        Some("9")
    );
}

#[test]
fn slower_run_leaves_high_score_alone() {
    let phrase = "a b c d e f g h i";
    let mut game = make_game_with_best(phrase, "50");
    tick(&mut game, &["a"], 0);
    tick(&mut game, &[], 60_000);
    type_str(&mut game, &phrase[1..], 0);

    let summary = game.session().summary().expect("summary after done");
    assert!(!summary.new_high_score);
    assert_eq!(summary.previous_best, 50);
    assert_eq!(game.high_score().best(), 50);
    assert_eq!(
        game.high_score().store().get(HIGH_SCORE_KEY).as_deref(),
        Some("50")
    );
}

#[test]
fn enter_after_done_resets_everything() {
    let mut game = make_game("cat");
    tick(&mut game, &["c"], 16);
    tick(&mut game, &["a", "t"], 16);
    assert_eq!(game.session().state(), GameState::Done);

    // Keys typed over the summary screen are dropped, not counted.
    tick(&mut game, &["c", "a"], 16);
    assert_eq!(game.session().cursor(), 3);

    game.input_mut().key_down("x");
    game.input_mut().key_down("Enter");
    game.update(Duration::from_millis(16));
    let s = game.session();
    assert_eq!(s.state(), GameState::Waiting);
    assert_eq!(s.cursor(), 0);
    assert_eq!(s.elapsed_typed_ms(), 0.0);
    assert!(s.dead_letters().is_empty());
    assert!(s.summary().is_none());
    assert_eq!(s.shake_strength(), SHAKE_RESET_JOLT);
    assert_eq!(game.input().pending_keystrokes(), 0);
    assert_eq!(game.audio().streak_hz(), STREAK_BASE_HZ);
    game.input_mut().end_frame();

    type_str(&mut game, "cat", 16);
    assert_eq!(game.session().state(), GameState::Done);
}

#[test]
fn enter_mid_run_does_not_reset() {
    let mut game = make_game("cat");
    tick(&mut game, &["c", "Enter"], 16);
    assert_eq!(game.session().state(), GameState::Playing);
    assert_eq!(game.session().cursor(), 1);
}

#[test]
fn tab_cycles_theme_modulo_palette() {
    let mut game = make_game("cat");
    for i in 1..=PALETTE.len() {
        tick(&mut game, &[THEME_KEY], 16);
        assert_eq!(game.session().theme_index(), i % PALETTE.len());
    }
}

#[test]
fn shake_bumps_on_keystrokes_and_decays_per_frame() {
    let mut game = make_game("cat");
    game.input_mut().key_down("c");
    game.update(Duration::from_millis(16));
    assert_eq!(game.session().shake_strength(), SHAKE_CORRECT);
    game.input_mut().key_down("q");
    game.update(Duration::from_millis(16));
    assert_eq!(game.session().shake_strength(), SHAKE_CORRECT + SHAKE_INCORRECT);

    game.animate();
    let after = game.session().shake_strength();
    assert!((after - (SHAKE_CORRECT + SHAKE_INCORRECT) * SHAKE_DECAY_PER_FRAME).abs() < 1e-6);
    for _ in 0..200 {
        game.animate();
    }
    assert!(game.session().shake_strength() < 1e-6);
}

#[test]
fn animated_cursor_closes_in_on_cursor() {
    let mut game = make_game("cat");
    tick(&mut game, &["c", "a"], 16);
    let first = game.session().animated_cursor();
    assert!(first > 0.0 && first < 2.0);
    let mut prev = first;
    for _ in 0..60 {
        game.animate();
        let now = game.session().animated_cursor();
        assert!(now >= prev && now <= 2.0);
        prev = now;
    }
    assert!((prev - 2.0).abs() < 1e-3);
}

#[test]
fn spawned_letter_starts_at_drawn_glyph_offset() {
    let mut game = make_game("cat");
    // Two letters in one frame: the second spawns one glyph left of the anchor
    // because the animated cursor has not moved yet.
    tick(&mut game, &["c", "a"], 0);
    let letters = game.session().dead_letters();
    assert_eq!(letters[0].position.x, 0.0);
    assert_eq!(letters[1].position.x, -GLYPH_WIDTH);
}

// Rank used to check that the state never moves backwards.
fn rank(s: GameState) -> u8 {
    match s {
        GameState::Waiting => 0,
        GameState::Playing => 1,
        GameState::Done => 2,
    }
}

#[test]
fn random_input_keeps_run_invariants() {
    let phrase = "the quick brown fox";
    let alphabet: Vec<char> = "thequickbrownfxz ".chars().collect();
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = make_game(phrase);
        let mut prev_cursor = 0;
        let mut prev_rank = 0;
        let mut prev_elapsed = 0.0;
        for _ in 0..400 {
            let n = rng.gen_range(0..4);
            let keys: Vec<String> = (0..n)
                .map(|_| {
                    // Bias toward the expected key so runs actually finish.
                    match game.session().expected() {
                        Some(c) if rng.gen_bool(0.6) => c.to_string(),
                        _ => alphabet.choose(&mut rng).unwrap().to_string(),
                    }
                })
                .collect();
            let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
            let was_playing = game.session().state() == GameState::Playing;
            tick(&mut game, &refs, rng.gen_range(0..40));

            let s = game.session();
            assert!(s.cursor() <= phrase.len());
            assert!(s.cursor() >= prev_cursor, "cursor went backwards");
            assert_eq!(s.dead_letters().len(), s.cursor());
            assert!(rank(s.state()) >= prev_rank, "state went backwards");
            assert!(s.elapsed_typed_ms() >= prev_elapsed);
            if !was_playing && s.state() != GameState::Playing {
                assert_eq!(s.elapsed_typed_ms(), prev_elapsed);
            }
            prev_cursor = s.cursor();
            prev_rank = rank(s.state());
            prev_elapsed = s.elapsed_typed_ms();
        }
    }
}
