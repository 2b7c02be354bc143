//! Typing state machine.
//!
//! `GameSession` is the single run's state. `advance` is the gameplay step
//! (command keys, keystroke matching, typed-time accrual, letter physics,
//! streak decay); `animate` is the cosmetic step (cursor smoothing, shake
//! decay). Services are passed in, never reached through globals.

use crate::audio::{AudioFeedback, ToneSink};
use crate::config::GameConfig;
use crate::constants::{GLYPH_WIDTH, RESET_KEY, THEME_KEY};
use crate::input::InputState;
use crate::physics::{step_dead_letters, DeadLetter};
use crate::render::PALETTE;
use crate::score::{final_wpm, live_wpm, word_count, HighScore, ScoreStore};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Waiting,
    Playing,
    Done,
}

/// Result of a completed run, fixed at the `Playing -> Done` transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub wpm: u32,
    pub previous_best: u32,
    pub new_high_score: bool,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    phrase: Vec<char>,
    words: usize,
    cursor: usize,
    animated_cursor: f32,
    elapsed_typed_ms: f64,
    state: GameState,
    shake_strength: f32,
    theme_index: usize,
    high_score_wpm: u32,
    dead_letters: Vec<DeadLetter>,
    summary: Option<RunSummary>,
}

impl GameSession {
    pub fn new(phrase: &str, high_score_wpm: u32) -> Self {
        Self {
            phrase: phrase.chars().collect(),
            words: word_count(phrase),
            cursor: 0,
            animated_cursor: 0.0,
            elapsed_typed_ms: 0.0,
            state: GameState::Waiting,
            shake_strength: 0.0,
            theme_index: 0,
            high_score_wpm,
            dead_letters: Vec::new(),
            summary: None,
        }
    }

    pub fn phrase(&self) -> &[char] {
        &self.phrase
    }

    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn animated_cursor(&self) -> f32 {
        self.animated_cursor
    }

    pub fn elapsed_typed_ms(&self) -> f64 {
        self.elapsed_typed_ms
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn shake_strength(&self) -> f32 {
        self.shake_strength
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn high_score_wpm(&self) -> u32 {
        self.high_score_wpm
    }

    pub fn dead_letters(&self) -> &[DeadLetter] {
        &self.dead_letters
    }

    pub fn summary(&self) -> Option<RunSummary> {
        self.summary
    }

    /// Characters still to be typed.
    pub fn remaining(&self) -> &[char] {
        &self.phrase[self.cursor..]
    }

    pub fn expected(&self) -> Option<char> {
        self.phrase.get(self.cursor).copied()
    }

    pub fn live_wpm(&self) -> f64 {
        live_wpm(
            self.words,
            self.cursor,
            self.phrase.len(),
            self.elapsed_typed_ms,
        )
    }

    /// Gameplay step for one frame that took `dt` of wall clock.
    pub fn advance<T, S, R>(
        &mut self,
        dt: Duration,
        input: &mut InputState,
        audio: &mut AudioFeedback<T>,
        high_score: &mut HighScore<S>,
        rng: &mut R,
        config: &GameConfig,
    ) where
        T: ToneSink,
        S: ScoreStore,
        R: Rng + ?Sized,
    {
        if self.state == GameState::Done && input.was_just_pressed(RESET_KEY) {
            self.reset(config.animation.shake_reset_jolt);
            input.clear_keystrokes();
            audio.reset_streak();
            log::debug!("[session] reset");
        }
        if input.was_just_pressed(THEME_KEY) {
            self.theme_index = (self.theme_index + 1) % PALETTE.len();
        }

        while let Some(c) = input.poll_keystroke() {
            match self.state {
                // Keys typed over the summary screen are dropped.
                GameState::Done => {}
                _ if self.expected() == Some(c) => {
                    self.accept(c, audio, high_score, rng, config);
                }
                _ => {
                    audio.incorrect();
                    self.shake_strength += config.animation.shake_incorrect;
                }
            }
        }

        if self.state == GameState::Playing {
            self.elapsed_typed_ms += dt.as_secs_f64() * 1000.0;
        }
        step_dead_letters(&mut self.dead_letters, dt, &config.physics);
        audio.decay(dt);
    }

    /// Cosmetic step, once per frame: the animated cursor closes in on the
    /// real one and the shake magnitude decays.
    pub fn animate(&mut self, config: &GameConfig) {
        let anim = &config.animation;
        self.animated_cursor +=
            (self.cursor as f32 - self.animated_cursor) * anim.cursor_follow_per_frame;
        self.shake_strength *= anim.shake_decay_per_frame;
    }

    fn accept<T, S, R>(
        &mut self,
        c: char,
        audio: &mut AudioFeedback<T>,
        high_score: &mut HighScore<S>,
        rng: &mut R,
        config: &GameConfig,
    ) where
        T: ToneSink,
        S: ScoreStore,
        R: Rng + ?Sized,
    {
        // Spawn where the glyph is currently drawn, which lags the cursor.
        let origin = Vec2::new(
            (self.animated_cursor - self.cursor as f32) * GLYPH_WIDTH,
            0.0,
        );
        self.dead_letters
            .push(DeadLetter::spawn(c, origin, &config.spawn, rng));
        self.cursor += 1;
        audio.correct();
        self.shake_strength += config.animation.shake_correct;

        if self.state == GameState::Waiting {
            self.state = GameState::Playing;
            log::debug!("[session] playing");
        }
        if self.cursor == self.phrase.len() {
            self.state = GameState::Done;
            self.finish(high_score);
        }
    }

    fn finish<S: ScoreStore>(&mut self, high_score: &mut HighScore<S>) {
        let wpm = final_wpm(self.words, self.elapsed_typed_ms);
        let previous_best = high_score.best();
        let new_high_score = high_score.record(wpm);
        self.high_score_wpm = high_score.best();
        self.summary = Some(RunSummary {
            wpm,
            previous_best,
            new_high_score,
        });
        log::debug!(
            "[session] done: {} wpm in {:.0} ms (best {})",
            wpm,
            self.elapsed_typed_ms,
            self.high_score_wpm
        );
    }

    fn reset(&mut self, jolt: f32) {
        self.cursor = 0;
        self.animated_cursor = 0.0;
        self.elapsed_typed_ms = 0.0;
        self.state = GameState::Waiting;
        self.dead_letters.clear();
        self.summary = None;
        self.shake_strength = jolt;
    }
}
