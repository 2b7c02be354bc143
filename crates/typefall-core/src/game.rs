use crate::audio::{AudioFeedback, ToneSink};
use crate::config::{ConfigError, GameConfig};
use crate::glyphs::GlyphSource;
use crate::input::InputState;
use crate::render::{draw_frame, Surface};
use crate::score::{HighScore, ScoreStore};
use crate::session::GameSession;
use rand::prelude::*;
use std::time::Duration;

/// Owns one session together with the services it is driven by.
///
/// The host feeds raw key names into `input_mut()` as they arrive and calls
/// `frame` once per display refresh with the wall-clock time since the
/// previous call.
pub struct Game<T: ToneSink, S: ScoreStore> {
    config: GameConfig,
    session: GameSession,
    input: InputState,
    audio: AudioFeedback<T>,
    high_score: HighScore<S>,
    rng: StdRng,
}

impl<T: ToneSink, S: ScoreStore> Game<T, S> {
    pub fn new(config: GameConfig, tones: T, store: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let high_score = HighScore::load(store, config.high_score_key.clone());
        let session = GameSession::new(&config.phrase, high_score.best());
        let audio = AudioFeedback::new(tones, config.feedback.clone());
        let rng = StdRng::seed_from_u64(config.seed);
        log::info!(
            "[game] phrase={:?} words={} best={}",
            config.phrase,
            session.word_count(),
            high_score.best()
        );
        Ok(Self {
            config,
            session,
            input: InputState::new(),
            audio,
            high_score,
            rng,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn audio(&self) -> &AudioFeedback<T> {
        &self.audio
    }

    pub fn high_score(&self) -> &HighScore<S> {
        &self.high_score
    }

    /// Gameplay step.
    pub fn update(&mut self, dt: Duration) {
        self.session.advance(
            dt,
            &mut self.input,
            &mut self.audio,
            &mut self.high_score,
            &mut self.rng,
            &self.config,
        );
    }

    /// Cosmetic step.
    pub fn animate(&mut self) {
        self.session.animate(&self.config);
    }

    pub fn draw<Sf, G>(&self, surface: &mut Sf, glyphs: &G, now_ms: f64)
    where
        Sf: Surface + ?Sized,
        G: GlyphSource + ?Sized,
    {
        draw_frame(&self.session, &self.config, surface, glyphs, now_ms);
    }

    /// One tick: update, animate, draw, then expire this frame's key presses.
    pub fn frame<Sf, G>(&mut self, dt: Duration, surface: &mut Sf, glyphs: &G, now_ms: f64)
    where
        Sf: Surface + ?Sized,
        G: GlyphSource + ?Sized,
    {
        self.update(dt);
        self.animate();
        self.draw(surface, glyphs, now_ms);
        self.input.end_frame();
    }
}
