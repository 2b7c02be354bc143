use crate::audio::FeedbackParams;
use crate::constants::*;
use crate::input::keystroke_for_key;
use crate::physics::{PhysicsParams, SpawnRanges};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("target phrase is empty")]
    EmptyPhrase,
    #[error("target phrase contains {0:?}, which no single key press produces")]
    UntypeableChar(char),
    #[error("range `{name}` is inverted or not finite: [{min}, {max}]")]
    BadRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("`{name}` must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("`{name}` must lie in {bounds}, got {value}")]
    OutOfBounds {
        name: &'static str,
        bounds: &'static str,
        value: f32,
    },
}

/// Screen shake and cursor smoothing tuning.
#[derive(Clone, Debug)]
pub struct AnimationParams {
    pub shake_correct: f32,
    pub shake_incorrect: f32,
    pub shake_reset_jolt: f32,
    pub shake_decay_per_frame: f32,
    pub cursor_follow_per_frame: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            shake_correct: SHAKE_CORRECT,
            shake_incorrect: SHAKE_INCORRECT,
            shake_reset_jolt: SHAKE_RESET_JOLT,
            shake_decay_per_frame: SHAKE_DECAY_PER_FRAME,
            cursor_follow_per_frame: CURSOR_FOLLOW_PER_FRAME,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub phrase: String,
    pub physics: PhysicsParams,
    pub spawn: SpawnRanges,
    pub feedback: FeedbackParams,
    pub animation: AnimationParams,
    pub high_score_key: String,
    /// Seed for spawn randomisation.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            phrase: TARGET_PHRASE.to_owned(),
            physics: PhysicsParams::default(),
            spawn: SpawnRanges::default(),
            feedback: FeedbackParams::default(),
            animation: AnimationParams::default(),
            high_score_key: HIGH_SCORE_KEY.to_owned(),
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn with_phrase(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phrase.is_empty() {
            return Err(ConfigError::EmptyPhrase);
        }
        // Keystrokes arrive lower-cased, so anything else could never match.
        if let Some(c) = self
            .phrase
            .chars()
            .find(|&c| keystroke_for_key(c.encode_utf8(&mut [0; 4])) != Some(c))
        {
            return Err(ConfigError::UntypeableChar(c));
        }
        check_range("spawn.velocity_x", self.spawn.velocity_x)?;
        check_range("spawn.velocity_y", self.spawn.velocity_y)?;
        check_range("spawn.angular_velocity", self.spawn.angular_velocity)?;
        check_positive("physics.time_scale", self.physics.time_scale)?;
        check_positive("physics.fade_rate", self.physics.fade_rate)?;
        check_positive("feedback.decay_interval_ms", self.feedback.decay_interval_ms)?;
        check_positive("physics.gravity", self.physics.gravity)?;
        check_positive("feedback.step_ratio", self.feedback.step_ratio)?;
        let fb = &self.feedback;
        check_bounds("feedback.decay_factor", "[0, 1]", fb.decay_factor, |v| {
            (0.0..=1.0).contains(&v)
        })?;
        let anim = &self.animation;
        check_bounds(
            "animation.shake_decay_per_frame",
            "[0, 1)",
            anim.shake_decay_per_frame,
            |v| (0.0..1.0).contains(&v),
        )?;
        check_bounds(
            "animation.cursor_follow_per_frame",
            "(0, 1]",
            anim.cursor_follow_per_frame,
            |v| v > 0.0 && v <= 1.0,
        )?;
        Ok(())
    }
}

fn check_range(name: &'static str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::BadRange { name, min, max })
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this comparison too
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn check_bounds(
    name: &'static str,
    bounds: &'static str,
    value: f32,
    within: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if within(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfBounds {
            name,
            bounds,
            value,
        })
    }
}
