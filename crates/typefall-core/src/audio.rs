use crate::constants::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
}

/// One short enveloped note requested from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub duration_sec: f32,
    pub gain: f32,
}

/// Tone generator collaborator. Playback is fire-and-forget: each call starts
/// an independent, self-terminating sound and overlapping calls are fine.
pub trait ToneSink {
    fn play(&mut self, tone: Tone);
}

/// Keeps every requested tone instead of sounding it.
#[derive(Clone, Debug, Default)]
pub struct RecordingTones {
    pub played: Vec<Tone>,
}

impl ToneSink for RecordingTones {
    fn play(&mut self, tone: Tone) {
        self.played.push(tone);
    }
}

#[derive(Clone, Debug)]
pub struct FeedbackParams {
    pub base_hz: f32,
    pub step_ratio: f32,
    pub decay_factor: f32,
    pub decay_interval_ms: f32,
    pub incorrect_hz: f32,
    pub duration_sec: f32,
    pub gain: f32,
}

impl Default for FeedbackParams {
    fn default() -> Self {
        Self {
            base_hz: STREAK_BASE_HZ,
            step_ratio: STREAK_STEP_RATIO,
            decay_factor: STREAK_DECAY_FACTOR,
            decay_interval_ms: STREAK_DECAY_INTERVAL_MS,
            incorrect_hz: INCORRECT_HZ,
            duration_sec: TONE_DURATION_SEC,
            gain: TONE_GAIN,
        }
    }
}

/// Keystroke audio cues with a streak pitch that climbs on correct input and
/// relaxes back toward `base_hz` over time.
pub struct AudioFeedback<T: ToneSink> {
    sink: T,
    params: FeedbackParams,
    streak_hz: f32,
}

impl<T: ToneSink> AudioFeedback<T> {
    pub fn new(sink: T, params: FeedbackParams) -> Self {
        let streak_hz = params.base_hz;
        Self {
            sink,
            params,
            streak_hz,
        }
    }

    pub fn streak_hz(&self) -> f32 {
        self.streak_hz
    }

    pub fn sink(&self) -> &T {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut T {
        &mut self.sink
    }

    pub fn correct(&mut self) {
        self.sink.play(Tone {
            frequency_hz: self.streak_hz,
            waveform: Waveform::Sine,
            duration_sec: self.params.duration_sec,
            gain: self.params.gain,
        });
        self.streak_hz *= self.params.step_ratio;
    }

    pub fn incorrect(&mut self) {
        self.sink.play(Tone {
            frequency_hz: self.params.incorrect_hz,
            waveform: Waveform::Saw,
            duration_sec: self.params.duration_sec,
            gain: self.params.gain,
        });
    }

    pub fn reset_streak(&mut self) {
        self.streak_hz = self.params.base_hz;
    }

    /// Relax the streak pitch toward base. Equivalent to applying
    /// `f = f * (1 - k) + base * k` once per decay interval, for any `dt`.
    pub fn decay(&mut self, dt: Duration) {
        let p = &self.params;
        let steps = dt.as_secs_f32() * 1000.0 / p.decay_interval_ms;
        let keep = (1.0 - p.decay_factor).powf(steps);
        self.streak_hz = p.base_hz + (self.streak_hz - p.base_hz) * keep;
    }
}
