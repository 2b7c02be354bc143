use crate::constants::*;
use typefall_core::{Tone, ToneSink, Waveform};
use web_sys as web;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

/// WebAudio tone generator: every tone is its own oscillator + envelope pair
/// feeding a shared master gain.
pub struct WebTones {
    audio_ctx: web::AudioContext,
    master_gain: web::GainNode,
}

impl WebTones {
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master_gain = create_gain(&audio_ctx, MASTER_GAIN, "Master")?;
        _ = master_gain.connect_with_audio_node(&audio_ctx.destination());
        Ok(Self {
            audio_ctx,
            master_gain,
        })
    }

    /// Contexts start suspended until a user gesture; call from input handlers.
    pub fn resume(&self) {
        if self.audio_ctx.state() == web::AudioContextState::Suspended {
            _ = self.audio_ctx.resume();
        }
    }
}

impl ToneSink for WebTones {
    fn play(&mut self, tone: Tone) {
        trigger_one_shot(&self.audio_ctx, &self.master_gain, tone);
    }
}

// Fire a self-stopping oscillator with a short attack and a linear release
fn trigger_one_shot(audio_ctx: &web::AudioContext, out: &web::GainNode, tone: Tone) {
    let src = match web::OscillatorNode::new(audio_ctx) {
        Ok(s) => s,
        Err(e) => {
            log::error!("OscillatorNode error: {:?}", e);
            return;
        }
    };
    src.set_type(match tone.waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Saw => web::OscillatorType::Sawtooth,
    });
    src.frequency().set_value(tone.frequency_hz);
    let Ok(g) = create_gain(audio_ctx, 0.0, "Tone") else {
        return;
    };
    let t0 = audio_ctx.current_time() + TONE_START_DELAY_SEC;
    let duration = tone.duration_sec as f64;
    _ = g.gain().set_value_at_time(0.0, t0);
    _ = g
        .gain()
        .linear_ramp_to_value_at_time(tone.gain, t0 + TONE_ATTACK_SEC);
    _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + duration);
    _ = src.connect_with_audio_node(&g);
    _ = g.connect_with_audio_node(out);
    _ = src.start_with_when(t0);
    _ = src.stop_with_when(t0 + duration + TONE_STOP_PAD_SEC);
}
