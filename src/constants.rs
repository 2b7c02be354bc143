// Browser-side tuning: DOM and WebAudio graph only. Gameplay tuning lives in
// typefall_core::constants.

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const CANVAS_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%";

// Master bus level, keystroke tones are mixed into it
pub const MASTER_GAIN: f32 = 0.6;

// One-shot envelope (seconds)
pub const TONE_START_DELAY_SEC: f64 = 0.005; // schedule slightly ahead of currentTime
pub const TONE_ATTACK_SEC: f64 = 0.004;
pub const TONE_STOP_PAD_SEC: f64 = 0.02; // keep the source alive past the release ramp
