// Shared gameplay/animation tuning constants used by the web frontend and host tests.

// Default phrase: nine words, every letter of the alphabet
pub const TARGET_PHRASE: &str = "the quick brown fox jumps over the lazy dog";

// Raw key names (KeyboardEvent.key) that act as commands
pub const RESET_KEY: &str = "Enter";
pub const THEME_KEY: &str = "Tab";

// Letter physics, in scaled simulation units
pub const TIME_SCALE: f32 = 0.1; // frame milliseconds -> simulation units
pub const GRAVITY: f32 = 0.1;
pub const FADE_RATE: f32 = 0.008; // alpha lost per simulation unit

// Spawn ranges (closed intervals): letters shoot up and slightly back
pub const SPAWN_VELOCITY_X: (f32, f32) = (-3.5, 1.5);
pub const SPAWN_VELOCITY_Y: (f32, f32) = (-8.0, -1.0);
pub const SPAWN_ANGULAR_VELOCITY: (f32, f32) = (-0.15, 0.05);

// Screen shake
pub const SHAKE_CORRECT: f32 = 2.0;
pub const SHAKE_INCORRECT: f32 = 1.0;
pub const SHAKE_RESET_JOLT: f32 = 20.0;
pub const SHAKE_DECAY_PER_FRAME: f32 = 0.9;

// Fraction of the remaining distance the animated cursor covers each frame
pub const CURSOR_FOLLOW_PER_FRAME: f32 = 0.2;

// Keystroke tones
pub const STREAK_BASE_HZ: f32 = 220.0;
pub const STREAK_STEP_RATIO: f32 = 1.1;
pub const STREAK_DECAY_FACTOR: f32 = 0.01; // pull toward base per decay interval
pub const STREAK_DECAY_INTERVAL_MS: f32 = 10.0;
pub const INCORRECT_HZ: f32 = 600.0;
pub const TONE_DURATION_SEC: f32 = 0.1;
pub const TONE_GAIN: f32 = 0.5;

// Layout (logical pixels)
pub const GLYPH_WIDTH: f32 = 40.0;
pub const GLYPH_HEIGHT: f32 = GLYPH_WIDTH * 2.0;
pub const GLYPH_INSET: f32 = 5.0;
pub const STROKE_WIDTH: f32 = 4.0;
pub const HUD_GLYPH_WIDTH: f32 = 20.0;
pub const HUD_MARGIN: f32 = 16.0;
pub const SUMMARY_DIM_ALPHA: f32 = 0.5;
pub const HIGH_SCORE_WIGGLE_PX: f32 = 6.0;
pub const HIGH_SCORE_PULSE: f32 = 0.08; // relative size swing of the new-high-score line

// Durable storage
pub const HIGH_SCORE_KEY: &str = "typefall.high_score";
