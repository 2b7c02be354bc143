//! Presentation.
//!
//! `draw_frame` is a pure read of the session: it issues drawing calls on a
//! `Surface` and never mutates gameplay or cosmetic state. Everything that
//! moves on its own (shake wobble, background hue drift, the high-score
//! wiggle) is a function of the frame's wall-clock time.

use crate::config::GameConfig;
use crate::constants::*;
use crate::glyphs::{draw_char, draw_text, GlyphSource};
use crate::session::{GameSession, GameState};
use glam::Vec2;

/// Surface provider collaborator: a 2D raster target in logical pixels.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, sx: f32, sy: f32);
    /// Global alpha for subsequent fills and strokes; `restore` undoes it.
    fn set_alpha(&mut self, alpha: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, width: f32);
}

/// HSLA colour, hue in degrees, the rest in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Color {
    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.h.rem_euclid(360.0),
            self.s * 100.0,
            self.l * 100.0,
            self.a
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
}

pub const PALETTE: [Theme; 4] = [
    // phosphor green
    Theme {
        background: Color::hsla(140.0, 0.35, 0.05, 1.0),
        text: Color::hsla(120.0, 1.0, 0.5, 1.0),
        accent: Color::hsla(60.0, 1.0, 0.6, 1.0),
    },
    // amber
    Theme {
        background: Color::hsla(30.0, 0.4, 0.06, 1.0),
        text: Color::hsla(38.0, 1.0, 0.55, 1.0),
        accent: Color::hsla(10.0, 0.9, 0.6, 1.0),
    },
    // ice
    Theme {
        background: Color::hsla(215.0, 0.45, 0.08, 1.0),
        text: Color::hsla(190.0, 0.9, 0.65, 1.0),
        accent: Color::hsla(320.0, 0.9, 0.7, 1.0),
    },
    // magenta
    Theme {
        background: Color::hsla(290.0, 0.4, 0.07, 1.0),
        text: Color::hsla(300.0, 0.85, 0.68, 1.0),
        accent: Color::hsla(170.0, 0.9, 0.55, 1.0),
    },
];

#[inline]
pub fn theme(index: usize) -> &'static Theme {
    &PALETTE[index % PALETTE.len()]
}

/// Background with a slow hue drift and breathing lightness.
pub fn animated_background(base: Color, now_ms: f64) -> Color {
    let t = (now_ms / 1000.0) as f32;
    Color {
        h: base.h + (t * 0.4).sin() * 18.0,
        l: (base.l * (1.0 + 0.25 * (t * 0.9).sin())).clamp(0.0, 1.0),
        ..base
    }
}

/// Camera offset and tilt for a shake magnitude at a point in time.
pub fn shake_offset(strength: f32, now_ms: f64) -> (Vec2, f32) {
    let t = now_ms as f32;
    let offset = Vec2::new((t * 0.050).sin(), (t * 0.043).cos()) * strength;
    let tilt = (t * 0.031).sin() * strength * 0.004;
    (offset, tilt)
}

/// Top-left of the glyph cell under the caret.
#[inline]
pub fn cursor_anchor(width: f32, height: f32) -> Vec2 {
    Vec2::new(
        width / 2.0 - GLYPH_WIDTH / 2.0,
        height / 2.0 - GLYPH_HEIGHT / 2.0,
    )
}

pub fn draw_frame<S, G>(
    session: &GameSession,
    config: &GameConfig,
    surface: &mut S,
    glyphs: &G,
    now_ms: f64,
) where
    S: Surface + ?Sized,
    G: GlyphSource + ?Sized,
{
    let theme = theme(session.theme_index());
    let (w, h) = (surface.width(), surface.height());
    surface.fill_rect(0.0, 0.0, w, h, animated_background(theme.background, now_ms));
    if session.state() == GameState::Done {
        // dim the whole viewport, not the shaken frame
        surface.fill_rect(0.0, 0.0, w, h, Color::hsla(0.0, 0.0, 0.0, SUMMARY_DIM_ALPHA));
    }

    surface.save();
    let (offset, tilt) = shake_offset(session.shake_strength(), now_ms);
    surface.translate(w / 2.0 + offset.x, h / 2.0 + offset.y);
    surface.rotate(tilt);
    surface.translate(-w / 2.0, -h / 2.0);
    match session.state() {
        GameState::Waiting | GameState::Playing => {
            draw_typing(session, config, surface, glyphs, theme)
        }
        GameState::Done => draw_summary(session, surface, glyphs, theme, now_ms),
    }
    surface.restore();
}

fn draw_typing<S, G>(
    session: &GameSession,
    config: &GameConfig,
    surface: &mut S,
    glyphs: &G,
    theme: &Theme,
) where
    S: Surface + ?Sized,
    G: GlyphSource + ?Sized,
{
    let (w, h) = (surface.width(), surface.height());
    let anchor = cursor_anchor(w, h);

    // caret chevron under the next character
    surface.stroke_polyline(
        &[
            Vec2::new(anchor.x, anchor.y + GLYPH_HEIGHT * 1.5),
            Vec2::new(anchor.x + GLYPH_WIDTH / 2.0, anchor.y + GLYPH_HEIGHT * 1.2),
            Vec2::new(anchor.x + GLYPH_WIDTH, anchor.y + GLYPH_HEIGHT * 1.5),
        ],
        theme.accent,
        STROKE_WIDTH,
    );

    let scroll = (session.animated_cursor() - session.cursor() as f32) * GLYPH_WIDTH;
    for (i, &ch) in session.remaining().iter().enumerate() {
        let x = anchor.x + scroll + i as f32 * GLYPH_WIDTH;
        if x > w {
            break;
        }
        if x + GLYPH_WIDTH < 0.0 {
            continue;
        }
        draw_char(
            surface,
            glyphs.strokes(ch),
            x,
            anchor.y,
            GLYPH_WIDTH,
            GLYPH_INSET,
            theme.text,
        );
    }

    let fade_rate = config.physics.fade_rate;
    for letter in session.dead_letters() {
        let alpha = letter.alpha(fade_rate);
        if alpha <= 0.0 {
            continue;
        }
        let center = anchor + letter.position + Vec2::new(GLYPH_WIDTH, GLYPH_HEIGHT) / 2.0;
        surface.save();
        surface.translate(center.x, center.y);
        surface.rotate(letter.angle);
        surface.set_alpha(alpha);
        draw_char(
            surface,
            glyphs.strokes(letter.character),
            -GLYPH_WIDTH / 2.0,
            -GLYPH_HEIGHT / 2.0,
            GLYPH_WIDTH,
            GLYPH_INSET,
            theme.text,
        );
        surface.restore();
    }

    let hud = format!("{} wpm", session.live_wpm().round() as u32);
    let hud_x = w - HUD_MARGIN - hud.chars().count() as f32 * HUD_GLYPH_WIDTH;
    draw_text(surface, glyphs, &hud, hud_x, HUD_MARGIN, HUD_GLYPH_WIDTH, theme.text);
}

fn draw_summary<S, G>(
    session: &GameSession,
    surface: &mut S,
    glyphs: &G,
    theme: &Theme,
    now_ms: f64,
) where
    S: Surface + ?Sized,
    G: GlyphSource + ?Sized,
{
    let (w, h) = (surface.width(), surface.height());
    let summary = session.summary();
    let wpm = summary.map(|s| s.wpm).unwrap_or_default();
    let t = now_ms as f32;
    let (best_line, best_color, wiggle, pulse) = match summary {
        Some(s) if s.new_high_score => (
            "new high score".to_owned(),
            theme.accent,
            (t * 0.008).sin() * HIGH_SCORE_WIGGLE_PX,
            1.0 + (t * 0.006).sin() * HIGH_SCORE_PULSE,
        ),
        Some(s) => (format!("best {}", s.previous_best), theme.text, 0.0, 1.0),
        None => (
            format!("best {}", session.high_score_wpm()),
            theme.text,
            0.0,
            1.0,
        ),
    };
    let lines = [
        (format!("{} wpm", wpm), theme.text, 0.0, 1.0),
        (
            format!("{} ms", session.elapsed_typed_ms().round() as u64),
            theme.text,
            0.0,
            1.0,
        ),
        (best_line, best_color, wiggle, pulse),
        (String::new(), theme.text, 0.0, 1.0),
        ("enter to retry".to_owned(), theme.text, 0.0, 1.0),
    ];

    let size = GLYPH_WIDTH;
    let line_height = GLYPH_HEIGHT;
    let top = h / 2.0 - line_height / 2.0 * lines.len() as f32;
    for (i, (text, color, dy, pulse)) in lines.iter().enumerate() {
        let line_w = size * text.chars().count() as f32;
        let y = top + line_height * i as f32 + dy;
        if *pulse == 1.0 {
            draw_text(surface, glyphs, text, w / 2.0 - line_w / 2.0, y, size, *color);
            continue;
        }
        // scale about the line's centre
        surface.save();
        surface.translate(w / 2.0, y + line_height / 2.0);
        surface.scale(*pulse, *pulse);
        draw_text(surface, glyphs, text, -line_w / 2.0, -line_height / 2.0, size, *color);
        surface.restore();
    }
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Scale(f32, f32),
    Alpha(f32),
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
        alpha: f32,
    },
}

/// Surface that records calls instead of rasterising; used by host tests and
/// headless runs. `alpha` on polylines is the effective alpha at call time.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
    alpha_stack: Vec<f32>,
    alpha: f32,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            alpha_stack: Vec::new(),
            alpha: 1.0,
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.alpha_stack.clear();
        self.alpha = 1.0;
    }

    pub fn polylines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Polyline { .. }))
    }

    pub fn fill_rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn save(&mut self) {
        self.alpha_stack.push(self.alpha);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.alpha = self.alpha_stack.pop().unwrap_or(1.0);
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::Translate(x, y));
    }

    fn rotate(&mut self, radians: f32) {
        self.ops.push(DrawOp::Rotate(radians));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(DrawOp::Scale(sx, sy));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.ops.push(DrawOp::Alpha(alpha));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, width: f32) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            color,
            width,
            alpha: self.alpha,
        });
    }
}
