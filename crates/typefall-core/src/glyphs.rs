//! Line-stroke glyphs.
//!
//! A glyph is a handful of straight segments on a unit cell one wide and two
//! tall (y down). The built-in `StrokeFont` covers `a-z` and `0-9` on a 3x3
//! point grid; everything else, space included, has no strokes.

use crate::constants::*;
use crate::render::{Color, Surface};
use glam::Vec2;
use smallvec::SmallVec;

pub type Segment = (Vec2, Vec2);

/// Finite, restartable stroke list for one glyph.
pub type Strokes = SmallVec<[Segment; 8]>;

/// Glyph source collaborator.
pub trait GlyphSource {
    fn strokes(&self, ch: char) -> Strokes;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StrokeFont;

// 0 1 2
// 3 4 5
// 6 7 8
const GRID: [Vec2; 9] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.5, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.5, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 2.0),
    Vec2::new(0.5, 2.0),
    Vec2::new(1.0, 2.0),
];

/// Polylines through `GRID` indices.
fn polylines(ch: char) -> &'static [&'static [u8]] {
    match ch {
        'a' => &[&[6, 0, 2, 8], &[3, 5]],
        'b' => &[&[6, 0, 1, 4, 8, 6], &[3, 4]],
        'c' => &[&[2, 0, 6, 8]],
        'd' => &[&[6, 0, 1, 5, 7, 6]],
        'e' => &[&[2, 0, 6, 8], &[3, 4]],
        'f' => &[&[2, 0, 6], &[3, 4]],
        'g' => &[&[2, 0, 6, 8, 5, 4]],
        'h' => &[&[0, 6], &[2, 8], &[3, 5]],
        'i' => &[&[0, 2], &[1, 7], &[6, 8]],
        'j' => &[&[2, 8, 6, 3]],
        'k' => &[&[0, 6], &[2, 3, 8]],
        'l' => &[&[0, 6, 8]],
        'm' => &[&[6, 0, 4, 2, 8]],
        'n' => &[&[6, 0, 8, 2]],
        'o' => &[&[0, 2, 8, 6, 0]],
        'p' => &[&[6, 0, 2, 5, 3]],
        'q' => &[&[0, 2, 8, 6, 0], &[4, 8]],
        'r' => &[&[6, 0, 2, 5, 3, 8]],
        's' => &[&[2, 0, 3, 5, 8, 6]],
        't' => &[&[0, 2], &[1, 7]],
        'u' => &[&[0, 6, 8, 2]],
        'v' => &[&[0, 7, 2]],
        'w' => &[&[0, 6, 4, 8, 2]],
        'x' => &[&[0, 8], &[2, 6]],
        'y' => &[&[0, 4, 2], &[4, 7]],
        'z' => &[&[0, 2, 6, 8]],
        '0' => &[&[0, 2, 8, 6, 0], &[2, 6]],
        '1' => &[&[3, 1, 7], &[6, 8]],
        '2' => &[&[0, 2, 5, 3, 6, 8]],
        '3' => &[&[0, 2, 8, 6], &[3, 5]],
        '4' => &[&[0, 3, 5], &[2, 8]],
        '5' => &[&[2, 0, 3, 5, 8, 6]],
        '6' => &[&[2, 0, 6, 8, 5, 3]],
        '7' => &[&[0, 2, 7]],
        '8' => &[&[0, 2, 8, 6, 0], &[3, 5]],
        '9' => &[&[5, 3, 0, 2, 8, 6]],
        _ => &[],
    }
}

impl GlyphSource for StrokeFont {
    fn strokes(&self, ch: char) -> Strokes {
        polylines(ch.to_ascii_lowercase())
            .iter()
            .flat_map(|line| line.windows(2))
            .map(|pair| (GRID[pair[0] as usize], GRID[pair[1] as usize]))
            .collect()
    }
}

/// Stroke one glyph with its cell's top-left at `(x, y)`, `size` wide and
/// `2 * size` tall, pulled in by `inset` on every side.
pub fn draw_char<S: Surface + ?Sized>(
    surface: &mut S,
    strokes: impl IntoIterator<Item = Segment>,
    x: f32,
    y: f32,
    size: f32,
    inset: f32,
    color: Color,
) {
    let origin = Vec2::new(x + inset, y + inset);
    let scale = Vec2::new(size - 2.0 * inset, size - inset);
    let width = stroke_width_for(size);
    for (a, b) in strokes {
        surface.stroke_polyline(&[origin + a * scale, origin + b * scale], color, width);
    }
}

/// Draw `text` left to right from `(x, y)`, one cell per character.
pub fn draw_text<S, G>(
    surface: &mut S,
    glyphs: &G,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Color,
) where
    S: Surface + ?Sized,
    G: GlyphSource + ?Sized,
{
    let inset = size * GLYPH_INSET / GLYPH_WIDTH;
    for (i, ch) in text.chars().enumerate() {
        draw_char(
            surface,
            glyphs.strokes(ch),
            x + i as f32 * size,
            y,
            size,
            inset,
            color,
        );
    }
}

#[inline]
pub fn stroke_width_for(size: f32) -> f32 {
    (size * STROKE_WIDTH / GLYPH_WIDTH).max(1.0)
}
