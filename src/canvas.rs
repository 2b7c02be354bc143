use crate::dom;
use glam::Vec2;
use typefall_core::{Color, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of the core `Surface`, in CSS (logical) pixels.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas,
            ctx,
            dpr: 1.0,
        })
    }

    /// Start of frame: follow the viewport size and reset the transform so
    /// one unit is one CSS pixel.
    pub fn prepare(&mut self) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas);
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        (self.canvas.width() as f64 / self.dpr) as f32
    }

    fn height(&self) -> f32 {
        (self.canvas.height() as f64 / self.dpr) as f32
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        _ = self.ctx.scale(sx as f64, sy as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, width: f32) {
        let [first, rest @ ..] = points else {
            return;
        };
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }
}
