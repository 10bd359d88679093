use fnv::FnvHashMap;
use glam::Vec2;
use sketch_core::{Blend, Color, Painter, Stroke, TextAlign};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn offscreen_canvas(size: Vec2) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = crate::dom::document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(size.x.max(1.0) as u32);
    canvas.set_height(size.y.max(1.0) as u32);
    Ok(canvas)
}

/// [`Painter`] over a 2D canvas context. Layers are rendered once into
/// offscreen canvases of the same size and blitted afterwards.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
    layers: FnvHashMap<&'static str, web::HtmlCanvasElement>,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(canvas)?;
        ctx.set_line_cap("round");
        Ok(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
            layers: FnvHashMap::default(),
        })
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
    }

    fn set_stroke(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.css());
        self.ctx.set_line_width(stroke.weight as f64);
    }

    fn finish_path(&self, fill: Option<Color>, stroke: Option<Stroke>) {
        if let Some(c) = fill {
            self.set_fill(c);
            self.ctx.fill();
        }
        if let Some(s) = stroke {
            self.set_stroke(s);
            self.ctx.stroke();
        }
    }

    fn render_layer(
        &self,
        build: &mut dyn FnMut(&mut dyn Painter),
    ) -> anyhow::Result<web::HtmlCanvasElement> {
        let canvas = offscreen_canvas(self.size)?;
        let mut sub = CanvasPainter::new(&canvas)?;
        build(&mut sub);
        Ok(canvas)
    }
}

impl Painter for CanvasPainter {
    fn background(&mut self, color: Color) {
        self.set_fill(color);
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn rect(&mut self, origin: Vec2, size: Vec2, fill: Option<Color>, stroke: Option<Stroke>) {
        let (x, y, w, h) = (origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        if let Some(c) = fill {
            self.set_fill(c);
            self.ctx.fill_rect(x, y, w, h);
        }
        if let Some(s) = stroke {
            self.set_stroke(s);
            self.ctx.stroke_rect(x, y, w, h);
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.set_stroke(stroke);
        self.ctx.stroke();
    }

    fn point(&mut self, at: Vec2, size: f32, color: Color) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(at.x as f64, at.y as f64, (size * 0.5) as f64, 0.0, TAU);
        self.set_fill(color);
        self.ctx.fill();
    }

    fn circle(&mut self, center: Vec2, diameter: f32, fill: Option<Color>, stroke: Option<Stroke>) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, (diameter * 0.5) as f64, 0.0, TAU);
        self.finish_path(fill, stroke);
    }

    fn arc(
        &mut self,
        center: Vec2,
        size: Vec2,
        start: f32,
        end: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let (rx, ry) = ((size.x * 0.5) as f64, (size.y * 0.5) as f64);
        if let Some(c) = fill {
            self.ctx.begin_path();
            self.ctx.move_to(cx, cy);
            _ = self.ctx.ellipse(cx, cy, rx, ry, 0.0, start as f64, end as f64);
            self.ctx.close_path();
            self.set_fill(c);
            self.ctx.fill();
        }
        if let Some(s) = stroke {
            self.ctx.begin_path();
            _ = self.ctx.ellipse(cx, cy, rx, ry, 0.0, start as f64, end as f64);
            self.set_stroke(s);
            self.ctx.stroke();
        }
    }

    fn polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.set_stroke(stroke);
        self.ctx.stroke();
    }

    fn text(&mut self, text: &str, at: Vec2, size: f32, color: Color, align: TextAlign) {
        self.ctx.set_font(&format!("{}px sans-serif", size));
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx.set_text_baseline("middle");
        self.set_fill(color);
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }

    fn layer(&mut self, key: &'static str, blend: Blend, build: &mut dyn FnMut(&mut dyn Painter)) {
        if !self.layers.contains_key(key) {
            match self.render_layer(build) {
                Ok(canvas) => {
                    log::info!("[render] cached layer {}", key);
                    self.layers.insert(key, canvas);
                }
                Err(e) => {
                    log::error!("[render] layer {} failed: {:?}", key, e);
                    return;
                }
            }
        }
        let Some(layer) = self.layers.get(key) else {
            return;
        };
        self.ctx.save();
        if blend == Blend::Add {
            _ = self.ctx.set_global_composite_operation("lighter");
        }
        _ = self.ctx.draw_image_with_html_canvas_element(layer, 0.0, 0.0);
        self.ctx.restore();
    }
}
