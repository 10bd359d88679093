//! Drawing seam between the sketches and a concrete canvas.
//!
//! Sketches describe each frame through [`Painter`]; the web front-end maps
//! the calls onto a `CanvasRenderingContext2d`. Coordinates are canvas pixels
//! with the origin at the top-left corner, angles are radians measured
//! clockwise from +x (canvas convention).

use glam::Vec2;

/// 8-bit RGB colour with an alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::gray(0);
    pub const WHITE: Color = Color::gray(255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Gray level from an unclamped brightness such as a jittered star value.
    pub fn brightness(v: f32) -> Self {
        Self::gray(v.clamp(0.0, 255.0) as u8)
    }

    /// Same colour with alpha given on the 0..=255 scale.
    pub fn with_alpha255(self, alpha: f32) -> Self {
        Self {
            a: (alpha / 255.0).clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` form.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub weight: f32,
}

impl Stroke {
    pub const fn new(color: Color, weight: f32) -> Self {
        Self { color, weight }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// How a cached layer is composited onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    Add,
}

pub trait Painter {
    /// Fill the whole surface with `color`.
    fn background(&mut self, color: Color);

    fn rect(&mut self, origin: Vec2, size: Vec2, fill: Option<Color>, stroke: Option<Stroke>);

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);

    /// A round dot of diameter `size`.
    fn point(&mut self, at: Vec2, size: f32, color: Color);

    fn circle(&mut self, center: Vec2, diameter: f32, fill: Option<Color>, stroke: Option<Stroke>);

    /// Elliptical arc; `size` holds the full width and height. A fill closes
    /// the arc as a pie slice, the stroke only follows the curve.
    fn arc(
        &mut self,
        center: Vec2,
        size: Vec2,
        start: f32,
        end: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    );

    fn polyline(&mut self, points: &[Vec2], stroke: Stroke);

    /// Text vertically centred on `at`.
    fn text(&mut self, text: &str, at: Vec2, size: f32, color: Color, align: TextAlign);

    /// Composite the layer stored under `key`, rendering it with `build` the
    /// first time the key is seen.
    fn layer(&mut self, key: &'static str, blend: Blend, build: &mut dyn FnMut(&mut dyn Painter));
}
