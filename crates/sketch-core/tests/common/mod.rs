// Recording painter shared by the host-side sketch tests.

#![allow(dead_code)]
use glam::Vec2;
use sketch_core::{Blend, Color, Painter, Stroke, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Background(Color),
    Rect {
        origin: Vec2,
        size: Vec2,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line(Vec2, Vec2),
    Point(Vec2),
    Circle {
        center: Vec2,
        diameter: f32,
        fill: Option<Color>,
    },
    Arc {
        start: f32,
        end: f32,
        fill: Option<Color>,
    },
    Polyline(usize),
    Text(String),
    Layer(&'static str, Blend),
}

#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
    /// Ops recorded while building layers, kept apart from the frame.
    pub layer_ops: Vec<Op>,
    pub built_layers: Vec<&'static str>,
}

impl RecordingPainter {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn background(&mut self, color: Color) {
        self.ops.push(Op::Background(color));
    }

    fn rect(&mut self, origin: Vec2, size: Vec2, fill: Option<Color>, stroke: Option<Stroke>) {
        self.ops.push(Op::Rect {
            origin,
            size,
            fill,
            stroke,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, _stroke: Stroke) {
        self.ops.push(Op::Line(from, to));
    }

    fn point(&mut self, at: Vec2, _size: f32, _color: Color) {
        self.ops.push(Op::Point(at));
    }

    fn circle(&mut self, center: Vec2, diameter: f32, fill: Option<Color>, _stroke: Option<Stroke>) {
        self.ops.push(Op::Circle {
            center,
            diameter,
            fill,
        });
    }

    fn arc(
        &mut self,
        _center: Vec2,
        _size: Vec2,
        start: f32,
        end: f32,
        fill: Option<Color>,
        _stroke: Option<Stroke>,
    ) {
        self.ops.push(Op::Arc { start, end, fill });
    }

    fn polyline(&mut self, points: &[Vec2], _stroke: Stroke) {
        self.ops.push(Op::Polyline(points.len()));
    }

    fn text(&mut self, text: &str, _at: Vec2, _size: f32, _color: Color, _align: TextAlign) {
        self.ops.push(Op::Text(text.to_string()));
    }

    fn layer(&mut self, key: &'static str, blend: Blend, build: &mut dyn FnMut(&mut dyn Painter)) {
        if !self.built_layers.contains(&key) {
            self.built_layers.push(key);
            let mut sub = RecordingPainter::default();
            build(&mut sub);
            self.layer_ops.extend(sub.ops);
        }
        self.ops.push(Op::Layer(key, blend));
    }
}
