//! "The Sun": a slowly counter-rotating corona of rays around a dark disc.

use crate::audio::{AudioCue, AudioGate, ClipId};
use crate::constants::*;
use crate::paint::{Blend, Color, Painter, Stroke};
use crate::sketch::{FrameInput, Sketch, SketchKind};
use crate::starfield::{StarField, StarStyle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct SunRays {
    pub count: usize,
    pub rotation: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl SunRays {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            count: rng.gen_range(SUN_RAYS_MIN..SUN_RAYS_MAX),
            rotation: 0.0,
            inner_radius: SUN_INNER_RADIUS,
            outer_radius: SUN_INNER_RADIUS + SUN_RAY_LENGTH,
        }
    }

    /// Turn counter-clockwise by a small random step.
    pub fn rotate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (lo, hi) = SUN_ROTATION_STEP;
        self.rotation -= rng.gen_range(lo..hi);
    }

    /// Ray `i` as a segment relative to the sun centre; rays sit halfway
    /// between their evenly spaced slots.
    pub fn ray(&self, i: usize) -> (Vec2, Vec2) {
        let step = TAU / self.count as f32;
        let mid = i as f32 * step + step / 2.0 + self.rotation;
        let dir = Vec2::new(mid.cos(), mid.sin());
        (dir * self.inner_radius, dir * self.outer_radius)
    }
}

pub struct Sun {
    center: Vec2,
    stars: StarField,
    rays: SunRays,
    gate: AudioGate,
    rng: StdRng,
}

impl Sun {
    pub fn new(size: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = StarField::generate(&mut rng, SUN_STAR_COUNT, size, StarStyle::Plain);
        let rays = SunRays::new(&mut rng);
        Self {
            center: size * 0.5,
            stars,
            rays,
            gate: AudioGate::default(),
            rng,
        }
    }

    pub fn rays(&self) -> &SunRays {
        &self.rays
    }
}

impl Sketch for Sun {
    fn kind(&self) -> SketchKind {
        SketchKind::Sun
    }

    fn clips(&self) -> &'static [ClipId] {
        &[]
    }

    fn update(&mut self, _input: &FrameInput, _cues: &mut Vec<AudioCue>) {
        self.rays.rotate(&mut self.rng);
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let bg = Color::gray(SUN_BACKGROUND);
        painter.background(bg);
        let stars = &self.stars;
        painter.layer("sun-stars", Blend::Normal, &mut |p: &mut dyn Painter| {
            p.background(bg);
            stars.draw(p);
        });
        let ray_stroke = Stroke::new(Color::WHITE, 2.0);
        for i in 0..self.rays.count {
            let (a, b) = self.rays.ray(i);
            painter.line(self.center + a, self.center + b, ray_stroke);
        }
        painter.circle(
            self.center,
            SUN_DISC_DIAMETER,
            Some(Color::BLACK),
            Some(Stroke::new(Color::WHITE, 2.5)),
        );
    }

    // No clips; the button still reflects the gate.
    fn toggle_sound(&mut self, cues: &mut Vec<AudioCue>) -> &'static str {
        self.gate.toggle();
        cues.push(AudioCue::ResumeOutput);
        self.gate.label()
    }

    fn sound_label(&self) -> &'static str {
        self.gate.label()
    }
}
