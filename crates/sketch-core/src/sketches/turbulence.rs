//! "Turbulence": trails of orbiters around a centre that wanders inside a
//! circular boundary, with pointer-driven sound effects and random
//! ambient stingers.

use crate::audio::{AudioCue, AudioGate, ClipId, EdgeTrigger, GateTransition, RandomInterval};
use crate::constants::*;
use crate::paint::{Blend, Color, Painter, Stroke};
use crate::sketch::{FrameInput, Sketch, SketchKind};
use crate::starfield::{StarField, StarStyle};
use glam::Vec2;
use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::f32::consts::TAU;

pub const AMBIENT: ClipId = "storm.mp3";
pub const TONE: ClipId = "track4_tone12.mp3";
pub const SLIDE: ClipId = "slide.mp3";
pub const BLIP: ClipId = "blipSelect2tin.mp3";
pub const BREATHE: ClipId = "breathe.mp3";
pub const JUMPSCARE: ClipId = "jumpscare.mp3";
const CLIPS: &[ClipId] = &[AMBIENT, TONE, SLIDE, BLIP, BREATHE, JUMPSCARE];

/// Fixed-capacity ring buffer of recent positions.
#[derive(Clone, Debug)]
pub struct Trail {
    points: SmallVec<[Vec2; TRAIL_MAX]>,
    head: usize,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: SmallVec::new(),
            head: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, overwriting the oldest one once full.
    pub fn push(&mut self, p: Vec2) {
        if self.points.len() < self.capacity {
            self.points.push(p);
        } else {
            self.points[self.head] = p;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Points from oldest to newest.
    pub fn ordered(&self) -> SmallVec<[Vec2; TRAIL_MAX]> {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter()).copied().collect()
    }
}

#[derive(Clone, Debug)]
pub struct Orbiter {
    pub orbit_radius: f32,
    pub speed: f32,
    pub angle: f32,
    pub trail: Trail,
}

impl Orbiter {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            orbit_radius: rng.gen_range(40.0..200.0),
            speed: rng.gen_range(0.05..0.2) * sign,
            angle: rng.gen_range(0.0..TAU),
            trail: Trail::new(rng.gen_range(TRAIL_MIN..TRAIL_MAX)),
        }
    }

    pub fn position(&self, center: Vec2) -> Vec2 {
        center + Vec2::new(self.angle.cos(), self.angle.sin()) * self.orbit_radius
    }

    /// Record the current position around `center`, then advance the angle.
    pub fn step(&mut self, center: Vec2) {
        let p = self.position(center);
        self.trail.push(p);
        self.angle += self.speed;
    }
}

/// Orbit centre driven by Perlin noise, bouncing off an inner radius.
pub struct WanderingCenter {
    pub pos: Vec2,
    pub vel: Vec2,
    home: Vec2,
    max_distance: f32,
    perlin: Perlin,
    t: [f64; 2],
}

impl WanderingCenter {
    pub fn new<R: Rng + ?Sized>(home: Vec2, max_distance: f32, rng: &mut R) -> Self {
        Self {
            pos: home,
            vel: Vec2::ZERO,
            home,
            max_distance,
            perlin: Perlin::new(rng.gen()),
            t: [rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)],
        }
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    // 0..1 like a classic 1D noise()
    fn noise01(&self, t: f64) -> f32 {
        ((self.perlin.get([t, 0.0]) + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }

    pub fn step(&mut self) {
        self.vel = Vec2::new(
            (self.noise01(self.t[0]) - 0.5) * CENTER_SPEED_SCALE,
            (self.noise01(self.t[1]) - 0.5) * CENTER_SPEED_SCALE,
        );
        self.t[0] += NOISE_STEP;
        self.t[1] += NOISE_STEP;
        self.pos += self.vel;

        let offset = self.pos - self.home;
        if offset.length() > self.max_distance {
            let angle = offset.y.atan2(offset.x);
            self.pos = self.home + Vec2::new(angle.cos(), angle.sin()) * self.max_distance;
            self.vel = -self.vel;
        }
    }
}

pub struct Turbulence {
    size: Vec2,
    boundary_radius: f32,
    stars: StarField,
    orbiters: Vec<Orbiter>,
    center: WanderingCenter,
    gate: AudioGate,
    crossing: EdgeTrigger,
    breathe: RandomInterval,
    jumpscare: RandomInterval,
    frame: u64,
    rng: StdRng,
}

impl Turbulence {
    pub fn new(size: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let home = size * 0.5;
        let boundary_radius = BOUNDARY_DIAMETER / 2.0;
        let stars =
            StarField::generate(&mut rng, TURBULENCE_STAR_COUNT, size, StarStyle::CenterWeighted);
        let center = WanderingCenter::new(home, boundary_radius - CENTER_MARGIN, &mut rng);
        let count = rng.gen_range(ORBITERS_MIN..ORBITERS_MAX);
        let orbiters = (0..count).map(|_| Orbiter::random(&mut rng)).collect();
        let breathe = RandomInterval::new(BREATHE_INTERVAL_SEC, &mut rng);
        let jumpscare = RandomInterval::new(JUMPSCARE_INTERVAL_SEC, &mut rng);
        Self {
            size,
            boundary_radius,
            stars,
            orbiters,
            center,
            gate: AudioGate::default(),
            crossing: EdgeTrigger::default(),
            breathe,
            jumpscare,
            frame: 0,
            rng,
        }
    }

    pub fn orbiters(&self) -> &[Orbiter] {
        &self.orbiters
    }

    pub fn center(&self) -> &WanderingCenter {
        &self.center
    }

    pub fn gate(&self) -> &AudioGate {
        &self.gate
    }

    pub fn is_inside_boundary(&self, p: Vec2) -> bool {
        p.distance(self.center.home()) <= self.boundary_radius
    }

    fn on_canvas(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.size.x && p.y <= self.size.y
    }

    fn play_if_live(&self, clip: ClipId, volume: f32, cues: &mut Vec<AudioCue>) {
        if self.gate.is_live() {
            cues.push(AudioCue::Play { clip, volume });
        }
    }
}

impl Sketch for Turbulence {
    fn kind(&self) -> SketchKind {
        SketchKind::Turbulence
    }

    fn clips(&self) -> &'static [ClipId] {
        CLIPS
    }

    fn update(&mut self, input: &FrameInput, cues: &mut Vec<AudioCue>) {
        self.frame = input.frame;
        self.center.step();
        let c = self.center.pos;
        for o in &mut self.orbiters {
            o.step(c);
        }

        if let Some(p) = input.pointer.filter(|p| self.on_canvas(*p)) {
            let inside = self.is_inside_boundary(p);
            if self.crossing.update(inside) {
                self.play_if_live(SLIDE, VOLUME_SLIDE, cues);
            }
        }

        if self.breathe.tick(input.dt_sec, &mut self.rng) {
            self.play_if_live(BREATHE, VOLUME_BREATHE, cues);
        }
        if self.jumpscare.tick(input.dt_sec, &mut self.rng) {
            self.play_if_live(JUMPSCARE, VOLUME_JUMPSCARE, cues);
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let outline = Stroke::new(Color::WHITE, 2.0);
        if self.frame <= 1 {
            painter.background(Color::BLACK);
        }
        // translucent wash keeps fading trails instead of clearing
        painter.rect(
            Vec2::ZERO,
            self.size,
            Some(Color::BLACK.with_alpha255(TRAIL_WASH_ALPHA)),
            None,
        );
        let (stars, home, diameter) = (&self.stars, self.center.home(), self.boundary_radius * 2.0);
        painter.layer("turbulence-stars", Blend::Add, &mut |p: &mut dyn Painter| {
            p.background(Color::BLACK);
            stars.draw(p);
            p.circle(home, diameter, Some(Color::BLACK), Some(outline));
        });
        painter.circle(self.center.home(), diameter, None, Some(outline));

        for o in &self.orbiters {
            painter.polyline(&o.trail.ordered(), outline);
        }
    }

    fn pointer_pressed(&mut self, at: Vec2, cues: &mut Vec<AudioCue>) {
        if !self.gate.is_live() || !self.on_canvas(at) {
            return;
        }
        if self.is_inside_boundary(at) {
            cues.push(AudioCue::Play {
                clip: TONE,
                volume: VOLUME_TONE,
            });
        } else {
            cues.push(AudioCue::Play {
                clip: BLIP,
                volume: VOLUME_BLIP,
            });
        }
    }

    fn toggle_sound(&mut self, cues: &mut Vec<AudioCue>) -> &'static str {
        match self.gate.toggle() {
            GateTransition::Armed => {
                cues.push(AudioCue::ResumeOutput);
                cues.push(AudioCue::Loop {
                    clip: AMBIENT,
                    volume: VOLUME_AMBIENT,
                });
            }
            GateTransition::Muted => {
                cues.extend([AMBIENT, TONE, SLIDE].map(AudioCue::Stop));
            }
            GateTransition::Unmuted => {
                cues.push(AudioCue::ResumeOutput);
                cues.push(AudioCue::LoopIfIdle {
                    clip: AMBIENT,
                    volume: VOLUME_AMBIENT,
                });
            }
        }
        log::info!("[turbulence] {}", self.gate.label());
        self.gate.label()
    }

    fn sound_label(&self) -> &'static str {
        self.gate.label()
    }
}
