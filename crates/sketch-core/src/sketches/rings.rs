//! "Disrupted Saturn": a planet wrapped in short-lived ring arcs.

use crate::audio::{AudioCue, AudioGate, ClipId, ClipSequence, GateTransition};
use crate::constants::*;
use crate::entity::{advance_all, Entity};
use crate::paint::{Color, Painter, Stroke};
use crate::sketch::{FrameInput, Sketch, SketchKind};
use crate::starfield::{StarField, StarStyle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

pub const PLANET_AMBIENCE: ClipId = "Ambience.mp3";
pub const RINGS_AMBIENCE: ClipId = "saturn-orbiting.mp3";
pub const ATMOSPHERE: &[ClipId] = &[
    "planet's atmosphere.mp3",
    "saturn's atmosphere-2.mp3",
    "Saturn's atmosphere-3.mp3",
];
const CLIPS: &[ClipId] = &[
    PLANET_AMBIENCE,
    RINGS_AMBIENCE,
    "planet's atmosphere.mp3",
    "saturn's atmosphere-2.mp3",
    "Saturn's atmosphere-3.mp3",
];

#[derive(Clone, Debug)]
pub struct RingConfig {
    pub center: Vec2,
    /// Ellipse size of the innermost ring of a batch.
    pub base_size: Vec2,
    /// Growth per ring within a batch.
    pub step: Vec2,
    pub fade_speed: f32,
    pub angle_step: f32,
    pub first_spawn_frame: u64,
    /// Frames that must pass after a spawn before the next one; 0 spawns on
    /// every frame.
    pub spawn_gap_frames: u64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            center: Vec2::new(PLANET_CENTER.0, PLANET_CENTER.1),
            base_size: Vec2::new(700.0, 90.0),
            step: Vec2::new(50.0, 10.0),
            fade_speed: RING_FADE_SPEED,
            angle_step: RING_ANGLE_STEP,
            first_spawn_frame: RING_FIRST_SPAWN_FRAME,
            spawn_gap_frames: 0,
        }
    }
}

/// One elliptical arc fading out while the ring system turns.
#[derive(Clone, Debug)]
pub struct Ring {
    pub center: Vec2,
    pub size: Vec2,
    pub span: f32,
    pub offset: f32,
    pub alpha: f32,
    pub fade_speed: f32,
}

impl Ring {
    pub fn new(center: Vec2, size: Vec2, span: f32, offset: f32, fade_speed: f32) -> Self {
        Self {
            center,
            size,
            span,
            offset,
            alpha: ALPHA_MAX,
            fade_speed,
        }
    }

    /// Start and end angle of the arc for a global ring rotation.
    pub fn arc_angles(&self, ring_angle: f32) -> (f32, f32) {
        let mid = ring_angle + self.offset;
        (mid - self.span / 2.0, mid + self.span / 2.0)
    }

    pub fn draw(&self, painter: &mut dyn Painter, ring_angle: f32) {
        if self.is_dead() {
            return;
        }
        let (start, end) = self.arc_angles(ring_angle);
        let stroke = Stroke::new(Color::WHITE.with_alpha255(self.alpha), 1.0);
        painter.arc(self.center, self.size, start, end, None, Some(stroke));
    }
}

impl Entity for Ring {
    fn update(&mut self) {
        self.alpha = (self.alpha - self.fade_speed).max(0.0);
    }

    fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Spawns ring batches and turns them around the planet.
pub struct RingSystem {
    pub rings: Vec<Ring>,
    pub angle: f32,
    cfg: RingConfig,
    last_spawn: u64,
}

impl RingSystem {
    pub fn new(cfg: RingConfig) -> Self {
        let last_spawn = cfg.first_spawn_frame;
        Self {
            rings: Vec::new(),
            angle: 0.0,
            cfg,
            last_spawn,
        }
    }

    /// Push a batch of concentric rings sharing one random span; returns the
    /// batch size.
    pub fn spawn_batch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let count = RING_BATCH_MIN + rng.gen_range(0..RING_BATCH_EXTRA);
        let span = rng.gen_range(0.0..PI / 3.0);
        for i in 0..count {
            let size = self.cfg.base_size + self.cfg.step * i as f32;
            let offset = rng.gen_range(0.0..TAU);
            self.rings
                .push(Ring::new(self.cfg.center, size, span, offset, self.cfg.fade_speed));
        }
        count
    }

    pub fn spawn_due(&self, frame: u64) -> bool {
        frame >= self.last_spawn + self.cfg.spawn_gap_frames
    }

    /// Spawn if due, fade every ring, drop the dead ones, turn the system.
    pub fn step<R: Rng + ?Sized>(&mut self, frame: u64, rng: &mut R) {
        if self.spawn_due(frame) {
            self.spawn_batch(rng);
            self.last_spawn = frame;
        }
        advance_all(&mut self.rings);
        self.angle += self.cfg.angle_step;
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        for r in &self.rings {
            r.draw(painter, self.angle);
        }
    }
}

pub struct Rings {
    planet_center: Vec2,
    stars: StarField,
    system: RingSystem,
    gate: AudioGate,
    atmosphere: ClipSequence,
    rng: StdRng,
}

impl Rings {
    pub fn new(cfg: RingConfig, size: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = StarField::generate(&mut rng, RINGS_STAR_COUNT, size, StarStyle::Plain);
        let planet_center = cfg.center;
        let mut system = RingSystem::new(cfg);
        system.spawn_batch(&mut rng);
        let atmosphere = ClipSequence::new(ATMOSPHERE, rng.gen());
        Self {
            planet_center,
            stars,
            system,
            gate: AudioGate::default(),
            atmosphere,
            rng,
        }
    }

    pub fn system(&self) -> &RingSystem {
        &self.system
    }

    pub fn gate(&self) -> &AudioGate {
        &self.gate
    }

    fn start_ambience(&mut self, cues: &mut Vec<AudioCue>) {
        cues.push(AudioCue::ResumeOutput);
        for clip in [PLANET_AMBIENCE, RINGS_AMBIENCE] {
            cues.push(AudioCue::Loop {
                clip,
                volume: VOLUME_RINGS,
            });
        }
        if let Some(clip) = self.atmosphere.restart() {
            cues.push(AudioCue::Play {
                clip,
                volume: VOLUME_RINGS,
            });
        }
    }

    fn stop_ambience(&mut self, cues: &mut Vec<AudioCue>) {
        cues.push(AudioCue::Stop(PLANET_AMBIENCE));
        cues.push(AudioCue::Stop(RINGS_AMBIENCE));
        if let Some(clip) = self.atmosphere.stop() {
            cues.push(AudioCue::Stop(clip));
        }
    }

    fn toggle(&mut self, cues: &mut Vec<AudioCue>) -> &'static str {
        match self.gate.toggle() {
            GateTransition::Armed | GateTransition::Unmuted => self.start_ambience(cues),
            GateTransition::Muted => self.stop_ambience(cues),
        }
        log::info!("[rings] {}", self.gate.label());
        self.gate.label()
    }
}

impl Sketch for Rings {
    fn kind(&self) -> SketchKind {
        SketchKind::Rings
    }

    fn clips(&self) -> &'static [ClipId] {
        CLIPS
    }

    fn update(&mut self, input: &FrameInput, _cues: &mut Vec<AudioCue>) {
        self.system.step(input.frame, &mut self.rng);
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let outline = Stroke::new(Color::WHITE, 2.0);
        painter.background(Color::BLACK);
        self.stars.draw(painter);
        painter.circle(
            self.planet_center,
            PLANET_DIAMETER,
            Some(Color::BLACK),
            Some(outline),
        );
        self.system.draw(painter);
        // upper half of the planet hides the back of the rings
        painter.arc(
            self.planet_center,
            Vec2::splat(PLANET_DIAMETER),
            PI,
            TAU,
            Some(Color::BLACK),
            Some(outline),
        );
    }

    fn pointer_pressed(&mut self, _at: Vec2, cues: &mut Vec<AudioCue>) {
        self.toggle(cues);
    }

    fn clip_ended(&mut self, clip: ClipId, cues: &mut Vec<AudioCue>) {
        if !self.gate.is_live() {
            return;
        }
        if let Some(next) = self.atmosphere.on_ended(clip) {
            cues.push(AudioCue::Play {
                clip: next,
                volume: VOLUME_RINGS,
            });
        }
    }

    fn toggle_sound(&mut self, cues: &mut Vec<AudioCue>) -> &'static str {
        self.toggle(cues)
    }

    fn sound_label(&self) -> &'static str {
        self.gate.label()
    }
}
