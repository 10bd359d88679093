//! "Planetary Soroban": abacus columns whose planet beads drift between slots
//! on their own timers.
//!
//! Every column holds one heaven bead (slot 0 or 1) and a block of four earth
//! beads (slots `base..base + 4`, `base` in 3..=4). Beads ease toward the
//! coordinate of their target slot; the readout only depends on the discrete
//! slots.

use crate::audio::{AudioCue, AudioGate, ClipId, GateTransition};
use crate::constants::*;
use crate::math::lerp;
use crate::paint::{Blend, Color, Painter, Stroke, TextAlign};
use crate::sketch::{FrameInput, KeyTrigger, Sketch, SketchKind};
use crate::starfield::{StarField, StarStyle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

pub const AMBIENCE_TRACKS: &[ClipId] = &[
    "soroban-ambience-1.mp3",
    "soroban-ambience-2.mp3",
    "soroban-ambience-3.mp3",
];
pub const SPACE_EFFECT: ClipId = "bead-clack.mp3";
pub const CONTROL_EFFECT: ClipId = "bead-slide.mp3";
const CLIPS: &[ClipId] = &[
    "soroban-ambience-1.mp3",
    "soroban-ambience-2.mp3",
    "soroban-ambience-3.mp3",
    SPACE_EFFECT,
    CONTROL_EFFECT,
];

#[derive(Clone, Debug)]
pub struct SorobanConfig {
    pub columns: usize,
    /// Top edge of every slot, heaven slots first.
    pub slots: [f32; SOROBAN_SLOTS],
    /// Horizontal beam between heaven and earth.
    pub beam_y: f32,
    pub bead_radius: f32,
}

impl Default for SorobanConfig {
    fn default() -> Self {
        Self {
            columns: SOROBAN_COLUMNS,
            slots: [170.0, 250.0, 410.0, 490.0, 570.0, 650.0, 730.0, 810.0],
            beam_y: 366.0,
            bead_radius: BEAD_RADIUS,
        }
    }
}

/// A bead whose vertical coordinate eases toward a target.
#[derive(Clone, Copy, Debug)]
pub struct Bead {
    pub pos: Vec2,
    pub radius: f32,
    pub target_y: f32,
}

impl Bead {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
            target_y: y,
        }
    }

    pub fn set_target(&mut self, y: f32) {
        self.target_y = y;
    }

    pub fn update(&mut self) {
        self.pos.y = lerp(self.pos.y, self.target_y, BEAD_EASE);
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        let outline = Stroke::new(Color::WHITE, 2.0);
        painter.circle(self.pos, self.radius * 2.0, Some(Color::BLACK), Some(outline));
        // planetary ring
        painter.arc(
            self.pos,
            Vec2::new(self.radius * 2.8, self.radius * 0.7),
            0.0,
            TAU,
            None,
            Some(Stroke::new(Color::WHITE, 1.0)),
        );
    }
}

#[derive(Clone, Debug)]
pub struct SorobanColumn {
    pub x: f32,
    slots: [f32; SOROBAN_SLOTS],
    radius: f32,
    heaven_slot: usize,
    earth_base: usize,
    pub heaven: Bead,
    pub earths: [Bead; EARTH_BEADS],
    timer: u32,
}

impl SorobanColumn {
    pub fn new<R: Rng + ?Sized>(x: f32, slots: [f32; SOROBAN_SLOTS], radius: f32, rng: &mut R) -> Self {
        let heaven_slot = 0;
        let earth_base = EARTH_BASE_RANGE.1;
        let heaven = Bead::new(x, slots[heaven_slot] + radius, radius);
        let earths = std::array::from_fn(|i| Bead::new(x, slots[earth_base + i] + radius, radius));
        Self {
            x,
            slots,
            radius,
            heaven_slot,
            earth_base,
            heaven,
            earths,
            timer: random_timer(rng),
        }
    }

    pub fn heaven_slot(&self) -> usize {
        self.heaven_slot
    }

    pub fn earth_base(&self) -> usize {
        self.earth_base
    }

    /// Frames left before the next move.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn earth_slots(&self) -> [usize; EARTH_BEADS] {
        std::array::from_fn(|i| self.earth_base + i)
    }

    /// Heaven counts 5 when resting at slot 1, each earth bead at
    /// `EARTH_COUNTED_SLOT` counts 1.
    pub fn value(&self) -> u8 {
        let heaven = if self.heaven_slot == 1 { HEAVEN_VALUE } else { 0 };
        let earth = self
            .earth_slots()
            .iter()
            .filter(|&&s| s == EARTH_COUNTED_SLOT)
            .count() as u8;
        heaven + earth
    }

    /// Toggle the heaven bead and shift the earth block by one random step.
    pub fn shift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.heaven_slot = if self.heaven_slot == 0 { 1 } else { 0 };
        self.heaven.set_target(self.slots[self.heaven_slot] + self.radius);

        let dir: isize = if rng.gen_bool(0.5) { 1 } else { -1 };
        let (lo, hi) = EARTH_BASE_RANGE;
        self.earth_base = (self.earth_base as isize + dir).clamp(lo as isize, hi as isize) as usize;
        for (i, bead) in self.earths.iter_mut().enumerate() {
            bead.set_target(self.slots[self.earth_base + i] + self.radius);
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 {
            self.shift(rng);
            self.timer = random_timer(rng);
        }
        self.heaven.update();
        for e in &mut self.earths {
            e.update();
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        self.heaven.draw(painter);
        for e in &self.earths {
            e.draw(painter);
        }
    }
}

fn random_timer<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let (lo, hi) = COLUMN_TIMER_FRAMES;
    rng.gen_range(lo..hi)
}

pub struct Soroban {
    cfg: SorobanConfig,
    size: Vec2,
    stars: StarField,
    columns: Vec<SorobanColumn>,
    ambience: ClipId,
    gate: AudioGate,
    rng: StdRng,
}

impl Soroban {
    pub fn new(cfg: SorobanConfig, size: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = StarField::generate(&mut rng, SOROBAN_STAR_COUNT, size, StarStyle::Plain);
        let spacing = size.x / (cfg.columns + 1) as f32;
        let columns = (0..cfg.columns)
            .map(|i| SorobanColumn::new(spacing * (i + 1) as f32, cfg.slots, cfg.bead_radius, &mut rng))
            .collect();
        let ambience = *AMBIENCE_TRACKS.choose(&mut rng).unwrap_or(&AMBIENCE_TRACKS[0]);
        log::info!("[soroban] ambience for this visit: {}", ambience);
        Self {
            cfg,
            size,
            stars,
            columns,
            ambience,
            gate: AudioGate::default(),
            rng,
        }
    }

    pub fn columns(&self) -> &[SorobanColumn] {
        &self.columns
    }

    pub fn ambience(&self) -> ClipId {
        self.ambience
    }

    pub fn gate(&self) -> &AudioGate {
        &self.gate
    }

    /// Column values left to right.
    pub fn readout(&self) -> Vec<u8> {
        self.columns.iter().map(SorobanColumn::value).collect()
    }

    fn start_ambience(&self, cues: &mut Vec<AudioCue>) {
        cues.push(AudioCue::ResumeOutput);
        cues.push(AudioCue::Loop {
            clip: self.ambience,
            volume: VOLUME_SOROBAN_AMBIENCE,
        });
    }

    // Any gesture unlocks audio the first time.
    fn arm_on_gesture(&mut self, cues: &mut Vec<AudioCue>) {
        if self.gate.arm() {
            self.start_ambience(cues);
        }
    }
}

impl Sketch for Soroban {
    fn kind(&self) -> SketchKind {
        SketchKind::Soroban
    }

    fn clips(&self) -> &'static [ClipId] {
        CLIPS
    }

    fn update(&mut self, _input: &FrameInput, _cues: &mut Vec<AudioCue>) {
        for c in &mut self.columns {
            c.update(&mut self.rng);
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let outline = Stroke::new(Color::WHITE, 2.0);
        painter.background(Color::BLACK);
        let stars = &self.stars;
        painter.layer("soroban-stars", Blend::Normal, &mut |p: &mut dyn Painter| {
            stars.draw(p);
        });

        let top = self.cfg.slots[0] - 20.0;
        let bottom = self.cfg.slots[SOROBAN_SLOTS - 1] + self.cfg.bead_radius * 2.0 + 20.0;
        let left = self.size.x / (self.cfg.columns + 1) as f32 * 0.5;
        let right = self.size.x - left;
        painter.rect(
            Vec2::new(left, top),
            Vec2::new(right - left, bottom - top),
            None,
            Some(outline),
        );
        painter.line(
            Vec2::new(left, self.cfg.beam_y),
            Vec2::new(right, self.cfg.beam_y),
            outline,
        );

        let rod = Stroke::new(Color::gray(160), 1.0);
        for c in &self.columns {
            painter.line(Vec2::new(c.x, top), Vec2::new(c.x, bottom), rod);
            c.draw(painter);
            painter.text(
                &c.value().to_string(),
                Vec2::new(c.x, bottom + 40.0),
                24.0,
                Color::YELLOW,
                TextAlign::Center,
            );
        }
    }

    fn pointer_pressed(&mut self, _at: Vec2, cues: &mut Vec<AudioCue>) {
        self.arm_on_gesture(cues);
    }

    fn key_pressed(&mut self, key: KeyTrigger, cues: &mut Vec<AudioCue>) {
        self.arm_on_gesture(cues);
        if !self.gate.is_live() {
            return;
        }
        let clip = match key {
            KeyTrigger::Space => SPACE_EFFECT,
            KeyTrigger::Control => CONTROL_EFFECT,
        };
        cues.push(AudioCue::Play {
            clip,
            volume: VOLUME_SOROBAN_EFFECT,
        });
    }

    fn toggle_sound(&mut self, cues: &mut Vec<AudioCue>) -> &'static str {
        match self.gate.toggle() {
            GateTransition::Armed => self.start_ambience(cues),
            GateTransition::Muted => {
                cues.extend([self.ambience, SPACE_EFFECT, CONTROL_EFFECT].map(AudioCue::Stop));
            }
            GateTransition::Unmuted => {
                cues.push(AudioCue::ResumeOutput);
                cues.push(AudioCue::LoopIfIdle {
                    clip: self.ambience,
                    volume: VOLUME_SOROBAN_AMBIENCE,
                });
            }
        }
        log::info!("[soroban] {}", self.gate.label());
        self.gate.label()
    }

    fn sound_label(&self) -> &'static str {
        self.gate.label()
    }
}
