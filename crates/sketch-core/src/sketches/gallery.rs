//! Landing page: a starfield with one marker per sketch. Picking a marker
//! fades the page to black and navigates to that sketch.

use crate::audio::{AudioCue, AudioGate, ClipId, GateTransition};
use crate::constants::*;
use crate::math::lerp;
use crate::paint::{Color, Painter, Stroke, TextAlign};
use crate::sketch::{FrameInput, Sketch, SketchKind};
use crate::starfield::{StarField, StarStyle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const CLICK: ClipId = "blipSelect2.mp3";
pub const SLIDE: ClipId = "slide.mp3";
pub const AMBIENCE: ClipId = "ambience.mp3";
const CLIPS: &[ClipId] = &[CLICK, SLIDE, AMBIENCE];

/// Marker placement (fraction of the canvas), label and destination page.
pub const DESTINATIONS: [([f32; 2], &str, &str); 4] = [
    ([0.2, 0.4], "1.Planetary Soroban", "trang.html"),
    ([0.4, 0.6], "2.Disrupted Saturn", "bach.html"),
    ([0.6, 0.7], "3.The Sun", "khoa.html"),
    ([0.75, 0.3], "4.Turburlence", "tin.html"),
];

const ACCENT: Color = Color::YELLOW;

#[derive(Clone, Debug)]
pub struct Marker {
    pub pos: Vec2,
    pub label: &'static str,
    pub radius: f32,
    pub border_size: f32,
    pub current_size: f32,
    pub hovered: bool,
}

impl Marker {
    pub fn new(pos: Vec2, label: &'static str) -> Self {
        let border_size = MARKER_RADIUS * 3.0;
        Self {
            pos,
            label,
            radius: MARKER_RADIUS,
            border_size,
            current_size: border_size,
            hovered: false,
        }
    }

    pub fn target_size(&self) -> f32 {
        if self.hovered {
            self.border_size * MARKER_HOVER_GROWTH
        } else {
            self.border_size
        }
    }

    pub fn update(&mut self, pointer: Option<Vec2>) {
        self.hovered = pointer
            .map(|p| p.distance(self.pos) < self.radius + MARKER_HOVER_MARGIN)
            .unwrap_or(false);
        self.current_size = lerp(self.current_size, self.target_size(), MARKER_EASE);
    }

    /// Hit test against the animated square border.
    pub fn contains(&self, p: Vec2) -> bool {
        let half = self.current_size / 2.0;
        (p.x - self.pos.x).abs() <= half && (p.y - self.pos.y).abs() <= half
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        let s = self.current_size;
        painter.rect(
            self.pos - Vec2::splat(s / 2.0),
            Vec2::splat(s),
            None,
            Some(Stroke::new(ACCENT, 2.0)),
        );
        painter.circle(self.pos, self.radius, Some(Color::WHITE), None);
        painter.text(
            self.label,
            Vec2::new(self.pos.x + s * 0.7, self.pos.y - s / 2.0 - 20.0),
            18.0,
            ACCENT,
            TextAlign::Center,
        );
    }
}

/// One-shot reveal of the polyline joining consecutive markers.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineReveal {
    pub progress: f32,
    pub done: bool,
}

impl LineReveal {
    pub fn step(&mut self) {
        if self.done {
            return;
        }
        self.progress += LINE_REVEAL_STEP;
        if self.progress > 1.0 {
            self.progress = 1.0;
            self.done = true;
        }
    }

    /// Drawn fraction of segment `i` out of `segments`; may fall outside 0..1.
    pub fn segment_progress(&self, i: usize, segments: usize) -> f32 {
        if self.done {
            1.0
        } else {
            self.progress * segments as f32 - i as f32
        }
    }

    /// Visible part of each segment of the path through `points`.
    pub fn visible_segments(&self, points: &[Vec2]) -> Vec<(Vec2, Vec2)> {
        let segments = points.len().saturating_sub(1);
        (0..segments)
            .filter_map(|i| {
                let (from, to) = (points[i], points[i + 1]);
                let t = self.segment_progress(i, segments);
                if t >= 1.0 {
                    Some((from, to))
                } else if t > 0.0 {
                    Some((from, from.lerp(to, t)))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Fade to black toward a selected destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct FadeTransition {
    pub amount: f32,
    pub target: Option<usize>,
}

impl FadeTransition {
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn start(&mut self, target: usize) {
        if self.target.is_none() {
            self.target = Some(target);
            self.amount = 0.0;
        }
    }

    /// Advance the fade; yields the target once fully black.
    pub fn step(&mut self) -> Option<usize> {
        let target = self.target?;
        self.amount = (self.amount + FADE_STEP).min(1.0);
        (self.amount >= 1.0).then_some(target)
    }
}

pub struct Gallery {
    size: Vec2,
    stars: StarField,
    markers: Vec<Marker>,
    lines: LineReveal,
    fade: FadeTransition,
    gate: AudioGate,
    pointer: Option<Vec2>,
    destination: Option<&'static str>,
}

impl Gallery {
    pub fn new(size: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars =
            StarField::generate(&mut rng, GALLERY_STAR_COUNT, size, StarStyle::CenterWeighted);
        let markers = DESTINATIONS
            .iter()
            .map(|&([fx, fy], label, _)| Marker::new(Vec2::new(size.x * fx, size.y * fy), label))
            .collect();
        Self {
            size,
            stars,
            markers,
            lines: LineReveal::default(),
            fade: FadeTransition::default(),
            gate: AudioGate::default(),
            pointer: None,
            destination: None,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn lines(&self) -> &LineReveal {
        &self.lines
    }

    pub fn fade(&self) -> &FadeTransition {
        &self.fade
    }

    pub fn gate(&self) -> &AudioGate {
        &self.gate
    }

    fn start_ambience(cues: &mut Vec<AudioCue>) {
        cues.push(AudioCue::ResumeOutput);
        cues.push(AudioCue::Loop {
            clip: AMBIENCE,
            volume: VOLUME_GALLERY_AMBIENCE,
        });
    }

    fn draw_cursor_coordinates(&self, painter: &mut dyn Painter) {
        if let Some(p) = self.pointer {
            let label = format!("x: {}  y: {}", p.x.round(), p.y.round());
            painter.text(&label, p + Vec2::new(12.0, 0.0), 12.0, ACCENT, TextAlign::Left);
        }
    }
}

impl Sketch for Gallery {
    fn kind(&self) -> SketchKind {
        SketchKind::Gallery
    }

    fn clips(&self) -> &'static [ClipId] {
        CLIPS
    }

    fn update(&mut self, input: &FrameInput, _cues: &mut Vec<AudioCue>) {
        self.pointer = input.pointer;
        for m in &mut self.markers {
            m.update(input.pointer);
        }
        self.lines.step();
        if let Some(i) = self.fade.step() {
            if self.destination.is_none() {
                self.destination = DESTINATIONS.get(i).map(|(_, _, page)| *page);
            }
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.background(Color::BLACK);
        self.stars.draw(painter);

        let path: Vec<Vec2> = self.markers.iter().map(|m| m.pos).collect();
        let line = Stroke::new(Color::WHITE, 2.0);
        for (from, to) in self.lines.visible_segments(&path) {
            painter.line(from, to, line);
        }
        for m in &self.markers {
            m.draw(painter);
        }
        self.draw_cursor_coordinates(painter);

        if self.fade.is_active() {
            painter.rect(
                Vec2::ZERO,
                self.size,
                Some(Color::BLACK.with_alpha255(self.fade.amount * 255.0)),
                None,
            );
        }
    }

    fn pointer_pressed(&mut self, at: Vec2, cues: &mut Vec<AudioCue>) {
        if self.fade.is_active() {
            return;
        }
        // muting silences the effects, never the navigation
        let audible = !self.gate.muted();
        if audible {
            cues.push(AudioCue::ResumeOutput);
            cues.push(AudioCue::Play {
                clip: CLICK,
                volume: VOLUME_GALLERY_CLICK,
            });
        }
        if let Some(i) = self.markers.iter().position(|m| m.contains(at)) {
            log::info!("Clicked: {}", self.markers[i].label);
            if audible {
                cues.push(AudioCue::Play {
                    clip: SLIDE,
                    volume: VOLUME_GALLERY_SLIDE,
                });
            }
            self.fade.start(i);
        }
    }

    fn pointer_entered(&mut self, cues: &mut Vec<AudioCue>) {
        if self.gate.arm() {
            Self::start_ambience(cues);
        }
    }

    fn toggle_sound(&mut self, cues: &mut Vec<AudioCue>) -> &'static str {
        match self.gate.toggle() {
            GateTransition::Armed => Self::start_ambience(cues),
            GateTransition::Muted => cues.extend(CLIPS.iter().map(|c| AudioCue::Stop(*c))),
            GateTransition::Unmuted => {
                cues.push(AudioCue::ResumeOutput);
                cues.push(AudioCue::LoopIfIdle {
                    clip: AMBIENCE,
                    volume: VOLUME_GALLERY_AMBIENCE,
                });
            }
        }
        self.gate.label()
    }

    fn sound_label(&self) -> &'static str {
        self.gate.label()
    }

    fn navigation(&self) -> Option<&'static str> {
        self.destination
    }
}
