use crate::audio::{AudioCue, ClipId};
use crate::constants::{RINGS_CANVAS, WIDE_CANVAS};
use crate::paint::Painter;
use crate::sketches::{Gallery, Rings, Soroban, Sun, Turbulence};
use glam::Vec2;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Per-frame data handed to [`Sketch::update`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// 1-based frame counter.
    pub frame: u64,
    pub dt_sec: f32,
    /// Pointer position in canvas pixels, `None` until the pointer was seen.
    pub pointer: Option<Vec2>,
}

/// Discrete keys mapped to sound effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyTrigger {
    Space,
    Control,
}

impl KeyTrigger {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(KeyTrigger::Space),
            "Control" => Some(KeyTrigger::Control),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchKind {
    Gallery,
    Rings,
    Sun,
    Turbulence,
    Soroban,
}

impl SketchKind {
    pub const ALL: [SketchKind; 5] = [
        SketchKind::Gallery,
        SketchKind::Rings,
        SketchKind::Sun,
        SketchKind::Turbulence,
        SketchKind::Soroban,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SketchKind::Gallery => "gallery",
            SketchKind::Rings => "rings",
            SketchKind::Sun => "sun",
            SketchKind::Turbulence => "turbulence",
            SketchKind::Soroban => "soroban",
        }
    }

    /// Fixed canvas size, or `None` when the canvas follows the window.
    pub fn canvas_size(&self) -> Option<Vec2> {
        let (w, h) = match self {
            SketchKind::Gallery => return None,
            SketchKind::Rings => RINGS_CANVAS,
            SketchKind::Sun | SketchKind::Turbulence | SketchKind::Soroban => WIDE_CANVAS,
        };
        Some(Vec2::new(w, h))
    }
}

impl fmt::Display for SketchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown sketch '{0}'")]
pub struct UnknownSketch(pub String);

impl FromStr for SketchKind {
    type Err = UnknownSketch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SketchKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSketch(s.to_string()))
    }
}

/// One self-contained animated page.
///
/// The frame driver calls `update` then `draw` once per animation frame and
/// forwards input and clip completions in between. Audio side effects are
/// pushed onto `cues` and executed by the front-end in order.
pub trait Sketch {
    fn kind(&self) -> SketchKind;

    /// Clips this sketch may cue; the front-end preloads all of them.
    fn clips(&self) -> &'static [ClipId];

    fn update(&mut self, input: &FrameInput, cues: &mut Vec<AudioCue>);

    fn draw(&self, painter: &mut dyn Painter);

    fn pointer_pressed(&mut self, _at: Vec2, _cues: &mut Vec<AudioCue>) {}

    /// Pointer entered the document.
    fn pointer_entered(&mut self, _cues: &mut Vec<AudioCue>) {}

    fn key_pressed(&mut self, _key: KeyTrigger, _cues: &mut Vec<AudioCue>) {}

    /// A one-shot cued with [`AudioCue::Play`] finished on its own.
    fn clip_ended(&mut self, _clip: ClipId, _cues: &mut Vec<AudioCue>) {}

    /// External sound button; returns the new button label.
    fn toggle_sound(&mut self, cues: &mut Vec<AudioCue>) -> &'static str;

    /// Label for the sound button matching the current audio state. Input
    /// handlers may arm or mute audio too, so the front-end refreshes the
    /// button after every gesture.
    fn sound_label(&self) -> &'static str;

    /// Url to navigate to, once the sketch asks to leave the page.
    fn navigation(&self) -> Option<&'static str> {
        None
    }
}

/// Construct the sketch for `kind` on a canvas of `size` pixels.
pub fn build(kind: SketchKind, size: Vec2, seed: u64) -> Box<dyn Sketch> {
    match kind {
        SketchKind::Gallery => Box::new(Gallery::new(size, seed)),
        SketchKind::Rings => Box::new(Rings::new(Default::default(), size, seed)),
        SketchKind::Sun => Box::new(Sun::new(size, seed)),
        SketchKind::Turbulence => Box::new(Turbulence::new(size, seed)),
        SketchKind::Soroban => Box::new(Soroban::new(Default::default(), size, seed)),
    }
}
