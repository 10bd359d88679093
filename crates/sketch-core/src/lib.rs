//! Platform-free core of the canvas sketches: entity animation, starfields,
//! the soroban model, and the audio gate/sequence bookkeeping. Drawing goes
//! through [`paint::Painter`] and sound through [`audio::AudioCue`], so
//! everything here runs and tests on the host.

pub mod assets;
pub mod audio;
pub mod constants;
pub mod entity;
pub mod math;
pub mod paint;
pub mod sketch;
pub mod sketches;
pub mod starfield;

pub use audio::{AudioCue, AudioGate, ClipId};
pub use paint::{Blend, Color, Painter, Stroke, TextAlign};
pub use sketch::{build, FrameInput, KeyTrigger, Sketch, SketchKind};
