//! Audio intent and gating shared by every sketch.
//!
//! Sketches never talk to an audio device. They push [`AudioCue`]s that the
//! front-end executes against its clip bank, and keep the started/muted
//! bookkeeping in an [`AudioGate`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Clips are addressed by their declared relative path.
pub type ClipId = &'static str;

#[derive(Clone, Debug, PartialEq)]
pub enum AudioCue {
    /// Resume a suspended output device (browser autoplay policy).
    ResumeOutput,
    /// One-shot: stop the clip's handle if it is playing, then play it once.
    /// The front-end reports completion back to the sketch.
    Play { clip: ClipId, volume: f32 },
    /// Restart the clip as a loop.
    Loop { clip: ClipId, volume: f32 },
    /// Start the clip as a loop unless it is already playing.
    LoopIfIdle { clip: ClipId, volume: f32 },
    Stop(ClipId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTransition {
    /// First interaction: output unlocked and playback started.
    Armed,
    Muted,
    Unmuted,
}

/// Started/muted flags of a sketch's audio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AudioGate {
    started: bool,
    muted: bool,
}

impl AudioGate {
    pub fn started(&self) -> bool {
        self.started
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Sound is audible: started and not muted.
    pub fn is_live(&self) -> bool {
        self.started && !self.muted
    }

    /// Arm on first use, otherwise flip the mute flag.
    pub fn toggle(&mut self) -> GateTransition {
        if !self.started {
            self.started = true;
            self.muted = false;
            return GateTransition::Armed;
        }
        self.muted = !self.muted;
        if self.muted {
            GateTransition::Muted
        } else {
            GateTransition::Unmuted
        }
    }

    /// Arm without toggling; returns false when already started.
    pub fn arm(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.muted = false;
        true
    }

    pub fn label(&self) -> &'static str {
        if self.is_live() {
            "Sound: On"
        } else {
            "Sound: Off"
        }
    }
}

/// Restartable, lazily advanced sequence over a clip list. Every step is a
/// uniform pick, so repeats are allowed.
///
/// Each yielded clip becomes `current`; only the completion of `current`
/// advances the sequence, so completions of stopped or replaced clips are
/// ignored.
pub struct ClipSequence {
    clips: &'static [ClipId],
    rng: StdRng,
    current: Option<ClipId>,
}

impl ClipSequence {
    pub fn new(clips: &'static [ClipId], seed: u64) -> Self {
        Self {
            clips,
            rng: StdRng::seed_from_u64(seed),
            current: None,
        }
    }

    pub fn current(&self) -> Option<ClipId> {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    /// Drop whatever was current and yield a fresh first clip.
    pub fn restart(&mut self) -> Option<ClipId> {
        self.current = None;
        self.next()
    }

    /// Feed a completion event; yields the next clip when `clip` was current.
    pub fn on_ended(&mut self, clip: ClipId) -> Option<ClipId> {
        match self.current {
            Some(c) if c == clip => self.next(),
            _ => None,
        }
    }

    /// Stop the sequence, returning the clip that was current.
    pub fn stop(&mut self) -> Option<ClipId> {
        self.current.take()
    }
}

impl Iterator for ClipSequence {
    type Item = ClipId;

    fn next(&mut self) -> Option<ClipId> {
        if self.clips.is_empty() {
            self.current = None;
            return None;
        }
        let idx = self.rng.gen_range(0..self.clips.len());
        self.current = Some(self.clips[idx]);
        self.current
    }
}

/// Timer that fires after a random delay drawn from `range` seconds and
/// reschedules itself after each firing.
#[derive(Clone, Debug)]
pub struct RandomInterval {
    range: (f32, f32),
    remaining_sec: f32,
}

impl RandomInterval {
    pub fn new<R: Rng + ?Sized>(range: (f32, f32), rng: &mut R) -> Self {
        let mut t = Self {
            range,
            remaining_sec: 0.0,
        };
        t.reschedule(rng);
        t
    }

    pub fn remaining_sec(&self) -> f32 {
        self.remaining_sec
    }

    pub fn reschedule<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (lo, hi) = self.range;
        self.remaining_sec = if hi > lo { rng.gen_range(lo..hi) } else { lo };
    }

    /// Advance by `dt_sec`; true when the timer fired during this step.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt_sec: f32, rng: &mut R) -> bool {
        self.remaining_sec -= dt_sec.max(0.0);
        if self.remaining_sec <= 0.0 {
            self.reschedule(rng);
            return true;
        }
        false
    }
}

/// Reports when a boolean condition changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeTrigger {
    prev: bool,
}

impl EdgeTrigger {
    pub fn update(&mut self, now: bool) -> bool {
        let changed = now != self.prev;
        self.prev = now;
        changed
    }
}

/// Generation counter for a single playback voice.
///
/// Every start hands out a new generation; a completion only counts when it
/// carries the generation of the voice that is still playing, so an `ended`
/// event queued for a voice that was since restarted is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoiceGeneration {
    generation: u64,
    playing: bool,
}

impl VoiceGeneration {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// A new voice starts; returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.playing = true;
        self.generation
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Completion of the voice started as `generation`; true when it was
    /// the live voice.
    pub fn finish(&mut self, generation: u64) -> bool {
        if self.playing && generation == self.generation {
            self.playing = false;
            return true;
        }
        false
    }
}
