// Host-side tests for audio gating, clip sequencing and timers.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sketch_core::audio::{
    AudioGate, ClipId, ClipSequence, EdgeTrigger, GateTransition, RandomInterval, VoiceGeneration,
};

const TRACKS: &[ClipId] = &["a.mp3", "b.mp3", "c.mp3"];

#[test]
fn gate_arms_then_flips_mute() {
    let mut gate = AudioGate::default();
    assert!(!gate.started());
    assert!(!gate.is_live());
    assert_eq!(gate.label(), "Sound: Off");

    assert_eq!(gate.toggle(), GateTransition::Armed);
    assert!(gate.is_live());
    assert_eq!(gate.label(), "Sound: On");

    assert_eq!(gate.toggle(), GateTransition::Muted);
    assert!(gate.started() && gate.muted());
    assert_eq!(gate.label(), "Sound: Off");

    assert_eq!(gate.toggle(), GateTransition::Unmuted);
    assert_eq!(gate.label(), "Sound: On");
}

#[test]
fn toggling_twice_after_start_restores_state() {
    let mut gate = AudioGate::default();
    gate.toggle();
    let before = gate;
    gate.toggle();
    gate.toggle();
    assert_eq!(gate, before);
}

#[test]
fn arm_only_succeeds_once() {
    let mut gate = AudioGate::default();
    assert!(gate.arm());
    assert!(!gate.arm());
    assert_eq!(gate.toggle(), GateTransition::Muted);
    assert!(!gate.arm(), "arming never unmutes");
    assert!(!gate.is_live());
}

#[test]
fn sequence_follows_completions_of_the_current_clip() {
    let mut seq = ClipSequence::new(TRACKS, 1);
    assert!(!seq.is_running());
    let first = seq.restart().unwrap();
    assert!(TRACKS.contains(&first));
    assert_eq!(seq.current(), Some(first));

    let second = seq.on_ended(first).unwrap();
    assert!(TRACKS.contains(&second));
    assert_eq!(seq.current(), Some(second));
}

#[test]
fn stale_completions_do_not_advance() {
    let mut seq = ClipSequence::new(TRACKS, 1);
    let first = seq.restart().unwrap();
    let other = TRACKS.iter().copied().find(|c| *c != first).unwrap();
    assert_eq!(seq.on_ended(other), None);
    assert_eq!(seq.current(), Some(first));

    assert_eq!(seq.stop(), Some(first));
    assert_eq!(seq.on_ended(first), None, "stopped sequence stays idle");
    assert!(!seq.is_running());
}

#[test]
fn sequence_only_yields_listed_clips() {
    let seq = ClipSequence::new(TRACKS, 99);
    for clip in seq.take(50) {
        assert!(TRACKS.contains(&clip));
    }
}

#[test]
fn empty_sequence_yields_nothing() {
    let mut seq = ClipSequence::new(&[], 0);
    assert_eq!(seq.restart(), None);
    assert!(!seq.is_running());
}

#[test]
fn restarted_voice_ignores_the_earlier_completion() {
    let mut voice = VoiceGeneration::default();
    assert!(!voice.is_playing());
    let first = voice.begin();
    let second = voice.begin();
    assert_ne!(first, second);

    assert!(!voice.finish(first), "completion of the replaced voice");
    assert!(voice.is_playing());
    assert!(voice.finish(second));
    assert!(!voice.is_playing());
    assert!(!voice.finish(second), "a voice finishes once");
}

#[test]
fn stopped_voice_reports_no_completion() {
    let mut voice = VoiceGeneration::default();
    let generation = voice.begin();
    voice.stop();
    assert!(!voice.is_playing());
    assert!(!voice.finish(generation));
}

#[test]
fn random_interval_fires_and_reschedules() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut t = RandomInterval::new((5.0, 10.0), &mut rng);
    let first = t.remaining_sec();
    assert!((5.0..10.0).contains(&first));

    assert!(!t.tick(first - 0.5, &mut rng));
    assert!(t.tick(1.0, &mut rng));
    assert!((5.0..10.0).contains(&t.remaining_sec()));
}

#[test]
fn random_interval_with_empty_range_uses_lower_bound() {
    let mut rng = StdRng::seed_from_u64(5);
    let t = RandomInterval::new((3.0, 3.0), &mut rng);
    assert_eq!(t.remaining_sec(), 3.0);
}

#[test]
fn edge_trigger_reports_changes_only() {
    let mut edge = EdgeTrigger::default();
    assert!(!edge.update(false));
    assert!(edge.update(true));
    assert!(!edge.update(true));
    assert!(edge.update(false));
    assert!(!edge.update(false));
}
