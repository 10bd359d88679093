// Host-side tests for the soroban columns and their readout.

mod common;

use common::RecordingPainter;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sketch_core::sketches::soroban::{
    Bead, SorobanColumn, AMBIENCE_TRACKS, CONTROL_EFFECT, SPACE_EFFECT,
};
use sketch_core::sketches::{Soroban, SorobanConfig};
use sketch_core::{AudioCue, FrameInput, KeyTrigger, Sketch};

fn soroban(seed: u64) -> Soroban {
    Soroban::new(SorobanConfig::default(), Vec2::new(1920.0, 1080.0), seed)
}

fn expected_value(col: &SorobanColumn) -> u8 {
    let heaven = if col.heaven_slot() == 1 { 5 } else { 0 };
    heaven + col.earth_slots().iter().filter(|&&s| s == 3).count() as u8
}

#[test]
fn columns_start_at_zero() {
    let s = soroban(1);
    assert_eq!(s.columns().len(), 7);
    assert!(s.readout().iter().all(|&v| v == 0));
}

#[test]
fn readout_matches_bead_slots_while_running() {
    let mut s = soroban(2);
    let input = FrameInput::default();
    for _ in 0..3000 {
        s.update(&input, &mut Vec::new());
        for (col, value) in s.columns().iter().zip(s.readout()) {
            assert!(value <= 9);
            assert_eq!(value, expected_value(col));
            assert!((3..=4).contains(&col.earth_base()));
            assert!(col.heaven_slot() <= 1);
        }
    }
}

#[test]
fn shift_toggles_heaven_and_moves_earth_by_one() {
    let cfg = SorobanConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut col = SorobanColumn::new(100.0, cfg.slots, cfg.bead_radius, &mut rng);
    for _ in 0..50 {
        let (heaven, base) = (col.heaven_slot(), col.earth_base());
        col.shift(&mut rng);
        assert_ne!(col.heaven_slot(), heaven);
        assert!(col.earth_base().abs_diff(base) <= 1);
        assert_eq!(col.value(), expected_value(&col));
    }
}

#[test]
fn column_timer_stays_in_range() {
    let cfg = SorobanConfig::default();
    let mut rng = StdRng::seed_from_u64(4);
    let mut col = SorobanColumn::new(100.0, cfg.slots, cfg.bead_radius, &mut rng);
    assert!((240..420).contains(&col.timer()));
    let mut moves = 0;
    for _ in 0..2000 {
        let before = col.heaven_slot();
        col.update(&mut rng);
        if col.heaven_slot() != before {
            moves += 1;
        }
        assert!(col.timer() < 420);
    }
    assert!((4..=9).contains(&moves), "moves: {}", moves);
}

#[test]
fn beads_ease_onto_their_targets() {
    let mut bead = Bead::new(0.0, 0.0, 36.0);
    bead.set_target(100.0);
    bead.update();
    assert!((bead.pos.y - 10.0).abs() < 1e-4);
    for _ in 0..200 {
        bead.update();
    }
    assert!((bead.pos.y - 100.0).abs() < 0.5);
}

#[test]
fn ambience_is_one_of_the_tracks() {
    for seed in 0..10 {
        assert!(AMBIENCE_TRACKS.contains(&soroban(seed).ambience()));
    }
}

#[test]
fn first_key_arms_audio_and_plays_the_effect() {
    let mut s = soroban(5);
    let mut cues = Vec::new();
    s.key_pressed(KeyTrigger::Space, &mut cues);
    assert_eq!(
        cues,
        [
            AudioCue::ResumeOutput,
            AudioCue::Loop {
                clip: s.ambience(),
                volume: 0.5
            },
            AudioCue::Play {
                clip: SPACE_EFFECT,
                volume: 0.8
            },
        ]
    );

    cues.clear();
    s.key_pressed(KeyTrigger::Control, &mut cues);
    assert_eq!(
        cues,
        [AudioCue::Play {
            clip: CONTROL_EFFECT,
            volume: 0.8
        }]
    );
}

#[test]
fn muted_soroban_ignores_keys_until_unmuted() {
    let mut s = soroban(6);
    s.pointer_pressed(Vec2::ZERO, &mut Vec::new());
    assert!(s.gate().is_live());

    let mut cues = Vec::new();
    assert_eq!(s.toggle_sound(&mut cues), "Sound: Off");
    assert!(cues.contains(&AudioCue::Stop(s.ambience())));

    cues.clear();
    s.key_pressed(KeyTrigger::Space, &mut cues);
    s.pointer_pressed(Vec2::ZERO, &mut cues);
    assert!(cues.is_empty());

    assert_eq!(s.toggle_sound(&mut cues), "Sound: On");
    assert!(cues.contains(&AudioCue::LoopIfIdle {
        clip: s.ambience(),
        volume: 0.5
    }));
}

#[test]
fn readout_is_drawn_under_each_column() {
    let s = soroban(7);
    let mut painter = RecordingPainter::default();
    s.draw(&mut painter);
    assert_eq!(painter.texts(), vec!["0"; 7]);
    assert_eq!(painter.built_layers, ["soroban-stars"]);
}

#[test]
fn first_gesture_turns_the_sound_label_on() {
    let mut by_key = soroban(20);
    assert_eq!(by_key.sound_label(), "Sound: Off");
    by_key.key_pressed(KeyTrigger::Control, &mut Vec::new());
    assert_eq!(by_key.sound_label(), "Sound: On");

    let mut by_press = soroban(21);
    by_press.pointer_pressed(Vec2::new(10.0, 10.0), &mut Vec::new());
    assert_eq!(by_press.sound_label(), "Sound: On");
    by_press.toggle_sound(&mut Vec::new());
    by_press.pointer_pressed(Vec2::new(10.0, 10.0), &mut Vec::new());
    assert_eq!(by_press.sound_label(), "Sound: Off", "later gestures never unmute");
}
