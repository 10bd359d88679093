// Host-side tests for the gallery markers, line reveal and page fade.

mod common;

use common::{Op, RecordingPainter};
use glam::Vec2;
use sketch_core::sketches::gallery::{FadeTransition, LineReveal, AMBIENCE, CLICK, SLIDE};
use sketch_core::sketches::Gallery;
use sketch_core::{AudioCue, FrameInput, Sketch};

const SIZE: Vec2 = Vec2::new(1000.0, 800.0);

fn update(g: &mut Gallery, frame: u64, pointer: Option<Vec2>) {
    let input = FrameInput {
        frame,
        dt_sec: 1.0 / 60.0,
        pointer,
    };
    g.update(&input, &mut Vec::new());
}

#[test]
fn markers_sit_at_fractions_of_the_canvas() {
    let g = Gallery::new(SIZE, 1);
    let expected = [
        Vec2::new(200.0, 320.0),
        Vec2::new(400.0, 480.0),
        Vec2::new(600.0, 560.0),
        Vec2::new(750.0, 240.0),
    ];
    assert_eq!(g.markers().len(), expected.len());
    for (m, want) in g.markers().iter().zip(expected) {
        assert!((m.pos - want).abs().max_element() < 1e-3, "{:?} vs {:?}", m.pos, want);
    }
    assert_eq!(g.markers()[0].label, "1.Planetary Soroban");
}

#[test]
fn hovered_marker_grows_toward_four_times_its_border() {
    let mut g = Gallery::new(SIZE, 2);
    let target = g.markers()[1].pos + Vec2::new(10.0, 0.0);
    for f in 1..=100 {
        update(&mut g, f, Some(target));
    }
    let m = &g.markers()[1];
    assert!(m.hovered);
    assert!((m.current_size - 60.0).abs() < 0.1);
    assert!(!g.markers()[0].hovered);
    assert_eq!(g.markers()[0].current_size, 15.0);

    for f in 101..=200 {
        update(&mut g, f, Some(Vec2::ZERO));
    }
    assert!((g.markers()[1].current_size - 15.0).abs() < 0.1);
}

#[test]
fn lines_reveal_segment_by_segment() {
    let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0), Vec2::new(30.0, 0.0)];
    let mut lines = LineReveal::default();
    assert!(lines.visible_segments(&points).is_empty());

    for _ in 0..5 {
        lines.step();
    }
    let visible = lines.visible_segments(&points);
    assert_eq!(visible.len(), 1);
    assert!((visible[0].1.x - 7.5).abs() < 1e-3);

    for _ in 0..30 {
        lines.step();
    }
    assert!(lines.done);
    assert_eq!(
        lines.visible_segments(&points),
        [
            (points[0], points[1]),
            (points[1], points[2]),
            (points[2], points[3])
        ]
    );
}

#[test]
fn fade_only_takes_the_first_target() {
    let mut fade = FadeTransition::default();
    assert_eq!(fade.step(), None);
    fade.start(2);
    fade.start(0);
    let mut steps = 0;
    let target = loop {
        steps += 1;
        if let Some(t) = fade.step() {
            break t;
        }
        assert!(steps < 100);
    };
    assert_eq!(target, 2);
    assert!((33..=35).contains(&steps));
}

#[test]
fn clicking_a_marker_fades_then_navigates() {
    let mut g = Gallery::new(SIZE, 3);
    let mut cues = Vec::new();
    g.pointer_pressed(Vec2::new(200.0, 320.0), &mut cues);
    assert_eq!(
        cues,
        [
            AudioCue::ResumeOutput,
            AudioCue::Play {
                clip: CLICK,
                volume: 0.8
            },
            AudioCue::Play {
                clip: SLIDE,
                volume: 0.8
            },
        ]
    );
    assert!(g.fade().is_active());

    cues.clear();
    g.pointer_pressed(Vec2::new(400.0, 480.0), &mut cues);
    assert!(cues.is_empty(), "clicks during the fade are ignored");

    let mut frames = 0;
    while g.navigation().is_none() {
        frames += 1;
        assert!(frames < 100);
        update(&mut g, frames, None);
    }
    assert_eq!(g.navigation(), Some("trang.html"));
}

#[test]
fn clicking_empty_space_only_clicks() {
    let mut g = Gallery::new(SIZE, 4);
    let mut cues = Vec::new();
    g.pointer_pressed(Vec2::new(5.0, 5.0), &mut cues);
    assert_eq!(cues.len(), 2);
    assert!(!g.fade().is_active());
    update(&mut g, 1, None);
    assert_eq!(g.navigation(), None);
}

#[test]
fn muted_clicks_still_fade_and_navigate() {
    let mut g = Gallery::new(SIZE, 7);
    let mut cues = Vec::new();
    g.pointer_entered(&mut cues);
    assert_eq!(g.toggle_sound(&mut cues), "Sound: Off");

    cues.clear();
    g.pointer_pressed(Vec2::new(5.0, 5.0), &mut cues);
    assert!(cues.is_empty());

    g.pointer_pressed(Vec2::new(600.0, 560.0), &mut cues);
    assert!(cues.is_empty(), "no click or slide while muted: {:?}", cues);
    assert!(g.fade().is_active());

    let mut frames = 0;
    while g.navigation().is_none() {
        frames += 1;
        assert!(frames < 100);
        update(&mut g, frames, None);
    }
}

#[test]
fn ambience_starts_once_on_entry() {
    let mut g = Gallery::new(SIZE, 5);
    let mut cues = Vec::new();
    g.pointer_entered(&mut cues);
    assert!(cues.contains(&AudioCue::Loop {
        clip: AMBIENCE,
        volume: 0.4
    }));
    cues.clear();
    g.pointer_entered(&mut cues);
    assert!(cues.is_empty());

    assert_eq!(g.toggle_sound(&mut cues), "Sound: Off");
    assert!(cues.contains(&AudioCue::Stop(AMBIENCE)));
}

#[test]
fn frame_shows_markers_and_cursor_coordinates() {
    let mut g = Gallery::new(SIZE, 6);
    update(&mut g, 1, Some(Vec2::new(12.4, 30.6)));
    let mut painter = RecordingPainter::default();
    g.draw(&mut painter);
    let texts = painter.texts();
    assert!(texts.contains(&"4.Turburlence"));
    assert!(texts.contains(&"x: 12  y: 31"));
    assert_eq!(painter.count(|op| matches!(op, Op::Point(_))), 2000);
}
