// Host-side tests for starfield generation and the range helpers.

mod common;

use common::{Op, RecordingPainter};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sketch_core::math::{lerp, map_range};
use sketch_core::starfield::{StarField, StarStyle};

#[test]
fn generates_exact_count_inside_the_canvas() {
    let size = Vec2::new(1920.0, 1080.0);
    let mut rng = StdRng::seed_from_u64(11);
    for count in [0, 1, 1000, 2000] {
        let field = StarField::generate(&mut rng, count, size, StarStyle::Plain);
        assert_eq!(field.len(), count);
        for s in &field.stars {
            assert!(s.pos.x >= 0.0 && s.pos.x < size.x);
            assert!(s.pos.y >= 0.0 && s.pos.y < size.y);
        }
    }
}

#[test]
fn same_seed_same_sky() {
    let size = Vec2::new(640.0, 480.0);
    let a = StarField::generate(&mut StdRng::seed_from_u64(1), 50, size, StarStyle::CenterWeighted);
    let b = StarField::generate(&mut StdRng::seed_from_u64(1), 50, size, StarStyle::CenterWeighted);
    for (x, y) in a.stars.iter().zip(&b.stars) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.brightness, y.brightness);
    }
}

#[test]
fn centre_weighted_stars_stay_in_jitter_bounds() {
    let size = Vec2::new(1920.0, 1080.0);
    let field =
        StarField::generate(&mut StdRng::seed_from_u64(2), 2000, size, StarStyle::CenterWeighted);
    for s in &field.stars {
        assert!(s.brightness >= 80.0 * 0.6 - 1e-3, "{}", s.brightness);
        assert!(s.brightness <= 255.0 * 1.1 + 1e-3, "{}", s.brightness);
        assert!(s.size >= 0.5 * 0.6 - 1e-4 && s.size <= 2.2 * 1.3 + 1e-4);
    }
}

#[test]
fn stars_near_the_centre_are_brighter_on_average() {
    let size = Vec2::new(1920.0, 1080.0);
    let field =
        StarField::generate(&mut StdRng::seed_from_u64(3), 2000, size, StarStyle::CenterWeighted);
    let center = size * 0.5;
    let (near, far): (Vec<_>, Vec<_>) = field
        .stars
        .iter()
        .partition(|s| s.pos.distance(center) < 300.0);
    let mean = |v: &[&sketch_core::starfield::Star]| {
        v.iter().map(|s| s.brightness).sum::<f32>() / v.len().max(1) as f32
    };
    assert!(mean(&near) > mean(&far));
}

#[test]
fn every_star_is_drawn_as_a_point() {
    let size = Vec2::new(300.0, 200.0);
    let field = StarField::generate(&mut StdRng::seed_from_u64(4), 120, size, StarStyle::Plain);
    let mut painter = RecordingPainter::default();
    field.draw(&mut painter);
    assert_eq!(painter.count(|op| matches!(op, Op::Point(_))), 120);
}

#[test]
fn map_range_is_linear_and_unclamped() {
    assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    assert_eq!(map_range(0.0, 0.0, 10.0, 255.0, 80.0), 255.0);
    assert_eq!(map_range(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
    assert_eq!(map_range(3.0, 1.0, 1.0, 7.0, 9.0), 7.0);
}

#[test]
fn lerp_moves_a_fraction_of_the_way() {
    assert_eq!(lerp(0.0, 10.0, 0.1), 1.0);
    assert_eq!(lerp(4.0, 4.0, 0.5), 4.0);
}
