use crate::constants::*;
use crate::math::map_range;
use crate::paint::{Color, Painter};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub brightness: f32,
    pub size: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarStyle {
    /// White points of a fixed size.
    Plain,
    /// Brighter and larger near the canvas centre, with random jitter.
    CenterWeighted,
}

/// A fixed list of stars generated once at setup.
#[derive(Clone, Debug)]
pub struct StarField {
    pub stars: Vec<Star>,
    pub style: StarStyle,
}

impl StarField {
    /// Scatter exactly `count` stars uniformly over `[0, size)`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, size: Vec2, style: StarStyle) -> Self {
        let center = size * 0.5;
        let max_distance = center.length();
        let stars = (0..count)
            .map(|_| {
                let pos = Vec2::new(random_below(rng, size.x), random_below(rng, size.y));
                match style {
                    StarStyle::Plain => Star {
                        pos,
                        brightness: 255.0,
                        size: PLAIN_STAR_SIZE,
                    },
                    StarStyle::CenterWeighted => {
                        let d = pos.distance(center);
                        let brightness =
                            map_range(d, 0.0, max_distance, STAR_BRIGHTNESS_NEAR, STAR_BRIGHTNESS_FAR);
                        let star_size = map_range(d, 0.0, max_distance, STAR_SIZE_NEAR, STAR_SIZE_FAR);
                        let (b_lo, b_hi) = STAR_BRIGHTNESS_JITTER;
                        let (s_lo, s_hi) = STAR_SIZE_JITTER;
                        Star {
                            pos,
                            brightness: brightness * rng.gen_range(b_lo..b_hi),
                            size: star_size * rng.gen_range(s_lo..s_hi),
                        }
                    }
                }
            })
            .collect();
        Self { stars, style }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        for s in &self.stars {
            painter.point(s.pos, s.size, Color::brightness(s.brightness));
        }
    }
}

// `gen_range` panics on an empty range
#[inline]
fn random_below<R: Rng + ?Sized>(rng: &mut R, hi: f32) -> f32 {
    if hi > 0.0 {
        rng.gen_range(0.0..hi)
    } else {
        0.0
    }
}
