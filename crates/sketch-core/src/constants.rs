// Shared tuning constants for the sketches.

// Canvas sizes
pub const WIDE_CANVAS: (f32, f32) = (1920.0, 1080.0);
pub const RINGS_CANVAS: (f32, f32) = (1900.0, 1080.0);

// Alpha is tracked on the 0..=255 scale
pub const ALPHA_MAX: f32 = 255.0;

// Starfields
pub const GALLERY_STAR_COUNT: usize = 2000;
pub const RINGS_STAR_COUNT: usize = 2000;
pub const SUN_STAR_COUNT: usize = 1000;
pub const TURBULENCE_STAR_COUNT: usize = 2000;
pub const SOROBAN_STAR_COUNT: usize = 1200;
pub const STAR_BRIGHTNESS_NEAR: f32 = 255.0; // at the canvas centre
pub const STAR_BRIGHTNESS_FAR: f32 = 80.0; // at the corners
pub const STAR_SIZE_NEAR: f32 = 2.2;
pub const STAR_SIZE_FAR: f32 = 0.5;
pub const STAR_BRIGHTNESS_JITTER: (f32, f32) = (0.6, 1.1);
pub const STAR_SIZE_JITTER: (f32, f32) = (0.6, 1.3);
pub const PLAIN_STAR_SIZE: f32 = 2.0;

// Gallery
pub const MARKER_RADIUS: f32 = 5.0;
pub const MARKER_HOVER_MARGIN: f32 = 20.0;
pub const MARKER_HOVER_GROWTH: f32 = 4.0;
pub const MARKER_EASE: f32 = 0.1;
pub const LINE_REVEAL_STEP: f32 = 0.05;
pub const FADE_STEP: f32 = 0.03;

// Rings
pub const RING_FADE_SPEED: f32 = 2.0;
pub const RING_ANGLE_STEP: f32 = 0.005;
pub const RING_FIRST_SPAWN_FRAME: u64 = 10;
pub const RING_BATCH_MIN: usize = 3;
pub const RING_BATCH_EXTRA: usize = 20; // batch = MIN + [0, EXTRA)
pub const PLANET_CENTER: (f32, f32) = (950.0, 540.0);
pub const PLANET_DIAMETER: f32 = 500.0;

// Sun
pub const SUN_RAYS_MIN: usize = 80;
pub const SUN_RAYS_MAX: usize = 150; // exclusive
pub const SUN_ROTATION_STEP: (f32, f32) = (0.0001, 0.0005);
pub const SUN_INNER_RADIUS: f32 = 260.0;
pub const SUN_RAY_LENGTH: f32 = 750.0;
pub const SUN_DISC_DIAMETER: f32 = 505.0;
pub const SUN_BACKGROUND: u8 = 20;

// Turbulence
pub const BOUNDARY_DIAMETER: f32 = 750.0;
pub const CENTER_MARGIN: f32 = 200.0; // centre stays within BOUNDARY/2 - MARGIN
pub const NOISE_STEP: f64 = 0.02;
pub const CENTER_SPEED_SCALE: f32 = 15.0;
pub const TRAIL_WASH_ALPHA: f32 = 40.0;
pub const ORBITERS_MIN: usize = 17;
pub const ORBITERS_MAX: usize = 20; // exclusive
pub const TRAIL_MIN: usize = 7;
pub const TRAIL_MAX: usize = 10; // exclusive
pub const BREATHE_INTERVAL_SEC: (f32, f32) = (5.0, 10.0);
pub const JUMPSCARE_INTERVAL_SEC: (f32, f32) = (120.0, 180.0);

// Soroban
pub const SOROBAN_COLUMNS: usize = 7;
pub const SOROBAN_SLOTS: usize = 8;
pub const EARTH_BEADS: usize = 4;
pub const EARTH_BASE_RANGE: (usize, usize) = (3, 4);
pub const EARTH_COUNTED_SLOT: usize = 3;
pub const HEAVEN_VALUE: u8 = 5;
pub const BEAD_RADIUS: f32 = 36.0;
pub const BEAD_EASE: f32 = 0.1;
pub const COLUMN_TIMER_FRAMES: (u32, u32) = (240, 420);

// Volumes
pub const VOLUME_GALLERY_CLICK: f32 = 0.8;
pub const VOLUME_GALLERY_SLIDE: f32 = 0.8;
pub const VOLUME_GALLERY_AMBIENCE: f32 = 0.4;
pub const VOLUME_RINGS: f32 = 1.0;
pub const VOLUME_AMBIENT: f32 = 0.4;
pub const VOLUME_TONE: f32 = 0.8;
pub const VOLUME_SLIDE: f32 = 1.0;
pub const VOLUME_BLIP: f32 = 0.6;
pub const VOLUME_BREATHE: f32 = 0.2;
pub const VOLUME_JUMPSCARE: f32 = 0.9;
pub const VOLUME_SOROBAN_AMBIENCE: f32 = 0.5;
pub const VOLUME_SOROBAN_EFFECT: f32 = 0.8;
