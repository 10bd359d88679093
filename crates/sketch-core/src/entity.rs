/// A visual element with a per-frame update and a liveness check.
pub trait Entity {
    fn update(&mut self);
    fn is_dead(&self) -> bool;
}

/// Update every entity once, then drop the ones that died.
///
/// Returns how many entities were removed.
pub fn advance_all<E: Entity>(entities: &mut Vec<E>) -> usize {
    for e in entities.iter_mut() {
        e.update();
    }
    let before = entities.len();
    entities.retain(|e| !e.is_dead());
    before - entities.len()
}

/// Number of updates a fade from full alpha needs to reach zero.
#[inline]
pub fn frames_to_fade(alpha: f32, fade_speed: f32) -> u32 {
    if fade_speed <= 0.0 {
        return u32::MAX;
    }
    (alpha / fade_speed).ceil() as u32
}
