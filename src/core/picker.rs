use rand::Rng;

use super::config::{MAX_TARGET, MIN_TARGET};

/// Draw a target uniformly from `MIN_TARGET..=MAX_TARGET`, advancing `rng`.
pub fn pick_target<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(MIN_TARGET..=MAX_TARGET)
}
