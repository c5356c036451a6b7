/// Smallest number the game will ever pick.
pub const MIN_TARGET: u8 = 1;
/// Largest number the game will ever pick.
pub const MAX_TARGET: u8 = 100;

/// Upper bound on attempts a bisecting player needs to cover the range.
pub const MAX_AI_ATTEMPTS: u32 = 7;

/// Whether `value` lies inside the playable range.
pub fn in_range(value: i64) -> bool {
    (MIN_TARGET as i64..=MAX_TARGET as i64).contains(&value)
}
