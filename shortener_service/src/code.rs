use rand::distr::Alphanumeric;
use rand::{Rng, rng};

pub const SHORT_CODE_LENGTH: usize = 6;

/// Random `[a-zA-Z0-9]` code of `length` characters. Collisions are possible.
pub fn generate_short_code(length: usize) -> String {
    rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
