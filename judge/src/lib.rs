mod game;
mod human;
mod spectator;
pub use game::*;
pub use human::*;
pub use spectator::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// How many illegal moves in a row a player may submit before forfeiting.
pub const DEFAULT_MAX_ILLEGAL_ATTEMPTS: usize = 10;

pub struct Config {
    pub rng: StdRng,
    pub max_illegal_attempts: usize,
}

impl Config {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_illegal_attempts: DEFAULT_MAX_ILLEGAL_ATTEMPTS,
        }
    }
}
