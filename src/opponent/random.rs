use crate::{Choose, Game, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// An opponent that plays uniformly at random, preferring captures.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// A [`Random`] opponent seeded from the system entropy source.
    pub fn new() -> Self {
        Random {
            rng: StdRng::from_entropy(),
        }
    }

    /// A [`Random`] opponent with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl Choose for Random {
    fn choose(&mut self, game: &Game) -> Option<Move> {
        let moves = game.legal();
        let captures: Vec<_> = moves.iter().copied().filter(Move::is_capture).collect();

        match captures.choose(&mut self.rng) {
            Some(&m) => Some(m),
            None => moves.choose(&mut self.rng).copied(),
        }
    }
}
