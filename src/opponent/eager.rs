use crate::{Choose, Game, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// An opponent that plays the first capture it finds.
///
/// Quiet moves are chosen uniformly at random.
#[derive(Debug, Clone)]
pub struct Eager {
    rng: StdRng,
}

impl Eager {
    /// An [`Eager`] opponent seeded from the system entropy source.
    pub fn new() -> Self {
        Eager {
            rng: StdRng::from_entropy(),
        }
    }

    /// An [`Eager`] opponent with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Eager {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Eager {
    fn default() -> Self {
        Eager::new()
    }
}

impl Choose for Eager {
    fn choose(&mut self, game: &Game) -> Option<Move> {
        let moves = game.legal();

        match moves.iter().find(|m| m.is_capture()) {
            Some(&m) => Some(m),
            None => moves.choose(&mut self.rng).copied(),
        }
    }
}
