use crate::{Choose, Game, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// An opponent that plays the capture opening the longest chain.
///
/// Quiet moves are chosen uniformly at random.
#[derive(Debug, Clone)]
pub struct Voracious {
    rng: StdRng,
}

impl Voracious {
    /// A [`Voracious`] opponent seeded from the system entropy source.
    pub fn new() -> Self {
        Voracious {
            rng: StdRng::from_entropy(),
        }
    }

    /// A [`Voracious`] opponent with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Voracious {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Voracious {
    fn default() -> Self {
        Voracious::new()
    }
}

impl Choose for Voracious {
    fn choose(&mut self, game: &Game) -> Option<Move> {
        let moves = game.legal();

        let best = moves
            .iter()
            .filter(|m| m.is_capture())
            .max_by_key(|&&m| game.position().prospect(m));

        match best {
            Some(&m) => Some(m),
            None => moves.choose(&mut self.rng).copied(),
        }
    }
}
