use crate::Color;
use derive_more::{Constructor, Display};

#[cfg(test)]
use test_strategy::Arbitrary;

/// The reason why a game ended.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Reason {
    /// The loser has no pieces left.
    #[display(fmt = "annihilation")]
    Annihilation,

    /// The loser still has pieces, but none of them can move.
    #[display(fmt = "blockade")]
    Blockade,
}

/// The outcome of a finished game.
///
/// There are no draws: one side always wins.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(Arbitrary))]
#[display(fmt = "the {} player wins by {}", _0, _1)]
pub struct Outcome(Color, Reason);

impl Outcome {
    /// The [`Color`] of the winning player.
    #[inline]
    pub fn winner(&self) -> Color {
        self.0
    }

    /// Why the game ended.
    #[inline]
    pub fn reason(&self) -> Reason {
        self.1
    }
}
