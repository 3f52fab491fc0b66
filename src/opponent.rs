use crate::{Build, Game, Move};
use anyhow::Error as Anyhow;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

mod eager;
mod random;
mod voracious;

pub use eager::*;
pub use random::*;
pub use voracious::*;

/// Trait for types that choose the next move of the side to move.
pub trait Choose {
    /// Chooses among the legal moves of the [`Game`], honoring an open
    /// capture chain.
    ///
    /// Returns [`None`] if there is nothing to play.
    fn choose(&mut self, game: &Game) -> Option<Move>;
}

/// A generic built-in opponent.
#[derive(Debug, From)]
pub enum Opponent {
    Eager(Eager),
    Random(Random),
    Voracious(Voracious),
}

impl Choose for Opponent {
    fn choose(&mut self, game: &Game) -> Option<Move> {
        match self {
            Opponent::Eager(o) => o.choose(game),
            Opponent::Random(o) => o.choose(game),
            Opponent::Voracious(o) => o.choose(game),
        }
    }
}

/// Runtime configuration for an [`Opponent`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum OpponentBuilder {
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Eager(),

    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Random(),

    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Voracious(),
}

/// The reason why parsing [`OpponentBuilder`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse the opponent configuration")]
pub struct ParseOpponentError(ron::de::SpannedError);

impl FromStr for OpponentBuilder {
    type Err = ParseOpponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl Build for OpponentBuilder {
    type Output = Opponent;

    fn build(self) -> Result<Self::Output, Anyhow> {
        match self {
            OpponentBuilder::Eager() => Ok(Eager::new().into()),
            OpponentBuilder::Random() => Ok(Random::new().into()),
            OpponentBuilder::Voracious() => Ok(Voracious::new().into()),
        }
    }
}
