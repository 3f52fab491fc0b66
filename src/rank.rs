use crate::Color;
use derive_more::{Display, Error};
use std::str::FromStr;

#[cfg(test)]
use test_strategy::Arbitrary;

/// A row of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];

    /// Constructs [`Rank`] from its index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn new(i: i8) -> Self {
        Self::ALL[i as usize]
    }

    /// This rank's index in the range `0..=7`.
    #[inline]
    pub fn index(&self) -> i8 {
        *self as i8
    }

    /// The rank where pieces of the given color start out.
    #[inline]
    pub fn back(c: Color) -> Self {
        match c {
            Color::White => Rank::First,
            Color::Black => Rank::Eighth,
        }
    }

    /// The rank on which a man of the given color is crowned.
    #[inline]
    pub fn promotion(c: Color) -> Self {
        Rank::back(!c)
    }

    /// The forward of the two ranks on which pieces of the given color deploy.
    ///
    /// Men standing here are exempt from the band restriction.
    #[inline]
    pub fn origin(c: Color) -> Self {
        match c {
            Color::White => Rank::Second,
            Color::Black => Rank::Seventh,
        }
    }

    /// Returns an iterator over [`Rank`]s, from first to eighth.
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse rank, expected a digit in the range `1..=8`")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn rank_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Rank>>(), size_of::<Rank>());
    }

    #[proptest]
    fn new_constructs_rank_by_index(r: Rank) {
        assert_eq!(Rank::new(r.index()), r);
    }

    #[proptest]
    fn men_are_crowned_on_the_opponents_back_rank(c: Color) {
        assert_eq!(Rank::promotion(c), Rank::back(!c));
        assert_ne!(Rank::promotion(c), Rank::back(c));
    }

    #[proptest]
    fn the_origin_rank_lies_one_step_ahead_of_the_back_rank(c: Color) {
        assert_eq!(
            Rank::origin(c).index() - Rank::back(c).index(),
            crate::Direction::forward(c).ranks()
        );
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_for_strings_of_the_wrong_length(#[strategy("[1-8]{2,}")] s: String) {
        assert_eq!(s.parse::<Rank>(), Err(ParseRankError));
    }
}
