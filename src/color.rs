use derive_more::{Display, Error};
use std::ops::Not;
use std::str::FromStr;

#[cfg(test)]
use test_strategy::Arbitrary;

/// The color of a [`Piece`][`crate::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// This color's index, `0` for white and `1` for black.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse color, expected either `white` or `black`")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(ParseColorError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
    }

    #[proptest]
    fn color_is_ordered_by_index(a: Color, b: Color) {
        assert_eq!(a < b, a.index() < b.index());
    }

    #[proptest]
    fn parsing_printed_color_is_an_identity(c: Color) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[proptest]
    fn parsing_color_fails_for_anything_else(#[filter(!["white", "black"].contains(&#s.as_str()))] s: String) {
        assert_eq!(s.parse::<Color>(), Err(ParseColorError));
    }
}
