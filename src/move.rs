use crate::Square;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Characteristics of a [`Move`] in the context of a [`Position`][`crate::Position`].
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct MoveKind: u8 {
        const ANY =         0b001;
        const CAPTURE =     0b010;
        const PROMOTION =   0b100;
    }
}

/// A single step of a piece, either to an empty square or over a hostile piece.
///
/// Captures record the square of the piece jumped over, which is not
/// necessarily adjacent to either endpoint.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
pub struct Move(pub Square, pub Square, pub Option<Square>);

impl Move {
    /// The source [`Square`].
    #[inline]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Square`] of the piece captured, if any.
    #[inline]
    pub fn capture(&self) -> Option<Square> {
        self.2
    }

    /// Whether this move jumps over a hostile piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.2.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.2 {
            Some(_) => write!(f, "{}x{}", self.0, self.1),
            None => write!(f, "{}-{}", self.0, self.1),
        }
    }
}
