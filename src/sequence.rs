use crate::Move;
use arrayvec::ArrayVec;
use derive_more::{Deref, IntoIterator};
use std::fmt;

/// The maximum number of jumps a single chain can string together.
///
/// A chain captures each hostile piece at most once, and a board with a piece
/// left to move holds at most 63 hostile pieces.
pub const MAX_JUMPS: usize = 63;

/// A chain of jumps played by one piece in a single turn.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref, IntoIterator)]
pub struct Sequence(
    #[deref(forward)]
    #[into_iterator(owned, ref)]
    ArrayVec<Move, MAX_JUMPS>,
);

impl Sequence {
    /// The number of jumps in this chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// If this chain has at least one jump.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the jumps in this chain.
    #[inline]
    pub fn iter(&self) -> <&Self as IntoIterator>::IntoIter {
        self.into_iter()
    }
}

/// Create a [`Sequence`] from an iterator.
///
/// # Panics
/// Panics if the iterator yields more than [`MAX_JUMPS`] moves.
impl FromIterator<Move> for Sequence {
    fn from_iter<I: IntoIterator<Item = Move>>(moves: I) -> Self {
        Sequence(ArrayVec::from_iter(moves))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.first() {
            write!(f, "{}", first.whence())?;

            for m in self.iter() {
                write!(f, "x{}", m.whither())?;
            }
        }

        Ok(())
    }
}
