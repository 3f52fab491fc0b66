use derive_more::Display;

#[cfg(test)]
use test_strategy::Arbitrary;

/// The rank of a [`Piece`][`crate::Piece`].
///
/// Every piece starts out as a man and is crowned a sovereign upon reaching
/// the farthest rank.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Role {
    #[display(fmt = "man")]
    Man,
    #[display(fmt = "sovereign")]
    Sovereign,
}

impl Role {
    /// This role's index, `0` for man and `1` for sovereign.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}
