use crate::{Color, Role};
use derive_more::Display;

#[cfg(test)]
use test_strategy::Arbitrary;

/// A piece of a certain [`Role`] and [`Color`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[repr(u8)]
pub enum Piece {
    #[display(fmt = "⛀")]
    WhiteMan,
    #[display(fmt = "⛂")]
    BlackMan,
    #[display(fmt = "⛁")]
    WhiteSovereign,
    #[display(fmt = "⛃")]
    BlackSovereign,
}

impl Piece {
    const ALL: [Piece; 4] = [
        Piece::WhiteMan,
        Piece::BlackMan,
        Piece::WhiteSovereign,
        Piece::BlackSovereign,
    ];

    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    #[inline]
    pub fn new(r: Role, c: Color) -> Self {
        Self::ALL[r.index() * 2 + c.index()]
    }

    /// This piece's [`Role`].
    #[inline]
    pub fn role(&self) -> Role {
        match *self as u8 / 2 {
            0 => Role::Man,
            _ => Role::Sovereign,
        }
    }

    /// This piece's [`Color`].
    #[inline]
    pub fn color(&self) -> Color {
        match *self as u8 % 2 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// This piece once crowned.
    ///
    /// Crowning a sovereign has no effect.
    #[inline]
    pub fn promote(&self) -> Self {
        Piece::new(Role::Sovereign, self.color())
    }
}
