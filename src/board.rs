use crate::{Color, File, Piece, Rank, Square};
use std::fmt;
use std::ops::Index;

/// The 8x8 grid of squares and the pieces standing on them.
///
/// This is pure data: whose turn it is, chain state, and rule enforcement all
/// live elsewhere.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces on it.
    #[inline]
    pub fn empty() -> Self {
        Board { squares: [None; 64] }
    }

    /// Places a piece on an empty square.
    #[inline]
    pub fn place(&mut self, p: Piece, sq: Square) {
        debug_assert!(self[sq].is_none());
        self.squares[sq.index() as usize] = Some(p);
    }

    /// Removes and returns the piece on a square, if any.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// An iterator over all pieces on the board.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(move |sq| self[sq].map(|p| (p, sq)))
    }

    /// An iterator over the pieces of one color.
    #[inline]
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Piece, Square)> + '_ {
        self.iter().filter(move |(p, _)| p.color() == c)
    }

    /// The number of pieces of one color.
    #[inline]
    pub fn count(&self, c: Color) -> usize {
        self.pieces(c).count()
    }
}

/// The initial deployment: two full ranks of men nearest each owner.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for rank in [Rank::First, Rank::Second] {
            for file in File::iter() {
                board.place(Piece::WhiteMan, Square::new(file, rank));
            }
        }

        for rank in [Rank::Seventh, Rank::Eighth] {
            for file in File::iter() {
                board.place(Piece::BlackMan, Square::new(file, rank));
            }
        }

        board
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.index() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{} ", rank)?;

            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    Some(p) => write!(f, " {}", p)?,
                    None => f.write_str(" .")?,
                }
            }

            f.write_str("\n")?;
        }

        f.write_str("  ")?;

        for file in File::iter() {
            write!(f, " {}", file)?;
        }

        Ok(())
    }
}
