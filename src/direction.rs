use crate::{Color, Square};

#[cfg(test)]
use test_strategy::Arbitrary;

/// One of the eight directions a piece can travel in.
///
/// North points towards the eighth rank, so it is the forward direction for
/// white and the backward direction for black.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    const WHITE_ORTHOGONAL: [Direction; 3] = [Direction::North, Direction::East, Direction::West];
    const BLACK_ORTHOGONAL: [Direction; 3] = [Direction::South, Direction::East, Direction::West];

    const WHITE_EXTENDED: [Direction; 5] = [
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    const BLACK_EXTENDED: [Direction; 5] = [
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The number of ranks advanced per step.
    #[inline]
    pub fn ranks(&self) -> i8 {
        match self {
            Direction::North | Direction::NorthEast | Direction::NorthWest => 1,
            Direction::East | Direction::West => 0,
            Direction::South | Direction::SouthEast | Direction::SouthWest => -1,
        }
    }

    /// The number of files advanced per step.
    #[inline]
    pub fn files(&self) -> i8 {
        match self {
            Direction::East | Direction::NorthEast | Direction::SouthEast => 1,
            Direction::North | Direction::South => 0,
            Direction::West | Direction::NorthWest | Direction::SouthWest => -1,
        }
    }

    /// The forward direction for the given color.
    #[inline]
    pub fn forward(c: Color) -> Self {
        match c {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }

    /// Whether this direction advances rank and file at once.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.ranks() != 0 && self.files() != 0
    }

    /// The three directions a man of the given color steps along.
    #[inline]
    pub fn orthogonal(c: Color) -> &'static [Direction] {
        match c {
            Color::White => &Self::WHITE_ORTHOGONAL,
            Color::Black => &Self::BLACK_ORTHOGONAL,
        }
    }

    /// The orthogonal directions plus the two forward diagonals.
    #[inline]
    pub fn extended(c: Color) -> &'static [Direction] {
        match c {
            Color::White => &Self::WHITE_EXTENDED,
            Color::Black => &Self::BLACK_EXTENDED,
        }
    }

    /// The direction leading from one square to another, if they are aligned.
    pub fn between(whence: Square, whither: Square) -> Option<Direction> {
        let dr = whither.rank().index() - whence.rank().index();
        let df = whither.file().index() - whence.file().index();

        if (dr == 0 && df == 0) || (dr != 0 && df != 0 && dr.abs() != df.abs()) {
            return None;
        }

        Direction::ALL
            .into_iter()
            .find(|d| d.ranks() == dr.signum() && d.files() == df.signum())
    }
}
