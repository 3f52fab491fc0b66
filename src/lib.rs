#![cfg_attr(test, allow(clippy::unit_arg))]

//! A rules engine for Damas Chilenas, the Chilean draughts variant played on
//! the full 8×8 board.
//!
//! Unlike international draughts, men travel orthogonally, one square
//! forward or sideways, and capture over the three orthogonal directions as
//! well as the two forward diagonals. A man crowned on the farthest rank
//! becomes a sovereign, which slides any distance along the eight directions
//! and captures the first hostile piece on a ray, landing on any empty
//! square beyond it.
//!
//! The engine is configurable through [`RulesPolicy`], which selects among
//! the rule variants observed in play: whether the longest capture sequence
//! is compulsory (the "Ley de Cantidad"), whether sovereigns capture by
//! sliding or by a short hop, how the edge files restrict and brake
//! captures, and whether captured pieces leave the board immediately or
//! only once the turn is over.
//!
//! # Quick Start
//!
//! ```
//! use damas::{Color, Game, RulesPolicy, Square};
//!
//! let mut game = Game::new(Color::White, RulesPolicy::default());
//!
//! // White opens by advancing the man on a2.
//! let moves = game.select(Square::A2).unwrap().to_vec();
//! let report = game.execute(moves[0]).unwrap();
//!
//! assert_eq!(game.turn(), Color::Black);
//! assert_eq!(report.outcome, None);
//! ```
//!
//! The engine exposes no rendering, timing, or persistence surface; a
//! presentation adapter drives it exclusively through [`Game::select`],
//! [`Game::execute`], and [`Game::request_opponent_move`].

mod board;
mod build;
mod color;
mod direction;
mod file;
mod game;
mod r#move;
mod outcome;
mod piece;
mod policy;
mod position;
mod rank;
mod role;
mod sequence;
mod square;

pub use crate::board::*;
pub use crate::build::*;
pub use crate::color::*;
pub use crate::direction::*;
pub use crate::file::*;
pub use crate::game::*;
pub use crate::outcome::*;
pub use crate::piece::*;
pub use crate::policy::*;
pub use crate::position::*;
pub use crate::r#move::*;
pub use crate::rank::*;
pub use crate::role::*;
pub use crate::sequence::*;
pub use crate::square::*;

pub mod opponent;

pub use crate::opponent::*;
