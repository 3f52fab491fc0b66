use crate::{Board, Choose, Color, Move, Outcome, Position, RulesPolicy, Square};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// The reason why selecting a [`Square`] was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[error(ignore)]
pub enum InvalidSelection {
    #[display(fmt = "the game has already ended, {}", _0)]
    GameHasEnded(Outcome),

    #[display(fmt = "the capture chain through {} must be finished first", _0)]
    ChainInProgress(Square),

    #[display(fmt = "there is no piece on {}", _0)]
    VacantSquare(Square),

    #[display(fmt = "the piece on {} belongs to the opponent", _0)]
    HostilePiece(Square),

    #[display(fmt = "the piece on {} has no legal move", _0)]
    ImmobilePiece(Square),
}

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[error(ignore)]
pub enum IllegalMove {
    #[display(fmt = "the game has already ended, {}", _0)]
    GameHasEnded(Outcome),

    #[display(fmt = "the capture chain through {} must be continued", _0)]
    AbandonedChain(Square),

    #[display(fmt = "the move {} is not legal in this position", _0)]
    NotLegal(Move),
}

/// The observable consequences of one call to [`Game::execute`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    /// The [`Square`] the piece left.
    pub whence: Square,

    /// The [`Square`] the piece now stands on.
    pub whither: Square,

    /// The squares cleared of captured pieces by this call.
    ///
    /// Under deferred extraction this stays empty while the chain is open and
    /// lists every victim at once when the turn closes.
    pub captured: Vec<Square>,

    /// Whether the move crowned a man.
    pub promoted: bool,

    /// Whether the same piece must keep capturing before the turn closes.
    pub chain_continues: bool,

    /// The result of the game, if this move ended it.
    pub outcome: Option<Outcome>,
}

/// A game of damas between the player and the built-in opponent.
///
/// `Game` is a state machine driven through [`Game::select`] and
/// [`Game::execute`]. A capture that can be extended holds the turn open, and
/// until the chain is exhausted only the continuations of the chained piece
/// are accepted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    position: Position,
    turn: Color,
    player: Color,
    outcome: Option<Outcome>,
    selection: Option<Square>,
    moves: Vec<Move>,
    chain: Option<Square>,
    pending: Vec<Square>,
    graveyard: [usize; 2],
}

impl Game {
    /// A fresh game from the initial deployment, white to move.
    ///
    /// `player` is the color the person at the board commands; the other
    /// color answers through [`Game::request_opponent_move`].
    pub fn new(player: Color, policy: RulesPolicy) -> Self {
        Game::resume(player, Color::White, Position::new(Board::default(), policy))
    }

    /// A game continued from an arbitrary position, with the end conditions
    /// evaluated immediately.
    pub fn resume(player: Color, turn: Color, position: Position) -> Self {
        Game {
            outcome: position.outcome(turn),
            position,
            turn,
            player,
            selection: None,
            moves: Vec::new(),
            chain: None,
            pending: Vec::new(),
            graveyard: [0; 2],
        }
    }

    /// The color to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The color the person at the board commands.
    #[inline]
    pub fn player(&self) -> Color {
        self.player
    }

    /// The current [`Position`].
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The result of the game, if it has ended.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The [`Square`] whose moves were last offered, if any.
    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// The number of pieces of the given color captured so far.
    ///
    /// Under deferred extraction, victims of an open chain are counted only
    /// once the turn closes.
    #[inline]
    pub fn captured(&self, c: Color) -> usize {
        self.graveyard[c.index()]
    }

    /// Every move the color to move may play, honoring an open chain.
    pub fn legal(&self) -> Vec<Move> {
        match self.chain {
            Some(_) => self.moves.clone(),
            None => self.position.legal(self.turn),
        }
    }

    /// Offers the legal moves of the piece standing on a square.
    ///
    /// Fails if the game is over, if a capture chain through another square
    /// is open, or if the square does not hold a piece of the color to move
    /// with at least one legal move.
    #[instrument(level = "trace", skip(self))]
    pub fn select(&mut self, whence: Square) -> Result<&[Move], InvalidSelection> {
        if let Some(o) = self.outcome {
            return Err(InvalidSelection::GameHasEnded(o));
        }

        if let Some(held) = self.chain {
            if whence != held {
                return Err(InvalidSelection::ChainInProgress(held));
            }

            self.selection = Some(whence);
            return Ok(&self.moves);
        }

        match self.position[whence] {
            None => return Err(InvalidSelection::VacantSquare(whence)),
            Some(p) if p.color() != self.turn => {
                return Err(InvalidSelection::HostilePiece(whence));
            }
            Some(_) => {}
        }

        let moves = self.position.legal_from(whence);

        if moves.is_empty() {
            return Err(InvalidSelection::ImmobilePiece(whence));
        }

        self.selection = Some(whence);
        self.moves = moves;

        Ok(&self.moves)
    }

    /// Plays a move and reports what changed.
    ///
    /// The move must be legal in the current position; while a chain is open
    /// only the continuations of the chained piece are accepted. A capture
    /// that can be extended holds the turn, otherwise the turn passes to the
    /// other color and the end conditions are checked.
    #[instrument(level = "debug", skip(self, m), err, fields(%m))]
    pub fn execute(&mut self, m: Move) -> Result<Report, IllegalMove> {
        if let Some(o) = self.outcome {
            return Err(IllegalMove::GameHasEnded(o));
        }

        match self.chain {
            Some(held) if m.whence() != held => {
                return Err(IllegalMove::AbandonedChain(held));
            }

            Some(_) => {
                if !self.moves.contains(&m) {
                    return Err(IllegalMove::NotLegal(m));
                }
            }

            None => {
                match self.position[m.whence()] {
                    Some(p) if p.color() == self.turn => {}
                    _ => return Err(IllegalMove::NotLegal(m)),
                }

                if !self.position.legal_from(m.whence()).contains(&m) {
                    return Err(IllegalMove::NotLegal(m));
                }
            }
        }

        let promoted = self.position.crowns(m);
        self.position = self.position.apply(m);

        if let Some(victim) = m.capture() {
            self.pending.push(victim);
        }

        let ends = promoted && self.position.policy().promotion_ends_chain;

        if m.is_capture() && !ends {
            let braked = self.position.brakes(m);
            let steps = self.position.continuations(m.whither(), braked);

            if !steps.is_empty() {
                self.selection = Some(m.whither());
                self.moves = steps;
                self.chain = Some(m.whither());

                let captured = match self.position.policy().deferred_extraction {
                    true => Vec::new(),
                    false => self.flush(),
                };

                debug!("the capture chain stays open");

                return Ok(Report {
                    whence: m.whence(),
                    whither: m.whither(),
                    captured,
                    promoted,
                    chain_continues: true,
                    outcome: None,
                });
            }
        }

        let captured = self.flush();

        self.selection = None;
        self.moves = Vec::new();
        self.chain = None;
        self.turn = !self.turn;
        self.outcome = self.position.outcome(self.turn);

        if let Some(o) = self.outcome {
            info!(outcome = %o, "the game has ended");
        }

        Ok(Report {
            whence: m.whence(),
            whither: m.whither(),
            captured,
            promoted,
            chain_continues: false,
            outcome: self.outcome,
        })
    }

    /// Asks the opponent for its move, if it is the opponent's turn.
    ///
    /// Returns [`None`] if the game is over or if it is the player's turn.
    /// The adapter remains responsible for executing the move, and asks again
    /// while a capture chain holds the opponent's turn open.
    #[instrument(level = "debug", skip_all, ret)]
    pub fn request_opponent_move<C: Choose>(&self, opponent: &mut C) -> Option<Move> {
        if self.outcome.is_some() || self.turn == self.player {
            return None;
        }

        opponent.choose(self)
    }

    fn flush(&mut self) -> Vec<Square> {
        self.graveyard[(!self.turn).index()] += self.pending.len();
        self.pending.drain(..).collect()
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Game::new(Color::White, RulesPolicy::default())
    }
}
