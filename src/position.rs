use crate::{Board, Color, Direction, MAX_JUMPS, Move, MoveKind, Outcome, Piece};
use crate::{Rank, Reason, Role, RulesPolicy, Sequence, Square};
use arrayvec::ArrayVec;
use derive_more::Constructor;
use std::ops::Index;

#[cfg(test)]
use test_strategy::Arbitrary;

/// The arrangement of pieces on the board under a specific rule variant.
///
/// All move generation is stateless with respect to the turn; callers ask for
/// the moves of one square or one color at a time.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Position {
    board: Board,
    policy: RulesPolicy,
}

impl Position {
    /// The piece arrangement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The rule variant in force.
    #[inline]
    pub fn policy(&self) -> &RulesPolicy {
        &self.policy
    }

    /// The characteristics of a move played in this position.
    #[inline]
    pub fn kind(&self, m: Move) -> MoveKind {
        let mut kind = MoveKind::ANY;

        if m.is_capture() {
            kind |= MoveKind::CAPTURE;
        }

        if self.crowns(m) {
            kind |= MoveKind::PROMOTION;
        }

        kind
    }

    /// Whether this move crowns a man.
    #[inline]
    pub fn crowns(&self, m: Move) -> bool {
        match self.board[m.whence()] {
            Some(p) => p.role() == Role::Man && m.whither().rank() == Rank::promotion(p.color()),
            None => false,
        }
    }

    /// Whether a chain continuing from this capture may only jump straight
    /// forward, judged on the position the capture produced.
    ///
    /// Only men are braked, and only when they land on a band file at the end
    /// of a diagonal jump.
    #[inline]
    pub fn brakes(&self, m: Move) -> bool {
        self.policy.band_braking
            && m.is_capture()
            && m.whither().file().is_band()
            && self.board[m.whither()].map_or(false, |p| p.role() == Role::Man)
            && Direction::between(m.whence(), m.whither()).map_or(false, |d| d.is_diagonal())
    }

    /// The moves of the piece on the given square whose kind intersects
    /// `kinds`, disregarding the maximum-capture rule.
    ///
    /// Returns an empty vector if the square is vacant.
    pub fn moves(&self, whence: Square, kinds: MoveKind) -> Vec<Move> {
        let p = match self.board[whence] {
            Some(p) => p,
            None => return Vec::new(),
        };

        let mut moves = Vec::new();

        if kinds.intersects(MoveKind::ANY | MoveKind::PROMOTION) {
            self.quiets(whence, p, &mut moves);
        }

        self.captures(whence, p, &mut moves);

        if self.restricts(whence, p) {
            let forward = Direction::forward(p.color());

            moves.retain(|m| {
                !m.is_capture() || Direction::between(m.whence(), m.whither()) == Some(forward)
            });
        }

        moves.retain(|&m| kinds.intersects(self.kind(m)));

        moves
    }

    /// The capture steps a chain standing on the given square may continue
    /// with.
    pub fn continuations(&self, whence: Square, braked: bool) -> Vec<Move> {
        let mut moves = self.moves(whence, MoveKind::CAPTURE);

        if braked {
            if let Some(p) = self.board[whence] {
                let forward = Direction::forward(p.color());
                moves.retain(|m| Direction::between(m.whence(), m.whither()) == Some(forward));
            }
        }

        moves
    }

    /// Every maximal capture chain the piece on the given square can play.
    ///
    /// The search plays each candidate jump on a scratch board before looking
    /// for the next, so a chain never jumps the same victim twice and a man
    /// crowned mid-chain continues as a sovereign.
    pub fn sequences(&self, whence: Square) -> Vec<Sequence> {
        let mut chains = Vec::new();
        self.descend(whence, false, &mut ArrayVec::new(), &mut chains);
        chains
    }

    fn descend(
        &self,
        whence: Square,
        braked: bool,
        path: &mut ArrayVec<Move, MAX_JUMPS>,
        chains: &mut Vec<Sequence>,
    ) {
        let steps = self.continuations(whence, braked);

        if steps.is_empty() {
            if !path.is_empty() {
                chains.push(path.iter().copied().collect());
            }

            return;
        }

        for m in steps {
            path.push(m);

            if self.crowns(m) && self.policy.promotion_ends_chain {
                chains.push(path.iter().copied().collect());
            } else {
                let next = self.apply(m);
                next.descend(m.whither(), next.brakes(m), path, chains);
            }

            path.pop();
        }
    }

    fn reach(&self, whence: Square, braked: bool) -> usize {
        self.continuations(whence, braked)
            .into_iter()
            .map(|m| {
                if self.crowns(m) && self.policy.promotion_ends_chain {
                    1
                } else {
                    let next = self.apply(m);
                    1 + next.reach(m.whither(), next.brakes(m))
                }
            })
            .max()
            .unwrap_or(0)
    }

    /// The number of jumps in the longest chain that begins with this
    /// capture, or zero for a simple move.
    pub fn prospect(&self, m: Move) -> usize {
        if !m.is_capture() {
            return 0;
        }

        if self.crowns(m) && self.policy.promotion_ends_chain {
            return 1;
        }

        let next = self.apply(m);
        1 + next.reach(m.whither(), next.brakes(m))
    }

    /// The length of the longest capture chain available to the given color.
    pub fn maximum(&self, c: Color) -> usize {
        self.board
            .pieces(c)
            .map(|(_, whence)| self.reach(whence, false))
            .max()
            .unwrap_or(0)
    }

    /// The legal moves of the piece on the given square.
    ///
    /// Under the maximum-capture rule this narrows to the capture steps that
    /// begin a chain of globally maximal length, which may leave a piece with
    /// captures of its own but nothing legal to play.
    pub fn legal_from(&self, whence: Square) -> Vec<Move> {
        let p = match self.board[whence] {
            Some(p) => p,
            None => return Vec::new(),
        };

        if self.policy.mandatory_maximum_capture {
            let best = self.maximum(p.color());

            if best > 0 {
                let mut moves = self.moves(whence, MoveKind::CAPTURE);
                moves.retain(|&m| self.prospect(m) == best);
                return moves;
            }
        }

        self.moves(whence, MoveKind::ANY)
    }

    /// The legal moves of every piece of the given color.
    pub fn legal(&self, c: Color) -> Vec<Move> {
        self.board
            .pieces(c)
            .flat_map(|(_, whence)| self.legal_from(whence))
            .collect()
    }

    /// The position after this move, with the victim removed and any
    /// crowning applied.
    ///
    /// The move is not validated; pass moves generated from this position.
    pub fn apply(&self, m: Move) -> Self {
        let mut next = *self;

        if let Some(p) = next.board.take(m.whence()) {
            if let Some(victim) = m.capture() {
                next.board.take(victim);
            }

            let p = match p.role() {
                Role::Man if m.whither().rank() == Rank::promotion(p.color()) => p.promote(),
                _ => p,
            };

            next.board.place(p, m.whither());
        }

        next
    }

    /// The result of the game once the given color is to move, if any.
    ///
    /// A color loses when its last piece is gone, or when it is to move and
    /// none of its pieces has a single move to play.
    pub fn outcome(&self, turn: Color) -> Option<Outcome> {
        if self.board.count(Color::White) == 0 {
            Some(Outcome::new(Color::Black, Reason::Annihilation))
        } else if self.board.count(Color::Black) == 0 {
            Some(Outcome::new(Color::White, Reason::Annihilation))
        } else if !self.mobile(turn) {
            Some(Outcome::new(!turn, Reason::Blockade))
        } else {
            None
        }
    }

    fn mobile(&self, c: Color) -> bool {
        self.board
            .pieces(c)
            .any(|(_, whence)| !self.moves(whence, MoveKind::ANY).is_empty())
    }

    fn quiets(&self, whence: Square, p: Piece, moves: &mut Vec<Move>) {
        match p.role() {
            Role::Man => {
                for &d in self.policy.man_move_dirs.directions(p.color()) {
                    if let Some(whither) = whence.shift(d) {
                        if self.board[whither].is_none() {
                            moves.push(Move(whence, whither, None));
                        }
                    }
                }
            }

            Role::Sovereign => {
                for d in Direction::ALL {
                    let mut whither = whence.shift(d);

                    while let Some(sq) = whither {
                        if self.board[sq].is_some() {
                            break;
                        }

                        moves.push(Move(whence, sq, None));
                        whither = sq.shift(d);
                    }
                }
            }
        }
    }

    fn captures(&self, whence: Square, p: Piece, moves: &mut Vec<Move>) {
        match p.role() {
            Role::Man => {
                for &d in self.policy.man_capture_dirs.directions(p.color()) {
                    let victim = match whence.shift(d) {
                        Some(sq) if self.hostile(sq, p.color()) => sq,
                        _ => continue,
                    };

                    if let Some(whither) = victim.shift(d) {
                        if self.board[whither].is_none() {
                            moves.push(Move(whence, whither, Some(victim)));
                        }
                    }
                }
            }

            Role::Sovereign => {
                for d in Direction::ALL {
                    // the first piece on the ray is the only candidate victim
                    let mut scan = whence.shift(d);

                    let victim = loop {
                        match scan {
                            None => break None,
                            Some(sq) if self.board[sq].is_none() => scan = sq.shift(d),
                            Some(sq) => break Some(sq),
                        }
                    };

                    let victim = match victim {
                        Some(sq) if self.hostile(sq, p.color()) => sq,
                        _ => continue,
                    };

                    let mut whither = victim.shift(d);

                    while let Some(sq) = whither {
                        if self.board[sq].is_some() {
                            break;
                        }

                        moves.push(Move(whence, sq, Some(victim)));

                        if !self.policy.sovereign_slide_capture {
                            break;
                        }

                        whither = sq.shift(d);
                    }
                }
            }
        }
    }

    /// Whether the band pins this man's captures straight forward.
    fn restricts(&self, whence: Square, p: Piece) -> bool {
        self.policy.edge_band_restriction
            && p.role() == Role::Man
            && whence.file().is_band()
            && whence.rank() != Rank::origin(p.color())
    }

    fn hostile(&self, sq: Square, c: Color) -> bool {
        self.board[sq].map_or(false, |p| p.color() != c)
    }
}

/// Retrieves the piece on the given [`Square`], if any.
impl Index<Square> for Position {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.board[sq]
    }
}
