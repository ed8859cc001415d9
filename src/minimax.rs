use crate::board::{Board, Expansion, Piece};
use crate::heuristic::Evaluator;

/// Default number of plies searched below the root
pub const DEFAULT_DEPTH: usize = 3;

/// Depth-limited minimax search with alpha-beta pruning
///
/// # Notes
/// The search maximises for one fixed colour and minimises for the other,
/// pruning a branch as soon as its value can no longer influence the root
/// choice. Positions at the depth limit are scored by the [`Evaluator`];
/// positions holding a line of four score exactly +1 or -1 at any depth.
///
/// Each root successor is searched with a fresh full window and the
/// strictly best value wins. Ties keep the successor encountered first,
/// so enumeration order is the only tie-break.
#[derive(Clone, Debug)]
pub struct Minimax {
    piece: Piece,
    max_depth: usize,
    expansion: Expansion,
    evaluator: Evaluator,
}

impl Minimax {
    /// Creates a search maximising for `piece` at the default depth
    pub fn new(piece: Piece) -> Self {
        Self {
            piece,
            max_depth: DEFAULT_DEPTH,
            expansion: Expansion::default(),
            evaluator: Evaluator::new(),
        }
    }

    /// Sets the depth limit in plies below the root
    pub fn with_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the successor enumeration rule
    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    /// Replaces the position evaluator, e.g. with a seeded or jitter-free
    /// one
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// The colour this search maximises for
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Picks the best placement for the searched colour from `board`
    ///
    /// Returns the `(row, column)` of the cell the chosen successor
    /// fills, recovered by diffing that successor against `board`.
    ///
    /// # Panics
    /// Panics if `board` has no empty cell; callers check for a full
    /// board first.
    pub fn select(&mut self, board: &Board) -> (usize, usize) {
        let mut best_value = f64::NEG_INFINITY;
        let mut best_state = None;

        for successor in board.successors(self.piece, self.expansion) {
            let value = self.min_value(f64::NEG_INFINITY, f64::INFINITY, &successor, 1);
            if value > best_value {
                best_value = value;
                best_state = Some(successor);
            }
        }

        let best_state = best_state.expect("board has no empty cell to place in");
        board
            .diff(&best_state)
            .expect("successor differs from its parent in exactly one cell")
    }

    /// Value of `board` with the searched colour to place, never below
    /// `alpha`; prunes to `beta` once the window closes
    pub(crate) fn max_value(
        &mut self,
        mut alpha: f64,
        beta: f64,
        board: &Board,
        depth: usize,
    ) -> f64 {
        let terminal = board.terminal_value(self.piece);
        if terminal != 0 {
            return terminal as f64;
        }
        if depth >= self.max_depth {
            return self.evaluator.score(board, self.piece);
        }

        for successor in board.successors(self.piece, self.expansion) {
            alpha = alpha.max(self.min_value(alpha, beta, &successor, depth + 1));
            if alpha >= beta {
                return beta;
            }
        }
        alpha
    }

    /// Value of `board` with the opposing colour to place, never above
    /// `beta`; prunes to `alpha` once the window closes
    pub(crate) fn min_value(
        &mut self,
        alpha: f64,
        mut beta: f64,
        board: &Board,
        depth: usize,
    ) -> f64 {
        let terminal = board.terminal_value(self.piece);
        if terminal != 0 {
            return terminal as f64;
        }
        if depth >= self.max_depth {
            // a strong position for the opposing colour counts against
            // the searched one
            return -self.evaluator.score(board, self.piece.opponent());
        }

        for successor in board.successors(self.piece.opponent(), self.expansion) {
            beta = beta.min(self.max_value(alpha, beta, &successor, depth + 1));
            if alpha >= beta {
                return alpha;
            }
        }
        beta
    }
}
