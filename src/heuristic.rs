use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell, Piece};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// Half-width of the uniform band each orientation score is perturbed by
pub const JITTER_BAND: f64 = 0.02;

/// Static scoring of a position for one piece colour
///
/// # Scoring
/// Every window of four cells in a line is worth 0.25 per cell holding
/// the scored colour and -0.05 per cell holding the other colour. Each of
/// the four orientations (horizontal, vertical, both diagonals)
/// contributes its best window, floored at zero, and the overall score is
/// the best orientation. A uniform jitter within ±[`JITTER_BAND`] is
/// added to each orientation before that final maximum, so equally placed
/// pieces do not always tie. Seeded and jitter-free evaluators are
/// available for reproducible play.
///
/// A board already holding a line of four scores exactly +1 or -1
/// instead, depending on which colour holds it.
#[derive(Clone, Debug)]
pub struct Evaluator {
    rng: Option<StdRng>,
}

impl Evaluator {
    /// Creates an evaluator with OS-seeded jitter
    pub fn new() -> Self {
        Self {
            rng: Some(StdRng::from_os_rng()),
        }
    }

    /// Creates an evaluator whose jitter replays identically for the same
    /// seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Creates an evaluator without jitter; scoring becomes a pure
    /// function of the board
    pub fn exact() -> Self {
        Self { rng: None }
    }

    /// Scores `board` for `piece`, roughly within [-1, 1]
    pub fn score(&mut self, board: &Board, piece: Piece) -> f64 {
        if let Some(winner) = board.winner() {
            return if winner == piece { 1.0 } else { -1.0 };
        }

        let own = piece.to_cell();

        let mut horizontal: f64 = 0.0;
        for row in 0..HEIGHT {
            for col in 0..=WIDTH - WIN_LENGTH {
                horizontal = horizontal.max(Self::window(board, row, col, 0, 1, own));
            }
        }

        let mut vertical: f64 = 0.0;
        for col in 0..WIDTH {
            for row in 0..=HEIGHT - WIN_LENGTH {
                vertical = vertical.max(Self::window(board, row, col, 1, 0, own));
            }
        }

        let mut down_right: f64 = 0.0;
        for row in 0..=HEIGHT - WIN_LENGTH {
            for col in 0..=WIDTH - WIN_LENGTH {
                down_right = down_right.max(Self::window(board, row, col, 1, 1, own));
            }
        }

        let mut down_left: f64 = 0.0;
        for row in 0..=HEIGHT - WIN_LENGTH {
            for col in WIN_LENGTH - 1..WIDTH {
                down_left = down_left.max(Self::window(board, row, col, 1, -1, own));
            }
        }

        (horizontal + self.jitter())
            .max(vertical + self.jitter())
            .max(down_right + self.jitter())
            .max(down_left + self.jitter())
    }

    // sums one window of four cells starting at (row, col) and stepping
    // by (dr, dc)
    fn window(board: &Board, row: usize, col: usize, dr: usize, dc: isize, own: Cell) -> f64 {
        let mut score = 0.0;
        for k in 0..WIN_LENGTH {
            let cell = board.get(row + k * dr, (col as isize + k as isize * dc) as usize);
            if cell == own {
                score += 0.25;
            } else if !cell.is_empty() {
                score -= 0.05;
            }
        }
        score
    }

    fn jitter(&mut self) -> f64 {
        match self.rng.as_mut() {
            Some(rng) => rng.random_range(-JITTER_BAND..=JITTER_BAND),
            None => 0.0,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
