//! Bounded undo history.
//!
//! Boards are pushed before each accepted move. The history is an
//! `im::Vector`, so dropping the oldest entry and popping the newest are
//! both cheap.

use im::Vector;

use crate::rules::Board;

/// History of boards before each accepted move.
#[derive(Clone, Debug, Default)]
pub struct UndoStack {
    boards: Vector<Board>,
    /// `None` = unbounded.
    limit: Option<usize>,
}

impl UndoStack {
    /// Create an empty history holding at most `limit` boards.
    #[must_use]
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            boards: Vector::new(),
            limit,
        }
    }

    /// Record a board, dropping the oldest entries beyond the limit.
    pub fn push(&mut self, board: Board) {
        if self.limit == Some(0) {
            return;
        }
        self.boards.push_back(board);
        if let Some(limit) = self.limit {
            while self.boards.len() > limit {
                self.boards.pop_front();
            }
        }
    }

    /// Take the most recent board.
    pub fn pop(&mut self) -> Option<Board> {
        self.boards.pop_back()
    }

    /// Number of recorded boards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether nothing can be undone.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Forget all recorded boards.
    pub fn clear(&mut self) {
        self.boards.clear();
    }
}
