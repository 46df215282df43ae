use crate::board_state::board::Board;

/// Stack of independent board snapshots for look-ahead and undo.
///
/// Every pushed board is stored as a [`Board::copy`], so later changes to the
/// live board never reach a snapshot, and a popped snapshot can be mutated
/// freely.
#[derive(Debug, Default)]
pub struct BoardHistory {
    snapshots: Vec<Board>,
}

impl BoardHistory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, board: &Board) {
        self.snapshots.push(board.copy());
    }

    pub fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop()
    }

    /// Most recent snapshot without removing it.
    pub fn peek(&self) -> Option<&Board> {
        self.snapshots.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
