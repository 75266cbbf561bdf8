//! Save/load and undo support.
//!
//! - `GameSnapshot`: serializable config + board
//! - `UndoStack`: bounded history of boards, oldest dropped first

mod snapshot;
mod undo;

pub use snapshot::GameSnapshot;
pub use undo::UndoStack;
