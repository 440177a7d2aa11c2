//! Commonly used types and utilities for ease of import.

pub use crate::{
    GameAdapter, GameModel, NoticeAction, NoticeLog, Notifier, Outcome, Player, TicTacToe,
    TileGrid, TileHolder, TileState, TileView,
};

#[cfg(feature = "std")]
pub use crate::{cli::Session, init_logging, ui::render_board};
