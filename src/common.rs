//! Common types for tictac: tile states, outcomes, players and grid errors.

use core::fmt;

/// Occupancy of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Claimed by the first player.
    PlayerOne,
    /// Claimed by the second player.
    PlayerTwo,
    /// Sentinel returned for a rejected move. Never stored on a board.
    Invalid,
}

impl TileState {
    /// Returns `true` for tiles claimed by either player.
    pub fn is_occupied(self) -> bool {
        matches!(self, TileState::PlayerOne | TileState::PlayerTwo)
    }

    /// Player owning the tile, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            TileState::PlayerOne => Some(Player::One),
            TileState::PlayerTwo => Some(Player::Two),
            TileState::Empty | TileState::Invalid => None,
        }
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileState::Empty => write!(f, "Empty"),
            TileState::PlayerOne => write!(f, "Player one"),
            TileState::PlayerTwo => write!(f, "Player two"),
            TileState::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Overall result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    #[default]
    InProgress,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Outcome {
    /// Returns `true` once the game has been decided.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if the game ended with a win.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "Game in progress"),
            Outcome::PlayerOneWin => write!(f, "Player one wins!"),
            Outcome::PlayerTwoWin => write!(f, "Player two wins!"),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    /// The tile state this player leaves on the board.
    pub fn mark(self) -> TileState {
        match self {
            Player::One => TileState::PlayerOne,
            Player::Two => TileState::PlayerTwo,
        }
    }

    /// The player who moves after this one.
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Winning outcome for this player.
    pub fn win(self) -> Outcome {
        match self {
            Player::One => Outcome::PlayerOneWin,
            Player::Two => Outcome::PlayerTwoWin,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mark(), f)
    }
}

/// Errors returned by grid and game construction helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Board size is zero or above the supported maximum.
    InvalidBoardSize(usize),
    /// Position lies outside `[0, n²)`.
    PositionOutOfRange { position: usize, item_count: usize },
    /// Coordinates lie outside the board.
    CoordinatesOutOfRange { row: usize, col: usize, size: usize },
    /// Snapshot carries a different number of tiles than its board size needs.
    TileCountMismatch { expected: usize, found: usize },
    /// Snapshot fields contradict each other or the board.
    InconsistentSnapshot(&'static str),
    /// Input could not be read as a position or cell.
    Unparsable,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidBoardSize(n) => write!(f, "Unsupported board size: {}", n),
            GridError::PositionOutOfRange {
                position,
                item_count,
            } => write!(
                f,
                "Position {} is out of range (board has {} tiles)",
                position, item_count
            ),
            GridError::CoordinatesOutOfRange { row, col, size } => write!(
                f,
                "Coordinates ({}, {}) are outside the {}x{} board",
                row, col, size, size
            ),
            GridError::TileCountMismatch { expected, found } => write!(
                f,
                "Snapshot has {} tiles, expected {}",
                found, expected
            ),
            GridError::InconsistentSnapshot(reason) => {
                write!(f, "Inconsistent snapshot: {}", reason)
            }
            GridError::Unparsable => write!(f, "Could not parse a position or cell"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
