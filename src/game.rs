use alloc::vec;
use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::{
    common::{GridError, Outcome, Player, TileState},
    config::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE},
    grid::{coordinates_from_position, item_count, Coordinates},
};

/// Board state, move application, turn order and win detection as seen by
/// the adapter.
pub trait GameModel {
    /// Number of rows (and columns) of the square board.
    fn board_size(&self) -> usize;

    /// State of the tile at (row, col). Off-board lookups yield `Invalid`.
    fn tile(&self, row: usize, col: usize) -> TileState;

    /// Record a move for the current player at (row, col).
    ///
    /// Returns the mark placed, or `TileState::Invalid` when the move is
    /// rejected (occupied tile, off-board, or game already over).
    fn choose(&mut self, row: usize, col: usize) -> TileState;

    /// Re-evaluate the outcome after a move at (row, col).
    fn check_outcome(&mut self, row: usize, col: usize) -> Outcome;

    /// Hand the turn to the other player.
    fn next_move(&mut self);

    /// Clear the board and start over.
    fn reset_board(&mut self);

    /// Last evaluated outcome.
    fn outcome(&self) -> Outcome;

    /// Player whose move is next.
    fn current_player(&self) -> Player;

    /// Moves accepted since the last reset.
    fn moves_played(&self) -> usize;
}

/// Serializable game state, used for inspection and simulator output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board_size: usize,
    /// Tiles in row-major order.
    pub tiles: Vec<TileState>,
    pub current_player: Player,
    pub moves_played: usize,
    pub outcome: Outcome,
}

/// Reference n×n tic-tac-toe: a full row, column or diagonal wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToe {
    size: usize,
    tiles: Vec<TileState>,
    current: Player,
    moves: usize,
    outcome: Outcome,
}

impl TicTacToe {
    /// Create an empty `n`×`n` game. Panics on `n == 0`; see [`TicTacToe::try_new`].
    pub fn new(n: usize) -> Self {
        assert!(n >= 1, "board size must be at least 1");
        Self {
            size: n,
            tiles: vec![TileState::Empty; item_count(n)],
            current: Player::One,
            moves: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// Create an empty game, validating the board size.
    pub fn try_new(n: usize) -> Result<Self, GridError> {
        if n == 0 || n > MAX_BOARD_SIZE {
            return Err(GridError::InvalidBoardSize(n));
        }
        Ok(Self::new(n))
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    fn line_filled_by(&self, mark: TileState, mut cells: impl Iterator<Item = (usize, usize)>) -> bool {
        cells.all(|(r, c)| self.tile(r, c) == mark)
    }

    /// Player owning a full row, column or diagonal, if any.
    fn winner(&self) -> Option<Player> {
        let n = self.size;
        [Player::One, Player::Two].into_iter().find(|p| {
            let mark = p.mark();
            (0..n).any(|r| self.line_filled_by(mark, (0..n).map(|c| (r, c))))
                || (0..n).any(|c| self.line_filled_by(mark, (0..n).map(|r| (r, c))))
                || self.line_filled_by(mark, (0..n).map(|i| (i, i)))
                || self.line_filled_by(mark, (0..n).map(|i| (i, n - 1 - i)))
        })
    }

    /// Check that tiles, move count, turn and outcome describe a position
    /// reachable through play, evaluated after each move.
    fn validate(&self) -> Result<(), GridError> {
        if self.tiles.contains(&TileState::Invalid) {
            return Err(GridError::InconsistentSnapshot("board holds an invalid tile"));
        }
        let ones = self.tiles.iter().filter(|t| **t == TileState::PlayerOne).count();
        let twos = self.tiles.iter().filter(|t| **t == TileState::PlayerTwo).count();
        if self.moves != ones + twos {
            return Err(GridError::InconsistentSnapshot(
                "move count differs from occupied tiles",
            ));
        }
        if ones != twos && ones != twos + 1 {
            return Err(GridError::InconsistentSnapshot("marks do not alternate"));
        }
        let last_mover = if ones > twos { Player::One } else { Player::Two };
        let expected_player = match self.outcome {
            Outcome::InProgress => last_mover.other(),
            _ => last_mover,
        };
        if self.current != expected_player {
            return Err(GridError::InconsistentSnapshot(
                "current player does not match the marks on the board",
            ));
        }
        let full = self.tiles.iter().all(|t| t.is_occupied());
        let implied = match self.winner() {
            Some(p) => p.win(),
            None if full => Outcome::Draw,
            None => Outcome::InProgress,
        };
        if implied != self.outcome {
            return Err(GridError::InconsistentSnapshot(
                "outcome contradicts the board",
            ));
        }
        Ok(())
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board_size: self.size,
            tiles: self.tiles.clone(),
            current_player: self.current,
            moves_played: self.moves,
            outcome: self.outcome,
        }
    }

    /// Rebuild a game from a snapshot taken between moves. Fails on a bad
    /// board size or tile count, and on tiles, move count, turn or outcome
    /// that contradict each other.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, GridError> {
        if snapshot.board_size == 0 || snapshot.board_size > MAX_BOARD_SIZE {
            return Err(GridError::InvalidBoardSize(snapshot.board_size));
        }
        let expected = item_count(snapshot.board_size);
        if snapshot.tiles.len() != expected {
            return Err(GridError::TileCountMismatch {
                expected,
                found: snapshot.tiles.len(),
            });
        }
        let game = Self {
            size: snapshot.board_size,
            tiles: snapshot.tiles,
            current: snapshot.current_player,
            moves: snapshot.moves_played,
            outcome: snapshot.outcome,
        };
        game.validate()?;
        Ok(game)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl GameModel for TicTacToe {
    fn board_size(&self) -> usize {
        self.size
    }

    fn tile(&self, row: usize, col: usize) -> TileState {
        match self.index(row, col) {
            Some(i) => self.tiles[i],
            None => TileState::Invalid,
        }
    }

    fn choose(&mut self, row: usize, col: usize) -> TileState {
        if self.outcome.is_over() {
            return TileState::Invalid;
        }
        let Some(i) = self.index(row, col) else {
            return TileState::Invalid;
        };
        if self.tiles[i] != TileState::Empty {
            return TileState::Invalid;
        }
        let mark = self.current.mark();
        self.tiles[i] = mark;
        self.moves += 1;
        mark
    }

    fn check_outcome(&mut self, row: usize, col: usize) -> Outcome {
        let n = self.size;
        let mark = self.tile(row, col);
        if let Some(owner) = mark.owner() {
            let won = self.line_filled_by(mark, (0..n).map(|c| (row, c)))
                || self.line_filled_by(mark, (0..n).map(|r| (r, col)))
                || (row == col && self.line_filled_by(mark, (0..n).map(|i| (i, i))))
                || (row + col + 1 == n
                    && self.line_filled_by(mark, (0..n).map(|i| (i, n - 1 - i))));
            if won {
                self.outcome = owner.win();
                return self.outcome;
            }
        }
        if self.tiles.iter().all(|t| t.is_occupied()) {
            self.outcome = Outcome::Draw;
        }
        self.outcome
    }

    fn next_move(&mut self) {
        self.current = self.current.other();
        debug!("{} to move", self.current);
    }

    fn reset_board(&mut self) {
        self.tiles.fill(TileState::Empty);
        self.current = Player::One;
        self.moves = 0;
        self.outcome = Outcome::InProgress;
    }

    fn outcome(&self) -> Outcome {
        self.outcome
    }

    fn current_player(&self) -> Player {
        self.current
    }

    fn moves_played(&self) -> usize {
        self.moves
    }
}

/// Positions of all empty tiles of `game`, ascending.
pub fn open_positions<G: GameModel>(game: &G) -> Vec<usize> {
    let n = game.board_size();
    (0..item_count(n))
        .filter(|&p| {
            let c = coordinates_from_position(p, n);
            game.tile(c.row, c.col) == TileState::Empty
        })
        .collect()
}

/// Pick a uniformly random empty tile of `game`, or `None` on a full board.
pub fn random_open_tile<G: GameModel, R: Rng>(game: &G, rng: &mut R) -> Option<Coordinates> {
    let open = open_positions(game);
    if open.is_empty() {
        return None;
    }
    let pos = open[rng.random_range(0..open.len())];
    Some(coordinates_from_position(pos, game.board_size()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn play(game: &mut TicTacToe, moves: &[(usize, usize)]) -> Outcome {
        let mut outcome = Outcome::InProgress;
        for &(r, c) in moves {
            assert_ne!(game.choose(r, c), TileState::Invalid);
            outcome = game.check_outcome(r, c);
            if outcome == Outcome::InProgress {
                game.next_move();
            }
        }
        outcome
    }

    #[test]
    fn anti_diagonal_win_on_4x4() {
        let mut game = TicTacToe::new(4);
        let outcome = play(
            &mut game,
            &[(0, 3), (0, 0), (1, 2), (1, 0), (2, 1), (2, 0), (3, 0)],
        );
        assert_eq!(outcome, Outcome::PlayerOneWin);
    }

    #[test]
    fn occupied_tile_rejected() {
        let mut game = TicTacToe::default();
        assert_eq!(game.choose(1, 1), TileState::PlayerOne);
        game.next_move();
        assert_eq!(game.choose(1, 1), TileState::Invalid);
        assert_eq!(game.moves_played(), 1);
    }

    #[test]
    fn off_board_is_invalid() {
        let mut game = TicTacToe::default();
        assert_eq!(game.tile(3, 0), TileState::Invalid);
        assert_eq!(game.choose(0, 3), TileState::Invalid);
    }

    #[test]
    fn single_tile_board_is_won_immediately() {
        let mut game = TicTacToe::new(1);
        assert_eq!(game.choose(0, 0), TileState::PlayerOne);
        assert_eq!(game.check_outcome(0, 0), Outcome::PlayerOneWin);
    }

    #[test]
    fn random_open_tile_skips_occupied() {
        let mut game = TicTacToe::new(2);
        game.choose(0, 0);
        game.next_move();
        game.choose(0, 1);
        game.next_move();
        game.choose(1, 0);
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(random_open_tile(&game, &mut rng), Some(Coordinates::new(1, 1)));
        game.next_move();
        game.choose(1, 1);
        assert_eq!(random_open_tile(&game, &mut rng), None);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut game = TicTacToe::default();
        let outcome = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(outcome, Outcome::PlayerOneWin);
        assert_eq!(game.choose(2, 2), TileState::Invalid);
        assert_eq!(game.tile(2, 2), TileState::Empty);
        assert_eq!(game.moves_played(), 5);
    }

    #[test]
    fn board_size_limits() {
        assert_eq!(
            TicTacToe::try_new(MAX_BOARD_SIZE + 1),
            Err(GridError::InvalidBoardSize(17))
        );
        assert_eq!(TicTacToe::try_new(0), Err(GridError::InvalidBoardSize(0)));
        assert!(TicTacToe::try_new(MAX_BOARD_SIZE).is_ok());
    }

    #[test]
    fn open_positions_in_order() {
        let mut game = TicTacToe::new(2);
        play(&mut game, &[(0, 1), (1, 0)]);
        assert_eq!(open_positions(&game), vec![0, 3]);
    }

    #[test]
    fn snapshot_rejects_mismatched_tiles() {
        let mut snap = TicTacToe::default().snapshot();
        snap.tiles.pop();
        assert_eq!(
            TicTacToe::from_snapshot(snap),
            Err(GridError::TileCountMismatch {
                expected: 9,
                found: 8
            })
        );
    }

    #[test]
    fn snapshot_rejects_invalid_tile() {
        use TileState::{Invalid, PlayerOne as X, PlayerTwo as O};
        let snap = GameSnapshot {
            board_size: 3,
            tiles: vec![X, O, X, O, Invalid, X, O, X, O],
            current_player: Player::One,
            moves_played: 8,
            outcome: Outcome::InProgress,
        };
        assert!(matches!(
            TicTacToe::from_snapshot(snap),
            Err(GridError::InconsistentSnapshot(_))
        ));
    }

    #[test]
    fn snapshot_rejects_contradicting_fields() {
        let mut snap = TicTacToe::new(2).snapshot();
        snap.moves_played = 99;
        snap.outcome = Outcome::PlayerTwoWin;
        assert!(matches!(
            TicTacToe::from_snapshot(snap),
            Err(GridError::InconsistentSnapshot(_))
        ));

        let mut snap = TicTacToe::new(2).snapshot();
        snap.outcome = Outcome::PlayerTwoWin;
        assert!(TicTacToe::from_snapshot(snap).is_err());

        let mut game = TicTacToe::new(3);
        play(&mut game, &[(1, 1)]);
        let mut snap = game.snapshot();
        snap.current_player = Player::One;
        assert!(TicTacToe::from_snapshot(snap).is_err());

        let mut snap = game.snapshot();
        snap.tiles[0] = TileState::PlayerOne;
        snap.moves_played = 2;
        assert!(TicTacToe::from_snapshot(snap).is_err());
    }

    #[test]
    fn snapshots_of_played_games_restore() {
        let mut won = TicTacToe::default();
        play(&mut won, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(TicTacToe::from_snapshot(won.snapshot()), Ok(won.clone()));

        let mut drawn = TicTacToe::default();
        play(
            &mut drawn,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(drawn.outcome(), Outcome::Draw);
        assert_eq!(TicTacToe::from_snapshot(drawn.snapshot()), Ok(drawn.clone()));

        let mut running = TicTacToe::new(4);
        play(&mut running, &[(3, 3), (0, 0), (2, 1)]);
        assert_eq!(
            TicTacToe::from_snapshot(running.snapshot()),
            Ok(running.clone())
        );
    }
}
