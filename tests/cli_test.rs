#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use tictac::cli::{parse_command, Command, Session};
    use tictac::{GameAdapter, GameModel, GridError, Outcome, TicTacToe, TileState, TileView};

    #[test]
    fn parses_positions_and_cells() {
        assert_eq!(parse_command("5", 3), Ok(Command::Tap(4)));
        assert_eq!(parse_command(" b2 ", 3), Ok(Command::Tap(4)));
        assert_eq!(parse_command("C3", 3), Ok(Command::Tap(8)));
        assert_eq!(parse_command("A1", 3), Ok(Command::Tap(0)));
        assert_eq!(parse_command("RESET", 3), Ok(Command::Reset));
        assert_eq!(parse_command("r", 3), Ok(Command::Action));
        assert_eq!(parse_command("q", 3), Ok(Command::Quit));
    }

    #[test]
    fn rejects_out_of_range_input() {
        assert_eq!(
            parse_command("10", 3),
            Err(GridError::PositionOutOfRange {
                position: 10,
                item_count: 9
            })
        );
        assert!(parse_command("0", 3).is_err());
        assert_eq!(parse_command("D1", 3), Err(GridError::Unparsable));
        assert_eq!(parse_command("A4", 3), Err(GridError::Unparsable));
        assert_eq!(parse_command("hello", 3), Err(GridError::Unparsable));
    }

    #[test]
    fn session_plays_to_win_and_resets_from_notice() {
        let mut session = Session::new(GameAdapter::new(TicTacToe::new(3)));
        let input = Cursor::new("1\n4\n2\n5\n3\nr\n");
        let mut out = Vec::new();
        session.run(input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Player one wins!   [RESET]"));
        assert_eq!(session.adapter().game().outcome(), Outcome::InProgress);
        assert!(session
            .grid()
            .tiles()
            .iter()
            .all(|t| t.is_tappable() && t.state() == TileState::Empty));
    }

    #[test]
    fn session_reports_unplayable_tiles_and_stops_on_quit() {
        let mut session = Session::new(GameAdapter::new(TicTacToe::new(3)));
        let input = Cursor::new("B2\nb2\nquit\n1\n");
        let mut out = Vec::new();
        session.run(input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("B2 can't be played"));
        assert_eq!(session.adapter().game().moves_played(), 1);
    }

    #[test]
    fn toolbar_reset_discards_pending_game_over_notice() {
        let mut session = Session::new(GameAdapter::new(TicTacToe::new(3)));
        for pos in [0, 3, 1, 4, 2] {
            assert!(session.apply(Command::Tap(pos)));
        }
        assert_eq!(session.adapter().game().outcome(), Outcome::PlayerOneWin);

        session.apply(Command::Reset);
        session.apply(Command::Tap(8));
        session.apply(Command::Action);

        assert_eq!(session.adapter().game().moves_played(), 1);
        assert_eq!(session.grid().tile(8).unwrap().state(), TileState::PlayerOne);
        assert!(session.drain_notices().is_empty());
    }
}
