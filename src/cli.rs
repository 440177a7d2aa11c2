//! Interactive terminal session
//!
//! Reads one command per line, drives a [`TileGrid`] through its adapter and
//! prints the board and any notices after every command.

#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use log::debug;

use crate::{
    adapter::GameAdapter,
    common::{GridError, TileState},
    game::GameModel,
    grid::{position_from_coordinates, Coordinates},
    notice::{Notice, NoticeLog},
    tile::{TileHolder, TileView},
    ui::{cell_to_string, render_board, render_notice},
    view::TileGrid,
};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Tap the tile at a zero-based position.
    Tap(usize),
    /// Reset from the toolbar.
    Reset,
    /// Press the button of the most recent notice.
    Action,
    Help,
    Quit,
}

fn parse_cell(input: &str, n: usize) -> Option<Coordinates> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > n || col >= n {
        return None;
    }
    Some(Coordinates::new(row - 1, col))
}

/// Parse a command for an `n`-wide board. Positions are one-based (`1..=n²`),
/// cells are a column letter followed by a row number (`B2`).
pub fn parse_command(input: &str, n: usize) -> Result<Command, GridError> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "reset" => return Ok(Command::Reset),
        "r" => return Ok(Command::Action),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }
    if let Ok(pos) = input.parse::<usize>() {
        let count = n * n;
        if pos == 0 || pos > count {
            return Err(GridError::PositionOutOfRange {
                position: pos,
                item_count: count,
            });
        }
        return Ok(Command::Tap(pos - 1));
    }
    let coords = parse_cell(input, n).ok_or(GridError::Unparsable)?;
    Ok(Command::Tap(position_from_coordinates(coords, n)?))
}

const HELP: &str = "Commands:
  1..N    tap the tile at that position (row by row)
  B2      tap a cell by column letter and row number
  r       press the button of the last notice
  reset   start over
  quit    leave";

/// A game played over a line-based reader and writer.
pub struct Session<G: GameModel> {
    adapter: GameAdapter<G>,
    grid: TileGrid<TileHolder>,
    notices: NoticeLog,
    last_notice: Option<Notice>,
}

impl<G: GameModel> Session<G> {
    pub fn new(mut adapter: GameAdapter<G>) -> Self {
        let grid = TileGrid::attach(&mut adapter);
        Self {
            adapter,
            grid,
            notices: NoticeLog::new(),
            last_notice: None,
        }
    }

    pub fn adapter(&self) -> &GameAdapter<G> {
        &self.adapter
    }

    pub fn grid(&self) -> &TileGrid<TileHolder> {
        &self.grid
    }

    /// Apply one command. Returns `false` once the session should end.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Tap(pos) => {
                debug!("tap at {}", pos);
                self.grid.tap(&mut self.adapter, pos, &mut self.notices);
            }
            Command::Reset => {
                self.adapter.reset_board();
                self.grid.refresh(&mut self.adapter);
                while self.notices.pop().is_some() {}
                self.last_notice = None;
            }
            Command::Action => {
                self.drain_notices();
                if let Some((_, action)) = self.last_notice.take().and_then(|n| n.action) {
                    self.grid.dispatch(&mut self.adapter, action);
                }
            }
            Command::Help => {}
            Command::Quit => return false,
        }
        true
    }

    /// Notices shown since the last call, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        let mut out = Vec::new();
        while let Some(n) = self.notices.pop() {
            out.push(n);
        }
        if let Some(last) = out.last() {
            self.last_notice = Some(last.clone());
        }
        out
    }

    fn print_board<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let n = self.adapter.game().board_size();
        write!(out, "{}", render_board(&self.grid, n))?;
        let outcome = self.adapter.game().outcome();
        if outcome.is_over() {
            writeln!(out, "{}", outcome)?;
        } else {
            writeln!(out, "{} to move", self.adapter.game().current_player())?;
        }
        Ok(())
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        self.print_board(out)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let n = self.adapter.game().board_size();
            let command = match parse_command(&line, n) {
                Ok(c) => c,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };
            if command == Command::Help {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            if let Command::Tap(pos) = command {
                let c = self.adapter.coordinates(pos);
                let playable = self
                    .grid
                    .tile(pos)
                    .is_some_and(|t| t.is_tappable() && t.state() == TileState::Empty);
                if !playable {
                    writeln!(out, "{} can't be played", cell_to_string(c.row, c.col))?;
                }
            }
            if !self.apply(command) {
                break;
            }
            self.print_board(out)?;
            for notice in self.drain_notices() {
                writeln!(out, "{}", render_notice(&notice))?;
            }
            out.flush()?;
        }
        Ok(())
    }
}
