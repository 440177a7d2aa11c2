#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::string::String;

use crate::{
    notice::Notice,
    tile::{TileHolder, TileStyle},
    view::TileGrid,
};

/// Column label used for cells, `A` for the first column. Columns past `Z`
/// have no letter and show as `?`; such tiles are still reachable by position.
pub fn column_label(col: usize) -> char {
    if col < 26 {
        (b'A' + col as u8) as char
    } else {
        '?'
    }
}

/// Cell name such as `B3` for (row 2, col 1).
pub fn cell_to_string(row: usize, col: usize) -> String {
    std::format!("{}{}", column_label(col), row + 1)
}

fn tile_text(tile: &TileHolder) -> String {
    let glyph = match tile.style() {
        TileStyle::Faded => tile.glyph().to_ascii_lowercase(),
        TileStyle::Playing | TileStyle::Winner => tile.glyph(),
    };
    let width = tile.width().max(1);
    let body = if tile.style() == TileStyle::Winner && width >= 3 {
        std::format!("[{}]", glyph)
    } else {
        std::format!("{}", glyph)
    };
    std::format!("{:^width$}", body, width = width)
}

/// Render the grid as text, `n` tiles per row, with column letters on top
/// and row numbers on the left. A tile takes half its height in lines since
/// terminal cells are about twice as tall as they are wide.
pub fn render_board(grid: &TileGrid<TileHolder>, n: usize) -> String {
    let mut out = String::new();
    if n == 0 || grid.is_empty() {
        return out;
    }
    let width = grid.tiles().iter().map(|t| t.width()).max().unwrap_or(1).max(1);
    let lines_per_tile = (width / 2).max(1);

    let _ = write!(out, "   ");
    for c in 0..n {
        let _ = write!(out, "|{:^width$}", column_label(c), width = width);
    }
    let _ = writeln!(out, "|");
    let rule = std::format!("   {}+", std::format!("+{}", "-".repeat(width)).repeat(n));

    for (r, row) in grid.tiles().chunks(n).enumerate() {
        let _ = writeln!(out, "{}", rule);
        for line in 0..lines_per_tile {
            if line == lines_per_tile / 2 {
                let _ = write!(out, "{:2} ", r + 1);
            } else {
                let _ = write!(out, "   ");
            }
            for tile in row {
                if line == lines_per_tile / 2 {
                    let _ = write!(out, "|{}", tile_text(tile));
                } else {
                    let _ = write!(out, "|{}", " ".repeat(width));
                }
            }
            let _ = writeln!(out, "|");
        }
    }
    let _ = writeln!(out, "{}", rule);
    out
}

/// One-line text of a notice, including its action button.
pub fn render_notice(notice: &Notice) -> String {
    match notice.action {
        Some((label, _)) => std::format!("{}   [{}]", notice.message, label),
        None => notice.message.clone(),
    }
}
