use std::io::{self, Write};

use clap::{Parser, Subcommand};
use log::info;
use tictac::{
    cli::Session, init_logging, ui::render_notice, GameAdapter, NoticeLog, TicTacToe, TileGrid,
    TileHolder, TileLayout, DEFAULT_BOARD_SIZE, DEFAULT_TILE_MIN_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Total board width in columns (e.g., --width 30)")]
        width: Option<usize>,
        #[arg(long, default_value_t = DEFAULT_TILE_MIN_SIZE)]
        min_tile: usize,
    },
    /// Tap the given one-based positions in order and print the result.
    Replay {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Total board width in columns (e.g., --width 30)")]
        width: Option<usize>,
        #[arg(long, default_value_t = DEFAULT_TILE_MIN_SIZE)]
        min_tile: usize,
        positions: Vec<usize>,
    },
}

fn build_adapter(
    size: usize,
    width: Option<usize>,
    min_tile: usize,
) -> anyhow::Result<GameAdapter<TicTacToe>> {
    let game = TicTacToe::try_new(size).map_err(|e| anyhow::anyhow!(e))?;
    let layout = TileLayout { min_size: min_tile };
    Ok(match width {
        Some(w) => GameAdapter::with_parent_width(game, layout, w),
        None => GameAdapter::with_layout(game, layout),
    })
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            width,
            min_tile,
        } => {
            let adapter = build_adapter(size, width, min_tile)?;
            info!("Starting a {}x{} game", size, size);
            println!("Type `help` for commands.");
            let mut session = Session::new(adapter);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session.run(stdin.lock(), &mut stdout)?;
        }
        Commands::Replay {
            size,
            width,
            min_tile,
            positions,
        } => {
            let mut adapter = build_adapter(size, width, min_tile)?;
            let count = adapter.item_count();
            let mut grid: TileGrid<TileHolder> = TileGrid::attach(&mut adapter);
            let mut notices = NoticeLog::new();
            for p in positions {
                if p == 0 || p > count {
                    return Err(anyhow::anyhow!(
                        "Position {} is out of range 1..={}",
                        p,
                        count
                    ));
                }
                grid.tap(&mut adapter, p - 1, &mut notices);
            }
            let mut stdout = io::stdout();
            write!(stdout, "{}", tictac::ui::render_board(&grid, size))?;
            for notice in notices.iter() {
                writeln!(stdout, "{}", render_notice(notice))?;
            }
        }
    }
    Ok(())
}
