use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictac::{
    random_open_tile, GameAdapter, GameModel, NoticeLog, TicTacToe, TileGrid, TileHolder,
    DEFAULT_BOARD_SIZE,
};

fn main() -> anyhow::Result<()> {
    tictac::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_BOARD_SIZE,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let game = TicTacToe::try_new(size).map_err(|e| anyhow::anyhow!(e))?;
    let mut adapter = GameAdapter::new(game);
    let mut grid: TileGrid<TileHolder> = TileGrid::attach(&mut adapter);
    let mut notices = NoticeLog::new();

    while !adapter.game().outcome().is_over() {
        let Some(c) = random_open_tile(adapter.game(), &mut rng) else {
            break;
        };
        let pos = c.to_position(size);
        grid.tap(&mut adapter, pos, &mut notices);
    }

    let snapshot = adapter.game().snapshot();
    let result = json!({
        "outcome": snapshot.outcome,
        "moves": snapshot.moves_played,
        "board": snapshot.tiles,
        "notices": notices.iter().map(|n| n.message.clone()).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
