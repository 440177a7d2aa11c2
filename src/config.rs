/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 3;
/// Largest board the reference engine accepts.
pub const MAX_BOARD_SIZE: usize = 16;
/// Parent width assumed when the host does not report one.
pub const BOARD_GRID_MIN_SIZE: usize = 24;
/// Smallest width/height a tile renders at.
pub const DEFAULT_TILE_MIN_SIZE: usize = 3;
/// Label of the action carried by end-of-game notices.
pub const RESET_ACTION_LABEL: &str = "RESET";
