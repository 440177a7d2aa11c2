//! Tile views: the rendering unit bound to one board position.

use crate::{
    common::{Outcome, TileState},
    config::DEFAULT_TILE_MIN_SIZE,
    grid::Coordinates,
};

/// Layout a tile view is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    /// Intrinsic minimum width/height of a tile.
    pub min_size: usize,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_TILE_MIN_SIZE,
        }
    }
}

/// Interface implemented by tile renderers.
///
/// A tile view is responsible for:
/// - Showing a tile state
/// - Adjusting its styling once the game is over
/// - Carrying the coordinates it was last bound to
/// - Accepting or ignoring taps
pub trait TileView {
    /// Build a view from a layout, showing `state`.
    fn create(layout: TileLayout, state: TileState) -> Self
    where
        Self: Sized;

    fn set_state(&mut self, state: TileState);

    /// Restyle the tile for the given game outcome.
    fn colour_tile(&mut self, outcome: Outcome);

    /// Intrinsic minimum size.
    fn min_size(&self) -> usize;

    fn set_width(&mut self, width: usize);

    fn set_height(&mut self, height: usize);

    /// Attach coordinates as tile metadata.
    fn set_tag(&mut self, coords: Option<Coordinates>);

    fn tag(&self) -> Option<Coordinates>;

    /// Enable or disable tap handling.
    fn set_tappable(&mut self, tappable: bool);

    fn is_tappable(&self) -> bool;
}

/// Visual styling of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileStyle {
    /// Game still running.
    #[default]
    Playing,
    /// Tile belongs to the winner of a finished game.
    Winner,
    /// Any other tile of a finished game.
    Faded,
}

/// Terminal tile: a fixed-size cell showing `X`, `O` or a blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileHolder {
    state: TileState,
    style: TileStyle,
    min_size: usize,
    width: usize,
    height: usize,
    tag: Option<Coordinates>,
    tappable: bool,
}

impl TileHolder {
    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn style(&self) -> TileStyle {
        self.style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Character shown for the current state.
    pub fn glyph(&self) -> char {
        match self.state {
            TileState::PlayerOne => 'X',
            TileState::PlayerTwo => 'O',
            TileState::Empty | TileState::Invalid => ' ',
        }
    }
}

impl TileView for TileHolder {
    fn create(layout: TileLayout, state: TileState) -> Self {
        Self {
            state,
            style: TileStyle::Playing,
            min_size: layout.min_size,
            width: layout.min_size,
            height: layout.min_size,
            tag: None,
            tappable: false,
        }
    }

    fn set_state(&mut self, state: TileState) {
        self.state = state;
    }

    fn colour_tile(&mut self, outcome: Outcome) {
        self.style = match outcome {
            Outcome::InProgress => TileStyle::Playing,
            _ if outcome.winner().is_some() && outcome.winner() == self.state.owner() => {
                TileStyle::Winner
            }
            _ => TileStyle::Faded,
        };
    }

    fn min_size(&self) -> usize {
        self.min_size
    }

    fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    fn set_tag(&mut self, coords: Option<Coordinates>) {
        self.tag = coords;
    }

    fn tag(&self) -> Option<Coordinates> {
        self.tag
    }

    fn set_tappable(&mut self, tappable: bool) {
        self.tappable = tappable;
    }

    fn is_tappable(&self) -> bool {
        self.tappable
    }
}
