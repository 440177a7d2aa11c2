//! Adapter binding a [`GameModel`] to a grid of [`TileView`]s.
//!
//! The grid view asks the adapter how many tiles there are and to create and
//! bind a view per position. Taps come back through [`GameAdapter::on_tap`],
//! which applies the move, checks for a result and either advances the turn
//! or raises an end-of-game notice. Every mutation flags a full re-render.

use alloc::string::ToString;
use log::{debug, info, trace};

use crate::{
    common::{Outcome, TileState},
    config::{BOARD_GRID_MIN_SIZE, RESET_ACTION_LABEL},
    game::GameModel,
    grid::{coordinates_from_position, item_count, Coordinates},
    notice::{Notice, NoticeAction, NoticeDuration, Notifier},
    tile::{TileLayout, TileView},
};

pub struct GameAdapter<G: GameModel> {
    game: G,
    layout: TileLayout,
    parent_width: usize,
    render_pending: bool,
}

impl<G: GameModel> GameAdapter<G> {
    /// Adapter with the default tile layout and parent width.
    pub fn new(game: G) -> Self {
        Self::with_parent_width(game, TileLayout::default(), BOARD_GRID_MIN_SIZE)
    }

    /// Adapter with a custom tile layout and the default parent width.
    pub fn with_layout(game: G, layout: TileLayout) -> Self {
        Self::with_parent_width(game, layout, BOARD_GRID_MIN_SIZE)
    }

    /// Tiles share `parent_width` evenly; see [`GameAdapter::tile_size`].
    pub fn with_parent_width(game: G, layout: TileLayout, parent_width: usize) -> Self {
        Self {
            game,
            layout,
            parent_width,
            render_pending: false,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Mutable access to the game. Callers that change board state should
    /// follow up with [`GameAdapter::notify_data_set_changed`].
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Swap in a different game, returning the old one. The item count
    /// follows the new board size.
    pub fn replace_game(&mut self, game: G) -> G {
        let old = core::mem::replace(&mut self.game, game);
        self.notify_data_set_changed();
        old
    }

    /// Tile size computed from the parent width, before the minimum-size
    /// policy is applied.
    pub fn tile_size(&self) -> usize {
        self.parent_width / self.game.board_size().max(1)
    }

    pub fn layout(&self) -> TileLayout {
        self.layout
    }

    pub fn item_count(&self) -> usize {
        item_count(self.game.board_size())
    }

    pub fn coordinates(&self, position: usize) -> Coordinates {
        coordinates_from_position(position, self.game.board_size())
    }

    /// Build the view for `position`.
    pub fn create_tile<H: TileView>(&self, position: usize) -> H {
        let c = self.coordinates(position);
        H::create(self.layout, self.game.tile(c.row, c.col))
    }

    /// Supply `view` with the data for `position`.
    pub fn bind_tile<H: TileView>(&self, view: &mut H, position: usize) {
        let size = self.tile_size().max(view.min_size());
        view.set_height(size);
        view.set_width(size);

        let coords = self.coordinates(position);
        let outcome = self.game.outcome();
        view.set_state(self.game.tile(coords.row, coords.col));
        view.colour_tile(outcome);
        view.set_tag(Some(coords));
        view.set_tappable(outcome == Outcome::InProgress);
        trace!("bound position {} to {}", position, coords);
    }

    /// Handle a tap on `view`.
    pub fn on_tap<H: TileView, N: Notifier>(&mut self, view: &mut H, notifier: &mut N) {
        let Some(coords) = view.tag() else {
            return;
        };
        let mv = self.game.choose(coords.row, coords.col);
        if mv == TileState::Invalid {
            return;
        }
        debug!("{} played move {}", mv, coords);
        view.set_tappable(false);

        match self.game.check_outcome(coords.row, coords.col) {
            Outcome::InProgress => self.game.next_move(),
            outcome => self.show_win(outcome, notifier),
        }

        self.notify_data_set_changed();
    }

    fn show_win<N: Notifier>(&self, outcome: Outcome, notifier: &mut N) {
        info!("Game over: {}", outcome);
        let notice = Notice::new(outcome.to_string(), NoticeDuration::Long)
            .with_action(RESET_ACTION_LABEL, NoticeAction::Reset);
        notifier.show(notice);
    }

    /// Clear the board and re-render.
    pub fn reset_board(&mut self) {
        info!("Resetting board");
        self.game.reset_board();
        self.notify_data_set_changed();
    }

    /// Run an action carried by a notice.
    pub fn handle_action(&mut self, action: NoticeAction) {
        match action {
            NoticeAction::Reset => self.reset_board(),
        }
    }

    /// Request a full re-render of all tiles.
    pub fn notify_data_set_changed(&mut self) {
        self.render_pending = true;
    }

    /// Consume a pending re-render request.
    pub fn take_pending_render(&mut self) -> bool {
        core::mem::take(&mut self.render_pending)
    }
}
