//! The grid host: owns one tile view per position and drives the adapter.

use alloc::vec::Vec;

use crate::{
    adapter::GameAdapter,
    game::GameModel,
    notice::{NoticeAction, Notifier},
    tile::TileView,
};

/// Scrollable grid of tile views backed by a [`GameAdapter`].
#[derive(Debug, Clone)]
pub struct TileGrid<H: TileView> {
    tiles: Vec<H>,
}

impl<H: TileView> TileGrid<H> {
    /// Create and bind one view per adapter item.
    pub fn attach<G: GameModel>(adapter: &mut GameAdapter<G>) -> Self {
        let tiles = (0..adapter.item_count())
            .map(|pos| {
                let mut view = adapter.create_tile::<H>(pos);
                adapter.bind_tile(&mut view, pos);
                view
            })
            .collect();
        adapter.take_pending_render();
        Self { tiles }
    }

    /// Rebind every view if the adapter asked for it. Views are recreated
    /// when the item count changed. Returns whether anything was redrawn.
    pub fn refresh<G: GameModel>(&mut self, adapter: &mut GameAdapter<G>) -> bool {
        if !adapter.take_pending_render() {
            return false;
        }
        if self.tiles.len() != adapter.item_count() {
            *self = Self::attach(adapter);
            return true;
        }
        for (pos, view) in self.tiles.iter_mut().enumerate() {
            adapter.bind_tile(view, pos);
        }
        true
    }

    /// Deliver a tap to the view at `position`. Inert views swallow it.
    pub fn tap<G: GameModel, N: Notifier>(
        &mut self,
        adapter: &mut GameAdapter<G>,
        position: usize,
        notifier: &mut N,
    ) {
        if let Some(view) = self.tiles.get_mut(position) {
            if view.is_tappable() {
                adapter.on_tap(view, notifier);
            }
        }
        self.refresh(adapter);
    }

    /// Run a notice action, then redraw.
    pub fn dispatch<G: GameModel>(&mut self, adapter: &mut GameAdapter<G>, action: NoticeAction) {
        adapter.handle_action(action);
        self.refresh(adapter);
    }

    pub fn tile(&self, position: usize) -> Option<&H> {
        self.tiles.get(position)
    }

    pub fn tiles(&self) -> &[H] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
