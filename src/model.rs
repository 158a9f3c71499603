//! Core data models for Tile Drop.
//! Tiles are fixed at startup; the only shared mutable state is the strip's
//! scroll gate, driven through a yew reducer.

use std::rc::Rc;
use yew::Reducible;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Swatch colours used by the colour-fill skin, picked by tile index.
const SWATCHES: [&str; 8] = [
    "#e06c75", "#e5c07b", "#98c379", "#56b6c2", "#61afef", "#c678dd", "#d19a66", "#be5046",
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileId(pub String);

impl TileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TileId {
    fn from(value: &str) -> Self {
        TileId(value.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub image_url: String,
    /// Solid fill for the colour skin.
    pub swatch: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl TileCatalog {
    /// The hardcoded eight tiles `a`..`h`.
    pub fn placeholder() -> Self {
        let tiles = ["a", "b", "c", "d", "e", "f", "g", "h"]
            .iter()
            .enumerate()
            .map(|(i, id)| Tile {
                id: TileId::from(*id),
                image_url: PLACEHOLDER_IMAGE.to_owned(),
                swatch: SWATCHES[i % SWATCHES.len()],
            })
            .collect();
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Groups tiles into consecutive columns of at most `rows_per_column`.
    /// The last column may be short. Zero is treated as one.
    pub fn columns(&self, rows_per_column: usize) -> Vec<&[Tile]> {
        self.tiles().chunks(rows_per_column.max(1)).collect()
    }
}

// ---------------- Scroll gate reducer -----------------

/// Owned by the tile strip. `active` is the tile currently being dragged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StripState {
    pub active: Option<TileId>,
    /// Bumped on every accepted transition so effects can key on it.
    pub version: u64,
}

impl StripState {
    pub fn scroll_enabled(&self) -> bool {
        self.active.is_none()
    }

    pub fn any_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_active(&self, id: &TileId) -> bool {
        self.active.as_ref() == Some(id)
    }
}

#[derive(Clone, Debug)]
pub enum StripAction {
    BeginDrag { id: TileId },
    EndDrag { id: TileId },
}

impl Reducible for StripState {
    type Action = StripAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use StripAction::*;
        match action {
            BeginDrag { id } => {
                // At most one tile is active; a second begin is dropped.
                if self.any_active() {
                    return self;
                }
                Rc::new(StripState {
                    active: Some(id),
                    version: self.version.wrapping_add(1),
                })
            }
            EndDrag { id } => {
                if !self.is_active(&id) {
                    return self;
                }
                Rc::new(StripState {
                    active: None,
                    version: self.version.wrapping_add(1),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Rc<StripState>, action: StripAction) -> Rc<StripState> {
        state.reduce(action)
    }

    #[test]
    fn catalog_has_unique_ids() {
        let catalog = TileCatalog::placeholder();
        assert_eq!(catalog.tiles().len(), 8);
        let mut ids: Vec<_> = catalog.tiles().iter().map(|t| t.id.clone()).collect();
        ids.sort_by(|a, b| a.0.cmp(&b.0));
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert!(catalog.tiles().iter().all(|t| t.image_url == PLACEHOLDER_IMAGE));
    }

    #[test]
    fn columns_pair_tiles() {
        let catalog = TileCatalog::placeholder();
        let cols = catalog.columns(2);
        assert_eq!(cols.len(), 4);
        assert_eq!(cols[0][0].id.as_str(), "a");
        assert_eq!(cols[0][1].id.as_str(), "b");
        assert_eq!(cols[3][1].id.as_str(), "h");

        let odd = catalog.columns(3);
        assert_eq!(odd.len(), 3);
        assert_eq!(odd[2].len(), 2);

        assert_eq!(catalog.columns(0).len(), 8);
    }

    #[test]
    fn begin_disables_scroll_and_end_restores_it() {
        let state = Rc::new(StripState::default());
        assert!(state.scroll_enabled());

        let state = reduce(state, StripAction::BeginDrag { id: "a".into() });
        assert!(!state.scroll_enabled());
        assert!(state.is_active(&"a".into()));

        let state = reduce(state, StripAction::EndDrag { id: "a".into() });
        assert!(state.scroll_enabled());
        assert_eq!(state.active, None);
    }

    #[test]
    fn second_begin_is_ignored_while_one_is_active() {
        let state = Rc::new(StripState::default());
        let state = reduce(state, StripAction::BeginDrag { id: "a".into() });
        let version = state.version;
        let state = reduce(state, StripAction::BeginDrag { id: "b".into() });
        assert!(state.is_active(&"a".into()));
        assert!(!state.is_active(&"b".into()));
        assert_eq!(state.version, version);
    }

    #[test]
    fn end_from_inactive_tile_does_not_release_gate() {
        let state = Rc::new(StripState::default());
        let state = reduce(state, StripAction::BeginDrag { id: "a".into() });
        let state = reduce(state, StripAction::EndDrag { id: "b".into() });
        assert!(!state.scroll_enabled());
        let state = reduce(state, StripAction::EndDrag { id: "a".into() });
        assert!(state.scroll_enabled());
    }
}
