pub mod anim;
pub mod drag;
pub mod drop_zone;
pub mod gesture;

pub use drag::{tile_opacity, DragState, DropOutcome};
pub use drop_zone::DropZone;
pub use gesture::{should_begin, GestureTracker};
