pub mod app;
pub mod draggable_tile;
pub mod drop_zone;
pub mod tile_face;
pub mod tile_strip;
