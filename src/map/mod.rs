//! Historical sighting map: data loading and the rendering surface seam.

mod loader;
mod points;
mod surface;

pub use loader::MapLoader;
pub use points::{SightingPoint, sanitize_popup};
pub use surface::{MapSurface, TextMapSurface};
