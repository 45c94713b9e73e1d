//! Terminal output: result rendering and progress indication.

pub mod progress;
pub mod reporter;
