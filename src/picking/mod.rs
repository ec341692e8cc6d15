//! Board picking: which cell lies under the cursor, and which part of the
//! board the viewport shows.
//!
//! Both are derived from rays cast through viewport pixels and intersected
//! with the board plane, and both are recomputed every frame.

mod cell;
mod footprint;

pub use cell::{pick_cell, pick_cell_along, update_cursor_cell};
pub use footprint::VisibleFootprint;
