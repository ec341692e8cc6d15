//! Shared utilities.

/// Axis-aligned screen rectangles.
pub mod rect;
