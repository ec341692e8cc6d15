// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera and board picking for a tilted top-down board view.
//!
//! A single camera hovers over a 128×128 board at a fixed 60° downward tilt.
//! Each frame the crate works out which board cell lies under the cursor,
//! which part of the board the viewport shows, and how two minimaps should
//! draw and respond to drags. Cursor-at-edge scrolling and minimap dragging
//! move the camera; its position persists between sessions.
//!
//! # Key entry points
//!
//! - [`engine::BoardView`] - owns the camera and runs the per-frame phases
//! - [`input::InputProcessor`] - turns window events into
//!   [`engine::FrameInput`] snapshots and key commands
//! - [`options::Options`] - projection, edge-scroll and minimap tunables
//! - [`settings::Settings`] - key/value store for state kept across sessions
//!
//! # Frame order
//!
//! Camera writers (edge scroll, then the dragged minimap) always run before
//! the readers (cell picking, visible footprint, minimap drawing), so every
//! reader sees this frame's final camera position.

pub mod board;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod minimap;
pub mod options;
pub mod picking;
pub mod settings;
pub mod util;
