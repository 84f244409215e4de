//! # Snapshot Testing Support
//!
//! Utilities for testing the annotation pipeline via `insta` text snapshots
//! and invariant checks.
//!
//! ## Modules
//!
//! - **`render`**: dumps annotations as stable, human-readable text, one
//!   highlight per line with the text it covers
//! - **`invariants`**: runtime checks for span correctness (rows exist, spans
//!   non-empty, in bounds and on char boundaries)

pub mod invariants;
pub mod render;

pub use invariants::check as invariants;
pub use render::render;
