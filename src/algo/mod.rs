//! Whole-mesh passes built on the edit primitives.
//!
//! - **Triangulation**: fan-triangulate every face, with progress reporting

pub mod progress;
mod triangulate;

pub use progress::Progress;
pub use triangulate::triangulate_with_progress;
