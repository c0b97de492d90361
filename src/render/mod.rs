//! Raster rendering subsystem.
//!
//! # Data Flow
//! ```text
//! reelMatrix[0] (row-major spin grid)
//!     → matrix.rs (transpose to draw orientation)
//!     → plan.rs (resolve every cell: sprite or placeholder)
//!     → compositor.rs (black fill, blurred symbol layer,
//!       translucent panel, gradient caption → PNG bytes)
//! ```
//!
//! # Design Decisions
//! - All fetching happens while building the plan; rasterization is pure
//!   and synchronous, so the fallback policy is testable without a network
//! - Rows and columns are read from the grid actually being drawn
//! - Caption glyphs come from the embedded bitmap font in font.rs

pub mod compositor;
pub mod font;
pub mod matrix;
pub mod plan;

pub use compositor::{compose, RenderError, DEFAULT_CAPTION};
pub use matrix::{transpose, SymbolMatrix};
pub use plan::{build_plan, CellArt, DrawPlan};
