//! Terminal UI rendering for ffm.
//!
//! - [render]: the frame layout (header, listing, footer).
//! - [panes]: drawing the listing itself.

pub mod panes;
pub mod render;

pub use render::render;
