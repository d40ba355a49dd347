//! Platform-free logic for the table-of-contents wheel and the starfield
//! backdrop. Nothing here touches the DOM; the web frontend feeds pointer
//! samples and timestamps in and draws what comes out.

pub mod active;
pub mod config;
pub mod constants;
pub mod controller;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod heading;
pub mod motion;
pub mod page_scroll;
pub mod render;
pub mod starfield;

pub use active::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use geometry::*;
pub use heading::*;
pub use page_scroll::*;
pub use render::*;
pub use starfield::*;
