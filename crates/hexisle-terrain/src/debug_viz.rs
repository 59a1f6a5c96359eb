//! Debug renders of a generation pass: band and height maps seen from above.

mod image;
mod renderers;

pub use self::image::{DebugImage, Rgba};
pub use renderers::{BACKGROUND, band_color, height_color, render_band_map, render_height_map};
