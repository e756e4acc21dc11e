//! underlay-core: paint primitives for text background decorations.
//!
//! - geometry: rects and per-corner radii
//! - color: premultiplied linear color with sRGB conversions
//! - painter: display-list recording surface
//! - drawable: bounds-then-draw fill primitives (rounded + composite)

pub mod color;
pub mod drawable;
pub mod geometry;
pub mod painter;

pub use color::Color;
pub use drawable::{ColorFilter, CompositeDrawable, Drawable, RoundedDrawable};
pub use geometry::{CornerRadii, Rect, RoundedRect};
pub use painter::{DisplayList, PaintCommand, Painter};
