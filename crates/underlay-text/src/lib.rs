//! underlay-text: the layout oracle surface for background rendering.
//!
//! The host text-layout engine is treated as a read-only oracle; this
//! crate defines the query trait the annotation pipeline consumes
//! ([`TextLayout`]), paragraph direction detection built on
//! `unicode-bidi`, and [`PlainLayout`], a monospace-advance oracle for
//! tests, demos and headless hosts.

pub mod direction;
pub mod layout;
pub mod plain;

pub use direction::{BaseDirection, ParagraphDirection};
pub use layout::TextLayout;
pub use plain::{PlainLayout, PlainLayoutOptions};
