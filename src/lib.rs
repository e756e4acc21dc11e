//! Underlay: styled background decorations behind spans of text.
//!
//! Facade over the workspace crates:
//! - [`core`]: rects, colors, the recording painter and drawables
//! - [`text`]: the host layout oracle trait and a plain test layout
//! - [`span`]: annotations, predicates, delegates, dispatch and the
//!   per-frame background pass
//! - [`config`]: TOML style configuration
//!
//! Typical host wiring: build a [`DelegateTable`] from style delegates
//! at setup, then on each repaint run a [`BackgroundPass`] over the
//! annotated text and replay the finished [`DisplayList`] on the real
//! surface.

pub use underlay_config as config;
pub use underlay_core as core;
pub use underlay_span as span;
pub use underlay_text as text;

pub use underlay_config::UnderlayConfig;
pub use underlay_core::{
    Color, CompositeDrawable, CornerRadii, DisplayList, Drawable, PaintCommand, Painter, Rect,
    RoundedDrawable, RoundedRect,
};
pub use underlay_span::{
    AnnotatedText, Annotation, AnnotationPredicate, BackgroundPass, DelegateTable, LineGeometry,
    MultiLineRenderer, Renderer, RendererDelegate, RendererPadding, SingleLineRenderer, StyleSheet,
};
pub use underlay_text::{ParagraphDirection, PlainLayout, PlainLayoutOptions, TextLayout};
