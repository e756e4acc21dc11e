//! underlay-span: annotation-to-geometry pipeline for styled text
//! backgrounds.
//!
//! Given a host layout oracle and a set of tagged ranges over text,
//! this crate measures each range into line/offset geometry, resolves
//! which registered renderers apply via predicate chains, and paints
//! rounded multi-segment backgrounds that stay visually connected
//! across line wraps and flip correctly under right-to-left paragraph
//! direction.

pub mod annotation;
pub mod delegate;
pub mod dispatch;
pub mod measure;
pub mod pass;
pub mod predicate;
pub mod renderer;
pub mod style;

pub use annotation::{AnnotatedText, Annotation, AttachedSpan, SpanError};
pub use delegate::RendererDelegate;
pub use dispatch::DelegateTable;
pub use measure::{LineGeometry, measure_annotation, measure_span};
pub use pass::BackgroundPass;
pub use predicate::{AnnotationPredicate, FnPredicate, KeyPredicate, ValuePredicate};
pub use renderer::{MultiLineRenderer, Renderer, RendererPadding, SingleLineRenderer};
pub use style::{
    MARKED_FAILED_VALUE, MARKED_VALUE, STYLE_ANNOTATION_KEY, StyleSheet, double_delegate,
    failed_annotation, marked_annotation, marked_delegate,
};
