use tracing::trace;
use underlay_text::TextLayout;

use crate::annotation::{AnnotatedText, Annotation, AttachedSpan, SpanError};

/// Derived per-pass geometry for one annotation: line span plus the
/// measured horizontal pixel offsets of its logical start and end.
///
/// Ephemeral by design — recomputed on every paint pass, never cached
/// across edits. Under RTL paragraph direction `start_offset` can sit
/// to the right of `end_offset`; renderers resolve that with min/max
/// and swap tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    pub start_line: usize,
    pub end_line: usize,
    pub start_offset: f32,
    pub end_offset: f32,
}

/// Measure an attached span against the layout oracle.
///
/// The edge offsets get a tiny asymmetric padding, signed by the
/// paragraph direction of the respective line, so the background never
/// touches glyph edges: the start edge moves one `horizontal_padding`
/// toward the leading side, the end edge one toward the trailing side.
pub fn measure_span(
    span: &AttachedSpan,
    layout: &dyn TextLayout,
    horizontal_padding: f32,
) -> LineGeometry {
    let start_line = layout.line_for_offset(span.range.start);
    let end_line = layout.line_for_offset(span.range.end);
    debug_assert!(start_line <= end_line);

    let start_offset = layout.primary_horizontal(span.range.start)
        - layout.paragraph_direction(start_line).sign() * horizontal_padding;
    let end_offset = layout.primary_horizontal(span.range.end)
        + layout.paragraph_direction(end_line).sign() * horizontal_padding;

    trace!(
        key = span.annotation.key(),
        value = span.annotation.value(),
        start_line,
        end_line,
        "measured annotation span"
    );

    LineGeometry {
        start_line,
        end_line,
        start_offset,
        end_offset,
    }
}

/// Measure by annotation identity, failing fast if it is not attached.
pub fn measure_annotation(
    annotated: &AnnotatedText,
    annotation: &Annotation,
    layout: &dyn TextLayout,
    horizontal_padding: f32,
) -> Result<LineGeometry, SpanError> {
    let span = annotated
        .span_of(annotation)
        .ok_or_else(|| SpanError::Detached {
            key: annotation.key().to_owned(),
            value: annotation.value().to_owned(),
        })?;
    Ok(measure_span(span, layout, horizontal_padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use underlay_text::{BaseDirection, PlainLayout, PlainLayoutOptions};

    fn attached(text: &str, start: usize, end_inclusive: usize) -> (AnnotatedText, PlainLayout) {
        let mut annotated = AnnotatedText::new(text);
        annotated
            .attach_inclusive(Annotation::new("k", "v"), start, end_inclusive, 0)
            .unwrap();
        (annotated, PlainLayout::new(text))
    }

    #[test]
    fn single_line_measure_with_padding() {
        let (annotated, layout) = attached("Some text", 0, 5);
        let g = measure_span(&annotated.spans()[0], &layout, 1.0);
        assert_eq!(g.start_line, 0);
        assert_eq!(g.end_line, 0);
        // 0 - 1 and 6 glyphs * 8px + 1.
        assert_eq!(g.start_offset, -1.0);
        assert_eq!(g.end_offset, 49.0);
    }

    #[test]
    fn measures_across_forced_break() {
        let (annotated, layout) = attached("Some text\nSome text 2", 0, 13);
        let g = measure_span(&annotated.spans()[0], &layout, 1.0);
        assert_eq!(g.start_line, 0);
        assert_eq!(g.end_line, 1);
    }

    #[test]
    fn end_exactly_at_newline_extends_to_next_line() {
        // Inclusive end 9 is the '\n'; its half-open end lands on the
        // next line's start, which owns that offset.
        let (annotated, layout) = attached("Some text\nSome text 2", 0, 9);
        let g = measure_span(&annotated.spans()[0], &layout, 1.0);
        assert_eq!(g.start_line, 0);
        assert_eq!(g.end_line, 1);
    }

    #[test]
    fn rtl_padding_flips_sign() {
        let text = "אבג אבג";
        let mut annotated = AnnotatedText::new(text);
        annotated
            .attach(Annotation::new("k", "v"), 0..text.len(), 0)
            .unwrap();
        let layout = PlainLayout::with_options(
            text,
            PlainLayoutOptions {
                base_direction: BaseDirection::Auto,
                ..PlainLayoutOptions::default()
            },
        );
        let g = measure_span(&annotated.spans()[0], &layout, 1.0);
        // RTL: logical start is the right edge, padded further right;
        // logical end is the left edge, padded further left.
        assert!(g.start_offset > g.end_offset);
        assert_eq!(g.start_offset, layout.line_right(0) + 1.0);
        assert_eq!(g.end_offset, layout.line_left(0) - 1.0);
    }

    #[test]
    fn detached_annotation_fails_fast() {
        let (annotated, layout) = attached("Some text", 0, 5);
        let ghost = Annotation::new("k", "ghost");
        let err = measure_annotation(&annotated, &ghost, &layout, 1.0).unwrap_err();
        assert!(matches!(err, SpanError::Detached { .. }));
    }

    #[test]
    fn attached_annotation_measures_by_identity() {
        let (annotated, layout) = attached("Some text", 0, 5);
        let g = measure_annotation(&annotated, &Annotation::new("k", "v"), &layout, 1.0).unwrap();
        assert_eq!(g.start_line, 0);
    }
}
