use core::ops::Range;

use thiserror::Error;

/// Contract violations around span attachment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    #[error("span range {start}..{end} exceeds text length {len}")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("annotation ({key}, {value}) is not attached to this text")]
    Detached { key: String, value: String },
}

/// A logical (key, value) tag. Independent of any visual rendering;
/// the value is matched by predicates to pick renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    key: String,
    value: String,
}

impl Annotation {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One annotation attached to a concrete byte range, with opaque host
/// flags passed through to predicates unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedSpan {
    pub annotation: Annotation,
    /// Half-open byte range over the owning text.
    pub range: Range<usize>,
    pub flags: u32,
}

/// A text buffer owning its attached annotations.
///
/// Annotations are immutable once attached and may overlap freely;
/// iteration follows attachment order, which is also dispatch order
/// per annotation.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedText {
    text: String,
    spans: Vec<AttachedSpan>,
}

impl AnnotatedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attach over a half-open byte range.
    pub fn attach(
        &mut self,
        annotation: Annotation,
        range: Range<usize>,
        flags: u32,
    ) -> Result<(), SpanError> {
        if range.start > range.end || range.end > self.text.len() {
            return Err(SpanError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: self.text.len(),
            });
        }
        self.spans.push(AttachedSpan {
            annotation,
            range,
            flags,
        });
        Ok(())
    }

    /// Attach with an inclusive end byte offset (the last byte of the
    /// final character in the span).
    pub fn attach_inclusive(
        &mut self,
        annotation: Annotation,
        start: usize,
        end: usize,
        flags: u32,
    ) -> Result<(), SpanError> {
        self.attach(annotation, start..end + 1, flags)
    }

    pub fn spans(&self) -> &[AttachedSpan] {
        &self.spans
    }

    /// Find the first attached span carrying this exact annotation.
    pub fn span_of(&self, annotation: &Annotation) -> Option<&AttachedSpan> {
        self.spans.iter().find(|s| &s.annotation == annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_inclusive_extends_past_last_byte() {
        let mut t = AnnotatedText::new("Some text");
        t.attach_inclusive(Annotation::new("k", "v"), 0, 5, 0).unwrap();
        assert_eq!(t.spans()[0].range, 0..6);
    }

    #[test]
    fn out_of_bounds_attach_is_rejected() {
        let mut t = AnnotatedText::new("ab");
        let err = t.attach(Annotation::new("k", "v"), 0..9, 0).unwrap_err();
        assert_eq!(
            err,
            SpanError::OutOfBounds {
                start: 0,
                end: 9,
                len: 2
            }
        );
    }

    #[test]
    fn lookup_by_annotation_identity() {
        let mut t = AnnotatedText::new("abcdef");
        let a = Annotation::new("k", "first");
        let b = Annotation::new("k", "second");
        t.attach(a.clone(), 0..3, 0).unwrap();
        t.attach(b.clone(), 2..5, 7).unwrap();
        assert_eq!(t.span_of(&b).unwrap().range, 2..5);
        assert_eq!(t.span_of(&b).unwrap().flags, 7);
        assert!(t.span_of(&Annotation::new("k", "missing")).is_none());
    }

    #[test]
    fn overlapping_spans_are_kept_in_attachment_order() {
        let mut t = AnnotatedText::new("Some text");
        t.attach(Annotation::new("k", "a"), 0..9, 0).unwrap();
        t.attach(Annotation::new("k", "b"), 0..4, 0).unwrap();
        let values: Vec<_> = t.spans().iter().map(|s| s.annotation.value()).collect();
        assert_eq!(values, ["a", "b"]);
    }
}
