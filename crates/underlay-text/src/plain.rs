use core::ops::Range;

use unicode_linebreak::{BreakOpportunity, linebreaks};
use unicode_segmentation::UnicodeSegmentation;

use crate::direction::{BaseDirection, ParagraphDirection};
use crate::layout::TextLayout;

/// Knobs for [`PlainLayout`].
#[derive(Debug, Clone, Copy)]
pub struct PlainLayoutOptions {
    /// Monospace advance per grapheme cluster, in pixels.
    pub advance: f32,
    /// Tight line box height, in pixels.
    pub line_height: f32,
    /// Wrap width; `None` wraps only at explicit newlines.
    pub max_width: Option<f32>,
    /// Paragraph base direction hint.
    pub base_direction: BaseDirection,
    pub spacing_add: f32,
    pub spacing_multiplier: f32,
    pub top_padding: f32,
    pub bottom_padding: f32,
}

impl Default for PlainLayoutOptions {
    fn default() -> Self {
        Self {
            advance: 8.0,
            line_height: 16.0,
            max_width: None,
            base_direction: BaseDirection::Auto,
            spacing_add: 0.0,
            spacing_multiplier: 1.0,
            top_padding: 0.0,
            bottom_padding: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
struct PlainLine {
    /// Byte range of the line, including a trailing `'\n'` if present.
    range: Range<usize>,
    /// Byte offset past the last visible character (excludes `'\n'`).
    content_end: usize,
    /// Content width in pixels.
    width: f32,
    direction: ParagraphDirection,
}

/// Monospace-advance implementation of the layout oracle.
///
/// Every grapheme cluster advances by a fixed amount; paragraphs split
/// on `'\n'` (the newline belongs to the line it terminates) and
/// optionally wrap greedily at Unicode line-break opportunities with a
/// grapheme fallback for overlong words. RTL paragraphs are laid out
/// right-aligned with mirrored horizontal positions. Not a shaping
/// engine: it exists so the pipeline can be driven and asserted on
/// without a host.
#[derive(Debug)]
pub struct PlainLayout {
    text: String,
    opts: PlainLayoutOptions,
    lines: Vec<PlainLine>,
    layout_width: f32,
}

impl PlainLayout {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, PlainLayoutOptions::default())
    }

    pub fn with_options(text: impl Into<String>, opts: PlainLayoutOptions) -> Self {
        let text = text.into();
        let mut lines = Vec::new();

        let mut para_start = 0usize;
        for (idx, ch) in text.char_indices() {
            if ch == '\n' {
                Self::layout_paragraph(&text, para_start..idx, true, &opts, &mut lines);
                para_start = idx + ch.len_utf8();
            }
        }
        Self::layout_paragraph(&text, para_start..text.len(), false, &opts, &mut lines);

        let layout_width = lines.iter().map(|l| l.width).fold(0.0f32, f32::max);
        Self {
            text,
            opts,
            lines,
            layout_width,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn grapheme_width(opts: &PlainLayoutOptions, s: &str) -> f32 {
        s.graphemes(true).count() as f32 * opts.advance
    }

    /// Lay out one paragraph (no embedded newlines). `has_newline`
    /// extends the final emitted line's range over the terminator.
    fn layout_paragraph(
        full_text: &str,
        range: Range<usize>,
        has_newline: bool,
        opts: &PlainLayoutOptions,
        out_lines: &mut Vec<PlainLine>,
    ) {
        let paragraph = &full_text[range.clone()];
        let direction = ParagraphDirection::detect(paragraph, opts.base_direction);

        let mut starts: Vec<usize> = Vec::new();
        match opts.max_width {
            None => starts.push(0),
            Some(max_width) => {
                // Greedy wrap: last fitting break opportunity, falling
                // back to grapheme boundaries for unbreakable words.
                let break_points: Vec<usize> = linebreaks(paragraph)
                    .filter(|&(offset, op)| {
                        offset < paragraph.len() && op == BreakOpportunity::Allowed
                    })
                    .map(|(offset, _)| offset)
                    .collect();

                let mut local_start = 0usize;
                starts.push(0);
                while local_start < paragraph.len() {
                    // Remainder fits: it stays on the current line.
                    if Self::grapheme_width(opts, &paragraph[local_start..]) <= max_width {
                        break;
                    }
                    let mut best_end = None;
                    for &bp in break_points.iter().filter(|&&bp| bp > local_start) {
                        let width =
                            Self::grapheme_width(opts, &paragraph[local_start..bp]);
                        if width <= max_width {
                            best_end = Some(bp);
                        } else {
                            break;
                        }
                    }
                    if best_end.is_none() {
                        // Fit as many graphemes as possible, minimum one.
                        let mut end = None;
                        for (idx, g) in paragraph[local_start..].grapheme_indices(true) {
                            let candidate = local_start + idx + g.len();
                            let width =
                                Self::grapheme_width(opts, &paragraph[local_start..candidate]);
                            if width <= max_width || end.is_none() {
                                end = Some(candidate);
                            }
                            if width > max_width {
                                break;
                            }
                        }
                        best_end = end;
                    }
                    match best_end {
                        Some(end) if end < paragraph.len() => {
                            starts.push(end);
                            local_start = end;
                        }
                        _ => break,
                    }
                }
            }
        }

        for (i, &local_start) in starts.iter().enumerate() {
            let local_end = starts.get(i + 1).copied().unwrap_or(paragraph.len());
            let is_final = i + 1 == starts.len();
            let content_end = range.start + local_end;
            let line_end = if is_final && has_newline {
                content_end + 1
            } else {
                content_end
            };
            out_lines.push(PlainLine {
                range: (range.start + local_start)..line_end,
                content_end,
                width: Self::grapheme_width(opts, &paragraph[local_start..local_end]),
                direction,
            });
        }
    }

    /// Spaced height of a line box: spacing applies below every line
    /// except the last.
    fn spaced_height(&self, line: usize) -> f32 {
        if line + 1 == self.lines.len() {
            self.opts.line_height
        } else {
            self.opts.line_height * self.opts.spacing_multiplier + self.opts.spacing_add
        }
    }
}

impl TextLayout for PlainLayout {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_for_offset(&self, byte_offset: usize) -> usize {
        debug_assert!(byte_offset <= self.text.len(), "offset past end of text");
        let last = self.lines.len().saturating_sub(1);
        self.lines
            .iter()
            .position(|l| byte_offset < l.range.end)
            .unwrap_or(last)
    }

    fn line_top(&self, line: usize) -> f32 {
        if line == 0 {
            return 0.0;
        }
        let mut top = self.opts.top_padding;
        for i in 0..line {
            top += self.spaced_height(i);
        }
        top
    }

    fn line_bottom(&self, line: usize) -> f32 {
        let mut bottom = self.opts.top_padding;
        for i in 0..=line {
            bottom += self.spaced_height(i);
        }
        if line + 1 == self.lines.len() {
            bottom += self.opts.bottom_padding;
        }
        bottom
    }

    fn line_left(&self, line: usize) -> f32 {
        let l = &self.lines[line];
        if l.direction.is_rtl() {
            self.layout_width - l.width
        } else {
            0.0
        }
    }

    fn line_right(&self, line: usize) -> f32 {
        let l = &self.lines[line];
        if l.direction.is_rtl() {
            self.layout_width
        } else {
            l.width
        }
    }

    fn paragraph_direction(&self, line: usize) -> ParagraphDirection {
        self.lines[line].direction
    }

    fn primary_horizontal(&self, byte_offset: usize) -> f32 {
        let line_index = self.line_for_offset(byte_offset);
        let line = &self.lines[line_index];
        // The newline itself has no advance; clamp to the visible end.
        let clamped = byte_offset.clamp(line.range.start, line.content_end);
        let prefix = Self::grapheme_width(&self.opts, &self.text[line.range.start..clamped]);
        if line.direction.is_rtl() {
            self.line_right(line_index) - prefix
        } else {
            self.line_left(line_index) + prefix
        }
    }

    fn spacing_add(&self) -> f32 {
        self.opts.spacing_add
    }

    fn spacing_multiplier(&self) -> f32 {
        self.opts.spacing_multiplier
    }

    fn top_padding(&self) -> f32 {
        self.opts.top_padding
    }

    fn bottom_padding(&self) -> f32 {
        self.opts.bottom_padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> PlainLayoutOptions {
        PlainLayoutOptions::default()
    }

    #[test]
    fn splits_on_newline_and_keeps_terminator() {
        let l = PlainLayout::new("Some text\nSome text 2");
        assert_eq!(l.line_count(), 2);
        assert_eq!(l.line_for_offset(0), 0);
        assert_eq!(l.line_for_offset(9), 0); // the '\n' itself
        assert_eq!(l.line_for_offset(10), 1); // first char after it
        assert_eq!(l.line_for_offset(21), 1); // end of text
    }

    #[test]
    fn monospace_horizontal_positions() {
        let l = PlainLayout::new("Some text\nSome text 2");
        assert_eq!(l.primary_horizontal(0), 0.0);
        assert_eq!(l.primary_horizontal(4), 32.0);
        // Offset 14 is "Some|" on line 1.
        assert_eq!(l.primary_horizontal(14), 32.0);
        assert_eq!(l.line_right(0), 72.0);
        assert_eq!(l.line_right(1), 88.0);
    }

    #[test]
    fn newline_offset_sits_at_trailing_edge() {
        let l = PlainLayout::new("ab\ncd");
        assert_eq!(l.primary_horizontal(2), 16.0);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let l = PlainLayout::with_options(
            "aaa bbb ccc",
            PlainLayoutOptions {
                max_width: Some(40.0),
                ..opts()
            },
        );
        // "aaa " is 4 advances (32px), "aaa bbb " is 8 (64px) > 40.
        assert_eq!(l.line_count(), 3);
        assert_eq!(l.line_for_offset(4), 1);
        assert_eq!(l.line_for_offset(8), 2);
    }

    #[test]
    fn overlong_word_breaks_at_graphemes() {
        let l = PlainLayout::with_options(
            "aaaaaa",
            PlainLayoutOptions {
                max_width: Some(16.0),
                ..opts()
            },
        );
        assert_eq!(l.line_count(), 3);
    }

    #[test]
    fn rtl_paragraph_is_right_aligned() {
        let l = PlainLayout::new("אבג\nabcdef");
        assert!(l.paragraph_direction(0).is_rtl());
        assert!(!l.paragraph_direction(1).is_rtl());
        // Layout width comes from the longer LTR line (6 * 8).
        assert_eq!(l.line_right(0), 48.0);
        assert_eq!(l.line_left(0), 48.0 - 24.0);
        // Logical start of the RTL line sits at its right edge.
        assert_eq!(l.primary_horizontal(0), 48.0);
    }

    #[test]
    fn vertical_metrics_respect_spacing_and_padding() {
        let l = PlainLayout::with_options(
            "a\nb\nc",
            PlainLayoutOptions {
                spacing_add: 4.0,
                top_padding: 3.0,
                bottom_padding: 5.0,
                ..opts()
            },
        );
        assert_eq!(l.line_top(0), 0.0);
        assert_eq!(l.line_bottom(0), 3.0 + 20.0);
        assert_eq!(l.line_top(1), 3.0 + 20.0);
        // Last line: no spacing below, bottom padding added.
        assert_eq!(l.line_bottom(2), 3.0 + 20.0 + 20.0 + 16.0 + 5.0);
        // The oracle helpers recover the tight box.
        assert_eq!(l.line_bottom_without_spacing(0), 3.0 + 16.0);
        assert_eq!(l.line_top_without_padding(0), 3.0);
        assert_eq!(l.line_bottom_without_padding(2), 3.0 + 40.0 + 16.0);
    }

    #[test]
    fn empty_text_still_has_one_line() {
        let l = PlainLayout::new("");
        assert_eq!(l.line_count(), 1);
        assert_eq!(l.line_for_offset(0), 0);
        assert_eq!(l.primary_horizontal(0), 0.0);
    }
}
