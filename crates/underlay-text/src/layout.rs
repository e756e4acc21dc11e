use crate::direction::ParagraphDirection;

/// Read-only query surface over a host text layout.
///
/// This is the boundary to the host's line-breaking engine: the
/// annotation pipeline only ever asks where lines and character
/// offsets sit, never how they got there. All offsets are byte offsets
/// into the laid-out UTF-8 text; all coordinates are pixels relative
/// to the layout origin.
///
/// The provided `*_without_*` helpers recover the tight glyph-bounding
/// line box from layouts that apply a line-spacing multiplier/additive
/// or extra first/last-line padding.
pub trait TextLayout {
    fn line_count(&self) -> usize;

    /// Line index containing the given byte offset.
    ///
    /// An offset landing exactly on a line start (including the
    /// position just past a `'\n'`) belongs to that next line.
    /// Offsets past the end of text are a contract violation.
    fn line_for_offset(&self, byte_offset: usize) -> usize;

    /// Top of the line box, including any spacing and layout padding.
    fn line_top(&self, line: usize) -> f32;

    /// Bottom of the line box, including any spacing and layout padding.
    fn line_bottom(&self, line: usize) -> f32;

    /// Leftmost pixel of the line's content.
    fn line_left(&self, line: usize) -> f32;

    /// Rightmost pixel of the line's content.
    fn line_right(&self, line: usize) -> f32;

    fn paragraph_direction(&self, line: usize) -> ParagraphDirection;

    /// Horizontal pixel position of the leading edge of the character
    /// at `byte_offset` (trailing edge of the line for the offset just
    /// past its last character).
    fn primary_horizontal(&self, byte_offset: usize) -> f32;

    /// Additive line spacing applied below each line, in pixels.
    fn spacing_add(&self) -> f32 {
        0.0
    }

    /// Multiplicative line spacing applied to each line's height.
    fn spacing_multiplier(&self) -> f32 {
        1.0
    }

    /// Extra space the layout inserted above the first line's tight
    /// box. Non-negative.
    fn top_padding(&self) -> f32 {
        0.0
    }

    /// Extra space the layout inserted below the last line's tight
    /// box. Non-negative.
    fn bottom_padding(&self) -> f32 {
        0.0
    }

    /// Full height of the line box, spacing included.
    fn line_height(&self, line: usize) -> f32 {
        self.line_bottom(line) - self.line_top(line)
    }

    /// Line bottom with the layout's line-spacing contribution
    /// stripped, recovering the tight box bottom.
    ///
    /// Spacing is never added below the last line, so the last line is
    /// returned unchanged.
    fn line_bottom_without_spacing(&self, line: usize) -> f32 {
        let line_bottom = self.line_bottom(line);
        let is_last_line = line + 1 == self.line_count();

        let spacing_add = self.spacing_add();
        let spacing_multiplier = self.spacing_multiplier();
        let has_line_spacing = spacing_add != 0.0 || spacing_multiplier != 1.0;

        if !has_line_spacing || is_last_line {
            return line_bottom;
        }

        let extra = if spacing_multiplier != 1.0 {
            let line_height = self.line_height(line);
            line_height - (line_height - spacing_add) / spacing_multiplier
        } else {
            spacing_add
        };
        line_bottom - extra
    }

    /// Line top with the layout's first-line padding stripped.
    fn line_top_without_padding(&self, line: usize) -> f32 {
        let mut line_top = self.line_top(line);
        if line == 0 {
            line_top += self.top_padding();
        }
        line_top
    }

    /// Line bottom with spacing and last-line padding stripped.
    fn line_bottom_without_padding(&self, line: usize) -> f32 {
        let mut line_bottom = self.line_bottom_without_spacing(line);
        if line + 1 == self.line_count() {
            line_bottom -= self.bottom_padding();
        }
        line_bottom
    }
}
