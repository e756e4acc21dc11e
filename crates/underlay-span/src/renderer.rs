use underlay_core::{Drawable, Painter};
use underlay_text::TextLayout;

use crate::measure::LineGeometry;

/// Shared padding policy for background segments.
///
/// Vertical padding grows the corrected tight line box so there is a
/// gap between the background edge and the glyphs; horizontal padding
/// extends full-width segments past the line content edges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RendererPadding {
    pub horizontal: f32,
    pub vertical: f32,
}

impl RendererPadding {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Top of the background on `line`: tight line box top minus the
    /// vertical padding.
    pub fn line_top(&self, layout: &dyn TextLayout, line: usize) -> f32 {
        layout.line_top_without_padding(line) - self.vertical
    }

    /// Bottom of the background on `line`: tight line box bottom plus
    /// the vertical padding.
    pub fn line_bottom(&self, layout: &dyn TextLayout, line: usize) -> f32 {
        layout.line_bottom_without_padding(line) + self.vertical
    }
}

/// Paints the background for one measured annotation.
///
/// Stateless beyond construction-time configuration; the `&mut self`
/// receiver exists only for the drawables' bounds scratch state.
pub trait Renderer {
    fn draw(&mut self, painter: &mut Painter, layout: &dyn TextLayout, geometry: LineGeometry);
}

/// Draws the background for text that starts and ends on the same line.
pub struct SingleLineRenderer {
    padding: RendererPadding,
    drawable: Box<dyn Drawable>,
}

impl SingleLineRenderer {
    pub fn new(padding: RendererPadding, drawable: Box<dyn Drawable>) -> Self {
        Self { padding, drawable }
    }
}

impl Renderer for SingleLineRenderer {
    fn draw(&mut self, painter: &mut Painter, layout: &dyn TextLayout, geometry: LineGeometry) {
        let line_top = self.padding.line_top(layout, geometry.start_line);
        let line_bottom = self.padding.line_bottom(layout, geometry.start_line);
        // min/max of start/end since RTL direction can swap them.
        let left = geometry.start_offset.min(geometry.end_offset);
        let right = geometry.start_offset.max(geometry.end_offset);
        self.drawable.set_bounds(left, line_top, right, line_bottom);
        self.drawable.draw(painter);
    }
}

/// Draws the background for text that starts and ends on different
/// lines: a start piece to the first line's trailing edge, unrounded
/// full-width middle pieces, and an end piece from the last line's
/// leading edge.
pub struct MultiLineRenderer {
    padding: RendererPadding,
    drawable_left: Box<dyn Drawable>,
    drawable_mid: Box<dyn Drawable>,
    drawable_right: Box<dyn Drawable>,
}

impl MultiLineRenderer {
    pub fn new(
        padding: RendererPadding,
        drawable_left: Box<dyn Drawable>,
        drawable_mid: Box<dyn Drawable>,
        drawable_right: Box<dyn Drawable>,
    ) -> Self {
        Self {
            padding,
            drawable_left,
            drawable_mid,
            drawable_right,
        }
    }

    /// First line of a multiline annotation. The swap test keeps the
    /// correctly shaped rounded corner on the true leading edge under
    /// either paragraph direction.
    fn draw_start(&mut self, painter: &mut Painter, start: f32, top: f32, end: f32, bottom: f32) {
        if start > end {
            self.drawable_right.set_bounds(end, top, start, bottom);
            self.drawable_right.draw(painter);
        } else {
            self.drawable_left.set_bounds(start, top, end, bottom);
            self.drawable_left.draw(painter);
        }
    }

    /// Last line of a multiline annotation, mirrored convention.
    fn draw_end(&mut self, painter: &mut Painter, start: f32, top: f32, end: f32, bottom: f32) {
        if start > end {
            self.drawable_left.set_bounds(end, top, start, bottom);
            self.drawable_left.draw(painter);
        } else {
            self.drawable_right.set_bounds(start, top, end, bottom);
            self.drawable_right.draw(painter);
        }
    }
}

impl Renderer for MultiLineRenderer {
    fn draw(&mut self, painter: &mut Painter, layout: &dyn TextLayout, geometry: LineGeometry) {
        let h = self.padding.horizontal;

        // First line: from the measured start to the trailing edge.
        let start_dir = layout.paragraph_direction(geometry.start_line);
        let line_end_offset = if start_dir.is_rtl() {
            layout.line_left(geometry.start_line) - h
        } else {
            layout.line_right(geometry.start_line) + h
        };
        let line_top = self.padding.line_top(layout, geometry.start_line);
        let line_bottom = self.padding.line_bottom(layout, geometry.start_line);
        self.draw_start(
            painter,
            geometry.start_offset,
            line_top,
            line_end_offset,
            line_bottom,
        );

        // Middle lines span the full line width.
        for line in geometry.start_line + 1..geometry.end_line {
            let line_top = self.padding.line_top(layout, line);
            let line_bottom = self.padding.line_bottom(layout, line);
            self.drawable_mid.set_bounds(
                layout.line_left(line) - h,
                line_top,
                layout.line_right(line) + h,
                line_bottom,
            );
            self.drawable_mid.draw(painter);
        }

        // Last line: from the leading edge to the measured end.
        let end_dir = layout.paragraph_direction(geometry.end_line);
        let line_start_offset = if end_dir.is_rtl() {
            layout.line_right(geometry.end_line) + h
        } else {
            layout.line_left(geometry.end_line) - h
        };
        let line_top = self.padding.line_top(layout, geometry.end_line);
        let line_bottom = self.padding.line_bottom(layout, geometry.end_line);
        self.draw_end(
            painter,
            line_start_offset,
            line_top,
            geometry.end_offset,
            line_bottom,
        );
    }
}
