use crate::color::Color;
use crate::geometry::{CornerRadii, Rect, RoundedRect};
use crate::painter::Painter;

/// Color filter applied on top of a drawable's configured fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorFilter {
    /// Replace the fill color entirely.
    Tint(Color),
}

/// A fill primitive with mutable paint-time scratch state.
///
/// Bounds, opacity and color filter are set immediately before each
/// `draw` and must not be assumed stable between paint passes;
/// configuration (color, corner radii) is fixed at construction.
pub trait Drawable {
    /// Position the drawable. Edge ordering is not validated; an
    /// inverted rect simply fills nothing when drawn.
    fn set_bounds(&mut self, left: f32, top: f32, right: f32, bottom: f32);

    /// Paint within the last-set bounds.
    fn draw(&self, painter: &mut Painter);

    /// Opacity in `[0, 1]`, applied multiplicatively to the fill.
    fn set_opacity(&mut self, opacity: f32);

    fn set_color_filter(&mut self, filter: Option<ColorFilter>);
}

/// Filled shape with four independently configurable corner radii.
///
/// The atomic paint primitive: every background segment, rounded or
/// square, is one of these with the appropriate `CornerRadii`.
pub struct RoundedDrawable {
    color: Color,
    radii: CornerRadii,
    bounds: Rect,
    opacity: f32,
    filter: Option<ColorFilter>,
}

impl RoundedDrawable {
    pub fn new(color: Color, radii: CornerRadii) -> Self {
        Self {
            color,
            radii,
            bounds: Rect::default(),
            opacity: 1.0,
            filter: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    fn effective_color(&self) -> Color {
        let base = match self.filter {
            Some(ColorFilter::Tint(tint)) => tint,
            None => self.color,
        };
        base.with_opacity(self.opacity)
    }
}

impl Drawable for RoundedDrawable {
    fn set_bounds(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.bounds = Rect::from_ltrb(left, top, right, bottom);
    }

    fn draw(&self, painter: &mut Painter) {
        painter.fill_rounded_rect(
            RoundedRect::new(self.bounds, self.radii),
            self.effective_color(),
        );
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.filter = filter;
    }
}

/// Two-layer drawable: a "back" halo painted behind a "front" fill.
///
/// One `set_bounds` call positions both layers. The front receives the
/// exact bounds; the back grows left/right by `inset` and shrinks
/// top/bottom by the same amount, producing an outline effect behind
/// the front fill. Draw order is back first, front second, so the
/// front always paints on top.
pub struct CompositeDrawable {
    back: Box<dyn Drawable>,
    front: Box<dyn Drawable>,
    inset: f32,
}

impl CompositeDrawable {
    pub const DEFAULT_INSET: f32 = 4.0;

    pub fn new(back: Box<dyn Drawable>, front: Box<dyn Drawable>) -> Self {
        Self::with_inset(back, front, Self::DEFAULT_INSET)
    }

    pub fn with_inset(back: Box<dyn Drawable>, front: Box<dyn Drawable>, inset: f32) -> Self {
        Self { back, front, inset }
    }
}

impl Drawable for CompositeDrawable {
    fn set_bounds(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.back.set_bounds(
            left - self.inset,
            top + self.inset,
            right + self.inset,
            bottom - self.inset,
        );
        self.front.set_bounds(left, top, right, bottom);
    }

    fn draw(&self, painter: &mut Painter) {
        self.back.draw(painter);
        self.front.draw(painter);
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.back.set_opacity(opacity);
        self.front.set_opacity(opacity);
    }

    fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.back.set_color_filter(filter);
        self.front.set_color_filter(filter);
    }
}
