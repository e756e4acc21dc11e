/// Axis-aligned rectangle in pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect from left/top/right/bottom edges.
    ///
    /// Edge ordering is not validated: `left > right` produces a
    /// negative-width rect, which the painter records as-is (it simply
    /// fills nothing). Degenerate zero-width rects are legal.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            w: right - left,
            h: bottom - top,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shift by an offset, returning the moved rect.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Per-corner radii: top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub tl: f32,
    pub tr: f32,
    pub br: f32,
    pub bl: f32,
}

impl CornerRadii {
    pub fn new(tl: f32, tr: f32, br: f32, bl: f32) -> Self {
        Self { tl, tr, br, bl }
    }

    /// All four corners share one radius.
    pub fn uniform(r: f32) -> Self {
        Self::new(r, r, r, r)
    }

    /// Square corners.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Outer-left corners rounded only; the left piece of a wrapped span.
    pub fn left_edge(r: f32) -> Self {
        Self::new(r, 0.0, 0.0, r)
    }

    /// Outer-right corners rounded only; the right piece of a wrapped span.
    pub fn right_edge(r: f32) -> Self {
        Self::new(0.0, r, r, 0.0)
    }
}

/// Rectangle paired with corner radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: CornerRadii,
}

impl RoundedRect {
    pub fn new(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }
}
