use palette::{FromColor, LinSrgba, Srgba};

/// Premultiplied linear-space RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Convenience alias matching Color::rgba(...) widely used in UI code.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgba_u8([r, g, b, a])
    }

    /// Create from sRGB u8 RGBA array (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Create directly from linear RGBA floats and premultiply.
    #[inline]
    pub fn from_lin_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Convert back to sRGB u8 RGBA array (unpremultiplied).
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        let (r, g, b) = if self.a > 0.0001 {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        } else {
            (0.0, 0.0, 0.0)
        };
        let lin = LinSrgba::new(r, g, b, self.a);
        let s: Srgba = Srgba::from_color(lin);
        [
            (s.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (s.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (s.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
            (s.alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Scale the color by an opacity factor.
    ///
    /// Premultiplied storage makes this a uniform scale of all four
    /// channels.
    #[inline]
    pub fn with_opacity(&self, opacity: f32) -> Self {
        let k = opacity.clamp(0.0, 1.0);
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
            a: self.a * k,
        }
    }
}
