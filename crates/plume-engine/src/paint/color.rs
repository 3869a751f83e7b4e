/// Linear premultiplied RGBA color.
///
/// Invariant: `rgb` components are multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    ///
    /// Markup colors arrive as `[u8; 4]` straight-alpha RGBA, so this is the
    /// usual way into the paint model.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Shorthand for [`from_srgb_u8`](Self::from_srgb_u8) on a byte array.
    #[inline]
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::from_srgb_u8(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation. For `a == 0`, RGB is 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha sRGB bytes, rounded to the nearest value.
    pub fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        [q(r), q(g), q(b), q(a)]
    }
}
