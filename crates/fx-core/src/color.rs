//! Straight-alpha RGBA color used by particles and render recipes.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse `#RGB`, `#RRGGBB`, `#AARRGGBB` or a basic color name.
    ///
    /// The eight-digit form carries alpha first, matching the way desktop
    /// settings files usually write it.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let Some(hex) = s.strip_prefix('#') else {
            return Self::named(s).ok_or_else(|| ColorError::UnknownName(s.to_string()));
        };
        let invalid = || ColorError::InvalidHex(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::from_rgb8(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => {
                let a = byte(0)? as f32 / 255.0;
                Ok(Self::from_rgb8(byte(2)?, byte(4)?, byte(6)?).with_alpha(a))
            }
            _ => Err(invalid()),
        }
    }

    fn named(name: &str) -> Option<Self> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "white" => (255, 255, 255),
            "black" => (0, 0, 0),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "cyan" => (0, 255, 255),
            "magenta" => (255, 0, 255),
            "orange" => (255, 165, 0),
            "pink" => (255, 192, 203),
            "purple" => (128, 0, 128),
            "gold" => (255, 215, 0),
            "transparent" => return Some(Self::TRANSPARENT),
            _ => return None,
        };
        Some(Self::from_rgb8(rgb.0, rgb.1, rgb.2))
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn scale_alpha(self, k: f32) -> Self {
        Self {
            a: (self.a * k).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Brighten in HSV space; `factor` is a percentage (150 = 50% brighter).
    /// Value overflow above 1.0 is taken out of saturation instead.
    pub fn lighter(self, factor: f32) -> Self {
        if factor <= 0.0 {
            return self;
        }
        if factor < 100.0 {
            return self.darker(10000.0 / factor);
        }
        let (h, mut s, mut v) = self.to_hsv();
        v *= factor / 100.0;
        if v > 1.0 {
            s = (s - (v - 1.0)).max(0.0);
            v = 1.0;
        }
        Self::from_hsv(h, s, v, self.a)
    }

    /// Darken in HSV space; `factor` is a percentage (200 = half as bright).
    pub fn darker(self, factor: f32) -> Self {
        if factor <= 0.0 {
            return self;
        }
        if factor < 100.0 {
            return self.lighter(10000.0 / factor);
        }
        let (h, s, v) = self.to_hsv();
        Self::from_hsv(h, s, v * 100.0 / factor, self.a)
    }

    fn to_hsv(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let s = if max > 0.0 { delta / max } else { 0.0 };
        let h = if delta <= f32::EPSILON {
            0.0
        } else if max == self.r {
            60.0 * ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };
        (h, s, max)
    }

    fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Self {
        let c = v * s;
        let hp = (h / 60.0).rem_euclid(6.0);
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        Self::new(r + m, g + m, b + m, a)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
