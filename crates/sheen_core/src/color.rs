//! Colors and two-stop gradients
//!
//! Channels are stored as 8-bit values, the precision theme definitions are
//! written in. Interpolation rounds back to 8 bits, so blending the same pair
//! with the same factor always yields the same bits.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color literal cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color literal")]
    Empty,
    #[error("invalid hex color `#{0}`")]
    InvalidHex(String),
    #[error("invalid color function `{0}`")]
    InvalidFunction(String),
    #[error("unknown color `{0}`")]
    Unknown(String),
}

/// RGBA color with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Build a color from floating point channels in `0.0..=1.0`
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit_to_channel(r),
            g: unit_to_channel(g),
            b: unit_to_channel(b),
            a: unit_to_channel(a),
        }
    }

    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }

    pub fn with_alpha_f32(mut self, alpha: f32) -> Self {
        self.a = unit_to_channel(alpha);
        self
    }

    /// Multiply the alpha channel by `factor`
    pub fn scale_alpha(mut self, factor: f32) -> Self {
        self.a = unit_to_channel(self.alpha_f32() * factor);
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Linear interpolation between two colors, alpha included.
    ///
    /// `t <= 0` returns `from` and `t >= 1` returns `to` untouched. A `NaN`
    /// factor is treated as "not started" and returns `from`.
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        if t.is_nan() || t <= 0.0 {
            return *from;
        }
        if t >= 1.0 {
            return *to;
        }
        Color {
            r: mix_channel(from.r, to.r, t),
            g: mix_channel(from.g, to.g, t),
            b: mix_channel(from.b, to.b, t),
            a: mix_channel(from.a, to.a, t),
        }
    }

    /// Scale lightness and saturation by `factor` (GTK `shade()` semantics)
    pub fn shade(self, factor: f32) -> Color {
        if !factor.is_finite() {
            return self;
        }
        let (h, l, s) = rgb_to_hls(self);
        let l = (l * factor).clamp(0.0, 1.0);
        let s = (s * factor).clamp(0.0, 1.0);
        let (r, g, b) = hls_to_rgb(h, l, s);
        Color::from_rgba_f32(r, g, b, self.alpha_f32())
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise
    pub fn to_hex_string(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }

    /// Parse a CSS-style color literal.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` (alpha in `0..=1`), `transparent`, `white` and
    /// `black`.
    pub fn parse(input: &str) -> Result<Color, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(hex.to_string()));
        }

        if let Some(args) = function_args(s, "rgba") {
            return parse_rgb_args(&args, true)
                .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()));
        }
        if let Some(args) = function_args(s, "rgb") {
            return parse_rgb_args(&args, false)
                .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()));
        }

        match s.to_ascii_lowercase().as_str() {
            "transparent" => Ok(Color::TRANSPARENT),
            "white" => Ok(Color::WHITE),
            "black" => Ok(Color::BLACK),
            _ => Err(ColorParseError::Unknown(s.to_string())),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

/// Two-stop vertical gradient, `start` at the top edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorGradient {
    pub start: Color,
    pub stop: Color,
}

impl ColorGradient {
    pub const fn new(start: Color, stop: Color) -> Self {
        Self { start, stop }
    }

    /// A gradient whose two stops are the same color
    pub const fn solid(color: Color) -> Self {
        Self {
            start: color,
            stop: color,
        }
    }

    pub fn is_solid(&self) -> bool {
        self.start == self.stop
    }

    /// Interpolate both stops with [`Color::lerp`]
    pub fn lerp(from: &ColorGradient, to: &ColorGradient, t: f32) -> ColorGradient {
        ColorGradient {
            start: Color::lerp(&from.start, &to.start, t),
            stop: Color::lerp(&from.stop, &to.stop, t),
        }
    }

    pub fn scale_alpha(self, factor: f32) -> Self {
        Self {
            start: self.start.scale_alpha(factor),
            stop: self.stop.scale_alpha(factor),
        }
    }
}

#[inline]
fn mix_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn unit_to_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Returns the comma separated arguments of `name(...)`, if `s` has that shape
fn function_args(s: &str, name: &str) -> Option<Vec<String>> {
    let rest = s.get(..name.len())?;
    if !rest.eq_ignore_ascii_case(name) {
        return None;
    }
    let inner = s[name.len()..].trim_start().strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(|a| a.trim().to_string()).collect())
}

fn parse_rgb_args(args: &[String], with_alpha: bool) -> Option<Color> {
    let expected = if with_alpha { 4 } else { 3 };
    if args.len() != expected {
        return None;
    }

    let channel = |arg: &str| -> Option<u8> {
        let value = match arg.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f32>().ok()? / 100.0 * 255.0,
            None => arg.parse::<f32>().ok()?,
        };
        value.is_finite().then(|| value.round().clamp(0.0, 255.0) as u8)
    };

    let r = channel(&args[0])?;
    let g = channel(&args[1])?;
    let b = channel(&args[2])?;
    let a = if with_alpha {
        let alpha = args[3].parse::<f32>().ok()?;
        if !alpha.is_finite() {
            return None;
        }
        unit_to_channel(alpha)
    } else {
        0xFF
    };

    Some(Color::rgba(r, g, b, a))
}

fn rgb_to_hls(color: Color) -> (f32, f32, f32) {
    let r = color.r as f32 / 255.0;
    let g = color.g as f32 / 255.0;
    let b = color.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, l, 0.0);
    }

    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let mut h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    (h, l, s)
}

fn hls_to_rgb(h: f32, l: f32, s: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    let component = |hue: f32| -> f32 {
        let hue = hue.rem_euclid(360.0);
        if hue < 60.0 {
            m1 + (m2 - m1) * hue / 60.0
        } else if hue < 180.0 {
            m2
        } else if hue < 240.0 {
            m1 + (m2 - m1) * (240.0 - hue) / 60.0
        } else {
            m1
        }
    };

    (component(h + 120.0), component(h), component(h - 120.0))
}
