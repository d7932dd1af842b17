//! Color token parsing for style descriptors.
//!
//! Supports the color forms accepted inside a descriptor:
//!
//! - **Named colors**: `red`, `green`, `blue`, etc. (plus `gray`/`grey`)
//! - **Bright variants**: `bright_red`, `bright_green`, etc.
//! - **256-color palette**: `0` through `255`
//! - **RGB hex**: `#ff6b35` or `#f35` (3 or 6 digit)

use console::Color;

/// A parsed color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index.
    Palette(u8),
    /// True color RGB, downsampled to the 256-color cube when applied.
    Rgb(u8, u8, u8),
}

impl ColorKind {
    /// Parses a single color token.
    ///
    /// Returns `Err` with a human-readable message when the token is not a
    /// recognized color form. The caller decides whether that means "unknown
    /// token" or "malformed color".
    pub fn parse(token: &str) -> Result<Self, String> {
        let token = token.trim();

        if let Some(hex) = token.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if token.chars().all(|c| c.is_ascii_digit()) && !token.is_empty() {
            let index: u16 = token
                .parse()
                .map_err(|_| format!("invalid palette index: {}", token))?;
            if index > 255 {
                return Err(format!("palette index {} out of range (0-255)", index));
            }
            return Ok(ColorKind::Palette(index as u8));
        }

        Self::parse_named(token)
    }

    /// Returns true if the token has the shape of a color literal (hex or
    /// palette index) even if it may fail to parse.
    pub fn looks_like_literal(token: &str) -> bool {
        token.starts_with('#') || token.chars().all(|c| c.is_ascii_digit())
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let expand = |d: &str| {
            u8::from_str_radix(d, 16).map_err(|_| format!("invalid hex digits: #{}", hex))
        };
        match hex.len() {
            3 => {
                let r = expand(&hex[0..1])? * 17;
                let g = expand(&hex[1..2])? * 17;
                let b = expand(&hex[2..3])? * 17;
                Ok(ColorKind::Rgb(r, g, b))
            }
            6 => {
                let r = expand(&hex[0..2])?;
                let g = expand(&hex[2..4])?;
                let b = expand(&hex[4..6])?;
                Ok(ColorKind::Rgb(r, g, b))
            }
            _ => Err(format!("hex color #{} must be 3 or 6 digits", hex)),
        }
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let lower = name.to_ascii_lowercase();

        if let Some(base) = lower.strip_prefix("bright_") {
            // The bright variants live at palette indices 8-15.
            let index = match base {
                "black" => 8,
                "red" => 9,
                "green" => 10,
                "yellow" => 11,
                "blue" => 12,
                "magenta" => 13,
                "cyan" => 14,
                "white" => 15,
                _ => return Err(format!("unknown bright color: bright_{}", base)),
            };
            return Ok(ColorKind::Palette(index));
        }

        let color = match lower.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::White,
            _ => return Err(format!("unknown color name: {}", name)),
        };

        Ok(ColorKind::Named(color))
    }

    /// Converts this color to a `console::Color`.
    pub fn to_console_color(self) -> Color {
        match self {
            ColorKind::Named(c) => c,
            ColorKind::Palette(n) => Color::Color256(n),
            ColorKind::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256(r, g, b)),
        }
    }
}

/// Maps an RGB triple onto the xterm 256-color palette.
///
/// Grayscale values use the 24-step gray ramp (232-255); everything else
/// lands on the 6x6x6 color cube (16-231).
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((u16::from(r) - 8) / 10) as u8;
    }

    let scale = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}
