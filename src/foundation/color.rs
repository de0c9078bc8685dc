use crate::foundation::error::{UserpicError, UserpicResult};

/// Straight-alpha RGBA8 color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> UserpicResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(UserpicError::validation(format!("invalid hex color '{s}'")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| UserpicError::validation(format!("invalid hex color '{s}'")))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 0xff },
        })
    }

    /// Lowercase `#rrggbb` form, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Host appearance the theme pair resolves against.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum Appearance {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

/// A color pair resolved per host appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ThemeColor {
    /// Color used under [`Appearance::Light`].
    pub light: Rgba8,
    /// Color used under [`Appearance::Dark`].
    pub dark: Rgba8,
}

impl ThemeColor {
    /// Theme pair from explicit light and dark colors.
    pub const fn new(light: Rgba8, dark: Rgba8) -> Self {
        Self { light, dark }
    }

    /// Same color under both appearances.
    pub const fn uniform(color: Rgba8) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    /// Color for the given appearance.
    pub fn resolve(self, appearance: Appearance) -> Rgba8 {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }
}
