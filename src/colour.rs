use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A colour in the sRGB space, 8 bits per channel
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A colour string that could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid colour {0:?}, expected #RRGGBB or #RGB")]
pub struct ColourParseError(pub String);

impl Colour {
    /// Create a new colour; r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Create a new colour; r, g, and b range from 0.0 to 1.0 and are clamped to it
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Colour {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Create a grey; g ranges from 0 to 255
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour { r: g, g, b: g }
    }

    /// Parse `#RRGGBB` or the shorthand `#RGB`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Colour, ColourParseError> {
        let err = || ColourParseError(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match digits.len() {
            6 => Ok(Colour {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 17);
                Ok(Colour {
                    r: short(&digits[0..1])?,
                    g: short(&digits[1..2])?,
                    b: short(&digits[2..3])?,
                })
            }
            _ => Err(err()),
        }
    }

    /// Format as `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Mix `self` over `under` with the given coverage, 0 leaving `under` untouched
    /// and 255 replacing it
    pub fn blend_over(&self, under: Colour, coverage: u8) -> Colour {
        let a = coverage as u32;
        let mix = |top: u8, bottom: u8| -> u8 {
            ((top as u32 * a + bottom as u32 * (255 - a) + 127) / 255) as u8
        };
        Colour {
            r: mix(self.r, under.r),
            g: mix(self.g, under.g),
            b: mix(self.b, under.b),
        }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl From<Colour> for image::Rgb<u8> {
    fn from(c: Colour) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl From<image::Rgb<u8>> for Colour {
    fn from(p: image::Rgb<u8>) -> Self {
        let [r, g, b] = p.0;
        Colour::new_rgb_bytes(r, g, b)
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&value)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_hex()
    }
}

impl std::str::FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::from_hex(s)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey_bytes(0);
    pub const WHITE: Colour = Colour::new_grey_bytes(255);
    /// The warm off-white slides are painted on by default
    pub const PARCHMENT: Colour = Colour::new_rgb_bytes(0xF9, 0xF6, 0xEF);
    /// The near-black slide text is drawn in by default
    pub const CHARCOAL: Colour = Colour::new_rgb_bytes(0x28, 0x28, 0x28);
}
