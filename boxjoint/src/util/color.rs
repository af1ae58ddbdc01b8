use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// RGB color, serialized as a `#RRGGBB` hex string
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Palette cycled over the jobs of a layout, one color per case
    pub const DEFAULT_PALETTE: [Color; 8] = [
        Color(0xE6, 0x39, 0x46), // RED
        Color(0x1D, 0x35, 0x57), // NAVY
        Color(0x2A, 0x9D, 0x8F), // TEAL
        Color(0xF4, 0xA2, 0x61), // SANDY
        Color(0x6A, 0x4C, 0x93), // PURPLE
        Color(0x8A, 0xB1, 0x7D), // SAGE
        Color(0xE7, 0x6F, 0x51), // ORANGE
        Color(0x26, 0x46, 0x53), // CHARCOAL
    ];
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color: {s:?}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}
