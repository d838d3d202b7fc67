//! Sixteen-colour terminal palette with intensity helpers.
//!
//! The first eight colours are "low intensity"; adding 8 yields the bright
//! variant of the same hue (red → light red, brown → yellow, …).

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Colour {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    Yellow = 14,
    White = 15,
    /// Cycles through random colours every turn.
    Shimmering = 16,
    /// No colour assigned.
    #[default]
    Undefined = 255,
}

impl Colour {
    const INTENSITY_BIT: u8 = 8;

    /// True for one of the sixteen fixed palette entries.
    pub const fn is_palette(self) -> bool {
        (self as u8) < 16
    }

    /// Bright half of the palette.
    pub const fn is_high(self) -> bool {
        self.is_palette() && (self as u8) >= Self::INTENSITY_BIT
    }

    /// Same hue at low intensity. Non-palette colours are returned unchanged.
    pub fn to_low(self) -> Colour {
        if self.is_high() {
            Self::from_repr(self as u8 - Self::INTENSITY_BIT).unwrap_or(self)
        } else {
            self
        }
    }

    /// Same hue at high intensity. Non-palette colours are returned unchanged.
    pub fn to_high(self) -> Colour {
        if self.is_palette() && !self.is_high() {
            Self::from_repr(self as u8 + Self::INTENSITY_BIT).unwrap_or(self)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_round_trip_per_hue() {
        assert_eq!(Colour::Red.to_high(), Colour::LightRed);
        assert_eq!(Colour::LightRed.to_low(), Colour::Red);
        assert_eq!(Colour::Brown.to_high(), Colour::Yellow);
        assert_eq!(Colour::LightGrey.to_high(), Colour::White);
        assert_eq!(Colour::Magenta.to_high(), Colour::LightMagenta);
    }

    #[test]
    fn promotion_is_idempotent() {
        assert_eq!(Colour::LightRed.to_high(), Colour::LightRed);
        assert_eq!(Colour::Red.to_low(), Colour::Red);
    }

    #[test]
    fn special_colours_have_no_intensity() {
        assert!(!Colour::Shimmering.is_high());
        assert_eq!(Colour::Shimmering.to_high(), Colour::Shimmering);
        assert_eq!(Colour::Undefined.to_low(), Colour::Undefined);
    }
}
