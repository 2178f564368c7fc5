use crate::extensions::enums::valid_csv;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive};

/// The three kinds of styling a code pair can select.
///
/// Each category owns an alphabet of single-character attributes; the
/// category's own single-character code is the first half of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIterDerive)]
pub enum Category {
    /// Text rendition effects such as bold, italic, or underline.
    #[strum(serialize = "t", to_string = "t")]
    Text,
    /// Foreground colors, SGR parameters 30 through 37.
    #[strum(serialize = "f", to_string = "f")]
    Foreground,
    /// Background colors, SGR parameters 40 through 47.
    #[strum(serialize = "b", to_string = "b")]
    Background,
}

impl Category {
    /// Single character that selects this category inside a code string.
    pub const fn code_char(self) -> char {
        match self {
            Category::Text => 't',
            Category::Foreground => 'f',
            Category::Background => 'b',
        }
    }

    /// Human-readable name used in diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Text => "text effect",
            Category::Foreground => "foreground color",
            Category::Background => "background color",
        }
    }

    /// Every (attribute character, SGR parameter) entry this category owns,
    /// in table order.
    pub fn attributes(self) -> Vec<(char, &'static str)> {
        match self {
            Category::Text => TextEffect::iter()
                .map(|effect| (effect.code_char(), effect.param()))
                .collect(),
            Category::Foreground => BaseColor::iter()
                .map(|color| (color.code_char(), color.fg_param()))
                .collect(),
            Category::Background => BaseColor::iter()
                .map(|color| (color.code_char(), color.bg_param()))
                .collect(),
        }
    }

    /// Comma-joined attribute characters, for "Valid attributes" hints.
    pub fn attribute_csv(self) -> String {
        match self {
            Category::Text => valid_csv::<TextEffect>(),
            Category::Foreground | Category::Background => valid_csv::<BaseColor>(),
        }
    }
}

/// Text rendition effects, the attribute alphabet of [`Category::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIterDerive)]
pub enum TextEffect {
    #[strum(serialize = "R", to_string = "R")]
    Regular,
    #[strum(serialize = "B", to_string = "B")]
    Bold,
    #[strum(serialize = "F", to_string = "F")]
    Faint,
    #[strum(serialize = "I", to_string = "I")]
    Italic,
    #[strum(serialize = "U", to_string = "U")]
    Underline,
    #[strum(serialize = "S", to_string = "S")]
    BlinkSlow,
    #[strum(serialize = "K", to_string = "K")]
    BlinkRapid,
    #[strum(serialize = "L", to_string = "L")]
    LineThrough,
}

impl TextEffect {
    /// Single character that selects this effect after a `t`.
    pub const fn code_char(self) -> char {
        match self {
            TextEffect::Regular => 'R',
            TextEffect::Bold => 'B',
            TextEffect::Faint => 'F',
            TextEffect::Italic => 'I',
            TextEffect::Underline => 'U',
            TextEffect::BlinkSlow => 'S',
            TextEffect::BlinkRapid => 'K',
            TextEffect::LineThrough => 'L',
        }
    }

    /// SGR parameter string for this effect.
    ///
    /// Parameters 7 (swap) and 8 (conceal) are not part of the alphabet;
    /// swapping is exposed through the standalone `SWAP` constant instead.
    pub const fn param(self) -> &'static str {
        match self {
            TextEffect::Regular => "0",
            TextEffect::Bold => "1",
            TextEffect::Faint => "2",
            TextEffect::Italic => "3",
            TextEffect::Underline => "4",
            TextEffect::BlinkSlow => "5",
            TextEffect::BlinkRapid => "6",
            TextEffect::LineThrough => "9",
        }
    }
}

/// The eight base terminal colors shared by [`Category::Foreground`] and
/// [`Category::Background`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIterDerive)]
pub enum BaseColor {
    #[strum(serialize = "K", to_string = "K")]
    Black,
    #[strum(serialize = "R", to_string = "R")]
    Red,
    #[strum(serialize = "G", to_string = "G")]
    Green,
    #[strum(serialize = "Y", to_string = "Y")]
    Yellow,
    #[strum(serialize = "B", to_string = "B")]
    Blue,
    #[strum(serialize = "P", to_string = "P")]
    Purple,
    #[strum(serialize = "C", to_string = "C")]
    Cyan,
    #[strum(serialize = "W", to_string = "W")]
    White,
}

impl BaseColor {
    /// Single character that selects this color after an `f` or a `b`.
    pub const fn code_char(self) -> char {
        match self {
            BaseColor::Black => 'K',
            BaseColor::Red => 'R',
            BaseColor::Green => 'G',
            BaseColor::Yellow => 'Y',
            BaseColor::Blue => 'B',
            BaseColor::Purple => 'P',
            BaseColor::Cyan => 'C',
            BaseColor::White => 'W',
        }
    }

    /// SGR parameter when the color is applied to the foreground.
    pub const fn fg_param(self) -> &'static str {
        match self {
            BaseColor::Black => "30",
            BaseColor::Red => "31",
            BaseColor::Green => "32",
            BaseColor::Yellow => "33",
            BaseColor::Blue => "34",
            BaseColor::Purple => "35",
            BaseColor::Cyan => "36",
            BaseColor::White => "37",
        }
    }

    /// SGR parameter when the color is applied to the background.
    pub const fn bg_param(self) -> &'static str {
        match self {
            BaseColor::Black => "40",
            BaseColor::Red => "41",
            BaseColor::Green => "42",
            BaseColor::Yellow => "43",
            BaseColor::Blue => "44",
            BaseColor::Purple => "45",
            BaseColor::Cyan => "46",
            BaseColor::White => "47",
        }
    }
}
