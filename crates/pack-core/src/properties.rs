// crates/pack-core/src/properties.rs
use crate::{StyleError, StyleResult};
use std::fmt;
use std::str::FromStr;

/// A style value spelled as a CSS-like keyword ("row", "small-caps", ...).
pub trait Keyword: Sized + Copy + PartialEq + 'static {
    /// Property name used in error messages
    const PROPERTY: &'static str;
    const KEYWORDS: &'static [(&'static str, Self)];

    fn parse_keyword(value: &str) -> StyleResult<Self> {
        let wanted = value.trim().replace('_', "-");
        Self::KEYWORDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(&wanted))
            .map(|(_, keyword)| *keyword)
            .ok_or_else(|| StyleError::InvalidKeyword {
                property: Self::PROPERTY,
                value: value.to_string(),
            })
    }

    fn keyword(self) -> &'static str {
        Self::KEYWORDS
            .iter()
            .find(|(_, keyword)| *keyword == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }
}

/// Implements `FromStr` and `Display` for a `Keyword` enum.
macro_rules! keyword_traits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::str::FromStr for $ty {
                type Err = $crate::StyleError;

                fn from_str(value: &str) -> $crate::StyleResult<Self> {
                    <$ty as $crate::Keyword>::parse_keyword(value)
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str($crate::Keyword::keyword(*self))
                }
            }
        )*
    };
}
pub(crate) use keyword_traits;

/// Resolved RGB color with alpha, as handed to the widget backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in 0.0..=1.0
    pub a: f32,
}

/// Opaque color from 8-bit channels.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Parse any CSS color notation: hex, `rgb()`/`rgba()`, `hsl()` or a
    /// named color.
    pub fn parse(input: &str) -> StyleResult<Self> {
        let parsed: csscolorparser::Color = input
            .trim()
            .parse()
            .map_err(|_| StyleError::InvalidColor(input.to_string()))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::rgba(r, g, b, f32::from(a) / 255.0))
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(input: &str) -> StyleResult<Self> {
        Self::parse(input)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Every property a `Style` carries. `Padding` is the four-sided shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Direction,
    Alignment,
    TextAlign,
    TextDirection,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Width,
    Height,
    Flex,
    Visibility,
    Color,
    BackgroundColor,
    FontFamily,
    FontSize,
    FontStyle,
    FontVariant,
    FontWeight,
}

impl Property {
    pub const ALL: [Property; 20] = [
        Property::Direction,
        Property::Alignment,
        Property::TextAlign,
        Property::TextDirection,
        Property::Padding,
        Property::PaddingTop,
        Property::PaddingRight,
        Property::PaddingBottom,
        Property::PaddingLeft,
        Property::Width,
        Property::Height,
        Property::Flex,
        Property::Visibility,
        Property::Color,
        Property::BackgroundColor,
        Property::FontFamily,
        Property::FontSize,
        Property::FontStyle,
        Property::FontVariant,
        Property::FontWeight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Property::Direction => "direction",
            Property::Alignment => "alignment",
            Property::TextAlign => "text_align",
            Property::TextDirection => "text_direction",
            Property::Padding => "padding",
            Property::PaddingTop => "padding_top",
            Property::PaddingRight => "padding_right",
            Property::PaddingBottom => "padding_bottom",
            Property::PaddingLeft => "padding_left",
            Property::Width => "width",
            Property::Height => "height",
            Property::Flex => "flex",
            Property::Visibility => "visibility",
            Property::Color => "color",
            Property::BackgroundColor => "background_color",
            Property::FontFamily => "font_family",
            Property::FontSize => "font_size",
            Property::FontStyle => "font_style",
            Property::FontVariant => "font_variant",
            Property::FontWeight => "font_weight",
        }
    }

    /// Properties that change box geometry and therefore need a new layout.
    pub fn is_geometric(self) -> bool {
        matches!(
            self,
            Property::Direction
                | Property::Alignment
                | Property::Padding
                | Property::PaddingTop
                | Property::PaddingRight
                | Property::PaddingBottom
                | Property::PaddingLeft
                | Property::Width
                | Property::Height
                | Property::Flex
        )
    }

    pub fn is_font(self) -> bool {
        matches!(
            self,
            Property::FontFamily
                | Property::FontSize
                | Property::FontStyle
                | Property::FontVariant
                | Property::FontWeight
        )
    }
}

impl FromStr for Property {
    type Err = StyleError;

    fn from_str(name: &str) -> StyleResult<Self> {
        let wanted = name.trim().replace('-', "_").to_ascii_lowercase();
        Property::ALL
            .iter()
            .copied()
            .find(|property| property.name() == wanted)
            .ok_or_else(|| StyleError::UnknownProperty(name.to_string()))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a pixel quantity, with or without a `px` suffix.
pub(crate) fn parse_number(property: &'static str, value: &str) -> StyleResult<f32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    digits.parse::<f32>().map_err(|_| StyleError::InvalidNumber {
        property,
        value: value.to_string(),
    })
}

/// Reject negative and non-finite lengths instead of clamping them.
pub(crate) fn validate_length(property: &'static str, value: f32) -> StyleResult<f32> {
    if !value.is_finite() {
        return Err(StyleError::NonFiniteValue { property, value });
    }
    if value < 0.0 {
        return Err(StyleError::NegativeValue { property, value });
    }
    Ok(value)
}
