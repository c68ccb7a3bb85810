//! Font descriptors handed to the widget backend.
//!
//! Font resolution itself belongs to the backend; on this side a font is a
//! plain value object, compared by value.

use crate::properties::{keyword_traits, Keyword};
use std::fmt;

/// Family name the backend maps to its platform UI font.
pub const SYSTEM: &str = "system";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontVariant {
    #[default]
    Normal,
    SmallCaps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl Keyword for FontStyle {
    const PROPERTY: &'static str = "font_style";
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("normal", FontStyle::Normal),
        ("italic", FontStyle::Italic),
        ("oblique", FontStyle::Oblique),
    ];
}

impl Keyword for FontVariant {
    const PROPERTY: &'static str = "font_variant";
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("normal", FontVariant::Normal),
        ("small-caps", FontVariant::SmallCaps),
    ];
}

impl Keyword for FontWeight {
    const PROPERTY: &'static str = "font_weight";
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("normal", FontWeight::Normal), ("bold", FontWeight::Bold)];
}

keyword_traits!(FontStyle, FontVariant, FontWeight);

/// A fully merged font description.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name, or `SYSTEM` for the platform default
    pub family: String,

    /// Size in points; `None` lets the backend pick its default size
    pub size: Option<f32>,

    pub style: FontStyle,
    pub variant: FontVariant,
    pub weight: FontWeight,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: SYSTEM.to_string(),
            size: None,
            style: FontStyle::Normal,
            variant: FontVariant::Normal,
            weight: FontWeight::Normal,
        }
    }
}

impl Font {
    pub fn new(
        family: impl Into<String>,
        size: f32,
        style: FontStyle,
        variant: FontVariant,
        weight: FontWeight,
    ) -> Self {
        Self {
            family: family.into(),
            size: Some(size),
            style,
            variant,
            weight,
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_variant(mut self, variant: FontVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.style != FontStyle::Normal {
            parts.push(self.style.to_string());
        }
        if self.variant != FontVariant::Normal {
            parts.push(self.variant.to_string());
        }
        if self.weight != FontWeight::Normal {
            parts.push(self.weight.to_string());
        }
        match self.size {
            Some(size) => parts.push(format!("{}pt", size)),
            None => parts.push("default size".to_string()),
        }
        parts.push(self.family.clone());
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_keywords() {
        assert_eq!("small-caps".parse::<FontVariant>().unwrap(), FontVariant::SmallCaps);
        assert_eq!("small_caps".parse::<FontVariant>().unwrap(), FontVariant::SmallCaps);
        assert_eq!("BOLD".parse::<FontWeight>().unwrap(), FontWeight::Bold);
        assert!("heavy".parse::<FontWeight>().is_err());
        assert_eq!(FontStyle::Italic.to_string(), "italic");
    }

    #[test]
    fn test_font_equality() {
        let built = Font::default()
            .with_family("Roboto")
            .with_size(12.0)
            .with_variant(FontVariant::SmallCaps)
            .with_weight(FontWeight::Bold);
        let direct = Font::new(
            "Roboto",
            12.0,
            FontStyle::Normal,
            FontVariant::SmallCaps,
            FontWeight::Bold,
        );
        assert_eq!(built, direct);
        assert_ne!(built, Font::default());
    }

    #[test]
    fn test_font_display() {
        let font = Font::default().with_family("Roboto").with_size(12.0).with_weight(FontWeight::Bold);
        assert_eq!(font.to_string(), "bold 12pt Roboto");
        assert_eq!(Font::default().to_string(), "default size system");
    }
}
