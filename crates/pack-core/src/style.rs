// crates/pack-core/src/style.rs

use crate::properties::{keyword_traits, parse_number, validate_length, Keyword};
use crate::{Color, Edges, Font, FontStyle, FontVariant, FontWeight, Property, StyleError, StyleResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Row,
    Column,
}

/// Cross-axis placement of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Keyword for Direction {
    const PROPERTY: &'static str = "direction";
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("row", Direction::Row), ("column", Direction::Column)];
}

impl Keyword for Alignment {
    const PROPERTY: &'static str = "alignment";
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("top", Alignment::Top),
        ("bottom", Alignment::Bottom),
        ("left", Alignment::Left),
        ("right", Alignment::Right),
        ("center", Alignment::Center),
    ];
}

impl Keyword for TextAlign {
    const PROPERTY: &'static str = "text_align";
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("left", TextAlign::Left),
        ("right", TextAlign::Right),
        ("center", TextAlign::Center),
        ("justify", TextAlign::Justify),
    ];
}

impl Keyword for TextDirection {
    const PROPERTY: &'static str = "text_direction";
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("ltr", TextDirection::Ltr), ("rtl", TextDirection::Rtl)];
}

impl Keyword for Visibility {
    const PROPERTY: &'static str = "visibility";
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("visible", Visibility::Visible), ("hidden", Visibility::Hidden)];
}

keyword_traits!(Direction, Alignment, TextAlign, TextDirection, Visibility);

impl Direction {
    pub fn is_row(self) -> bool {
        self == Direction::Row
    }
}

/// A call the style bridge must make on the widget backend. Values are
/// already resolved: defaults applied, colors parsed, fonts merged.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleCommand {
    SetColor(Color),
    SetBackgroundColor(Color),
    SetFont(Font),
    SetAlignment(TextAlign),
    SetHidden(bool),
    /// Geometry changed; the tree needs a new layout pass
    Refresh,
}

impl StyleCommand {
    /// Name of the backend call this command maps to.
    pub fn name(&self) -> &'static str {
        match self {
            StyleCommand::SetColor(_) => "set_color",
            StyleCommand::SetBackgroundColor(_) => "set_background_color",
            StyleCommand::SetFont(_) => "set_font",
            StyleCommand::SetAlignment(_) => "set_alignment",
            StyleCommand::SetHidden(_) => "set_hidden",
            StyleCommand::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for StyleCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleCommand::SetColor(color) | StyleCommand::SetBackgroundColor(color) => {
                write!(f, "{}({})", self.name(), color)
            }
            StyleCommand::SetFont(font) => write!(f, "{}({})", self.name(), font),
            StyleCommand::SetAlignment(alignment) => write!(f, "{}({})", self.name(), alignment),
            StyleCommand::SetHidden(hidden) => write!(f, "{}({})", self.name(), hidden),
            StyleCommand::Refresh => write!(f, "{}()", self.name()),
        }
    }
}

/// Declarative Pack style for one node.
///
/// Lengths are in baseline-DPI pixels; the layout engine scales them for
/// the viewport. Every mutation is validated up front and reports the
/// backend command it triggers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    direction: Direction,
    alignment: Option<Alignment>,
    text_align: Option<TextAlign>,
    text_direction: TextDirection,
    padding: Edges,
    width: Option<f32>,
    height: Option<f32>,
    flex: f32,
    visibility: Visibility,
    color: Option<Color>,
    background_color: Option<Color>,
    font_family: Option<String>,
    font_size: Option<f32>,
    font_style: Option<FontStyle>,
    font_variant: Option<FontVariant>,
    font_weight: Option<FontWeight>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    // Getters

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn text_align(&self) -> Option<TextAlign> {
        self.text_align
    }

    /// Explicit `text_align`, or the start edge of the text direction.
    pub fn resolved_text_align(&self) -> TextAlign {
        match (self.text_align, self.text_direction) {
            (Some(align), _) => align,
            (None, TextDirection::Rtl) => TextAlign::Right,
            (None, TextDirection::Ltr) => TextAlign::Left,
        }
    }

    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }

    pub fn padding(&self) -> Edges {
        self.padding
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn flex(&self) -> f32 {
        self.flex
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn has_font(&self) -> bool {
        self.font_family.is_some()
            || self.font_size.is_some()
            || self.font_style.is_some()
            || self.font_variant.is_some()
            || self.font_weight.is_some()
    }

    /// Font sub-properties merged over the system defaults.
    pub fn font(&self) -> Font {
        let defaults = Font::default();
        Font {
            family: self.font_family.clone().unwrap_or(defaults.family),
            size: self.font_size.or(defaults.size),
            style: self.font_style.unwrap_or(defaults.style),
            variant: self.font_variant.unwrap_or(defaults.variant),
            weight: self.font_weight.unwrap_or(defaults.weight),
        }
    }

    // Setters

    pub fn set_direction(&mut self, direction: Direction) -> Option<StyleCommand> {
        self.direction = direction;
        self.apply(Property::Direction)
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> Option<StyleCommand> {
        self.alignment = Some(alignment);
        self.apply(Property::Alignment)
    }

    pub fn set_text_align(&mut self, text_align: TextAlign) -> Option<StyleCommand> {
        self.text_align = Some(text_align);
        self.apply(Property::TextAlign)
    }

    pub fn set_text_direction(&mut self, text_direction: TextDirection) -> Option<StyleCommand> {
        self.text_direction = text_direction;
        self.apply(Property::TextDirection)
    }

    pub fn set_padding(&mut self, padding: f32) -> StyleResult<Option<StyleCommand>> {
        self.set_padding_edges(Edges::uniform(padding))
    }

    pub fn set_padding_edges(&mut self, padding: Edges) -> StyleResult<Option<StyleCommand>> {
        let name = Property::Padding.name();
        self.padding = Edges {
            top: validate_length(name, padding.top)?,
            right: validate_length(name, padding.right)?,
            bottom: validate_length(name, padding.bottom)?,
            left: validate_length(name, padding.left)?,
        };
        Ok(self.apply(Property::Padding))
    }

    pub fn set_padding_top(&mut self, value: f32) -> StyleResult<Option<StyleCommand>> {
        self.padding.top = validate_length(Property::PaddingTop.name(), value)?;
        Ok(self.apply(Property::PaddingTop))
    }

    pub fn set_padding_right(&mut self, value: f32) -> StyleResult<Option<StyleCommand>> {
        self.padding.right = validate_length(Property::PaddingRight.name(), value)?;
        Ok(self.apply(Property::PaddingRight))
    }

    pub fn set_padding_bottom(&mut self, value: f32) -> StyleResult<Option<StyleCommand>> {
        self.padding.bottom = validate_length(Property::PaddingBottom.name(), value)?;
        Ok(self.apply(Property::PaddingBottom))
    }

    pub fn set_padding_left(&mut self, value: f32) -> StyleResult<Option<StyleCommand>> {
        self.padding.left = validate_length(Property::PaddingLeft.name(), value)?;
        Ok(self.apply(Property::PaddingLeft))
    }

    pub fn set_width(&mut self, width: f32) -> StyleResult<Option<StyleCommand>> {
        self.width = Some(validate_length(Property::Width.name(), width)?);
        Ok(self.apply(Property::Width))
    }

    pub fn set_height(&mut self, height: f32) -> StyleResult<Option<StyleCommand>> {
        self.height = Some(validate_length(Property::Height.name(), height)?);
        Ok(self.apply(Property::Height))
    }

    pub fn set_flex(&mut self, flex: f32) -> StyleResult<Option<StyleCommand>> {
        self.flex = validate_length(Property::Flex.name(), flex)?;
        Ok(self.apply(Property::Flex))
    }

    pub fn set_visibility(&mut self, visibility: Visibility) -> Option<StyleCommand> {
        self.visibility = visibility;
        self.apply(Property::Visibility)
    }

    pub fn set_color(&mut self, color: Color) -> Option<StyleCommand> {
        self.color = Some(color);
        self.apply(Property::Color)
    }

    pub fn set_background_color(&mut self, color: Color) -> Option<StyleCommand> {
        self.background_color = Some(color);
        self.apply(Property::BackgroundColor)
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> Option<StyleCommand> {
        self.font_family = Some(family.into());
        self.apply(Property::FontFamily)
    }

    pub fn set_font_size(&mut self, size: f32) -> StyleResult<Option<StyleCommand>> {
        self.font_size = Some(validate_length(Property::FontSize.name(), size)?);
        Ok(self.apply(Property::FontSize))
    }

    pub fn set_font_style(&mut self, style: FontStyle) -> Option<StyleCommand> {
        self.font_style = Some(style);
        self.apply(Property::FontStyle)
    }

    pub fn set_font_variant(&mut self, variant: FontVariant) -> Option<StyleCommand> {
        self.font_variant = Some(variant);
        self.apply(Property::FontVariant)
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) -> Option<StyleCommand> {
        self.font_weight = Some(weight);
        self.apply(Property::FontWeight)
    }

    /// Set a property from its textual form, e.g. `("padding_top", "10")`.
    pub fn set(&mut self, name: &str, value: &str) -> StyleResult<Option<StyleCommand>> {
        let property: Property = name.parse()?;
        self.set_property(property, value)
    }

    pub fn set_property(
        &mut self,
        property: Property,
        value: &str,
    ) -> StyleResult<Option<StyleCommand>> {
        let name = property.name();
        match property {
            Property::Direction => Ok(self.set_direction(value.parse()?)),
            Property::Alignment => Ok(self.set_alignment(value.parse()?)),
            Property::TextAlign => Ok(self.set_text_align(value.parse()?)),
            Property::TextDirection => Ok(self.set_text_direction(value.parse()?)),
            Property::Padding => self.set_padding_edges(parse_edges(value)?),
            Property::PaddingTop => self.set_padding_top(parse_number(name, value)?),
            Property::PaddingRight => self.set_padding_right(parse_number(name, value)?),
            Property::PaddingBottom => self.set_padding_bottom(parse_number(name, value)?),
            Property::PaddingLeft => self.set_padding_left(parse_number(name, value)?),
            Property::Width => self.set_width(parse_number(name, value)?),
            Property::Height => self.set_height(parse_number(name, value)?),
            Property::Flex => self.set_flex(parse_number(name, value)?),
            Property::Visibility => Ok(self.set_visibility(value.parse()?)),
            Property::Color => Ok(self.set_color(value.parse()?)),
            Property::BackgroundColor => Ok(self.set_background_color(value.parse()?)),
            Property::FontFamily => Ok(self.set_font_family(value.trim())),
            Property::FontSize => self.set_font_size(parse_number(name, value)?),
            Property::FontStyle => Ok(self.set_font_style(value.parse()?)),
            Property::FontVariant => Ok(self.set_font_variant(value.parse()?)),
            Property::FontWeight => Ok(self.set_font_weight(value.parse()?)),
        }
    }

    /// Return a property to its default (unset) value.
    pub fn reset(&mut self, property: Property) -> Option<StyleCommand> {
        match property {
            Property::Direction => self.direction = Direction::default(),
            Property::Alignment => self.alignment = None,
            Property::TextAlign => self.text_align = None,
            Property::TextDirection => self.text_direction = TextDirection::default(),
            Property::Padding => self.padding = Edges::ZERO,
            Property::PaddingTop => self.padding.top = 0.0,
            Property::PaddingRight => self.padding.right = 0.0,
            Property::PaddingBottom => self.padding.bottom = 0.0,
            Property::PaddingLeft => self.padding.left = 0.0,
            Property::Width => self.width = None,
            Property::Height => self.height = None,
            Property::Flex => self.flex = 0.0,
            Property::Visibility => self.visibility = Visibility::default(),
            Property::Color => self.color = None,
            Property::BackgroundColor => self.background_color = None,
            Property::FontFamily => self.font_family = None,
            Property::FontSize => self.font_size = None,
            Property::FontStyle => self.font_style = None,
            Property::FontVariant => self.font_variant = None,
            Property::FontWeight => self.font_weight = None,
        }
        self.apply(property)
    }

    // Builders

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.set_alignment(alignment);
        self
    }

    pub fn with_text_align(mut self, text_align: TextAlign) -> Self {
        self.set_text_align(text_align);
        self
    }

    pub fn with_text_direction(mut self, text_direction: TextDirection) -> Self {
        self.set_text_direction(text_direction);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.set_visibility(visibility);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.set_background_color(color);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.set_font_family(family);
        self
    }

    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.set_font_style(style);
        self
    }

    pub fn with_font_variant(mut self, variant: FontVariant) -> Self {
        self.set_font_variant(variant);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.set_font_weight(weight);
        self
    }

    pub fn with_padding(mut self, padding: f32) -> StyleResult<Self> {
        self.set_padding(padding)?;
        Ok(self)
    }

    pub fn with_padding_top(mut self, value: f32) -> StyleResult<Self> {
        self.set_padding_top(value)?;
        Ok(self)
    }

    pub fn with_padding_right(mut self, value: f32) -> StyleResult<Self> {
        self.set_padding_right(value)?;
        Ok(self)
    }

    pub fn with_padding_bottom(mut self, value: f32) -> StyleResult<Self> {
        self.set_padding_bottom(value)?;
        Ok(self)
    }

    pub fn with_padding_left(mut self, value: f32) -> StyleResult<Self> {
        self.set_padding_left(value)?;
        Ok(self)
    }

    pub fn with_width(mut self, width: f32) -> StyleResult<Self> {
        self.set_width(width)?;
        Ok(self)
    }

    pub fn with_height(mut self, height: f32) -> StyleResult<Self> {
        self.set_height(height)?;
        Ok(self)
    }

    pub fn with_flex(mut self, flex: f32) -> StyleResult<Self> {
        self.set_flex(flex)?;
        Ok(self)
    }

    pub fn with_font_size(mut self, size: f32) -> StyleResult<Self> {
        self.set_font_size(size)?;
        Ok(self)
    }

    // Bridge commands

    /// Command for a single property in its current state. Unset optional
    /// values (colors) produce nothing.
    pub fn apply(&self, property: Property) -> Option<StyleCommand> {
        if property.is_geometric() {
            return Some(StyleCommand::Refresh);
        }
        if property.is_font() {
            return Some(StyleCommand::SetFont(self.font()));
        }
        match property {
            Property::TextAlign | Property::TextDirection => {
                Some(StyleCommand::SetAlignment(self.resolved_text_align()))
            }
            Property::Visibility => Some(StyleCommand::SetHidden(self.is_hidden())),
            Property::Color => self.color.map(StyleCommand::SetColor),
            Property::BackgroundColor => self.background_color.map(StyleCommand::SetBackgroundColor),
            _ => None,
        }
    }

    /// Every backend call needed to bring a widget in line with this style,
    /// one per backend property.
    pub fn reapply(&self) -> Vec<StyleCommand> {
        let mut commands = vec![
            StyleCommand::SetAlignment(self.resolved_text_align()),
            StyleCommand::SetHidden(self.is_hidden()),
        ];
        if let Some(color) = self.color {
            commands.push(StyleCommand::SetColor(color));
        }
        if let Some(color) = self.background_color {
            commands.push(StyleCommand::SetBackgroundColor(color));
        }
        if self.has_font() {
            commands.push(StyleCommand::SetFont(self.font()));
        }
        commands
    }
}

/// CSS-style padding shorthand: one to four space-separated lengths.
fn parse_edges(value: &str) -> StyleResult<Edges> {
    let name = Property::Padding.name();
    let parts = value
        .split_whitespace()
        .map(|part| parse_number(name, part))
        .collect::<StyleResult<Vec<f32>>>()?;
    match parts.as_slice() {
        [all] => Ok(Edges::uniform(*all)),
        [vertical, horizontal] => Ok(Edges {
            top: *vertical,
            right: *horizontal,
            bottom: *vertical,
            left: *horizontal,
        }),
        [top, horizontal, bottom] => Ok(Edges {
            top: *top,
            right: *horizontal,
            bottom: *bottom,
            left: *horizontal,
        }),
        [top, right, bottom, left] => Ok(Edges {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        }),
        _ => Err(StyleError::InvalidNumber {
            property: name,
            value: value.to_string(),
        }),
    }
}
