// crates/pack-core/src/layout_units.rs
use glam::Vec2;
use std::fmt;

/// One axis of a backend-reported intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// The widget renders at exactly this size
    Fixed(f32),
    /// The widget renders no smaller than this, and may grow
    AtLeast(f32),
}

/// Shorthand for a lower-bounded intrinsic dimension.
pub fn at_least(value: f32) -> Dimension {
    Dimension::AtLeast(value)
}

impl Dimension {
    /// The smallest size this dimension can take.
    pub fn minimum(self) -> f32 {
        match self {
            Dimension::Fixed(value) | Dimension::AtLeast(value) => value,
        }
    }

    /// Resolve against the space a parent offers on this axis.
    pub fn resolve(self, offered: f32) -> f32 {
        match self {
            Dimension::Fixed(value) => value,
            Dimension::AtLeast(value) => value.max(offered),
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Fixed(value)
    }
}

// Lets bare float literals (which default to f64) act as fixed sizes.
impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Fixed(value as f32)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Fixed(value) => write!(f, "{}", value),
            Dimension::AtLeast(value) => write!(f, "at_least({})", value),
        }
    }
}

/// Natural size of a widget as reported by the rendering backend.
/// A missing axis means the widget has no opinion on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntrinsicSize {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

impl IntrinsicSize {
    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self {
            width: Some(width.into()),
            height: Some(height.into()),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Four box edges, in the CSS order top/right/bottom/left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Combined left+right and top+bottom.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.horizontal(), self.vertical())
    }

    /// Top-left corner offset.
    pub fn leading(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }
}

/// Result of the last layout pass for one node. Overwritten wholesale by
/// every layout call; a hidden node keeps a zero-sized record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComputedLayout {
    /// Left edge of the content box, in root coordinates
    pub absolute_content_left: f32,
    /// Top edge of the content box, in root coordinates
    pub absolute_content_top: f32,
    pub content_width: f32,
    pub content_height: f32,
    /// Padding actually applied, already scaled for the viewport DPI
    pub padding: Edges,
}

impl ComputedLayout {
    pub fn new(origin: Vec2, content: Vec2, padding: Edges) -> Self {
        Self {
            absolute_content_left: origin.x,
            absolute_content_top: origin.y,
            content_width: content.x,
            content_height: content.y,
            padding,
        }
    }

    /// Total width, content plus horizontal padding.
    pub fn width(&self) -> f32 {
        self.content_width + self.padding.horizontal()
    }

    /// Total height, content plus vertical padding.
    pub fn height(&self) -> f32 {
        self.content_height + self.padding.vertical()
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.absolute_content_left, self.absolute_content_top)
    }

    pub fn content_size(&self) -> Vec2 {
        Vec2::new(self.content_width, self.content_height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.absolute_content_left += delta.x;
        self.absolute_content_top += delta.y;
    }
}
