// crates/pack-layout/src/constraints.rs
use crate::{LayoutError, LayoutResult};
use glam::Vec2;
use pack_core::Edges;

/// DPI every style length is authored against.
pub const DEFAULT_DPI: f32 = 96.0;

/// Space and pixel density a layout pass runs against. A zero width or
/// height asks for the minimum size on that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpi: f32,
    pub baseline_dpi: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            dpi: DEFAULT_DPI,
            baseline_dpi: DEFAULT_DPI,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Zero-sized viewport: lay everything out at its minimum size.
    pub fn minimum() -> Self {
        Self::default()
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_baseline_dpi(mut self, baseline_dpi: f32) -> Self {
        self.baseline_dpi = baseline_dpi;
        self
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Convert an authored length to device pixels, truncating toward zero.
    pub fn scale(&self, value: f32) -> f32 {
        (value * self.dpi / self.baseline_dpi).trunc()
    }

    pub fn scale_edges(&self, edges: Edges) -> Edges {
        edges.map(|value| self.scale(value))
    }

    pub fn validate(&self) -> LayoutResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidViewport(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [("dpi", self.dpi), ("baseline_dpi", self.baseline_dpi)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidViewport(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
