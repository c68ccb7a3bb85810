// crates/pack-layout/src/flexbox.rs
use glam::Vec2;
use pack_core::{Alignment, Edges};

/// Main-axis component of `v`.
pub fn main_axis(v: Vec2, is_row: bool) -> f32 {
    if is_row {
        v.x
    } else {
        v.y
    }
}

pub fn cross_axis(v: Vec2, is_row: bool) -> f32 {
    if is_row {
        v.y
    } else {
        v.x
    }
}

/// Build a vector from main/cross components.
pub fn from_axes(main: f32, cross: f32, is_row: bool) -> Vec2 {
    if is_row {
        Vec2::new(main, cross)
    } else {
        Vec2::new(cross, main)
    }
}

/// Leading and trailing padding along the main axis.
pub fn main_padding(padding: &Edges, is_row: bool) -> (f32, f32) {
    if is_row {
        (padding.left, padding.right)
    } else {
        (padding.top, padding.bottom)
    }
}

pub fn cross_padding(padding: &Edges, is_row: bool) -> (f32, f32) {
    if is_row {
        (padding.top, padding.bottom)
    } else {
        (padding.left, padding.right)
    }
}

/// A visible child as seen by its parent's main axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexItem {
    /// Minimum content size along the main axis
    pub min_main: f32,
    /// Leading plus trailing padding along the main axis
    pub padding_main: f32,
    pub flex: f32,
}

impl FlexItem {
    pub fn min_total(&self) -> f32 {
        self.min_main + self.padding_main
    }
}

/// Main-axis content size offered to each item: its minimum, plus a share of
/// the slack proportional to its flex weight.
pub fn distribute_slack(offered_main: f32, items: &[FlexItem]) -> Vec<f32> {
    let used: f32 = items.iter().map(FlexItem::min_total).sum();
    let total_flex: f32 = items.iter().map(|item| item.flex).filter(|flex| *flex > 0.0).sum();
    let slack = (offered_main - used).max(0.0);

    items
        .iter()
        .map(|item| {
            if item.flex > 0.0 && total_flex > 0.0 {
                item.min_main + slack * item.flex / total_flex
            } else {
                item.min_main
            }
        })
        .collect()
}

/// Offset of a child box of size `child_total` inside `container_cross` of
/// cross-axis space. Keywords naming the main axis mean start.
pub fn compute_cross_axis_position(
    child_total: f32,
    container_cross: f32,
    alignment: Option<Alignment>,
    is_row: bool,
) -> f32 {
    let free = (container_cross - child_total).max(0.0);
    match (alignment, is_row) {
        (Some(Alignment::Center), _) => free / 2.0,
        (Some(Alignment::Bottom), true) | (Some(Alignment::Right), false) => free,
        _ => 0.0,
    }
}
