// crates/pack-layout/src/pack_engine.rs
use crate::flexbox::*;
use crate::{LayoutEngine, LayoutError, LayoutResult, Viewport};
use glam::Vec2;
use pack_core::{
    Alignment, ComputedLayout, Dimension, Edges, IntrinsicSize, IntrinsicSizeProvider, NodeId,
    NodeTree, TreeError,
};
use tracing::{debug, trace};

/// Pass-1 result for one node. Lengths are already in device pixels.
#[derive(Debug, Clone, Copy)]
struct Measure {
    /// Minimum content size
    min: Vec2,
    padding: Edges,
    intrinsic: IntrinsicSize,
    width: Option<f32>,
    height: Option<f32>,
    flex: f32,
    hidden: bool,
}

impl Measure {
    fn hidden() -> Self {
        Self {
            min: Vec2::ZERO,
            padding: Edges::ZERO,
            intrinsic: IntrinsicSize::none(),
            width: None,
            height: None,
            flex: 0.0,
            hidden: true,
        }
    }

    fn min_total(&self) -> Vec2 {
        self.min + self.padding.size()
    }

    /// Content size on one axis once the parent has offered `offered`.
    /// `extent` is the space the node's children used, if it has any.
    fn resolve(&self, horizontal: bool, offered: f32, extent: Option<f32>) -> f32 {
        let (explicit, intrinsic, min) = self.axis(horizontal);
        if explicit.is_some() {
            return min;
        }
        match (intrinsic, extent) {
            (Some(dimension), _) => dimension.resolve(offered),
            (None, Some(extent)) => extent,
            (None, None) => 0.0,
        }
    }

    /// Content space this node hands down to its children on one axis.
    fn child_space(&self, horizontal: bool, offered: f32) -> f32 {
        let (explicit, intrinsic, min) = self.axis(horizontal);
        if explicit.is_some() {
            return min;
        }
        intrinsic.map_or(offered, |dimension| dimension.resolve(offered))
    }

    fn axis(&self, horizontal: bool) -> (Option<f32>, Option<Dimension>, f32) {
        if horizontal {
            (self.width, self.intrinsic.width, self.min.x)
        } else {
            (self.height, self.intrinsic.height, self.min.y)
        }
    }
}

/// Minimum along one axis: the intrinsic size wins over the children's
/// extent, and an explicit size can only raise it.
fn axis_minimum(explicit: Option<f32>, intrinsic: Option<Dimension>, children: f32) -> f32 {
    let natural = intrinsic.map_or(children, Dimension::minimum);
    explicit.map_or(natural, |explicit| explicit.max(natural))
}

fn measure_of(measures: &[Option<Measure>], id: NodeId) -> LayoutResult<Measure> {
    measures
        .get(id.index())
        .copied()
        .flatten()
        .ok_or(LayoutError::Tree(TreeError::UnknownNode(id)))
}

/// Two-pass box packer. Pass 1 computes every node's minimum content size
/// bottom-up; pass 2 hands out space top-down and writes absolute
/// positions into each node's `ComputedLayout`.
#[derive(Debug, Default)]
pub struct PackLayoutEngine {
    debug: bool,
}

impl PackLayoutEngine {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Smallest total size (content plus padding) the subtree at `root` can
    /// take under `viewport`'s DPI.
    pub fn minimum_size(
        &self,
        tree: &NodeTree,
        root: NodeId,
        viewport: &Viewport,
        intrinsics: &dyn IntrinsicSizeProvider,
    ) -> LayoutResult<Vec2> {
        viewport.validate()?;
        let mut measures = vec![None; tree.len()];
        let measure = self.measure(tree, root, viewport, intrinsics, true, &mut measures)?;
        Ok(measure.min_total())
    }

    fn measure(
        &self,
        tree: &NodeTree,
        id: NodeId,
        viewport: &Viewport,
        intrinsics: &dyn IntrinsicSizeProvider,
        is_root: bool,
        measures: &mut [Option<Measure>],
    ) -> LayoutResult<Measure> {
        let node = tree.node(id)?;
        if node.style.is_hidden() {
            let measure = Measure::hidden();
            measures[id.index()] = Some(measure);
            return Ok(measure);
        }

        let style = &node.style;
        let is_row = style.direction().is_row();
        let intrinsic = intrinsics.intrinsic_size(id, node);

        let mut main = 0.0;
        let mut cross = 0.0f32;
        for &child in node.children() {
            let child_measure = self.measure(tree, child, viewport, intrinsics, false, measures)?;
            if child_measure.hidden {
                continue;
            }
            let total = child_measure.min_total();
            main += main_axis(total, is_row);
            cross = cross.max(cross_axis(total, is_row));
        }
        let children = from_axes(main, cross, is_row);

        let width = style.width().map(|width| viewport.scale(width));
        let height = style.height().map(|height| viewport.scale(height));
        // Root padding borders the viewport, whose lengths are already
        // device pixels.
        let padding = if is_root {
            style.padding()
        } else {
            viewport.scale_edges(style.padding())
        };
        let measure = Measure {
            min: Vec2::new(
                axis_minimum(width, intrinsic.width, children.x),
                axis_minimum(height, intrinsic.height, children.y),
            ),
            padding,
            intrinsic,
            width,
            height,
            flex: style.flex(),
            hidden: false,
        };

        trace!("Measured {} '{}': min={:?}", id, node.name, measure.min);
        measures[id.index()] = Some(measure);
        Ok(measure)
    }

    /// Lay out `id` with its content box at `origin`, given `offered` content
    /// space. Returns the resolved content size.
    fn place(
        &self,
        tree: &mut NodeTree,
        id: NodeId,
        origin: Vec2,
        offered: Vec2,
        measures: &[Option<Measure>],
    ) -> LayoutResult<Vec2> {
        let measure = measure_of(measures, id)?;
        if measure.hidden {
            self.collapse(tree, id, origin)?;
            return Ok(Vec2::ZERO);
        }

        let node = tree.node(id)?;
        let is_row = node.style.direction().is_row();
        let alignment = node.style.alignment();
        let children = node.children().to_vec();

        let space = Vec2::new(
            measure.child_space(true, offered.x),
            measure.child_space(false, offered.y),
        );
        let extent = if children.is_empty() {
            None
        } else {
            Some(self.place_children(tree, &children, is_row, origin, space, measures)?)
        };

        let content = Vec2::new(
            measure.resolve(true, offered.x, extent.map(|extent| extent.x)),
            measure.resolve(false, offered.y, extent.map(|extent| extent.y)),
        );

        if alignment.is_some() {
            self.align_children(tree, &children, is_row, alignment, cross_axis(content, is_row))?;
        }

        let node = tree.node_mut(id)?;
        node.layout = ComputedLayout::new(origin, content, measure.padding);
        if self.debug {
            debug!(
                "Layout node {} '{}': offered={:?}, origin={:?}, content={:?}",
                id, node.name, offered, origin, content
            );
        }
        Ok(content)
    }

    /// Place children along the main axis. Returns the space they used.
    fn place_children(
        &self,
        tree: &mut NodeTree,
        children: &[NodeId],
        is_row: bool,
        origin: Vec2,
        space: Vec2,
        measures: &[Option<Measure>],
    ) -> LayoutResult<Vec2> {
        let mut items = Vec::with_capacity(children.len());
        for &child in children {
            let measure = measure_of(measures, child)?;
            if !measure.hidden {
                let (leading, trailing) = main_padding(&measure.padding, is_row);
                items.push(FlexItem {
                    min_main: main_axis(measure.min, is_row),
                    padding_main: leading + trailing,
                    flex: measure.flex,
                });
            }
        }
        let mut offers = distribute_slack(main_axis(space, is_row), &items).into_iter();

        let mut offset = 0.0;
        let mut cross_extent = 0.0f32;
        for &child in children {
            let measure = measure_of(measures, child)?;
            if measure.hidden {
                self.collapse(tree, child, origin + from_axes(offset, 0.0, is_row))?;
                continue;
            }

            let (lead_main, trail_main) = main_padding(&measure.padding, is_row);
            let (lead_cross, trail_cross) = cross_padding(&measure.padding, is_row);
            let offer_main = offers.next().unwrap_or(main_axis(measure.min, is_row));
            let offer_cross = (cross_axis(space, is_row) - lead_cross - trail_cross).max(0.0);

            offset += lead_main;
            let child_origin = origin + from_axes(offset, lead_cross, is_row);
            let content = self.place(
                tree,
                child,
                child_origin,
                from_axes(offer_main, offer_cross, is_row),
                measures,
            )?;
            offset += main_axis(content, is_row) + trail_main;
            cross_extent = cross_extent.max(cross_axis(content, is_row) + lead_cross + trail_cross);
        }

        Ok(from_axes(offset, cross_extent, is_row))
    }

    /// Shift each visible child's subtree along the cross axis once the
    /// container's own cross size is known.
    fn align_children(
        &self,
        tree: &mut NodeTree,
        children: &[NodeId],
        is_row: bool,
        alignment: Option<Alignment>,
        container_cross: f32,
    ) -> LayoutResult<()> {
        for &child in children {
            let node = tree.node(child)?;
            if node.style.is_hidden() {
                continue;
            }
            let child_total = cross_axis(node.layout.size(), is_row);
            let position = compute_cross_axis_position(child_total, container_cross, alignment, is_row);
            if position == 0.0 {
                continue;
            }
            let delta = from_axes(0.0, position, is_row);
            for id in tree.descendants(child)? {
                tree.node_mut(id)?.layout.translate(delta);
            }
        }
        Ok(())
    }

    /// Zero the layout of a hidden subtree, pinned at `origin`.
    fn collapse(&self, tree: &mut NodeTree, id: NodeId, origin: Vec2) -> LayoutResult<()> {
        for descendant in tree.descendants(id)? {
            tree.node_mut(descendant)?.layout = ComputedLayout::new(origin, Vec2::ZERO, Edges::ZERO);
        }
        if self.debug {
            debug!("Collapsed hidden subtree {} at {:?}", id, origin);
        }
        Ok(())
    }
}

impl LayoutEngine for PackLayoutEngine {
    fn compute_layout(
        &mut self,
        tree: &mut NodeTree,
        root: NodeId,
        viewport: &Viewport,
        intrinsics: &dyn IntrinsicSizeProvider,
    ) -> LayoutResult<()> {
        viewport.validate()?;

        let mut measures = vec![None; tree.len()];
        let root_measure = self.measure(tree, root, viewport, intrinsics, true, &mut measures)?;

        let offered = (viewport.size() - root_measure.padding.size()).max(Vec2::ZERO);
        let origin = root_measure.padding.leading();

        if self.debug {
            debug!(
                "Viewport: {:?} at {} dpi (baseline {}), root minimum {:?}",
                viewport.size(),
                viewport.dpi,
                viewport.baseline_dpi,
                root_measure.min_total()
            );
        }

        self.place(tree, root, origin, offered, &measures)?;
        Ok(())
    }
}
