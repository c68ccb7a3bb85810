// crates/pack-layout/src/lib.rs

use pack_core::{IntrinsicSizeProvider, NodeId, NodeTree, StoredIntrinsics, TreeError};

pub mod constraints;
pub mod flexbox;
pub mod pack_engine;

pub use constraints::*;
pub use flexbox::*;
pub use pack_engine::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
}

pub type LayoutResult<T> = std::result::Result<T, LayoutError>;

pub trait LayoutEngine {
    /// Lay out the subtree at `root`, overwriting the `ComputedLayout` of
    /// every node in it.
    fn compute_layout(
        &mut self,
        tree: &mut NodeTree,
        root: NodeId,
        viewport: &Viewport,
        intrinsics: &dyn IntrinsicSizeProvider,
    ) -> LayoutResult<()>;
}

/// Lay out `root` using the intrinsic sizes stored on each node.
pub fn layout(tree: &mut NodeTree, root: NodeId, viewport: &Viewport) -> LayoutResult<()> {
    layout_with(tree, root, viewport, &StoredIntrinsics)
}

pub fn layout_with(
    tree: &mut NodeTree,
    root: NodeId,
    viewport: &Viewport,
    intrinsics: &dyn IntrinsicSizeProvider,
) -> LayoutResult<()> {
    PackLayoutEngine::new().compute_layout(tree, root, viewport, intrinsics)
}
