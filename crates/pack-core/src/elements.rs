// crates/pack-core/src/elements.rs
use crate::{ComputedLayout, IntrinsicSize, Style, TreeError, TreeResult};
use std::fmt;

/// Index of a node inside its `NodeTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Debug name, not required to be unique
    pub name: String,
    pub style: Style,
    /// Natural size reported by the widget backend
    pub intrinsic: IntrinsicSize,
    /// Written by the layout engine
    pub layout: ComputedLayout,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena owning every node of one or more trees. A node has at most one
/// parent; nodes without a parent are roots.
#[derive(Debug, Clone, Default)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn create_node(&mut self, name: impl Into<String>, style: Style) -> NodeId {
        self.create_leaf(name, style, IntrinsicSize::none())
    }

    pub fn create_leaf(
        &mut self,
        name: impl Into<String>,
        style: Style,
        intrinsic: IntrinsicSize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.into(),
            style,
            intrinsic,
            ..Default::default()
        });
        id
    }

    /// Create a container and adopt `children` in order.
    pub fn create_container(
        &mut self,
        name: impl Into<String>,
        style: Style,
        children: &[NodeId],
    ) -> TreeResult<NodeId> {
        let id = self.create_node(name, style);
        for &child in children {
            self.append_child(id, child)?;
        }
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn node(&self, id: NodeId) -> TreeResult<&Node> {
        self.get(id).ok_or(TreeError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> TreeResult<&mut Node> {
        self.get_mut(id).ok_or(TreeError::UnknownNode(id))
    }

    pub fn children(&self, id: NodeId) -> TreeResult<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    pub fn parent(&self, id: NodeId) -> TreeResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        let index = self.node(parent)?.children.len();
        self.insert_child(parent, index, child)
    }

    /// Insert `child` at `index` in `parent`'s child list (clamped to the end).
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> TreeResult<()> {
        self.node(parent)?;
        let existing = self.node(child)?.parent;
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::CycleDetected { parent, child });
        }
        if let Some(existing) = existing {
            return Err(TreeError::AlreadyParented { child, parent: existing });
        }

        let children = &mut self.nodes[parent.index()].children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.nodes[child.index()].parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from `parent`. The child stays in the arena as a root.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        let position = self
            .node(parent)?
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or(TreeError::NotAChild { parent, child })?;
        self.nodes[parent.index()].children.remove(position);
        self.nodes[child.index()].parent = None;
        Ok(())
    }

    /// Pre-order walk of the subtree rooted at `root`.
    pub fn descendants(&self, root: NodeId) -> TreeResult<Vec<NodeId>> {
        self.node(root)?;
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.index()].children.iter().rev().copied());
        }
        Ok(order)
    }

    pub fn set_intrinsic(&mut self, id: NodeId, intrinsic: IntrinsicSize) -> TreeResult<()> {
        self.node_mut(id)?.intrinsic = intrinsic;
        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.nodes.get(id.index()).and_then(|node| node.parent);
        }
        false
    }
}

/// Source of intrinsic sizes for the layout engine. Implemented by widget
/// backends; queried once per node per layout pass.
pub trait IntrinsicSizeProvider {
    fn intrinsic_size(&self, id: NodeId, node: &Node) -> IntrinsicSize;
}

/// Reads the sizes the backend already stored on each node.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredIntrinsics;

impl IntrinsicSizeProvider for StoredIntrinsics {
    fn intrinsic_size(&self, _id: NodeId, node: &Node) -> IntrinsicSize {
        node.intrinsic
    }
}

impl<F> IntrinsicSizeProvider for F
where
    F: Fn(NodeId, &Node) -> IntrinsicSize,
{
    fn intrinsic_size(&self, id: NodeId, node: &Node) -> IntrinsicSize {
        self(id, node)
    }
}
