// crates/pack-render/src/lib.rs

use pack_core::{
    Color, Font, IntrinsicSizeProvider, NodeId, NodeTree, Property, StyleCommand, StyleError,
    TextAlign, TreeError,
};
use pack_layout::{LayoutEngine, LayoutError, Viewport};
use std::collections::HashMap;
use tracing::debug;

pub mod recording;
pub use recording::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApplyError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
    #[error("Style error: {0}")]
    Style(#[from] StyleError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("No widget bound to node {0}")]
    NoWidget(NodeId),
    #[error("Backend call failed: {0}")]
    Backend(String),
}

pub type ApplyResult<T> = std::result::Result<T, ApplyError>;

/// Native widget side of the style bridge. One applicator drives one widget.
pub trait Applicator {
    fn set_color(&mut self, color: Color) -> ApplyResult<()>;

    fn set_background_color(&mut self, color: Color) -> ApplyResult<()>;

    fn set_font(&mut self, font: &Font) -> ApplyResult<()>;

    fn set_alignment(&mut self, alignment: TextAlign) -> ApplyResult<()>;

    fn set_hidden(&mut self, hidden: bool) -> ApplyResult<()>;

    /// Geometry changed and the owning tree needs a new layout pass.
    fn refresh(&mut self) -> ApplyResult<()> {
        Ok(())
    }

    /// Dispatch one command to the matching backend call.
    fn apply(&mut self, command: &StyleCommand) -> ApplyResult<()> {
        match command {
            StyleCommand::SetColor(color) => self.set_color(*color),
            StyleCommand::SetBackgroundColor(color) => self.set_background_color(*color),
            StyleCommand::SetFont(font) => self.set_font(font),
            StyleCommand::SetAlignment(alignment) => self.set_alignment(*alignment),
            StyleCommand::SetHidden(hidden) => self.set_hidden(*hidden),
            StyleCommand::Refresh => self.refresh(),
        }
    }

    fn apply_commands(&mut self, commands: &[StyleCommand]) -> ApplyResult<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }
}

impl<A: Applicator + ?Sized> Applicator for Box<A> {
    fn set_color(&mut self, color: Color) -> ApplyResult<()> {
        (**self).set_color(color)
    }

    fn set_background_color(&mut self, color: Color) -> ApplyResult<()> {
        (**self).set_background_color(color)
    }

    fn set_font(&mut self, font: &Font) -> ApplyResult<()> {
        (**self).set_font(font)
    }

    fn set_alignment(&mut self, alignment: TextAlign) -> ApplyResult<()> {
        (**self).set_alignment(alignment)
    }

    fn set_hidden(&mut self, hidden: bool) -> ApplyResult<()> {
        (**self).set_hidden(hidden)
    }

    fn refresh(&mut self) -> ApplyResult<()> {
        (**self).refresh()
    }
}

/// Binds applicators to the nodes they render and routes style changes made
/// through it to the right widget.
pub struct WidgetRegistry<A: Applicator> {
    widgets: HashMap<NodeId, A>,
}

impl<A: Applicator> Default for WidgetRegistry<A> {
    fn default() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }
}

impl<A: Applicator> WidgetRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `widget` to `id`, returning the widget it replaces.
    pub fn bind(&mut self, id: NodeId, widget: A) -> Option<A> {
        self.widgets.insert(id, widget)
    }

    pub fn unbind(&mut self, id: NodeId) -> Option<A> {
        self.widgets.remove(&id)
    }

    pub fn widget(&self, id: NodeId) -> Option<&A> {
        self.widgets.get(&id)
    }

    pub fn widget_mut(&mut self, id: NodeId) -> Option<&mut A> {
        self.widgets.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Push the node's whole style to its widget.
    pub fn reapply(&mut self, tree: &NodeTree, id: NodeId) -> ApplyResult<()> {
        let commands = tree.node(id)?.style.reapply();
        let widget = self.widgets.get_mut(&id).ok_or(ApplyError::NoWidget(id))?;
        debug!("Reapplying {} style commands to {}", commands.len(), id);
        widget.apply_commands(&commands)
    }

    /// Reapply every bound node under `root`, in tree order. Unbound nodes
    /// are skipped.
    pub fn reapply_tree(&mut self, tree: &NodeTree, root: NodeId) -> ApplyResult<usize> {
        let mut applied = 0;
        for id in tree.descendants(root)? {
            if self.widgets.contains_key(&id) {
                self.reapply(tree, id)?;
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Run a layout pass over `root`, then push every bound node's style to
    /// its widget. Returns the number of widgets updated.
    pub fn layout_and_reapply(
        &mut self,
        engine: &mut dyn LayoutEngine,
        tree: &mut NodeTree,
        root: NodeId,
        viewport: &Viewport,
        intrinsics: &dyn IntrinsicSizeProvider,
    ) -> ApplyResult<usize> {
        engine.compute_layout(tree, root, viewport, intrinsics)?;
        self.reapply_tree(tree, root)
    }

    /// Set a property by name and forward the resulting command to the
    /// node's widget, if one is bound. Returns the command so the caller
    /// can tell whether a new layout pass is due.
    pub fn set_property(
        &mut self,
        tree: &mut NodeTree,
        id: NodeId,
        name: &str,
        value: &str,
    ) -> ApplyResult<Option<StyleCommand>> {
        let command = tree.node_mut(id)?.style.set(name, value)?;
        self.forward(id, command)
    }

    /// Reset a property to its default and forward the resulting command.
    pub fn reset_property(
        &mut self,
        tree: &mut NodeTree,
        id: NodeId,
        property: Property,
    ) -> ApplyResult<Option<StyleCommand>> {
        let command = tree.node_mut(id)?.style.reset(property);
        self.forward(id, command)
    }

    fn forward(
        &mut self,
        id: NodeId,
        command: Option<StyleCommand>,
    ) -> ApplyResult<Option<StyleCommand>> {
        if let (Some(command), Some(widget)) = (&command, self.widgets.get_mut(&id)) {
            debug!("Forwarding {} to {}", command.name(), id);
            widget.apply(command)?;
        }
        Ok(command)
    }
}
