//! JSON node-tree documents.
//!
//! ```json
//! {
//!   "name": "app",
//!   "style": { "direction": "column", "padding_top": 10 },
//!   "children": [
//!     { "name": "input", "style": { "flex": 1 }, "size": [{ "at_least": 100 }, 15] }
//!   ]
//! }
//! ```
//!
//! Style values may be strings or numbers; `null` resets the property.
//! Properties are applied in name order, so the `padding` shorthand lands
//! before any `padding_*` side.

use anyhow::{Context, Result};
use pack_core::{Dimension, IntrinsicSize, NodeId, NodeTree, Property, Style};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    fn as_text(&self) -> String {
        match self {
            StyleValue::Number(number) => number.to_string(),
            StyleValue::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum DimensionSpec {
    Fixed(f32),
    AtLeast { at_least: f32 },
}

impl From<DimensionSpec> for Dimension {
    fn from(spec: DimensionSpec) -> Self {
        match spec {
            DimensionSpec::Fixed(value) => Dimension::Fixed(value),
            DimensionSpec::AtLeast { at_least } => Dimension::AtLeast(at_least),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub style: BTreeMap<String, Option<StyleValue>>,

    /// Intrinsic `[width, height]`; either axis may be null
    #[serde(default)]
    pub size: Option<[Option<DimensionSpec>; 2]>,

    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse node tree document")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid document {}", path.display()))
    }

    fn build_style(&self) -> Result<Style> {
        let mut style = Style::new();
        for (name, value) in &self.style {
            match value {
                Some(value) => {
                    style.set(name, &value.as_text()).with_context(|| {
                        format!("Node '{}': cannot set {}", self.name, name)
                    })?;
                }
                None => {
                    let property: Property = name
                        .parse()
                        .with_context(|| format!("Node '{}': cannot reset {}", self.name, name))?;
                    style.reset(property);
                }
            }
        }
        Ok(style)
    }

    fn intrinsic(&self) -> IntrinsicSize {
        match self.size {
            Some([width, height]) => IntrinsicSize {
                width: width.map(Dimension::from),
                height: height.map(Dimension::from),
            },
            None => IntrinsicSize::none(),
        }
    }
}

/// A loaded tree and its root.
#[derive(Debug, Clone)]
pub struct Document {
    pub tree: NodeTree,
    pub root: NodeId,
}

impl Document {
    pub fn build(spec: &NodeSpec) -> Result<Self> {
        let mut tree = NodeTree::new();
        let root = build_node(&mut tree, spec)?;
        debug!("Built tree of {} nodes", tree.len());
        Ok(Self { tree, root })
    }
}

fn build_node(tree: &mut NodeTree, spec: &NodeSpec) -> Result<NodeId> {
    let style = spec.build_style()?;
    let id = tree.create_leaf(spec.name.clone(), style, spec.intrinsic());
    for child_spec in &spec.children {
        let child = build_node(tree, child_spec)?;
        tree.append_child(id, child)?;
    }
    Ok(id)
}
