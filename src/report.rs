use anyhow::Result;
use pack_core::{ComputedLayout, NodeId, NodeTree, StyleCommand};
use serde::Serialize;
use std::collections::HashMap;

/// Per-node style calls, as captured by a recording applicator.
pub type StyleCalls = HashMap<NodeId, Vec<StyleCommand>>;

#[derive(Debug, Serialize)]
pub struct BoxReport {
    pub name: String,
    pub origin: [f32; 2],
    pub content: [f32; 2],
    pub size: [f32; 2],
    /// top, right, bottom, left
    pub padding: [f32; 4],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BoxReport>,
}

impl BoxReport {
    pub fn build(tree: &NodeTree, id: NodeId, calls: Option<&StyleCalls>) -> Result<Self> {
        let node = tree.node(id)?;
        let layout: &ComputedLayout = &node.layout;
        let children = node
            .children()
            .iter()
            .map(|&child| Self::build(tree, child, calls))
            .collect::<Result<Vec<_>>>()?;
        let style = calls
            .and_then(|calls| calls.get(&id))
            .map(|commands| commands.iter().map(ToString::to_string).collect())
            .unwrap_or_default();

        Ok(Self {
            name: node.name.clone(),
            origin: [layout.absolute_content_left, layout.absolute_content_top],
            content: [layout.content_width, layout.content_height],
            size: [layout.width(), layout.height()],
            padding: [
                layout.padding.top,
                layout.padding.right,
                layout.padding.bottom,
                layout.padding.left,
            ],
            style,
            children,
        })
    }
}

pub fn generate_json_output(report: &BoxReport) -> Result<String> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}

pub fn generate_tree_output(report: &BoxReport) -> String {
    let mut output = String::new();
    render_box_tree(&mut output, report, "", true, true);
    output
}

fn render_box_tree(output: &mut String, report: &BoxReport, prefix: &str, is_last: bool, is_root: bool) {
    let (branch, child_prefix) = if is_root {
        ("", String::new())
    } else if is_last {
        ("└── ", format!("{}    ", prefix))
    } else {
        ("├── ", format!("{}│   ", prefix))
    };

    let name = if report.name.is_empty() { "<node>" } else { report.name.as_str() };
    output.push_str(&format!(
        "{}{}{} origin:({},{}) content:({},{}) size:({},{})",
        prefix,
        branch,
        name,
        report.origin[0],
        report.origin[1],
        report.content[0],
        report.content[1],
        report.size[0],
        report.size[1],
    ));
    if report.padding.iter().any(|side| *side != 0.0) {
        output.push_str(&format!(
            " padding:({},{},{},{})",
            report.padding[0], report.padding[1], report.padding[2], report.padding[3]
        ));
    }
    output.push('\n');

    for command in &report.style {
        let bar = if report.children.is_empty() { " " } else { "│" };
        output.push_str(&format!("{}{}  {}\n", child_prefix, bar, command));
    }

    for (index, child) in report.children.iter().enumerate() {
        let last = index + 1 == report.children.len();
        render_box_tree(output, child, &child_prefix, last, false);
    }
}
