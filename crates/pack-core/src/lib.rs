// crates/pack-core/src/lib.rs
pub mod elements;
pub mod layout_units;
pub mod properties;
pub mod style;
pub mod text;

pub use elements::*;
pub use layout_units::*;
pub use properties::*;
pub use style::*;
pub use text::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error("Unknown style property: {0}")]
    UnknownProperty(String),

    #[error("Invalid value '{value}' for {property}")]
    InvalidKeyword { property: &'static str, value: String },

    #[error("{property} must be non-negative, got {value}")]
    NegativeValue { property: &'static str, value: f32 },

    #[error("{property} must be a finite number, got {value}")]
    NonFiniteValue { property: &'static str, value: f32 },

    #[error("Invalid number '{value}' for {property}")]
    InvalidNumber { property: &'static str, value: String },

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("Node {child} already has parent {parent}")]
    AlreadyParented { child: NodeId, parent: NodeId },

    #[error("Adding {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },

    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
}

pub type StyleResult<T> = std::result::Result<T, StyleError>;
pub type TreeResult<T> = std::result::Result<T, TreeError>;
