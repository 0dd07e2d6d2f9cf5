//! Scene tree: the selection a sort runs over.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{FontName, TextNode};
use crate::error::Result;

/// A node in the scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneNode {
    /// Styled text layer
    Text(TextNode),
    /// Frame container
    Frame(ContainerNode),
    /// Group container
    Group(ContainerNode),
    /// Component definition
    Component(ContainerNode),
    /// Component instance
    Instance(ContainerNode),
    /// Any leaf without text (rectangles, vectors, ...)
    Shape(ShapeNode),
}

impl SceneNode {
    /// Node identifier.
    pub fn id(&self) -> &str {
        match self {
            SceneNode::Text(node) => &node.id,
            SceneNode::Frame(node)
            | SceneNode::Group(node)
            | SceneNode::Component(node)
            | SceneNode::Instance(node) => &node.id,
            SceneNode::Shape(node) => &node.id,
        }
    }

    /// Child nodes, for containers.
    pub fn children(&self) -> Option<&[SceneNode]> {
        self.container().map(|c| c.children.as_slice())
    }

    /// Split into the mutable view selection works on.
    pub fn as_node_mut(&mut self) -> NodeMut<'_> {
        match self {
            SceneNode::Text(node) => NodeMut::Text(node),
            SceneNode::Frame(node)
            | SceneNode::Group(node)
            | SceneNode::Component(node)
            | SceneNode::Instance(node) => NodeMut::Container {
                remote: node.remote,
                children: node.children.as_mut_slice(),
            },
            SceneNode::Shape(_) => NodeMut::Leaf,
        }
    }

    /// Whether the node is linked from another file and must not be edited.
    pub fn is_remote(&self) -> bool {
        self.container().is_some_and(|c| c.remote)
    }

    /// The text layer, if this is one.
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            SceneNode::Text(node) => Some(node),
            _ => None,
        }
    }

    /// The mutable text layer, if this is one.
    pub fn as_text_mut(&mut self) -> Option<&mut TextNode> {
        match self {
            SceneNode::Text(node) => Some(node),
            _ => None,
        }
    }

    fn container(&self) -> Option<&ContainerNode> {
        match self {
            SceneNode::Frame(node)
            | SceneNode::Group(node)
            | SceneNode::Component(node)
            | SceneNode::Instance(node) => Some(node),
            _ => None,
        }
    }
}

/// Mutable view of a [`SceneNode`].
#[derive(Debug)]
pub enum NodeMut<'a> {
    /// A text layer
    Text(&'a mut TextNode),
    /// A container and its children
    Container {
        /// Linked from a library
        remote: bool,
        /// Child nodes
        children: &'a mut [SceneNode],
    },
    /// Anything else
    Leaf,
}

/// A node with children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerNode {
    /// Node identifier
    pub id: String,

    /// Layer name
    #[serde(default)]
    pub name: String,

    /// Linked from a library; descendants are read-only
    #[serde(default)]
    pub remote: bool,

    /// Child nodes in layer order
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl ContainerNode {
    /// Create an empty container.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Add a child.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Mark as remote.
    pub fn remote(mut self) -> Self {
        self.remote = true;
        self
    }
}

/// A leaf node without text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    /// Node identifier
    pub id: String,

    /// Layer name
    #[serde(default)]
    pub name: String,
}

/// A page's current selection plus the fonts installed on the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Page name
    #[serde(default)]
    pub page: String,

    /// Fonts that can be loaded; `None` means any font loads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Vec<FontName>>,

    /// Selected nodes
    #[serde(default)]
    pub selection: Vec<SceneNode>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the selection.
    pub fn select(mut self, node: SceneNode) -> Self {
        self.selection.push(node);
        self
    }

    /// Parse a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the scene to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Load a scene file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the scene to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        std::fs::write(path, self.to_json(pretty)?)?;
        Ok(())
    }

    /// Total number of nodes, including nested ones.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[SceneNode]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + node.children().map_or(0, count))
                .sum()
        }
        count(&self.selection)
    }
}
