//! Flattening a selection into the text layers to sort.

use crate::model::{NodeMut, SceneNode, TextNode};

/// Collect every text layer in `nodes` and their descendants.
///
/// Selected nodes come first, followed by each selected node's descendants
/// in depth-first order. Children of remote nodes are not visited. With
/// `only_visible`, hidden text layers are dropped; the visibility of their
/// ancestors is not considered.
pub fn collect_text_nodes(nodes: &mut [SceneNode], only_visible: bool) -> Vec<&mut TextNode> {
    let mut selected = Vec::new();
    let mut nested = Vec::new();

    for node in nodes.iter_mut() {
        match node.as_node_mut() {
            NodeMut::Text(text) => selected.push(text),
            NodeMut::Container {
                remote: false,
                children,
            } => {
                for child in children {
                    collect_subtree(child, &mut nested);
                }
            }
            NodeMut::Container { remote: true, .. } | NodeMut::Leaf => {}
        }
    }

    selected.extend(nested);
    if only_visible {
        selected.retain(|text| text.visible);
    }
    selected
}

fn collect_subtree<'a>(node: &'a mut SceneNode, out: &mut Vec<&'a mut TextNode>) {
    match node.as_node_mut() {
        NodeMut::Text(text) => out.push(text),
        NodeMut::Container {
            remote: false,
            children,
        } => {
            for child in children {
                collect_subtree(child, out);
            }
        }
        NodeMut::Container { remote: true, .. } | NodeMut::Leaf => {}
    }
}
