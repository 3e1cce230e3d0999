//! Find the key path under a cursor position.

use crate::yaml::parse::{Document, Node};

/// Key path of the mapping key at `offset`, from the document root
/// down. `None` when the cursor is not on a mapping key.
pub fn key_path_at_offset(doc: &Document, offset: usize) -> Option<Vec<String>> {
    let root = doc.root.as_ref()?;
    let mut path = Vec::new();
    if walk(root, offset, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn walk(node: &Node, offset: usize, path: &mut Vec<String>) -> bool {
    let Node::Mapping(map) = node else {
        return false;
    };
    for pair in &map.pairs {
        if let Node::Scalar(key) = &pair.key {
            if key.range.contains(offset) {
                path.push(key.value.clone());
                return true;
            }
            if matches!(pair.value, Node::Mapping(_)) {
                path.push(key.value.clone());
                if walk(&pair.value, offset, path) {
                    return true;
                }
                path.pop();
            }
        }
    }
    false
}

/// Whether `offset` sits on a mapping key, at any depth.
pub fn is_offset_on_key(doc: &Document, offset: usize) -> bool {
    doc.root.as_ref().map_or(false, |root| on_key(root, offset))
}

fn on_key(node: &Node, offset: usize) -> bool {
    let Node::Mapping(map) = node else {
        return false;
    };
    map.pairs.iter().any(|pair| match &pair.key {
        Node::Scalar(key) => {
            key.range.contains(offset)
                || (matches!(pair.value, Node::Mapping(_)) && on_key(&pair.value, offset))
        }
        _ => false,
    })
}
