use crate::models::{EntryNode, NOT_FOUND};

/// Depth-first search for a descendant whose name equals `name` exactly.
///
/// Children are visited in stored order; each child's own name is compared
/// before descending into it, and an earlier sibling's subtree is exhausted
/// before the next sibling is considered. The first hit in that order wins.
/// The start node's own name is never compared. Total: a miss returns the
/// not-found sentinel, never an absent value.
pub fn locate<'a>(node: &'a EntryNode, name: &str) -> &'a EntryNode {
    let EntryNode::Directory(dir) = node else {
        // files and the sentinel have no children to search
        return &NOT_FOUND;
    };

    for child in &dir.children {
        if child.name() == name {
            return child;
        }

        let found = locate(child, name);
        if !found.is_not_found() {
            return found;
        }
    }

    &NOT_FOUND
}
