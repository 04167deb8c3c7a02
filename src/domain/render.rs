use std::collections::HashMap;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{BstArena, BstNode};

/// Levels drawn by `to_tree_string`. Deeper subtrees collapse into `ELIDED`.
pub const MAX_RENDER_DEPTH: usize = 64;

/// Placeholder child for a subtree cut off at `MAX_RENDER_DEPTH`.
pub const ELIDED: &str = "...";

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for BstArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let Some(root_idx) = self.root() else {
            return Tree::new("Empty tree".to_string());
        };

        let mut levels = HashMap::new();
        let mut pending = vec![(root_idx, 1)];
        while let Some((idx, level)) = pending.pop() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            levels.insert(idx, level);
            if level < MAX_RENDER_DEPTH {
                for child in [node.left, node.right].into_iter().flatten() {
                    pending.push((child, level + 1));
                }
            }
        }

        // post-order finishes both children before their parent picks them up
        let mut built: HashMap<Index, Tree<String>> = HashMap::new();
        for (idx, node) in self.iter_postorder() {
            let Some(&level) = levels.get(&idx) else {
                continue;
            };
            let mut subtree = Tree::new(node_label(self, idx, node));
            if level == MAX_RENDER_DEPTH && !node.is_leaf() {
                subtree.push(Tree::new(ELIDED.to_string()));
            }
            for child in [node.left, node.right].into_iter().flatten() {
                if let Some(child_tree) = built.remove(&child) {
                    subtree.push(child_tree);
                }
            }
            built.insert(idx, subtree);
        }

        built
            .remove(&root_idx)
            .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
    }
}

fn node_label(tree: &BstArena, idx: Index, node: &BstNode) -> String {
    match node.parent.and_then(|parent| tree.get_node(parent)) {
        Some(parent) if parent.left == Some(idx) => format!("L: {}", node.value),
        Some(_) => format!("R: {}", node.value),
        None => node.value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_tree_when_rendering_then_placeholder() {
        let rendered = BstArena::new().to_tree_string().to_string();
        assert_eq!(rendered.trim_end(), "Empty tree");
    }

    #[test]
    fn given_tree_when_rendering_then_labels_sides() {
        let rendered = BstArena::from_values([4, 2, 6]).to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "4");
        assert!(lines[1].ends_with("L: 2"));
        assert!(lines[2].ends_with("R: 6"));
    }

    #[test]
    fn given_chain_deeper_than_limit_when_rendering_then_cut_with_placeholder() {
        let chain: Vec<i64> = (1..=10_000).collect();
        let tree = BstArena::from_postorder(&chain).unwrap();
        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), MAX_RENDER_DEPTH + 1);
        assert_eq!(lines[0], "10000");
        let deepest = format!("L: {}", 10_001 - MAX_RENDER_DEPTH);
        assert!(lines[MAX_RENDER_DEPTH - 1].ends_with(&deepest));
        assert!(lines[MAX_RENDER_DEPTH].ends_with(ELIDED));
    }
}
