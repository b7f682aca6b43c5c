//! Output rendering for bucket listings.
//!
//! Flat output is handled inline by the `list` command as keys stream in;
//! this module only knows how to turn a finished key set into a tree.

#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: &str) -> Self {
        Self { name: name.to_string(), children: Vec::new() }
    }

    fn child(&mut self, name: &str) -> &mut TreeNode {
        let idx = match self.children.iter().position(|child| child.name == name) {
            Some(idx) => idx,
            None => {
                self.children.push(TreeNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    fn insert(&mut self, parts: &[&str]) {
        if let Some((first, rest)) = parts.split_first() {
            self.child(first).insert(rest);
        }
    }
}

/// Render object keys as a directory tree rooted at `root_label`.
///
/// Keys are split on `/`; when a prefix was used for the listing it is
/// stripped from each key so the tree starts below it. Sibling order follows
/// first appearance in `keys`, which for S3 listings means lexicographic.
pub fn render_tree(root_label: &str, prefix: Option<&str>, keys: &[String]) -> String {
    let mut root = TreeNode::new(root_label);

    for key in keys {
        let relative = match prefix {
            Some(prefix) => key.strip_prefix(prefix).unwrap_or(key),
            None => key,
        };
        let parts: Vec<&str> = relative.split('/').filter(|part| !part.is_empty()).collect();
        root.insert(&parts);
    }

    let mut out = String::new();
    render_node(&root, 0, &mut out);
    out
}

fn render_node(node: &TreeNode, depth: usize, out: &mut String) {
    if depth == 0 {
        out.push_str(&node.name);
        out.push('\n');
    } else {
        out.push_str(&format!("{:indent$}└── {}\n", "", node.name, indent = depth * 4));
    }

    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}
