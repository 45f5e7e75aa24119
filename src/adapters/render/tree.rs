//! Implements RenderPort by building a plain `Node` tree.

use crate::domain::{Block, Icon, ImageHint, Node, Slot};
use crate::ports::RenderPort;

/// Stateless renderer producing `domain::Node`. Used for inspection and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl RenderPort for TreeRenderer {
    type Node = Node;

    fn text(&self, slot: Slot, content: &str) -> Node {
        Node::Text {
            slot,
            content: content.to_string(),
        }
    }

    fn block(&self, block: Block, children: Vec<Node>) -> Node {
        Node::Block { block, children }
    }

    fn container(&self, children: Vec<Node>) -> Node {
        Node::Container { children }
    }

    fn link(&self, href: &str, aria_label: Option<&str>, children: Vec<Node>) -> Node {
        Node::Link {
            href: href.to_string(),
            aria_label: aria_label.map(str::to_string),
            children,
        }
    }

    fn image(&self, hint: &ImageHint) -> Node {
        Node::Image(hint.clone())
    }

    fn icon(&self, icon: Icon) -> Node {
        Node::Icon { icon }
    }

    fn logo(&self) -> Node {
        Node::Logo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_serializes_with_kind_tag() {
        let r = TreeRenderer;
        let node = r.link("/", Some("about"), vec![r.icon(Icon::Map)]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "link");
        assert_eq!(json["href"], "/");
        assert_eq!(json["aria_label"], "about");
        assert_eq!(json["children"][0]["kind"], "icon");
    }
}
