use crate::models::{Node, NodeKind};

/// Concatenate the text payload of `children` in document order.
///
/// Links are descended into; every other non-text node is skipped and all
/// modifiers are ignored. This is what code blocks display.
pub fn plain_text(children: &[Node]) -> String {
    let mut out = String::new();
    collect(children, &mut out);
    out
}

fn collect(children: &[Node], out: &mut String) {
    for child in children {
        match child.kind() {
            NodeKind::Text(text) => out.push_str(&text.text),
            NodeKind::Link { .. } => collect(child.children(), out),
            _ => {}
        }
    }
}

impl Node {
    pub fn plain_text(&self) -> String {
        plain_text(self.children())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextNode;

    #[test]
    fn test_flattens_through_links() {
        let code = Node::code(vec![
            Node::text("const a = 1;"),
            Node::link(
                "https://x",
                vec![Node::text(TextNode::new("const b = 2;").bold())],
            ),
        ]);

        insta::assert_snapshot!(code.plain_text(), @"const a = 1;const b = 2;");
    }

    #[test]
    fn test_skips_other_nodes() {
        let children = vec![
            Node::text("a"),
            Node::list_item(vec![Node::text("hidden")]),
            Node::unknown("mystery", vec![Node::text("also hidden")]),
            Node::text("b"),
        ];

        assert_eq!(plain_text(&children), "ab");
    }

    #[test]
    fn test_nested_links_keep_order() {
        let children = vec![Node::link(
            "outer",
            vec![
                Node::text("1"),
                Node::link("inner", vec![Node::text("2")]),
                Node::text("3"),
            ],
        )];

        assert_eq!(plain_text(&children), "123");
    }

    #[test]
    fn test_empty() {
        assert_eq!(plain_text(&[]), "");
    }
}
