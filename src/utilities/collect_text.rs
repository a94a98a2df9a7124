use ego_tree::NodeRef;
use scraper::Node;

use crate::utilities::strip_whitespace::strip_whitespace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Element,
    /// Documents, fragments, comments, doctypes and processing instructions.
    Other,
}

/// The little a tree node has to offer for its text to be collected.
pub trait TextNode: Sized {
    fn node_kind(&self) -> NodeKind;

    /// The text of a text node, `None` for anything else.
    fn node_value(&self) -> Option<&str>;

    fn child_nodes(&self) -> impl Iterator<Item = Self>;
}

impl<'a> TextNode for NodeRef<'a, Node> {
    fn node_kind(&self) -> NodeKind {
        match self.value() {
            Node::Text(_) => NodeKind::Text,
            Node::Element(_) => NodeKind::Element,
            _ => NodeKind::Other,
        }
    }

    fn node_value(&self) -> Option<&str> {
        self.value().as_text().map(|text| &**text)
    }

    fn child_nodes(&self) -> impl Iterator<Item = Self> {
        self.children()
    }
}

/// Returns all text within `node` and its descendants, in document order.
pub fn collect_text<N: TextNode>(node: Option<N>) -> String {
    let mut text = String::new();
    if let Some(node) = node {
        push_text(&node, &mut text);
    }
    text
}

/// Collected text of `node` with surrounding whitespace stripped.
pub fn get_stripped_text<N: TextNode>(node: Option<N>) -> String {
    strip_whitespace(collect_text(node).as_str())
}

fn push_text<N: TextNode>(node: &N, text: &mut String) {
    if node.node_kind() == NodeKind::Text {
        text.push_str(node.node_value().unwrap_or_default());
        return;
    }

    for child in node.child_nodes() {
        match child.node_kind() {
            NodeKind::Text => text.push_str(child.node_value().unwrap_or_default()),
            NodeKind::Element => push_text(&child, text),
            NodeKind::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    #[test]
    fn concatenates_nested_text() {
        let html = Html::parse_fragment(
            "<div class='price'>Now <span>$1,<b>323</b>.00</span><!-- sale --> only</div>",
        );
        let selector = Selector::parse("div.price").unwrap();
        let element = html.select(&selector).next().unwrap();

        assert_eq!(collect_text(Some(*element)), "Now $1,323.00 only");
    }

    #[test]
    fn text_node_is_its_own_text() {
        let html = Html::parse_fragment("<p>$5.00</p>");
        let selector = Selector::parse("p").unwrap();
        let text_node = html.select(&selector).next().unwrap().first_child().unwrap();

        assert_eq!(text_node.node_kind(), NodeKind::Text);
        assert_eq!(collect_text(Some(text_node)), "$5.00");
    }

    #[test]
    fn document_root_collects_everything() {
        let html = Html::parse_fragment("<p>a</p><p>b<i>c</i></p>");
        assert_eq!(collect_text(Some(html.tree.root())), "abc");
    }

    #[test]
    fn absent_node_is_empty() {
        assert_eq!(collect_text::<NodeRef<'_, Node>>(None), "");
        assert_eq!(get_stripped_text::<NodeRef<'_, Node>>(None), "");
    }

    #[test]
    fn stripped_text_drops_non_breaking_spaces() {
        let html = Html::parse_fragment("<span>&nbsp; $12.99 &nbsp;</span>");
        let selector = Selector::parse("span").unwrap();
        let span = html.select(&selector).next().map(|span| *span);

        assert_eq!(get_stripped_text(span), "$12.99");
    }
}
