use ego_tree::NodeMut;
use scraper::node::Text;
use scraper::Node;

/// A node whose text content can be overwritten.
pub trait SetText {
    fn replace_text(&mut self, value: &str);
}

impl<'a> SetText for NodeMut<'a, Node> {
    fn replace_text(&mut self, value: &str) {
        if let Node::Text(text) = self.value() {
            text.text = value.into();
            return;
        }

        while let Some(mut child) = self.first_child() {
            child.detach();
        }
        self.append(Node::Text(Text { text: value.into() }));
    }
}

/// Replaces the text content of `node` with `value` and hands the node back.
pub fn set_text<N: SetText>(mut node: N, value: &str) -> N {
    node.replace_text(value);
    node
}
