use std::ptr;

use crate::{HtmlString, Node};

/// What happened to a [`Node`] during a document traversal.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum EventKind {
    /// The traversal entered an element, its children follow.
    Enter,
    /// The traversal left an element. Sources emit this for every element, void or not.
    Exit,
    /// A comment node.
    Comment,
    /// A whitespace node that is not significant to the document.
    Whitespace,
    /// A text node.
    Characters,
    /// Any event kind not covered above. Carries a name for it, which the tree walker passes
    /// along in [`crate::Token::Unknown`].
    Other(HtmlString),
}

impl EventKind {
    /// The name of this event kind, such as `"Enter"`.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EventKind::Enter => b"Enter",
            EventKind::Exit => b"Exit",
            EventKind::Comment => b"Comment",
            EventKind::Whitespace => b"Whitespace",
            EventKind::Characters => b"Characters",
            EventKind::Other(name) => name,
        }
    }
}

/// A single step of a document traversal: an [`EventKind`] and the node it happened to.
///
/// Two events are about the same node if they reference the very same [`Node`] in memory, see
/// [`Event::is_for`]. Nodes that merely look alike are different nodes.
#[derive(Debug, Clone)]
pub struct Event<'a> {
    /// What happened.
    pub kind: EventKind,
    /// The node it happened to.
    pub node: &'a Node,
}

impl<'a> Event<'a> {
    /// Create a new event.
    pub fn new(kind: EventKind, node: &'a Node) -> Self {
        Event { kind, node }
    }

    /// Whether this event references exactly `node`, by identity.
    pub fn is_for(&self, node: &Node) -> bool {
        ptr::eq(self.node, node)
    }
}

#[test]
fn test_identity_not_equality() {
    let first = Node::element("br", vec![], vec![]);
    let second = first.clone();
    let event = Event::new(EventKind::Enter, &first);

    assert_eq!(first, second);
    assert!(event.is_for(&first));
    assert!(!event.is_for(&second));
}
