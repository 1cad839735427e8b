use std::slice;

use crate::{Event, EventKind, HtmlString};

/// A single attribute of an [`Element`], such as `src="a.png"`.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Attribute {
    /// The attribute's name, such as `"src"`.
    pub name: HtmlString,
    /// The attribute's value, such as `"a.png"`.
    pub value: HtmlString,
}

impl Attribute {
    /// Create an attribute from anything that converts into [`HtmlString`].
    pub fn new(name: impl Into<HtmlString>, value: impl Into<HtmlString>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An element node.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Element {
    /// The element's name, such as `"p"` or `"img"`.
    pub name: HtmlString,

    /// The element's attributes, in document order.
    ///
    /// Duplicates are kept. Nothing in this crate reorders, deduplicates or validates them.
    pub attributes: Vec<Attribute>,

    /// The element's children, in document order.
    pub children: Vec<Node>,
}

/// A node of a document tree, as referenced by an [`Event`].
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Node {
    /// An element, which may have children.
    Element(Element),
    /// A comment. Holds the comment's contents, without `<!--` and `-->`.
    Comment(HtmlString),
    /// A run of text.
    Text(HtmlString),
    /// A run of whitespace that is not significant to the document.
    Whitespace(HtmlString),
}

impl Node {
    /// Create an element node.
    pub fn element(
        name: impl Into<HtmlString>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element(Element {
            name: name.into(),
            attributes,
            children,
        })
    }

    /// Create a comment node.
    pub fn comment(value: impl Into<HtmlString>) -> Self {
        Node::Comment(value.into())
    }

    /// Create a text node.
    pub fn text(value: impl Into<HtmlString>) -> Self {
        Node::Text(value.into())
    }

    /// Create a whitespace node.
    pub fn whitespace(value: impl Into<HtmlString>) -> Self {
        Node::Whitespace(value.into())
    }

    /// Return the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Traverse this node and all of its descendants in document order.
    ///
    /// ```
    /// use tagwalk::{EventKind, Node};
    ///
    /// let tree = Node::element("p", vec![], vec![Node::text("hi")]);
    /// let kinds: Vec<_> = tree.events().map(|event| event.kind).collect();
    ///
    /// assert_eq!(kinds, vec![EventKind::Enter, EventKind::Characters, EventKind::Exit]);
    /// ```
    pub fn events(&self) -> Events<'_> {
        Events::new(slice::from_ref(self))
    }
}

/// A lazy, depth-first traversal over a sequence of sibling nodes and their descendants.
///
/// Every element produces an [`EventKind::Enter`] event before its children and an
/// [`EventKind::Exit`] event after them, regardless of whether the element is void. Comments map
/// to [`EventKind::Comment`], text to [`EventKind::Characters`] and whitespace to
/// [`EventKind::Whitespace`].
///
/// The traversal keeps one cursor per open element and never recurses, so it can walk arbitrarily
/// deep trees.
#[derive(Debug, Clone)]
pub struct Events<'a> {
    roots: slice::Iter<'a, Node>,
    open_elements: Vec<(&'a Node, slice::Iter<'a, Node>)>,
}

impl<'a> Events<'a> {
    /// Traverse all `roots` in order, as if they were children of an invisible document node.
    pub fn new(roots: &'a [Node]) -> Self {
        Events {
            roots: roots.iter(),
            open_elements: Vec::new(),
        }
    }

    fn visit(&mut self, node: &'a Node) -> Event<'a> {
        let kind = match node {
            Node::Element(element) => {
                self.open_elements.push((node, element.children.iter()));
                EventKind::Enter
            }
            Node::Comment(_) => EventKind::Comment,
            Node::Text(_) => EventKind::Characters,
            Node::Whitespace(_) => EventKind::Whitespace,
        };

        Event::new(kind, node)
    }
}

impl<'a> Iterator for Events<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_child = match self.open_elements.last_mut() {
            Some((_, children)) => children.next(),
            None => return self.roots.next().map(|root| self.visit(root)),
        };

        match next_child {
            Some(child) => Some(self.visit(child)),
            None => {
                let (element, _) = self.open_elements.pop()?;
                Some(Event::new(EventKind::Exit, element))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(events: Events<'_>) -> Vec<EventKind> {
        events.map(|event| event.kind).collect()
    }

    #[test]
    fn test_nested_elements() {
        let tree = Node::element(
            "div",
            vec![],
            vec![
                Node::element("p", vec![], vec![Node::text("hi")]),
                Node::whitespace("\n"),
                Node::comment("note"),
            ],
        );

        assert_eq!(
            kinds(tree.events()),
            vec![
                EventKind::Enter,
                EventKind::Enter,
                EventKind::Characters,
                EventKind::Exit,
                EventKind::Whitespace,
                EventKind::Comment,
                EventKind::Exit,
            ]
        );
    }

    #[test]
    fn test_exit_refers_to_entered_node() {
        let tree = Node::element("br", vec![], vec![]);
        let events: Vec<_> = tree.events().collect();

        assert_eq!(events.len(), 2);
        assert!(events[0].is_for(&tree));
        assert!(events[1].is_for(&tree));
    }

    #[test]
    fn test_multiple_roots() {
        let roots = vec![
            Node::comment("a"),
            Node::element("hr", vec![], vec![]),
            Node::text("b"),
        ];

        assert_eq!(
            kinds(Events::new(&roots)),
            vec![
                EventKind::Comment,
                EventKind::Enter,
                EventKind::Exit,
                EventKind::Characters,
            ]
        );
    }

    #[test]
    fn test_deep_tree_does_not_recurse() {
        let mut tree = Node::text("leaf");
        for _ in 0..100_000 {
            tree = Node::element("div", vec![], vec![tree]);
        }

        assert_eq!(tree.events().count(), 200_001);

        // dropping a deeply nested tree recurses, so take it apart by hand
        let mut current = tree;
        while let Node::Element(mut element) = current {
            current = element.children.pop().unwrap_or_else(|| Node::text(""));
        }
    }
}
