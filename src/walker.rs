use crate::utils::trace_log;
use crate::{
    EmptyTag, EndTag, Error, Event, EventKind, HtmlVoidElements, Node, StartTag, Token, TokenSink,
    VoidElements,
};

/// Turns a sequence of traversal [`Event`]s into a flat sequence of [`Token`]s. See crate-level
/// docs for basic usage.
///
/// Event sources emit an `Exit` event for every element, including void elements such as `<img>`
/// which can't have an end tag. The walker emits a single [`Token::EmptyTag`] for those and drops
/// their `Exit` event.
///
/// Tokens are produced lazily, one source event at a time: the walker only ever holds on to the
/// previous event, which it needs to know whether an element is immediately closed again.
#[derive(Debug)]
pub struct TreeWalker<'a, I, V = HtmlVoidElements> {
    events: I,
    void_elements: V,
    collapse_empty_elements: bool,
    pending: Option<Event<'a>>,
    suppress_exit_for: Option<&'a Node>,
    done: bool,
}

impl<'a, I: Iterator<Item = Event<'a>>> TreeWalker<'a, I> {
    /// Create a new tree walker over some events, using the void elements of HTML.
    pub fn new<S: IntoIterator<Item = Event<'a>, IntoIter = I>>(events: S) -> Self {
        TreeWalker::new_with_void_elements(events, HtmlVoidElements)
    }
}

impl<'a, I, V> TreeWalker<'a, I, V>
where
    I: Iterator<Item = Event<'a>>,
    V: VoidElements,
{
    /// Create a new tree walker over some events, with a custom definition of which elements are
    /// void.
    pub fn new_with_void_elements<S: IntoIterator<Item = Event<'a>, IntoIter = I>>(
        events: S,
        void_elements: V,
    ) -> Self {
        TreeWalker {
            events: events.into_iter(),
            void_elements,
            collapse_empty_elements: true,
            pending: None,
            suppress_exit_for: None,
            done: false,
        }
    }

    /// Whether to emit a single [`Token::EmptyTag`] for non-void elements without children.
    ///
    /// The default is on. When off, `<div></div>` produces a start and an end tag.
    pub fn collapse_empty_elements(&mut self, yes: bool) {
        self.collapse_empty_elements = yes;
    }

    /// Walking the children of a single node is not supported, this always fails with
    /// [`Error::NotSupported`]. Walk the whole event sequence instead.
    ///
    /// The walker is exhausted afterwards.
    pub fn walk_children(&mut self, _node: &'a Node) -> Result<Vec<Token>, Error> {
        self.done = true;
        self.suppress_exit_for = None;
        Err(Error::NotSupported)
    }

    /// Hand all remaining tokens to `sink`, stopping at the first error. Returns the sink.
    ///
    /// ```
    /// use tagwalk::{Node, Token, TreeWalker};
    ///
    /// let tree = Node::element("p", vec![], vec![Node::text("hello")]);
    /// let mut names = Vec::new();
    ///
    /// TreeWalker::new(tree.events())
    ///     .finish(|token: Token| names.push(token.kind()))
    ///     .unwrap();
    ///
    /// assert_eq!(names, vec!["StartTag", "Text", "EndTag"]);
    /// ```
    pub fn finish<S: TokenSink>(self, mut sink: S) -> Result<S, Error> {
        for token in self {
            sink.process_token(token?);
        }

        Ok(sink)
    }

    fn process_event(
        &mut self,
        event: Event<'a>,
        closes_immediately: bool,
    ) -> Result<Option<Token>, Error> {
        if let Some(node) = self.suppress_exit_for {
            if event.is_for(node) && event.kind == EventKind::Exit {
                trace_log!("process_event: dropping exit of {:?}", event.node);
                self.suppress_exit_for = None;
            } else {
                trace_log!("process_event: dropping {:?} inside of empty element", event.kind);
            }

            return Ok(None);
        }

        self.tokenize(event, closes_immediately)
    }

    fn tokenize(
        &mut self,
        event: Event<'a>,
        closes_immediately: bool,
    ) -> Result<Option<Token>, Error> {
        let node = event.node;

        let token = match (event.kind, node) {
            (EventKind::Enter, Node::Element(element)) => {
                if self.void_elements.is_void(&element.name) {
                    if !closes_immediately {
                        trace_log!("tokenize: void element {:?} has children", element.name);
                    }

                    self.suppress_exit_for = Some(node);
                    Token::EmptyTag(EmptyTag {
                        name: element.name.clone(),
                        attributes: element.attributes.clone(),
                    })
                } else if closes_immediately && self.collapse_empty_elements {
                    self.suppress_exit_for = Some(node);
                    Token::EmptyTag(EmptyTag {
                        name: element.name.clone(),
                        attributes: element.attributes.clone(),
                    })
                } else {
                    Token::StartTag(StartTag {
                        name: element.name.clone(),
                        attributes: element.attributes.clone(),
                    })
                }
            }
            (EventKind::Exit, Node::Element(element)) => {
                if self.void_elements.is_void(&element.name) {
                    // suppressed exits never get here
                    return Err(Error::MalformedStream {
                        element: element.name.clone(),
                    });
                }

                Token::EndTag(EndTag {
                    name: element.name.clone(),
                })
            }
            (EventKind::Comment, Node::Comment(value)) => Token::Comment(value.clone()),
            (
                EventKind::Whitespace | EventKind::Characters,
                Node::Text(value) | Node::Whitespace(value),
            ) => Token::Text(value.clone()),
            (kind, _) => {
                // also covers events that don't fit their node, such as entering a comment
                trace_log!("tokenize: unknown event {:?} for {:?}", kind, node);
                Token::Unknown(kind.as_bytes().to_vec().into())
            }
        };

        Ok(Some(token))
    }
}

impl<'a, I, V> Iterator for TreeWalker<'a, I, V>
where
    I: Iterator<Item = Event<'a>>,
    V: VoidElements,
{
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let (previous, closes_immediately) = match self.events.next() {
                Some(current) => {
                    let closes_immediately = match self.pending {
                        Some(ref previous) => {
                            current.kind == EventKind::Exit && current.is_for(previous.node)
                        }
                        None => false,
                    };

                    match self.pending.replace(current) {
                        Some(previous) => (previous, closes_immediately),
                        None => continue,
                    }
                }
                None => {
                    self.done = true;
                    match self.pending.take() {
                        Some(previous) => (previous, false),
                        None => break,
                    }
                }
            };

            match self.process_event(previous, closes_immediately) {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => (),
                Err(e) => {
                    self.done = true;
                    self.suppress_exit_for = None;
                    return Some(Err(e));
                }
            }
        }

        // the source ran out while an exit was still outstanding
        let node = self.suppress_exit_for.take()?;
        let element = node
            .as_element()
            .map(|element| element.name.clone())
            .unwrap_or_default();
        trace_log!("next: event source ended before exit of {:?}", element);
        Some(Err(Error::MalformedStream { element }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute;

    fn walk(events: Vec<Event<'_>>) -> Result<Vec<Token>, Error> {
        TreeWalker::new(events).collect()
    }

    #[test]
    fn test_void_element() {
        let img = Node::element("img", vec![Attribute::new("src", "a.png")], vec![]);
        let tokens = walk(vec![
            Event::new(EventKind::Enter, &img),
            Event::new(EventKind::Exit, &img),
        ]);

        assert_eq!(
            tokens,
            Ok(vec![Token::EmptyTag(EmptyTag {
                name: "img".into(),
                attributes: vec![Attribute::new("src", "a.png")],
            })])
        );
    }

    #[test]
    fn test_identical_void_elements_are_distinct() {
        let first = Node::element("br", vec![], vec![]);
        let second = first.clone();

        // the exit of `second` must not clear the marker set for `first`
        let tokens = walk(vec![
            Event::new(EventKind::Enter, &first),
            Event::new(EventKind::Exit, &second),
        ]);

        assert_eq!(
            tokens,
            Err(Error::MalformedStream {
                element: "br".into()
            })
        );
    }

    #[test]
    fn test_trailing_void_enter() {
        let img = Node::element("img", vec![], vec![]);
        let mut walker = TreeWalker::new(vec![Event::new(EventKind::Enter, &img)]);

        assert_eq!(
            walker.next(),
            Some(Ok(Token::EmptyTag(EmptyTag {
                name: "img".into(),
                attributes: vec![],
            })))
        );
        assert_eq!(
            walker.next(),
            Some(Err(Error::MalformedStream {
                element: "img".into()
            }))
        );
        assert_eq!(walker.next(), None);
    }

    #[test]
    fn test_walk_children_clears_outstanding_exit() {
        let br = Node::element("br", vec![], vec![]);
        let text = Node::text("x");
        let mut walker = TreeWalker::new(vec![
            Event::new(EventKind::Enter, &br),
            Event::new(EventKind::Characters, &text),
        ]);

        assert!(matches!(walker.next(), Some(Ok(Token::EmptyTag(_)))));
        assert_eq!(walker.walk_children(&br), Err(Error::NotSupported));
        assert_eq!(walker.next(), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(walk(vec![]), Ok(vec![]));
    }

    #[test]
    fn test_walk_children_not_supported() {
        let p = Node::element("p", vec![], vec![Node::text("x")]);
        let mut walker = TreeWalker::new(p.events());

        assert_eq!(walker.walk_children(&p), Err(Error::NotSupported));
        assert_eq!(walker.next(), None);
    }

    #[test]
    fn test_mismatched_node_is_unknown() {
        let comment = Node::comment("x");
        let tokens = walk(vec![Event::new(EventKind::Enter, &comment)]);

        assert_eq!(tokens, Ok(vec![Token::Unknown("Enter".into())]));
    }
}
