use crate::Token;

/// Something that consumes the tokens of a [`crate::TreeWalker`], see
/// [`crate::TreeWalker::finish`].
///
/// This trait is implemented for `Vec<Token>`, which collects every token, and for all functions
/// that have the same signature as [`TokenSink::process_token`].
pub trait TokenSink {
    /// Handle a single token, for example by serializing or logging it.
    fn process_token(&mut self, token: Token);
}

impl<F> TokenSink for F
where
    F: FnMut(Token),
{
    fn process_token(&mut self, token: Token) {
        self(token)
    }
}

impl TokenSink for Vec<Token> {
    fn process_token(&mut self, token: Token) {
        self.push(token);
    }
}

#[test]
fn test_collect_into_vec() {
    let tree = crate::Node::element("br", vec![], vec![]);
    let tokens: Vec<Token> = crate::TreeWalker::new(tree.events())
        .finish(Vec::new())
        .unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), "EmptyTag");
}

#[test]
fn test_vec_keeps_tokens_before_error() {
    let img = crate::Node::element("img", vec![], vec![]);
    let mut tokens: Vec<Token> = Vec::new();

    let walker = crate::TreeWalker::new(vec![crate::Event::new(crate::EventKind::Enter, &img)]);
    for token in walker {
        match token {
            Ok(token) => tokens.process_token(token),
            Err(e) => assert_eq!(e.as_str(), "malformed-stream"),
        }
    }

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].name().map(|name| name.to_string()), Some("img".to_owned()));
}
