use crate::{Attribute, HtmlString};

/// A HTML start/open tag, such as `<p>` or `<a>`.
///
/// A matching [`EndTag`] follows after the tokens of the element's children.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct StartTag {
    /// The start tag's name, such as `"p"` or `"a"`.
    pub name: HtmlString,

    /// The element's attributes, exactly as the source node had them.
    pub attributes: Vec<Attribute>,
}

/// A HTML end/close tag, such as `</p>` or `</a>`.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct EndTag {
    /// The ending tag's name, such as `"p"` or `"a"`.
    pub name: HtmlString,
}

/// A tag standing for a whole element without children, such as `<img src="a.png">` or `<br>`.
///
/// No [`EndTag`] follows.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct EmptyTag {
    /// The tag's name, such as `"img"`.
    pub name: HtmlString,

    /// The element's attributes, exactly as the source node had them.
    pub attributes: Vec<Attribute>,
}

/// The tokens produced by [`crate::TreeWalker`].
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Token {
    /// A HTML start tag.
    StartTag(StartTag),
    /// A HTML end tag.
    EndTag(EndTag),
    /// A void element, or an element that turned out to have no children.
    EmptyTag(EmptyTag),
    /// A HTML comment.
    Comment(HtmlString),
    /// A literal string, from either a text or a whitespace node.
    ///
    /// Consecutive text is not folded into one token.
    Text(HtmlString),
    /// An event the tree walker does not know how to handle. Holds the name of the event kind.
    ///
    /// Can be skipped over, the walker continues with more tokens afterward.
    Unknown(HtmlString),
}

impl Token {
    /// The kind of this token, such as `"StartTag"`. Useful for logging tokens.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::StartTag(_) => "StartTag",
            Token::EndTag(_) => "EndTag",
            Token::EmptyTag(_) => "EmptyTag",
            Token::Comment(_) => "Comment",
            Token::Text(_) => "Text",
            Token::Unknown(_) => "Unknown",
        }
    }

    /// The tag name of a start, end or empty tag.
    pub fn name(&self) -> Option<&HtmlString> {
        match self {
            Token::StartTag(tag) => Some(&tag.name),
            Token::EndTag(tag) => Some(&tag.name),
            Token::EmptyTag(tag) => Some(&tag.name),
            _ => None,
        }
    }
}
