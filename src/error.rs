use std::fmt;

use crate::HtmlString;

/// All errors the [`crate::TreeWalker`] can yield.
///
/// Both kinds are fatal: once an error has been yielded, the walker is exhausted and yields no
/// further tokens. Event kinds the walker does not recognize are *not* errors, they turn into
/// [`crate::Token::Unknown`].
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Error {
    /// The event source broke its promise of delivering an `Exit` event for every `Enter` event.
    ///
    /// Either the source ran out while the `Exit` of a void (or collapsed empty) element was
    /// still outstanding, or an `Exit` for a void element showed up without its `Enter`.
    MalformedStream {
        /// The name of the element whose events did not match up.
        element: HtmlString,
    },

    /// [`crate::TreeWalker::walk_children`] was called. Only the full, linear traversal of the
    /// top-level event sequence is supported.
    NotSupported,
}

impl Error {
    /// A short `kebab-case` code for this error.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match *self {
            Error::MalformedStream { .. } => "malformed-stream",
            Error::NotSupported => "not-supported",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedStream { element } => write!(
                f,
                "{}: void element <{}> without matching exit event",
                self.as_str(),
                element
            ),
            Error::NotSupported => write!(
                f,
                "{}: walking children is not supported, walk the full event stream instead",
                self.as_str()
            ),
        }
    }
}

impl std::error::Error for Error {}

#[test]
fn test_display() {
    let err = Error::MalformedStream {
        element: "img".into(),
    };
    assert_eq!(
        err.to_string(),
        "malformed-stream: void element <img> without matching exit event"
    );
    assert_eq!(Error::NotSupported.as_str(), "not-supported");
}
