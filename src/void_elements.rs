//! Decide which elements can never have children.
//!
//! The [`crate::TreeWalker`] is given a [`VoidElements`] implementation when it is constructed.
//! [`HtmlVoidElements`] is what you want for HTML documents, but any closure or set of names will
//! do:
//!
//! ```
//! use std::collections::BTreeSet;
//! use tagwalk::{HtmlString, VoidElements};
//!
//! let by_closure = |name: &[u8]| name == b"x-icon";
//! assert!(by_closure.is_void(b"x-icon"));
//!
//! let by_set: BTreeSet<HtmlString> = vec![HtmlString::from("x-icon")].into_iter().collect();
//! assert!(by_set.is_void(b"x-icon"));
//! assert!(!by_set.is_void(b"img"));
//! ```
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use crate::HtmlString;

/// A classification of element names into void (never has children) and non-void.
///
/// Names are compared exactly as they appear in the document tree, byte by byte.
pub trait VoidElements {
    /// Whether elements named `name` are void.
    fn is_void(&self, name: &[u8]) -> bool;
}

impl<F> VoidElements for F
where
    F: Fn(&[u8]) -> bool,
{
    fn is_void(&self, name: &[u8]) -> bool {
        self(name)
    }
}

impl VoidElements for BTreeSet<HtmlString> {
    fn is_void(&self, name: &[u8]) -> bool {
        self.contains(name)
    }
}

impl<S: BuildHasher> VoidElements for HashSet<HtmlString, S> {
    fn is_void(&self, name: &[u8]) -> bool {
        self.contains(name)
    }
}

/// The void elements of HTML, as listed by the WHATWG.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlVoidElements;

impl VoidElements for HtmlVoidElements {
    fn is_void(&self, name: &[u8]) -> bool {
        html_void_element(name)
    }
}

/// Whether `name` is one of the [void elements](https://html.spec.whatwg.org/#void-elements) of
/// HTML. Case-sensitive, names are expected in lowercase.
pub fn html_void_element(name: &[u8]) -> bool {
    matches!(
        name,
        b"area"
            | b"base"
            | b"br"
            | b"col"
            | b"embed"
            | b"hr"
            | b"img"
            | b"input"
            | b"link"
            | b"meta"
            | b"param"
            | b"source"
            | b"track"
            | b"wbr"
    )
}

#[test]
fn test_html_void_elements() {
    for name in ["img", "br", "input", "meta", "wbr"] {
        assert!(HtmlVoidElements.is_void(name.as_bytes()), "{}", name);
    }

    for name in ["div", "p", "script", "IMG", ""] {
        assert!(!HtmlVoidElements.is_void(name.as_bytes()), "{}", name);
    }
}

#[test]
fn test_hash_set() {
    let set: HashSet<HtmlString> = vec![HtmlString::from("x-icon")].into_iter().collect();
    assert!(set.is_void(b"x-icon"));
    assert!(!set.is_void(b"br"));
}
