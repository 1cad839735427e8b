use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

/// A wrapper around a bytestring, used for element names, attributes, comments and text.
///
/// The tree walker never inspects or normalizes these bytes. This newtype only exists to provide
/// a nicer `Debug` impl and some convenient comparisons.
#[derive(Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct HtmlString(pub Vec<u8>);

impl HtmlString {
    /// View the string as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl Deref for HtmlString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Debug for HtmlString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "b\"")?;
        for &byte in &self.0 {
            for ch in std::ascii::escape_default(byte) {
                write!(f, "{}", ch as char)?;
            }
        }

        write!(f, "\"")
    }
}

impl Display for HtmlString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_string_lossy(), f)
    }
}

impl Borrow<[u8]> for HtmlString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for HtmlString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for HtmlString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for HtmlString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&[u8]> for HtmlString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl From<Vec<u8>> for HtmlString {
    fn from(vec: Vec<u8>) -> HtmlString {
        HtmlString(vec)
    }
}

impl From<&[u8]> for HtmlString {
    fn from(bytes: &[u8]) -> HtmlString {
        HtmlString(bytes.to_vec())
    }
}

impl From<&str> for HtmlString {
    fn from(s: &str) -> HtmlString {
        HtmlString(s.as_bytes().to_vec())
    }
}

impl From<String> for HtmlString {
    fn from(s: String) -> HtmlString {
        HtmlString(s.into_bytes())
    }
}

impl From<HtmlString> for Vec<u8> {
    fn from(other: HtmlString) -> Vec<u8> {
        other.0
    }
}

#[test]
fn test_eq_html_str_and_str() {
    assert!(HtmlString::from("img") == "img");
    assert!(HtmlString::from("img") != "br");
}

#[test]
fn test_debug_escapes_bytes() {
    let s = HtmlString(b"a\n\xff".to_vec());
    assert_eq!(format!("{:?}", s), "b\"a\\n\\xff\"");
}

#[test]
fn test_display_is_lossy() {
    let s = HtmlString(b"caf\xc3\xa9 \xff".to_vec());
    assert_eq!(s.to_string(), "caf\u{e9} \u{fffd}");
}

#[test]
fn test_borrowing() {
    // demonstrate a usecase for Borrow
    let mut set = std::collections::BTreeSet::new();
    set.insert(HtmlString::from("br"));
    assert!(set.contains(b"br".as_slice()));
}
