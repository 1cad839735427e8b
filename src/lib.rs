#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod error;
mod event;
mod htmlstring;
mod node;
#[cfg(feature = "html5ever")]
pub mod rcdom;
mod sink;
mod token;
mod utils;
pub mod void_elements;
mod walker;

#[doc(hidden)]
pub mod testutils;

pub use error::Error;
pub use event::{Event, EventKind};
pub use htmlstring::HtmlString;
pub use node::{Attribute, Element, Events, Node};
pub use sink::TokenSink;
pub use token::{EmptyTag, EndTag, StartTag, Token};
pub use void_elements::{HtmlVoidElements, VoidElements};
pub use walker::TreeWalker;
