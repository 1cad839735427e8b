//! Walk documents parsed by html5ever.
//!
//! Requires the `html5ever` feature. Converts html5ever's reference DOM implementation into
//! [`Node`]s, which can then be traversed with [`Node::events`] or [`crate::Events::new`].
//!
//! ```
//! use html5ever::tendril::TendrilSink;
//! use markup5ever_rcdom::RcDom;
//! use tagwalk::{rcdom, Events, Token, TreeWalker};
//!
//! let dom = html5ever::parse_document(RcDom::default(), Default::default())
//!     .one("<p>hello<br>world</p>");
//! let nodes = rcdom::nodes_from_handle(&dom.document);
//!
//! for token in TreeWalker::new(Events::new(&nodes)) {
//!     println!("{:?}", token.unwrap());
//! }
//! ```
use markup5ever_rcdom::{Handle, NodeData};

use crate::{Attribute, Element, Node};

/// Convert the node behind `handle` into [`Node`]s.
///
/// A document node turns into its converted children. Doctypes and processing instructions have
/// no counterpart and are skipped. Text consisting only of ASCII whitespace becomes
/// [`Node::Whitespace`].
pub fn nodes_from_handle(handle: &Handle) -> Vec<Node> {
    let mut nodes = Vec::new();
    push_converted(&mut nodes, handle);
    nodes
}

fn push_converted(nodes: &mut Vec<Node>, handle: &Handle) {
    match handle.data {
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                push_converted(nodes, child);
            }
        }
        NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {}
        NodeData::Text { ref contents } => {
            let contents = contents.borrow();
            if contents.bytes().all(|x| x.is_ascii_whitespace()) {
                nodes.push(Node::whitespace(&**contents));
            } else {
                nodes.push(Node::text(&**contents));
            }
        }
        NodeData::Comment { ref contents } => nodes.push(Node::comment(&**contents)),
        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| Attribute::new(&*attr.name.local, &*attr.value))
                .collect();

            let mut children = Vec::new();
            for child in handle.children.borrow().iter() {
                push_converted(&mut children, child);
            }

            nodes.push(Node::Element(Element {
                name: (&*name.local).into(),
                attributes,
                children,
            }));
        }
    }
}
