//! Walk a small document and echo every token the way a token consumer would see it.
//!
//! ```text
//! cargo run --example=print_tokens
//! ```
use tagwalk::{Attribute, Node, Token, TreeWalker};

fn document() -> Node {
    Node::element(
        "html",
        vec![Attribute::new("lang", "en")],
        vec![
            Node::comment(" generated "),
            Node::element(
                "body",
                vec![],
                vec![
                    Node::element("h1", vec![], vec![Node::text("Hello world!")]),
                    Node::whitespace("\n"),
                    Node::element(
                        "p",
                        vec![],
                        vec![
                            Node::text("A picture:"),
                            Node::element("img", vec![Attribute::new("src", "a.png")], vec![]),
                        ],
                    ),
                    Node::element("div", vec![Attribute::new("class", "spacer")], vec![]),
                ],
            ),
        ],
    )
}

fn main() {
    let tree = document();

    let result = TreeWalker::new(tree.events()).finish(|token: Token| match token {
        Token::StartTag(tag) => println!("StartTag: {} {:?}", tag.name, tag.attributes),
        Token::EndTag(tag) => println!("EndTag: {}", tag.name),
        Token::EmptyTag(tag) => println!("EmptyTag: {} {:?}", tag.name, tag.attributes),
        Token::Comment(data) => println!("Comment: {}", data),
        Token::Text(data) => println!("Characters: {:?}", data),
        Token::Unknown(kind) => println!("Unknown: {}", kind),
    });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
