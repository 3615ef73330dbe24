//! Helpers for checking how the editor would read rich output.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Top-level block of a parsed rich document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph,
    Heading,
    /// A list, with its number of items
    List(usize),
    Table,
    Other,
}

fn options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options
}

fn classify<'a>(node: &'a AstNode<'a>) -> Block {
    match &node.data.borrow().value {
        NodeValue::Paragraph => Block::Paragraph,
        NodeValue::Heading(_) => Block::Heading,
        NodeValue::List(_) => Block::List(node.children().count()),
        NodeValue::Table(_) => Block::Table,
        _ => Block::Other,
    }
}

/// Parses `markdown` the way the editor does and lists its top-level blocks.
pub fn blocks(markdown: &str) -> Vec<Block> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &options());
    root.children().map(classify).collect()
}
