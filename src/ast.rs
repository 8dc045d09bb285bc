/// Block types produced by classifying one input line
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading {
        level: usize,
        text: String,
    },
    // List items; the renderer decides when the wrapper opens and closes
    UnorderedItem(String), // `- item`
    OrderedItem(String),   // `* item`
    // Default branch, inline substitutions already applied
    Paragraph(String),
    Parenthesized(String), // `((...))` with every c/C removed
    Digest(String),        // `[[...]]` as lowercase hex MD5
    Break,
}

impl Block {
    /// List items are the only blocks that leave open lists alone
    pub fn is_list_item(&self) -> bool {
        matches!(self, Block::UnorderedItem(_) | Block::OrderedItem(_))
    }
}
