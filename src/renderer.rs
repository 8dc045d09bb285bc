/// HTML renderer for classified lines
use crate::ast::Block;

/// Emits HTML fragments for a stream of blocks, tracking which list
/// wrappers are currently open.
///
/// The two list flags are independent: opening one kind of list does not
/// close the other unless `strict_lists` is set. Only a non-list block or
/// [`HtmlRenderer::finish`] closes both.
pub struct HtmlRenderer {
    in_unordered_list: bool,
    in_ordered_list: bool,
    strict_lists: bool,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer {
            in_unordered_list: false,
            in_ordered_list: false,
            strict_lists: false,
        }
    }

    pub fn with_strict_lists(mut self, strict_lists: bool) -> Self {
        self.strict_lists = strict_lists;
        self
    }

    /// Render a whole block stream, including the final list flush
    pub fn render(mut self, blocks: &[Block]) -> Vec<String> {
        let mut out = Vec::with_capacity(blocks.len() + 2);
        for block in blocks {
            self.push(block, &mut out);
        }
        self.finish(&mut out);
        out
    }

    pub fn push(&mut self, block: &Block, out: &mut Vec<String>) {
        if !block.is_list_item() {
            self.close_lists(out);
        }

        match block {
            Block::Heading { level, text } => {
                out.push(format!("<h{}>{}</h{}>", level, text, level));
            }
            Block::UnorderedItem(text) => {
                if self.strict_lists && self.in_ordered_list {
                    out.push("</ol>".to_string());
                    self.in_ordered_list = false;
                }
                if !self.in_unordered_list {
                    out.push("<ul>".to_string());
                    self.in_unordered_list = true;
                }
                out.push(format!("<li>{}</li>", text));
            }
            Block::OrderedItem(text) => {
                if self.strict_lists && self.in_unordered_list {
                    out.push("</ul>".to_string());
                    self.in_unordered_list = false;
                }
                if !self.in_ordered_list {
                    out.push("<ol>".to_string());
                    self.in_ordered_list = true;
                }
                out.push(format!("<li>{}</li>", text));
            }
            Block::Paragraph(text) | Block::Parenthesized(text) | Block::Digest(text) => {
                out.push(format!("<p>{}</p>", text));
            }
            Block::Break => out.push("<br/>".to_string()),
        }
    }

    /// Close the unordered list, then the ordered one, if open
    pub fn close_lists(&mut self, out: &mut Vec<String>) {
        if self.in_unordered_list {
            out.push("</ul>".to_string());
            self.in_unordered_list = false;
        }
        if self.in_ordered_list {
            out.push("</ol>".to_string());
            self.in_ordered_list = false;
        }
    }

    pub fn finish(mut self, out: &mut Vec<String>) {
        self.close_lists(out);
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(text: &str) -> Block {
        Block::UnorderedItem(text.to_string())
    }

    fn ordered(text: &str) -> Block {
        Block::OrderedItem(text.to_string())
    }

    #[test]
    fn test_list_opens_once() {
        let out = HtmlRenderer::new().render(&[item("a"), item("b")]);
        assert_eq!(out, ["<ul>", "<li>a</li>", "<li>b</li>", "</ul>"]);
    }

    #[test]
    fn test_heading_closes_list_before_emitting() {
        let out = HtmlRenderer::new().render(&[
            ordered("a"),
            Block::Heading {
                level: 2,
                text: "Next".to_string(),
            },
        ]);
        assert_eq!(out, ["<ol>", "<li>a</li>", "</ol>", "<h2>Next</h2>"]);
    }

    #[test]
    fn test_mixed_lists_stay_open_together() {
        let out = HtmlRenderer::new().render(&[
            item("a"),
            ordered("b"),
            item("c"),
            Block::Break,
        ]);
        assert_eq!(
            out,
            [
                "<ul>",
                "<li>a</li>",
                "<ol>",
                "<li>b</li>",
                "<li>c</li>",
                "</ul>",
                "</ol>",
                "<br/>",
            ]
        );
    }

    #[test]
    fn test_strict_lists_switch_kinds() {
        let out = HtmlRenderer::new().with_strict_lists(true).render(&[
            item("a"),
            ordered("b"),
            item("c"),
        ]);
        assert_eq!(
            out,
            [
                "<ul>",
                "<li>a</li>",
                "</ul>",
                "<ol>",
                "<li>b</li>",
                "</ol>",
                "<ul>",
                "<li>c</li>",
                "</ul>",
            ]
        );
    }

    #[test]
    fn test_close_lists_is_idempotent() {
        let mut renderer = HtmlRenderer::new();
        let mut out = Vec::new();
        renderer.push(&ordered("x"), &mut out);
        renderer.close_lists(&mut out);
        renderer.close_lists(&mut out);
        renderer.finish(&mut out);
        assert_eq!(out, ["<ol>", "<li>x</li>", "</ol>"]);
    }

    #[test]
    fn test_bracket_blocks_render_as_paragraphs() {
        let out = HtmlRenderer::new().render(&[
            Block::Parenthesized("ab".to_string()),
            Block::Digest("d41d8cd98f00b204e9800998ecf8427e".to_string()),
        ]);
        assert_eq!(
            out,
            ["<p>ab</p>", "<p>d41d8cd98f00b204e9800998ecf8427e</p>"]
        );
    }

    #[test]
    fn test_empty_stream() {
        assert!(HtmlRenderer::new().render(&[]).is_empty());
    }
}
