/// Line-oriented Markdown to HTML converter
pub mod ast;
pub mod error;
pub mod io;
pub mod parser;
pub mod renderer;

pub use error::Error;

use ast::Block;
use parser::Parser;
use renderer::HtmlRenderer;

/// Conversion settings. The default reproduces the classic behavior exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Close the other kind of list before opening a new one
    pub strict_lists: bool,
    /// Remove exactly one `((`/`[[` and `))`/`]]` around bracket syntax
    pub exact_delimiters: bool,
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`, terminators
/// removed. A trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(pos) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..pos];
        let terminator = if self.rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[pos + terminator..];
        Some(line)
    }
}

/// Classify an ordered sequence of lines
pub fn classify<I, S>(lines: I, options: Options) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parser = Parser::new().with_exact_delimiters(options.exact_delimiters);

    lines
        .into_iter()
        .map(|line| {
            let block = parser.parse_line(line.as_ref());
            log::trace!("{:?}", block);
            block
        })
        .collect()
}

/// Render classified lines to HTML fragments, closing any list still open
/// after the last one
pub fn render(blocks: &[Block], options: Options) -> Vec<String> {
    HtmlRenderer::new()
        .with_strict_lists(options.strict_lists)
        .render(blocks)
}

/// Convert an ordered sequence of lines into HTML fragments, one per entry.
pub fn transform<I, S>(lines: I, options: Options) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render(&classify(lines, options), options)
}

/// Parse markdown text and render to HTML
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_options(markdown, Options::default())
}

pub fn markdown_to_html_with_options(markdown: &str, options: Options) -> String {
    let blocks = Parser::new()
        .with_exact_delimiters(options.exact_delimiters)
        .parse(markdown);
    join_fragments(&render(&blocks, options))
}

pub(crate) fn join_fragments(fragments: &[String]) -> String {
    let mut html = String::with_capacity(fragments.iter().map(|f| f.len() + 1).sum());
    for fragment in fragments {
        html.push_str(fragment);
        html.push('\n');
    }
    html
}
