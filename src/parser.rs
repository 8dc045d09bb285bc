/// Line classifier for the supported markdown subset
use crate::ast::Block;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());

/// Opening and closing marker of a bracket syntax
struct Delimiters {
    open: &'static str,
    close: &'static str,
}

const PARENS: Delimiters = Delimiters {
    open: "((",
    close: "))",
};

const BRACKETS: Delimiters = Delimiters {
    open: "[[",
    close: "]]",
};

impl Delimiters {
    fn found_in(&self, line: &str) -> bool {
        line.contains(self.open) && line.contains(self.close)
    }
}

pub struct Parser {
    /// Remove exactly one `((`/`[[` and one `))`/`]]` instead of trimming every
    /// bracket character from both ends
    exact_delimiters: bool,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            exact_delimiters: false,
        }
    }

    pub fn with_exact_delimiters(mut self, exact_delimiters: bool) -> Self {
        self.exact_delimiters = exact_delimiters;
        self
    }

    /// Classify every line of `input`, in order
    pub fn parse(&self, input: &str) -> Vec<Block> {
        crate::split_lines(input)
            .map(|line| self.parse_line(line))
            .collect()
    }

    /// Classify a single line. Trailing whitespace is ignored.
    ///
    /// Checks run in a fixed order and the first match wins: heading,
    /// `- ` item, `* ` item, then the default branch.
    pub fn parse_line(&self, line: &str) -> Block {
        let line = line.trim_end();

        if line.starts_with('#') {
            self.parse_heading(line)
        } else if let Some(rest) = line.strip_prefix("- ") {
            Block::UnorderedItem(rest.trim().to_string())
        } else if let Some(rest) = line.strip_prefix("* ") {
            Block::OrderedItem(rest.trim().to_string())
        } else {
            self.parse_text(line)
        }
    }

    fn parse_heading(&self, line: &str) -> Block {
        // Level counts the '#' characters of the first space-delimited token,
        // so "#a#" is a level 2 heading
        let level = line
            .split(' ')
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|&c| c == '#')
            .count();

        let text = line.trim_matches('#').trim();

        Block::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn parse_text(&self, line: &str) -> Block {
        let line = apply_inline(line);

        if PARENS.found_in(&line) {
            let inner = self.strip_delimiters(&line, &PARENS);
            Block::Parenthesized(inner.chars().filter(|&c| !matches!(c, 'c' | 'C')).collect())
        } else if BRACKETS.found_in(&line) {
            let inner = self.strip_delimiters(&line, &BRACKETS);
            Block::Digest(format!("{:x}", md5::compute(inner.as_bytes())))
        } else if line.is_empty() {
            Block::Break
        } else {
            Block::Paragraph(line)
        }
    }

    fn strip_delimiters<'a>(&self, line: &'a str, delimiters: &Delimiters) -> &'a str {
        if self.exact_delimiters {
            let line = line.strip_prefix(delimiters.open).unwrap_or(line);
            return line.strip_suffix(delimiters.close).unwrap_or(line);
        }

        // Character-set trim on both ends: every opening character first,
        // then every closing character
        line.trim_matches(|c: char| delimiters.open.contains(c))
            .trim_matches(|c: char| delimiters.close.contains(c))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace `**X**` with `<b>X</b>`, then `__X__` with `<em>X</em>`.
/// Unmatched markers stay as literal text.
pub fn apply_inline(line: &str) -> String {
    let bold = BOLD.replace_all(line, "<b>$1</b>");
    EMPHASIS.replace_all(&bold, "<em>$1</em>").into_owned()
}
