//! Line model over generated TypeScript sources.
//!
//! Registration never parses TypeScript. It classifies each physical line
//! as an import, an `export * from` re-export, or anything else, and does
//! all positional work in terms of those classes.

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `import ... from '...';`, possibly followed by a comment
    Import,
    /// `export * from '...';`
    ExportStar,
    Other,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.starts_with("import ") && trimmed.contains(" from ") && trimmed.contains(';') {
            LineKind::Import
        } else if trimmed.starts_with("export * from ") {
            LineKind::ExportStar
        } else {
            LineKind::Other
        }
    }
}

/// One physical line, newline included, with its byte offset.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub text: &'a str,
    pub start: usize,
    pub kind: LineKind,
}

impl Line<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn has_newline(&self) -> bool {
        self.text.ends_with('\n')
    }
}

/// A source file split into classified lines.
#[derive(Debug)]
pub struct SourceLines<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> SourceLines<'a> {
    pub fn parse(source: &'a str) -> Self {
        let mut start = 0;
        let lines = source
            .split_inclusive('\n')
            .map(|text| {
                let line = Line {
                    text,
                    start,
                    kind: LineKind::classify(text),
                };
                start += text.len();
                line
            })
            .collect();
        Self { lines }
    }

    /// Last line of the given kind, in file order.
    pub fn last_of(&self, kind: LineKind) -> Option<&Line<'a>> {
        self.lines.iter().rev().find(|line| line.kind == kind)
    }

    /// Leading whitespace of the line containing byte offset `pos`.
    pub fn indent_at(&self, pos: usize) -> &'a str {
        let Some(line) = self
            .lines
            .iter()
            .find(|line| line.start <= pos && pos < line.end())
        else {
            return "";
        };
        let content = line.text.trim_start_matches([' ', '\t']);
        &line.text[..line.text.len() - content.len()]
    }
}

/// Whether `fragment` occurs anywhere in `source`, not glued to the end of a
/// longer identifier (`...weatherTools,` is not found in `...myweatherTools,`).
pub fn contains_fragment(source: &str, fragment: &str) -> bool {
    source.match_indices(fragment).any(|(at, _)| {
        !source[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
    })
}

/// Insert `fragment` as a new line after the last line of `kind`.
///
/// Returns `None` when no line of that kind exists.
pub fn insert_after_last(source: &str, kind: LineKind, fragment: &str) -> Option<String> {
    let lines = SourceLines::parse(source);
    let anchor = lines.last_of(kind)?;
    let at = anchor.end();
    let mut out = String::with_capacity(source.len() + fragment.len() + 1);
    out.push_str(&source[..at]);
    if anchor.has_newline() {
        out.push_str(fragment);
        out.push('\n');
    } else {
        out.push('\n');
        out.push_str(fragment);
    }
    out.push_str(&source[at..]);
    Some(out)
}

/// Prepend `fragment` as the first line.
pub fn prepend_line(source: &str, fragment: &str) -> String {
    format!("{fragment}\n{source}")
}

/// Append `block` after the existing text, starting on a fresh line.
pub fn append_block(source: &str, block: &str) -> String {
    let mut out = String::with_capacity(source.len() + block.len() + 1);
    out.push_str(source);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(block);
    out
}
