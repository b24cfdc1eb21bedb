//! Parses a spec file's text into its named test blocks.
//!
//! A single pass keeps an explicit stack of open `do` blocks so that each
//! named block's range spans from its `describe` line to the matching
//! `end`. Unterminated blocks extend to end of file; nothing here errors.

use crate::model::{Position, Range, SpecSymbol, SpecSymbolKind};

struct OpenBlock {
    /// Index into the output list for tagged blocks; untagged blocks only
    /// keep the nesting depth honest.
    symbol_index: Option<usize>,
}

pub fn parse_spec_file(source: &str) -> Vec<SpecSymbol> {
    let mut symbols: Vec<SpecSymbol> = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();

    let mut last_line = 0;
    let mut last_column = 1;
    for (idx, line) in source.lines().enumerate() {
        let line_no = idx as i64 + 1;
        last_line = line_no;
        last_column = (line.trim_end().len() as i64).max(1);

        if line.trim() == "end" {
            if let Some(block) = stack.pop() {
                if let Some(i) = block.symbol_index {
                    symbols[i].range.end = Position::new(line_no, last_column);
                }
            }
            continue;
        }

        if let Some((name, kind, indent)) = parse_describe_line(line) {
            let start = Position::new(line_no, indent as i64 + 1);
            // Provisional end at the opener; finalized when the block
            // closes, or extended to end of file below if it never does.
            symbols.push(SpecSymbol {
                name,
                kind,
                range: Range::new(start, start),
            });
            stack.push(OpenBlock {
                symbol_index: Some(symbols.len() - 1),
            });
            continue;
        }

        if is_block_opener(line) {
            stack.push(OpenBlock { symbol_index: None });
        }
    }

    // Whatever is still open never found its `end`.
    let eof = Position::new(last_line.max(1), last_column);
    for block in stack {
        if let Some(i) = block.symbol_index {
            symbols[i].range.end = eof;
        }
    }

    symbols
}

/// Recognizes the exact shape `describe "<sigil><identifier>" do` with
/// optional surrounding whitespace, sigil `#` or `.`, and a bare-word
/// identifier optionally ending in `?` or `!`. Returns the captured name,
/// the kind derived from the sigil, and the line's indentation width.
fn parse_describe_line(line: &str) -> Option<(String, SpecSymbolKind, usize)> {
    let indent = line.len() - line.trim_start().len();
    let rest = line.trim();
    let rest = rest.strip_prefix("describe")?;
    let rest = eat_whitespace(rest)?;
    let rest = rest.strip_prefix('"')?;

    let mut chars = rest.chars();
    let sigil = chars.next()?;
    let kind = match sigil {
        '#' => SpecSymbolKind::InstanceMethodSpec,
        '.' => SpecSymbolKind::ClassMethodSpec,
        _ => return None,
    };

    let rest = chars.as_str();
    let ident_len = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    if ident_len == 0 {
        return None;
    }
    let mut name_end = ident_len;
    if matches!(rest.as_bytes().get(ident_len), Some(b'?') | Some(b'!')) {
        name_end += 1;
    }
    let name = &rest[..name_end];

    let rest = rest[name_end..].strip_prefix('"')?;
    let rest = eat_whitespace(rest)?;
    let rest = rest.strip_prefix("do")?;
    if !rest.trim().is_empty() {
        return None;
    }

    Some((name.to_string(), kind, indent))
}

/// At least one whitespace character, consumed.
fn eat_whitespace(value: &str) -> Option<&str> {
    let trimmed = value.trim_start();
    (trimmed.len() < value.len()).then_some(trimmed)
}

/// Any other `do`-style opener, including `do |params|` trailers. These
/// push and pop the stack but never emit a symbol.
fn is_block_opener(line: &str) -> bool {
    let trimmed = line.trim_end();
    if trimmed.trim_start().starts_with('#') {
        return false;
    }
    let head = if trimmed.ends_with('|') {
        match trimmed[..trimmed.len() - 1].rfind('|') {
            Some(i) => trimmed[..i].trim_end(),
            None => trimmed,
        }
    } else {
        trimmed
    };
    head.trim_start() == "do" || head.ends_with(" do")
}
