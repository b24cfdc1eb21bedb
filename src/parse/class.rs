//! Derives a [`ClassContext`] from a source file's text and its symbol
//! forest. Malformed input never errors; absent pieces come back as `None`.

use crate::model::{ClassContext, SourceSymbol, SymbolKind};

const VISIBILITY_MARKERS: [&str; 3] = ["public", "protected", "private"];

pub fn parse_class_file(source: &str, symbols: &[SourceSymbol], path: &str) -> ClassContext {
    let lines: Vec<&str> = source.lines().collect();

    // A bare visibility keyword line sets visibility for everything below it.
    let accesses: Vec<Option<&str>> = lines
        .iter()
        .map(|line| {
            let word = line.trim();
            VISIBILITY_MARKERS.contains(&word).then_some(word)
        })
        .collect();

    let methods = flatten_methods(symbols);
    let public_methods: Vec<SourceSymbol> = methods
        .iter()
        .filter(|method| {
            let line = method.range.start.line.max(1) as usize;
            let before = &accesses[..(line - 1).min(accesses.len())];
            let access = before.iter().rev().find_map(|v| *v).unwrap_or("public");
            access == "public"
        })
        .cloned()
        .collect();

    let expected_type_name = expected_type_name(path);

    let mut super_type = None;
    let mut type_name = None;
    let mut full_type_name = None;
    if let Some((chain, leaf)) = find_type_path(symbols, &expected_type_name) {
        type_name = Some(leaf.simple_name().to_string());
        full_type_name = Some(chain.join("::"));
        let line_idx = leaf.range.start.line.max(1) as usize - 1;
        let declaration = lines.get(line_idx).map(|l| l.trim()).unwrap_or("");
        super_type = super_type_from_declaration(declaration);
    }

    ClassContext {
        symbols: symbols.to_vec(),
        methods,
        public_methods,
        super_type,
        type_name,
        full_type_name,
        expected_type_name,
    }
}

/// All method/function symbols depth-first in document order. Methods are
/// leaves in this model, so they are never recursed into.
fn flatten_methods(nodes: &[SourceSymbol]) -> Vec<SourceSymbol> {
    let mut out = Vec::new();
    let mut stack: Vec<&SourceSymbol> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.is_method() {
            out.push(node.clone());
        } else {
            for child in node.children.iter().rev() {
                stack.push(child);
            }
        }
    }
    out
}

/// File base name up to the first dot, underscores stripped:
/// `send_welcome_email.rb` -> `sendwelcomeemail`.
fn expected_type_name(path: &str) -> String {
    let name = crate::util::file_name(path);
    let stem = name.split('.').next().unwrap_or(name);
    stem.replace('_', "")
}

/// Pre-order search for the first class/module whose simple name matches
/// the expected name case-insensitively, with its full ancestor chain.
fn find_type_path<'a>(
    nodes: &'a [SourceSymbol],
    expected: &str,
) -> Option<(Vec<String>, &'a SourceSymbol)> {
    let mut stack: Vec<(&SourceSymbol, Vec<String>)> =
        nodes.iter().rev().map(|n| (n, Vec::new())).collect();
    while let Some((node, ancestors)) = stack.pop() {
        let mut chain = ancestors;
        chain.push(node.name.clone());
        if matches!(node.kind, SymbolKind::Class | SymbolKind::Module)
            && node.simple_name().eq_ignore_ascii_case(expected)
        {
            return Some((chain, node));
        }
        for child in node.children.iter().rev() {
            stack.push((child, chain.clone()));
        }
    }
    None
}

fn super_type_from_declaration(declaration: &str) -> Option<String> {
    if let Some(i) = declaration.find('<') {
        return Some(declaration[i + 1..].trim().to_string());
    }
    if declaration.starts_with("module ") {
        return Some("module".to_string());
    }
    if declaration.starts_with("class ") {
        return Some("class".to_string());
    }
    None
}
