//! Read-only lookups correlating cursor positions, source symbols, and
//! spec blocks. Absence is the normal not-found result; nothing errors.

use crate::model::{Position, SourceSymbol, SpecSymbol};

/// Innermost childless symbol containing `position`. When a node contains
/// the position but none of its children do, the enclosing node itself is
/// returned rather than not-found, so a cursor between two methods still
/// resolves to the surrounding class.
pub fn find_symbol_by_position(
    nodes: &[SourceSymbol],
    position: Position,
) -> Option<&SourceSymbol> {
    let mut enclosing: Option<&SourceSymbol> = None;
    let mut scope = nodes;
    loop {
        match scope.iter().find(|node| node.range.contains(position)) {
            Some(node) => {
                if node.children.is_empty() {
                    return Some(node);
                }
                enclosing = Some(node);
                scope = &node.children;
            }
            None => return enclosing,
        }
    }
}

/// Pre-order depth-first search, first exact name match.
pub fn find_symbol_by_name<'a>(nodes: &'a [SourceSymbol], name: &str) -> Option<&'a SourceSymbol> {
    let mut stack: Vec<&SourceSymbol> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.name == name {
            return Some(node);
        }
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }
    None
}

/// The named block whose start is nearest at or above `position`. This is
/// deliberately not a containment test: a cursor past a block's `end` but
/// before the next named block still attributes to the earlier block.
pub fn find_spec_symbol_by_position(
    symbols: &[SpecSymbol],
    position: Position,
) -> Option<&SpecSymbol> {
    symbols
        .iter()
        .filter(|symbol| symbol.range.start <= position)
        .max_by_key(|symbol| symbol.range.start)
}

/// The spec block a source method pairs with: `self.bar` pairs with a
/// class-method block named `bar`, plain `baz` with an instance-method
/// block named `baz`. Both name and kind must agree.
pub fn find_spec_by_symbol<'a>(
    symbols: &'a [SpecSymbol],
    source: &SourceSymbol,
) -> Option<&'a SpecSymbol> {
    let name = source.bare_name();
    let kind = source.spec_kind();
    symbols
        .iter()
        .find(|symbol| symbol.kind == kind && symbol.name == name)
}
