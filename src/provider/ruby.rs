use crate::model::{Position, Range, SourceSymbol, SymbolKind};
use crate::provider::SymbolProvider;
use anyhow::Result;
use tree_sitter::{Node, Parser};

pub struct RubyProvider {
    parser: Parser,
}

impl RubyProvider {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_ruby::LANGUAGE;
        parser.set_language(&language.into())?;
        Ok(Self { parser })
    }
}

impl SymbolProvider for RubyProvider {
    fn provide(&mut self, source: &str) -> Result<Vec<SourceSymbol>> {
        let tree = match self.parser.parse(source, None) {
            Some(tree) => tree,
            None => return Ok(Vec::new()),
        };
        Ok(collect(tree.root_node(), source, false))
    }
}

/// Walks the syntax tree collecting declaration nodes into a nested forest.
/// Method nodes are leaves; anything else is a container to descend into.
/// `singleton` marks a `class << self` region whose methods are class-level.
fn collect(node: Node<'_>, source: &str, singleton: bool) -> Vec<SourceSymbol> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "class" | "module" => {
                let name = field_text(child, "name", source);
                if name.is_empty() {
                    out.extend(collect(child, source, false));
                    continue;
                }
                let kind = if child.kind() == "module" {
                    SymbolKind::Module
                } else {
                    SymbolKind::Class
                };
                out.push(SourceSymbol {
                    name,
                    kind,
                    range: node_range(child),
                    children: collect(child, source, false),
                });
            }
            "singleton_class" => {
                out.extend(collect(child, source, true));
            }
            "method" => {
                let name = field_text(child, "name", source);
                if name.is_empty() {
                    continue;
                }
                let name = if singleton {
                    format!("self.{name}")
                } else {
                    name
                };
                out.push(method_symbol(name, child));
            }
            "singleton_method" => {
                let object = field_text(child, "object", source);
                let name = field_text(child, "name", source);
                if name.is_empty() {
                    continue;
                }
                let name = if object.is_empty() || object == "self" {
                    format!("self.{name}")
                } else {
                    format!("{object}.{name}")
                };
                out.push(method_symbol(name, child));
            }
            _ => out.extend(collect(child, source, singleton)),
        }
    }
    out
}

fn method_symbol(name: String, node: Node<'_>) -> SourceSymbol {
    SourceSymbol {
        name,
        kind: SymbolKind::Method,
        range: node_range(node),
        children: Vec::new(),
    }
}

fn field_text(node: Node<'_>, field: &str, source: &str) -> String {
    node.child_by_field_name(field)
        .map(|child| node_text(child, source))
        .unwrap_or_default()
}

fn node_text(node: Node<'_>, source: &str) -> String {
    source
        .get(node.start_byte()..node.end_byte())
        .unwrap_or("")
        .trim()
        .to_string()
}

fn node_range(node: Node<'_>) -> Range {
    let start = node.start_position();
    let end = node.end_position();
    Range::new(
        Position::new(start.row as i64 + 1, start.column as i64 + 1),
        Position::new(end.row as i64 + 1, end.column as i64 + 1),
    )
}

#[cfg(test)]
mod tests {
    use super::RubyProvider;
    use crate::model::SymbolKind;
    use crate::provider::SymbolProvider;

    #[test]
    fn singleton_class_members_are_class_level() {
        let source = r#"
class Registry
  class << self
    def lookup(key)
    end
  end

  def clear
  end
end
"#;
        let mut provider = RubyProvider::new().unwrap();
        let symbols = provider.provide(source).unwrap();
        assert_eq!(symbols.len(), 1);
        let class = &symbols[0];
        assert_eq!(class.name, "Registry");
        assert_eq!(class.kind, SymbolKind::Class);
        let names: Vec<_> = class.children.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["self.lookup", "clear"]);
    }
}
