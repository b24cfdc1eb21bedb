use serde::Serialize;

/// 1-indexed line/column location in a document, matching the spans the
/// symbol providers emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: i64,
    pub column: i64,
}

impl Position {
    pub fn new(line: i64, column: i64) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Method,
    Function,
    Class,
    Module,
    Other,
}

/// One declared construct in a source file. Produced fresh per parse by a
/// symbol provider; consumers only read it.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSymbol {
    /// `self.`-prefixed names denote class-level (singleton) methods.
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
    pub children: Vec<SourceSymbol>,
}

impl SourceSymbol {
    pub fn is_method(&self) -> bool {
        matches!(self.kind, SymbolKind::Method | SymbolKind::Function)
    }

    /// Last segment of a namespaced name (`Foo::Bar` -> `Bar`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }

    /// Method name without the singleton marker.
    pub fn bare_name(&self) -> &str {
        self.name.strip_prefix("self.").unwrap_or(&self.name)
    }

    /// The sigil-prefixed name its spec block would carry
    /// (`self.bar` -> `.bar`, `baz` -> `#baz`).
    pub fn spec_name(&self) -> String {
        match self.name.strip_prefix("self.") {
            Some(rest) => format!(".{rest}"),
            None => format!("#{}", self.name),
        }
    }

    pub fn spec_kind(&self) -> SpecSymbolKind {
        if self.name.starts_with("self.") {
            SpecSymbolKind::ClassMethodSpec
        } else {
            SpecSymbolKind::InstanceMethodSpec
        }
    }
}

/// Derived from the sigil inside the block name: `.` for class methods,
/// `#` for instance methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecSymbolKind {
    InstanceMethodSpec,
    ClassMethodSpec,
}

/// One named test block inside a spec file. The range spans the opening
/// `describe` line through its matching `end`.
#[derive(Debug, Clone, Serialize)]
pub struct SpecSymbol {
    /// Method name without the sigil.
    pub name: String,
    pub kind: SpecSymbolKind,
    pub range: Range,
}

/// The parsed shape of one source file. Rebuilt on every request, never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ClassContext {
    pub symbols: Vec<SourceSymbol>,
    /// All method/function symbols, document order.
    pub methods: Vec<SourceSymbol>,
    /// Subset of `methods` visible under the prevailing visibility marker.
    pub public_methods: Vec<SourceSymbol>,
    /// Text after the inheritance marker on the declaration line, or the
    /// literal `module`/`class` when no explicit supertype is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_type: Option<String>,
    /// Simple name of the type matching the file's expected name; `None`
    /// when no declared type matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_type_name: Option<String>,
    /// Derived from the file's base name with underscores stripped.
    pub expected_type_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> SourceSymbol {
        SourceSymbol {
            name: name.to_string(),
            kind: SymbolKind::Method,
            range: Range::new(Position::new(1, 1), Position::new(1, 10)),
            children: Vec::new(),
        }
    }

    #[test]
    fn spec_name_and_kind_follow_singleton_marker() {
        let instance = sym("save");
        assert_eq!(instance.spec_name(), "#save");
        assert_eq!(instance.spec_kind(), SpecSymbolKind::InstanceMethodSpec);
        assert_eq!(instance.bare_name(), "save");

        let class_level = sym("self.create");
        assert_eq!(class_level.spec_name(), ".create");
        assert_eq!(class_level.spec_kind(), SpecSymbolKind::ClassMethodSpec);
        assert_eq!(class_level.bare_name(), "create");
    }

    #[test]
    fn range_contains_is_inclusive() {
        let range = Range::new(Position::new(2, 3), Position::new(4, 1));
        assert!(range.contains(Position::new(2, 3)));
        assert!(range.contains(Position::new(3, 1)));
        assert!(range.contains(Position::new(4, 1)));
        assert!(!range.contains(Position::new(2, 2)));
        assert!(!range.contains(Position::new(4, 2)));
    }

    #[test]
    fn simple_name_takes_last_namespace_segment() {
        let mut nested = sym("Billing::Invoice");
        nested.kind = SymbolKind::Class;
        assert_eq!(nested.simple_name(), "Invoice");
        assert_eq!(sym("save").simple_name(), "save");
    }
}
