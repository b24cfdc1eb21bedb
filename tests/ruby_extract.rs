use specnav::model::SymbolKind;
use specnav::provider::ruby::RubyProvider;
use specnav::provider::SymbolProvider;

#[test]
fn extracts_nested_symbol_forest() {
    let source = r#"
module Billing
  class Invoice < ApplicationRecord
    def total
      line_items.sum(&:amount)
    end

    def self.build(params)
      new(params)
    end

    private

    def line_items
      []
    end
  end
end
"#;
    let mut provider = RubyProvider::new().unwrap();
    let symbols = provider.provide(source).unwrap();

    assert_eq!(symbols.len(), 1);
    let module = &symbols[0];
    assert_eq!(module.name, "Billing");
    assert_eq!(module.kind, SymbolKind::Module);

    assert_eq!(module.children.len(), 1);
    let class = &module.children[0];
    assert_eq!(class.name, "Invoice");
    assert_eq!(class.kind, SymbolKind::Class);

    let methods: Vec<_> = class
        .children
        .iter()
        .map(|s| (s.kind, s.name.as_str()))
        .collect();
    assert_eq!(
        methods,
        vec![
            (SymbolKind::Method, "total"),
            (SymbolKind::Method, "self.build"),
            (SymbolKind::Method, "line_items"),
        ]
    );
}

#[test]
fn ranges_are_one_indexed_and_nested() {
    let source = "class Foo\n  def bar\n  end\nend\n";
    let mut provider = RubyProvider::new().unwrap();
    let symbols = provider.provide(source).unwrap();

    let class = &symbols[0];
    assert_eq!(class.range.start.line, 1);
    assert_eq!(class.range.start.column, 1);
    assert_eq!(class.range.end.line, 4);

    let method = &class.children[0];
    assert_eq!(method.range.start.line, 2);
    assert_eq!(method.range.start.column, 3);
    assert_eq!(method.range.end.line, 3);
    assert!(class.range.contains(method.range.start));
    assert!(class.range.contains(method.range.end));
}

#[test]
fn scoped_class_name_keeps_constant_path() {
    let source = "class Admin::UsersController\n  def index\n  end\nend\n";
    let mut provider = RubyProvider::new().unwrap();
    let symbols = provider.provide(source).unwrap();
    assert_eq!(symbols[0].name, "Admin::UsersController");
    assert_eq!(symbols[0].simple_name(), "UsersController");
}

#[test]
fn top_level_methods_form_a_forest() {
    let source = "def helper_one\nend\n\ndef helper_two\nend\n";
    let mut provider = RubyProvider::new().unwrap();
    let symbols = provider.provide(source).unwrap();
    let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["helper_one", "helper_two"]);
    assert!(symbols.iter().all(|s| s.children.is_empty()));
}

#[test]
fn singleton_method_on_constant_keeps_receiver() {
    let source = "def Config.load\nend\n";
    let mut provider = RubyProvider::new().unwrap();
    let symbols = provider.provide(source).unwrap();
    assert_eq!(symbols[0].name, "Config.load");
}

#[test]
fn empty_source_yields_empty_forest() {
    let mut provider = RubyProvider::new().unwrap();
    assert!(provider.provide("").unwrap().is_empty());
}
