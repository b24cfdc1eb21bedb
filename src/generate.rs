//! Emits RSpec scaffolding text for a method or a whole class. Output is a
//! pure function of its input, so regeneration is byte-identical.

use crate::model::{ClassContext, SourceSymbol};
use crate::util::to_snake_case;

fn spec_invocation(symbol: &SourceSymbol) -> String {
    match symbol.name.strip_prefix("self.") {
        Some(rest) => format!("described_class.{rest}"),
        None => format!("subject.{}", symbol.name),
    }
}

fn spec_definition(symbol: &SourceSymbol) -> String {
    let name = symbol.spec_name();
    let when = spec_invocation(symbol);
    format!(
        "  describe \"{name}\" do\n    When(:result){{{when}}}\n    Then{{expect(result).to eq :TODO}}\n  end"
    )
}

/// One self-contained named test block for a single method. Always
/// non-empty.
pub fn generate_spec_for_symbol(symbol: &SourceSymbol) -> String {
    format!("\n{}\n", spec_definition(symbol))
}

/// Full scaffold for a class. `None` when the context has no matching type
/// name to describe. Classes inheriting from `Interaction` get the richer
/// interactor template.
pub fn generate_spec_for_class(context: &ClassContext) -> Option<String> {
    let type_name = context.type_name.as_deref()?;
    if context.super_type.as_deref() == Some("Interaction") {
        Some(interactor_spec(type_name, context))
    } else {
        Some(plain_spec(type_name, context))
    }
}

fn interactor_spec(type_name: &str, context: &ClassContext) -> String {
    let class_name = to_snake_case(type_name);
    let method_specs = context
        .public_methods
        .iter()
        .filter(|method| method.bare_name() != "perform")
        .map(spec_definition)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r##"require "spec_helper"
describe {class_name} do
  include InteractorHelpers

  Given(:listener){{InteractorHelpers::ResponseSpy.new}}
  subject{{described_class.new(params, user)}}

  Given(:user){{create :user}}
  Given(:params){{{{}}}}

  describe "#perform" do
    When{{subject.add_listener(listener).perform}}

    context "with valid parameters" do
      Then{{expect(listener.interaction).to eq :{class_name}}}
      And{{expect(listener.state).to eq :success}}
    end

    context "with invalid parameters" do
      Then{{expect(listener.interaction).to eq :{class_name}}}
      And{{expect(listener.state).to eq :failure}}
    end
  end

{method_specs}
end
"##
    )
}

fn plain_spec(type_name: &str, context: &ClassContext) -> String {
    let class_name = to_snake_case(type_name);
    let method_specs = context
        .public_methods
        .iter()
        .map(spec_definition)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"require "spec_helper"

describe {class_name} do
  subject{{described_class.new}}

{method_specs}
end
"#
    )
}
