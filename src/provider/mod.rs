use crate::model::SourceSymbol;
use anyhow::Result;

pub mod ruby;

/// Produces the declared-symbol forest for one document. Implementations
/// own their parser state; a fresh forest is produced per call and callers
/// never mutate it.
pub trait SymbolProvider {
    fn provide(&mut self, source: &str) -> Result<Vec<SourceSymbol>>;
}

/// Extension-dispatched provider lookup. `None` for files no provider
/// understands; callers treat that as an empty forest.
pub fn provider_for_path(path: &str) -> Result<Option<Box<dyn SymbolProvider>>> {
    if path.ends_with(".rb") {
        return Ok(Some(Box::new(ruby::RubyProvider::new()?)));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_extension() {
        assert!(provider_for_path("app/models/user.rb").unwrap().is_some());
        assert!(provider_for_path("app/views/index.html.erb").unwrap().is_none());
        assert!(provider_for_path("README.md").unwrap().is_none());
    }
}
