//! Companion-path resolution under a Rails-style naming convention.
//!
//! Pure string work over `/`-normalized repo-relative paths. The resolver
//! produces candidates, not verified matches; callers check existence.

use crate::config::Config;

/// Pluggable naming convention consulted for pairing. Defaults come from
/// the environment configuration.
#[derive(Debug, Clone)]
pub struct Convention {
    pub spec_dir: String,
    pub spec_suffix: String,
    pub app_dir: String,
}

impl Default for Convention {
    fn default() -> Self {
        let config = Config::get();
        Self {
            spec_dir: config.spec_dir.clone(),
            spec_suffix: config.spec_suffix.clone(),
            app_dir: config.app_dir.clone(),
        }
    }
}

impl Convention {
    /// Classifies a path as a spec file: carries the spec suffix before the
    /// extension, or lives under the spec root.
    pub fn is_spec(&self, path: &str) -> bool {
        let name = crate::util::file_name(path);
        if name.ends_with(&format!("{}.rb", self.spec_suffix)) {
            return true;
        }
        split_on_dir(path, &self.spec_dir).is_some()
    }

    /// Ordered companion-file candidates for `path`. Spec paths map to
    /// plausible source locations (conventional subfolder first, then
    /// fallbacks); source paths map to spec locations. Inputs outside any
    /// known convention yield a degenerate candidate list, never an error.
    pub fn related(&self, path: &str) -> Vec<String> {
        if self.is_spec(path) {
            self.spec_to_source(path)
        } else {
            self.source_to_spec(path)
        }
    }

    fn spec_to_source(&self, path: &str) -> Vec<String> {
        let (prefix, rest) = match split_on_dir(path, &self.spec_dir) {
            Some(parts) => parts,
            // Suffix-only spec with no spec root; strip the suffix in place.
            None => return vec![replace_file_name(path, &self.source_file_name(path))],
        };
        let rest = replace_file_name(rest, &self.source_file_name(rest));

        let mut candidates = Vec::new();
        if rest.starts_with("lib/") {
            candidates.push(join(prefix, &rest));
        } else {
            candidates.push(join(prefix, &format!("{}/{}", self.app_dir, rest)));
            candidates.push(join(prefix, &rest));
        }
        candidates
    }

    fn source_to_spec(&self, path: &str) -> Vec<String> {
        let spec_name = self.spec_file_name(path);
        if let Some((prefix, rest)) = split_on_dir(path, &self.app_dir) {
            let rest = replace_file_name(rest, &spec_name);
            return vec![join(prefix, &format!("{}/{}", self.spec_dir, rest))];
        }
        if let Some((prefix, rest)) = split_on_dir(path, "lib") {
            let rest = replace_file_name(rest, &spec_name);
            return vec![join(prefix, &format!("{}/lib/{}", self.spec_dir, rest))];
        }
        let rest = replace_file_name(path, &spec_name);
        vec![format!("{}/{}", self.spec_dir, rest)]
    }

    /// `user.rb` -> `user_spec.rb`; view templates keep their full name:
    /// `index.html.erb` -> `index.html.erb_spec.rb`.
    fn spec_file_name(&self, path: &str) -> String {
        let name = crate::util::file_name(path);
        if is_view_template(name) {
            return format!("{}{}.rb", name, self.spec_suffix);
        }
        match name.strip_suffix(".rb") {
            Some(base) => format!("{}{}.rb", base, self.spec_suffix),
            None => format!("{}{}.rb", name, self.spec_suffix),
        }
    }

    /// Inverse of `spec_file_name`. A stripped base that still carries an
    /// extension (view templates) is the source name itself.
    fn source_file_name(&self, path: &str) -> String {
        let name = crate::util::file_name(path);
        let marker = format!("{}.rb", self.spec_suffix);
        match name.strip_suffix(&marker) {
            Some(base) if base.contains('.') => base.to_string(),
            Some(base) => format!("{base}.rb"),
            None => name.to_string(),
        }
    }
}

fn is_view_template(name: &str) -> bool {
    name.contains(".html.")
        || name.ends_with(".erb")
        || name.ends_with(".haml")
        || name.ends_with(".slim")
}

/// Splits `path` around a directory component: `spec/a/b.rb` ->
/// `("", "a/b.rb")`, `engines/x/spec/a.rb` -> `("engines/x", "a.rb")`.
fn split_on_dir<'a>(path: &'a str, dir: &str) -> Option<(&'a str, &'a str)> {
    let lead = format!("{dir}/");
    if let Some(rest) = path.strip_prefix(&lead) {
        return Some(("", rest));
    }
    let mid = format!("/{dir}/");
    path.find(&mid)
        .map(|i| (&path[..i], &path[i + mid.len()..]))
}

fn replace_file_name(path: &str, name: &str) -> String {
    match path.rfind('/') {
        Some(i) => format!("{}/{}", &path[..i], name),
        None => name.to_string(),
    }
}

fn join(prefix: &str, rest: &str) -> String {
    if prefix.is_empty() {
        rest.to_string()
    } else {
        format!("{prefix}/{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convention() -> Convention {
        Convention {
            spec_dir: "spec".to_string(),
            spec_suffix: "_spec".to_string(),
            app_dir: "app".to_string(),
        }
    }

    #[test]
    fn classifies_spec_paths() {
        let conv = convention();
        assert!(conv.is_spec("spec/models/user_spec.rb"));
        assert!(conv.is_spec("spec/factories/users.rb"));
        assert!(conv.is_spec("user_spec.rb"));
        assert!(!conv.is_spec("app/models/user.rb"));
        assert!(!conv.is_spec("lib/tasks/cleanup.rb"));
    }

    #[test]
    fn nested_repo_prefix_survives() {
        let conv = convention();
        assert_eq!(
            conv.related("engines/billing/app/models/invoice.rb"),
            vec!["engines/billing/spec/models/invoice_spec.rb".to_string()]
        );
        assert!(conv.is_spec("engines/billing/spec/models/invoice_spec.rb"));
    }
}
