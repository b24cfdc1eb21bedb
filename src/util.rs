use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path};

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

pub fn normalize_rel_path(repo_root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(repo_root).with_context(|| {
        format!(
            "strip prefix {} from {}",
            repo_root.display(),
            path.display()
        )
    })?;
    Ok(normalize_path(rel))
}

pub fn normalize_path(path: &Path) -> String {
    let mut parts = Vec::new();
    for comp in path.components() {
        match comp {
            Component::Normal(os) => parts.push(os.to_string_lossy().to_string()),
            Component::ParentDir => parts.push("..".to_string()),
            Component::CurDir => {}
            _ => {}
        }
    }
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Last path segment of a `/`-normalized path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    Ok(())
}

/// Converts an identifier to snake_case: `SendWelcomeEmail` ->
/// `send_welcome_email`, `HTTPClient` -> `http_client`. Existing
/// underscores and separators collapse to single underscores.
pub fn to_snake_case(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' || ch == ' ' || ch == ':' {
            if !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            continue;
        }
        if ch.is_uppercase() {
            let prev_lower = i > 0 && chars[i - 1].is_lowercase();
            let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let acronym_end = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if (prev_lower || prev_digit || acronym_end) && !out.ends_with('_') && !out.is_empty() {
                out.push('_');
            }
            for low in ch.to_lowercase() {
                out.push(low);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_conversion() {
        assert_eq!(to_snake_case("SendWelcomeEmail"), "send_welcome_email");
        assert_eq!(to_snake_case("User"), "user");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("HTTPClient"), "http_client");
        assert_eq!(to_snake_case("Api2Response"), "api2_response");
    }

    #[test]
    fn normalize_strips_cur_dir() {
        assert_eq!(
            normalize_path(Path::new("./app/models/user.rb")),
            "app/models/user.rb"
        );
        assert_eq!(normalize_path(Path::new(".")), ".");
    }

    #[test]
    fn ensure_parent_dir_creates_missing_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("spec/models/user_spec.rb");
        assert!(!target.parent().unwrap().exists());
        ensure_parent_dir(&target).unwrap();
        assert!(target.parent().unwrap().is_dir());
        // Idempotent on an existing directory.
        ensure_parent_dir(&target).unwrap();
    }

    #[test]
    fn file_name_takes_last_segment() {
        assert_eq!(file_name("spec/models/user_spec.rb"), "user_spec.rb");
        assert_eq!(file_name("user.rb"), "user.rb");
    }
}
