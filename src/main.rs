use anyhow::{Result, bail};
use clap::Parser;
use serde_json::json;
use specnav::model::Position;
use specnav::navigate::{self, FsStorage, NavigationOutcome, NavigationRequest, Storage};
use specnav::resolver::Convention;
use specnav::{cli, correlate, generate, util};
use std::fs;
use std::path::{Path, PathBuf};

/// Repo-relative `/`-normalized form of the target file.
fn rel_path(repo: &Path, file: &Path) -> Result<String> {
    if file.is_absolute() {
        let repo = fs::canonicalize(repo).unwrap_or_else(|_| repo.to_path_buf());
        let file = fs::canonicalize(file).unwrap_or_else(|_| file.to_path_buf());
        util::normalize_rel_path(&repo, &file)
    } else {
        Ok(util::normalize_path(file))
    }
}

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match args.command {
        cli::Command::Related { repo, file } => {
            let convention = Convention::default();
            let path = rel_path(&repo, &file)?;
            let result = json!({
                "is_spec": convention.is_spec(&path),
                "candidates": convention.related(&path),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        cli::Command::Goto {
            repo,
            file,
            line,
            column,
            create,
            scaffold,
        } => {
            let convention = Convention::default();
            let path = rel_path(&repo, &file)?;
            let mut storage = FsStorage::new(repo);
            let request = NavigationRequest {
                text: storage.read(&path)?,
                path,
                cursor: Position::new(line, column),
            };
            let outcome = navigate::resolve(&convention, &request, &storage, scaffold);
            if create {
                if let NavigationOutcome::Create { path, scaffold } = &outcome {
                    navigate::create(path, scaffold.as_deref(), &mut storage)?;
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "action": "created",
                            "path": path,
                        }))?
                    );
                    return Ok(());
                }
            }
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(())
        }
        cli::Command::Scaffold { repo, file, method } => {
            let path = rel_path(&repo, &file)?;
            let text = util::read_to_string(&resolve_abs(&repo, &file))?;
            let context = navigate::class_context(&path, &text)?;
            match method {
                Some(name) => {
                    let symbol = correlate::find_symbol_by_name(&context.symbols, &name)
                        .or_else(|| {
                            correlate::find_symbol_by_name(
                                &context.symbols,
                                &format!("self.{name}"),
                            )
                        });
                    match symbol {
                        Some(symbol) => print!("{}", generate::generate_spec_for_symbol(symbol)),
                        None => bail!("no method named {name} in {path}"),
                    }
                }
                None => match generate::generate_spec_for_class(&context) {
                    Some(text) => print!("{text}"),
                    None => bail!(
                        "no type matching {} declared in {path}; cannot scaffold a class spec",
                        context.expected_type_name
                    ),
                },
            }
            Ok(())
        }
    }
}

fn resolve_abs(repo: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        repo.join(file)
    }
}
