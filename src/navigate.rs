//! The pairing orchestrator: given the active document and cursor, decide
//! where to go, or what to offer to create. Host concerns (showing files,
//! confirmation prompts) stay with the caller; this module only computes
//! outcomes and applies confirmed creations through [`Storage`].

use crate::model::{ClassContext, Position, SpecSymbolKind};
use crate::parse;
use crate::provider;
use crate::resolver::Convention;
use crate::{correlate, generate, util};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Filesystem operations the orchestrator needs. Candidate paths are
/// `/`-normalized and repo-relative.
pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read(&self, path: &str) -> Result<String>;
    fn ensure_parent_dir(&mut self, path: &str) -> Result<()>;
    fn create_file(&mut self, path: &str, contents: &str) -> Result<()>;
}

pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

impl Storage for FsStorage {
    fn exists(&self, path: &str) -> bool {
        self.abs(path).is_file()
    }

    fn read(&self, path: &str) -> Result<String> {
        util::read_to_string(&self.abs(path))
    }

    fn ensure_parent_dir(&mut self, path: &str) -> Result<()> {
        util::ensure_parent_dir(&self.abs(path))
    }

    fn create_file(&mut self, path: &str, contents: &str) -> Result<()> {
        let abs = self.abs(path);
        let mut file =
            fs::File::create_new(&abs).with_context(|| format!("create {}", abs.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("write {}", abs.display()))
    }
}

/// The host's notion of "currently active document and cursor", made
/// explicit so resolution is independently testable.
#[derive(Debug)]
pub struct NavigationRequest {
    /// Repo-relative `/`-normalized path of the active document.
    pub path: String,
    pub text: String,
    pub cursor: Position,
}

#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// A companion file exists; open it, at the correlated location when
    /// one was found.
    Open {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
    },
    /// No companion exists; the first candidate is offered for creation.
    Create {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        scaffold: Option<String>,
    },
    /// The path is outside every known convention.
    NoCandidates,
}

/// One full pairing request, start to finish. Candidates are tried in
/// convention order; the first existing one wins. Correlation failures
/// degrade to opening without a position, never to an error.
pub fn resolve(
    convention: &Convention,
    request: &NavigationRequest,
    storage: &dyn Storage,
    with_scaffold: bool,
) -> NavigationOutcome {
    let from_spec = convention.is_spec(&request.path);
    let candidates = convention.related(&request.path);

    for candidate in &candidates {
        if !storage.exists(candidate) {
            continue;
        }
        let position = if from_spec {
            source_position(request, candidate, storage)
        } else {
            spec_position(request, candidate, storage)
        };
        return NavigationOutcome::Open {
            path: candidate.clone(),
            position,
        };
    }

    match candidates.into_iter().next() {
        Some(path) => {
            let scaffold = if !from_spec && with_scaffold {
                class_scaffold(request)
            } else {
                None
            };
            NavigationOutcome::Create { path, scaffold }
        }
        None => NavigationOutcome::NoCandidates,
    }
}

/// Applies a confirmed `Create` outcome: idempotent directory creation,
/// then the file itself, seeded with the scaffold when one was attached.
pub fn create(path: &str, scaffold: Option<&str>, storage: &mut dyn Storage) -> Result<()> {
    storage.ensure_parent_dir(path)?;
    storage.create_file(path, scaffold.unwrap_or(""))
}

/// Parses the active source file into its class context.
pub fn class_context(path: &str, text: &str) -> Result<ClassContext> {
    let symbols = match provider::provider_for_path(path)? {
        Some(mut provider) => provider.provide(text)?,
        None => Vec::new(),
    };
    Ok(parse::class::parse_class_file(text, &symbols, path))
}

/// From a spec file: the block above the cursor names the source method to
/// jump to in the companion source file.
fn source_position(
    request: &NavigationRequest,
    candidate: &str,
    storage: &dyn Storage,
) -> Option<Position> {
    let specs = parse::spec::parse_spec_file(&request.text);
    let block = correlate::find_spec_symbol_by_position(&specs, request.cursor)?;
    let target = match block.kind {
        SpecSymbolKind::ClassMethodSpec => format!("self.{}", block.name),
        SpecSymbolKind::InstanceMethodSpec => block.name.clone(),
    };
    let text = storage.read(candidate).ok()?;
    let mut provider = provider::provider_for_path(candidate).ok()??;
    let symbols = provider.provide(&text).ok()?;
    correlate::find_symbol_by_name(&symbols, &target).map(|symbol| symbol.range.start)
}

/// From a source file: the method at the cursor names the spec block to
/// jump to in the companion spec file.
fn spec_position(
    request: &NavigationRequest,
    candidate: &str,
    storage: &dyn Storage,
) -> Option<Position> {
    let mut provider = provider::provider_for_path(&request.path).ok()??;
    let symbols = provider.provide(&request.text).ok()?;
    let symbol = correlate::find_symbol_by_position(&symbols, request.cursor)?;
    if !symbol.is_method() {
        return None;
    }
    let text = storage.read(candidate).ok()?;
    let specs = parse::spec::parse_spec_file(&text);
    correlate::find_spec_by_symbol(&specs, symbol).map(|spec| spec.range.start)
}

fn class_scaffold(request: &NavigationRequest) -> Option<String> {
    let context = class_context(&request.path, &request.text).ok()?;
    generate::generate_spec_for_class(&context)
}
