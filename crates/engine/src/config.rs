use crate::error::{EngineError, Result};
use derive_builder::Builder;
use hashbrown::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Directory names skipped at any depth.
pub const EXCLUDED_DIRS: &[&str] = &[".git", "_gh_pages", "dist", "node_modules", "resources"];

/// Extensions eligible for rewriting. The empty string stands for "no
/// extension"; everything else is compared including the leading dot.
pub const INCLUDED_EXTENSIONS: &[&str] = &[
    "", ".css", ".html", ".js", ".json", ".md", ".scss", ".txt", ".yml",
];

/// Directory base names whose whole subtree is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Match against the last component of `dir` only.
    #[must_use]
    pub fn excludes(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|name| self.0.contains(name))
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(EXCLUDED_DIRS.iter().copied())
    }
}

/// File extensions eligible for rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionSet(HashSet<String>);

impl InclusionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(extensions.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn allows(&self, path: &Path) -> bool {
        self.0.contains(extension_of(path).as_str())
    }
}

impl Default for InclusionSet {
    fn default() -> Self {
        Self::new(INCLUDED_EXTENSIONS.iter().copied())
    }
}

/// Extension of the base name including its leading dot, or `""`.
///
/// A name that starts with its only dot (`.gitignore`) has no extension,
/// while a trailing dot (`notes.`) yields `"."`.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Old and new literal, both non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPair {
    pub original: String,
    pub replacement: String,
}

impl ReplacementPair {
    /// # Errors
    /// Returns [`EngineError::Config`] when either side is empty.
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let original = original.into();
        let replacement = replacement.into();
        if original.is_empty() || replacement.is_empty() {
            return Err(EngineError::Config(
                "old and new version must both be non-empty".to_string(),
            ));
        }
        Ok(Self {
            original,
            replacement,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMode {
    /// Emit one line per visited file.
    pub verbose: bool,
    /// Detect and report, never write.
    pub dry_run: bool,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    pub root: PathBuf,
    #[builder(default)]
    pub excluded: ExclusionSet,
    #[builder(default = "1")]
    pub threads: usize,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub walk: WalkOptions,
    #[builder(default)]
    pub included: InclusionSet,
    pub pair: ReplacementPair,
    #[builder(default)]
    pub mode: RunMode,
}
