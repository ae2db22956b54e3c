//! Loader for `KEY=VALUE` environment files.
//!
//! The accepted format is a permissive subset of dotenv: one assignment per
//! line, values optionally wrapped in double or single quotes. Lines that do
//! not look like an assignment (blank lines, comments, `export FOO=bar`) are
//! skipped without error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::CheckError;

/// Parsed key/value pairs. Later lines override earlier ones.
pub type EnvMap = HashMap<String, String>;

// Lazy unquoted capture: trailing whitespace after a bare value is dropped.
static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*([A-Za-z0-9_]+)=(?:"([^"]*)"|'([^']*)'|(.*?))\s*$"#)
        .expect("env line pattern is valid")
});

/// Parse env-file text into a map.
pub fn parse(text: &str) -> EnvMap {
    let mut env = EnvMap::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let Some(caps) = LINE.captures(line) else {
            continue;
        };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());
        env.insert(caps[1].to_string(), value.to_string());
    }
    env
}

/// An env file read from disk, remembering where it came from.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
    vars: EnvMap,
}

impl EnvFile {
    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CheckError::EnvFile {
            path: path.to_path_buf(),
            source,
        })?;
        let vars = parse(&text);
        debug!(path = %path.display(), keys = vars.len(), "loaded env file");
        Ok(Self {
            path: path.to_path_buf(),
            vars,
        })
    }

    pub fn from_map(path: impl Into<PathBuf>, vars: EnvMap) -> Self {
        Self {
            path: path.into(),
            vars,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a key that must be present and non-empty.
    pub fn require(&self, key: &str) -> Result<&str, CheckError> {
        match self.get(key) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(CheckError::MissingKey {
                key: key.to_string(),
                file: self.display_name(),
            }),
        }
    }

    /// File name used in user-facing messages (`.env` rather than `./.env`).
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
