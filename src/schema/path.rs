use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

static PATH_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\.").expect("valid path prefix pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Path '{0}' is not valid")]
    InvalidFormat(String),
}

/// A `$.`-prefixed path into the state, such as `$.user.age`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatePath(String);

impl StatePath {
    pub fn new(path: impl Into<String>) -> Result<Self, PathError> {
        let path = path.into();
        if PATH_PREFIX.is_match(&path) {
            Ok(StatePath(path))
        } else {
            Err(PathError::InvalidFormat(path))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `$.a.b.c` becomes `root/a/b/c`.
    pub fn to_schema_id(&self) -> String {
        transform_to_id(&self.0)
    }
}

impl FromStr for StatePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatePath::new(s)
    }
}

impl fmt::Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rewrites a leading `$.` to `root/` and every other `.` to `/`.
///
/// Pure string rewrite, no schema lookup.
pub fn transform_to_id(path: &str) -> String {
    let id = match path.strip_prefix("$.") {
        Some(rest) => format!("root/{rest}"),
        None => path.to_string(),
    };
    id.replace('.', "/")
}

/// Cumulative prefixes of a schema id.
///
/// ```text
/// root/a/b  ->  root, root/a, root/a/b
/// ```
pub fn ancestor_ids(id: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for segment in id.split('/') {
        let next = match ids.last() {
            Some(previous) => format!("{previous}/{segment}"),
            None => segment.to_string(),
        };
        ids.push(next);
    }
    ids
}
