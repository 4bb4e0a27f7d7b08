//! Resource locators for translation directories.
//!
//! Two forms are accepted:
//!
//! - a plain filesystem path, `/usr/share/app/translate` or `translate`
//! - a tagged logical path, `DATA:translate` (also written `DATA:///translate`),
//!   resolved against the root directory the locator knows for `DATA`
//!
//! Tags are at least two upper-case characters, so Windows drive prefixes such
//! as `C:\` stay plain paths.

use crate::error::{I18nError, I18nResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

static TAGGED_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9_]+):(?://)?/?(.*)$").expect("Invalid tagged URI regex pattern")
});

/// Location of a translation directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Uri {
    /// Filesystem path, used as is
    Path(PathBuf),
    /// Path relative to the root registered for `tag`
    Tagged {
        /// Root tag such as `DATA`
        tag: String,
        /// Path below the tagged root, without a leading slash
        path: String,
    },
}

impl Uri {
    /// Parse a locator string.
    pub fn parse(input: &str) -> I18nResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(I18nError::InvalidUri {
                uri: input.to_string(),
                reason: "empty locator".to_string(),
            });
        }

        match TAGGED_URI.captures(input) {
            Some(caps) => Ok(Self::tagged(&caps[1], &caps[2])),
            None => Ok(Self::Path(PathBuf::from(input))),
        }
    }

    /// Build a tagged locator.
    pub fn tagged(tag: impl Into<String>, path: impl AsRef<str>) -> Self {
        Self::Tagged {
            tag: tag.into(),
            path: path.as_ref().trim_start_matches('/').to_string(),
        }
    }

    /// Build a filesystem locator.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// The tag of a tagged locator.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Tagged { tag, .. } => Some(tag),
            Self::Path(_) => None,
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Tagged { tag, path } => write!(f, "{tag}:{path}"),
        }
    }
}

impl FromStr for Uri {
    type Err = I18nError;

    fn from_str(s: &str) -> I18nResult<Self> {
        Self::parse(s)
    }
}

impl From<PathBuf> for Uri {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for Uri {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}
