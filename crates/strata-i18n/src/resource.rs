//! Resource loading for translation files

use crate::error::{I18nError, I18nResult};
use crate::uri::Uri;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the root directory of the `DATA` tag
pub const DATA_ROOT_ENV: &str = "STRATA_DATA_ROOT";

/// Tag used for the application data directory
pub const DATA_TAG: &str = "DATA";

/// Resolves locators to translation file bytes and directory listings.
pub trait ResourceLocator: Send + Sync + fmt::Debug {
    /// Read `file_name` inside `location`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    fn read(&self, location: &Uri, file_name: &str) -> I18nResult<Option<Vec<u8>>>;

    /// Names of the files directly inside `location`, sorted.
    ///
    /// A missing location lists as empty.
    fn list(&self, location: &Uri) -> I18nResult<Vec<String>>;
}

/// Filesystem locator mapping URI tags to root directories
#[derive(Debug, Clone)]
pub struct FsLocator {
    roots: HashMap<String, PathBuf>,
}

impl FsLocator {
    /// Create a locator with no tag roots; only plain paths resolve.
    pub fn new() -> Self {
        Self {
            roots: HashMap::new(),
        }
    }

    /// Create a locator whose `DATA` root is `$STRATA_DATA_ROOT`, or `./data`.
    pub fn from_env() -> Self {
        let data_root = std::env::var_os(DATA_ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        Self::new().with_root(DATA_TAG, data_root)
    }

    /// Register (or replace) the root directory for `tag`.
    pub fn with_root(mut self, tag: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.roots.insert(tag.into(), root.into());
        self
    }

    /// Root directory registered for `tag`.
    pub fn root(&self, tag: &str) -> Option<&Path> {
        self.roots.get(tag).map(PathBuf::as_path)
    }

    /// Resolve a locator to a filesystem directory.
    pub fn resolve(&self, location: &Uri) -> I18nResult<PathBuf> {
        match location {
            Uri::Path(path) => Ok(path.clone()),
            Uri::Tagged { tag, path } => {
                let root = self
                    .roots
                    .get(tag)
                    .ok_or_else(|| I18nError::UnknownTag { tag: tag.clone() })?;
                if path.is_empty() {
                    Ok(root.clone())
                } else {
                    Ok(root.join(path))
                }
            }
        }
    }
}

impl Default for FsLocator {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ResourceLocator for FsLocator {
    fn read(&self, location: &Uri, file_name: &str) -> I18nResult<Option<Vec<u8>>> {
        let path = self.resolve(location)?.join(file_name);
        debug!("Reading translation resource: {:?}", path);

        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(I18nError::ResourceRead {
                path: path.to_string_lossy().to_string(),
                source,
            }),
        }
    }

    fn list(&self, location: &Uri) -> I18nResult<Vec<String>> {
        let dir = self.resolve(location)?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(I18nError::ResourceRead {
                    path: dir.to_string_lossy().to_string(),
                    source,
                })
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| I18nError::ResourceRead {
                path: dir.to_string_lossy().to_string(),
                source,
            })?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// In-memory locator, for translations compiled into the binary
#[derive(Debug, Clone, Default)]
pub struct MemoryLocator {
    files: HashMap<Uri, HashMap<String, Vec<u8>>>,
}

impl MemoryLocator {
    /// Create an empty locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `contents` as `file_name` inside `location`.
    pub fn with_file(
        mut self,
        location: Uri,
        file_name: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert(location, file_name, contents);
        self
    }

    /// Store `contents` as `file_name` inside `location`, replacing any previous file.
    pub fn insert(
        &mut self,
        location: Uri,
        file_name: impl Into<String>,
        contents: impl Into<Vec<u8>>,
    ) {
        self.files
            .entry(location)
            .or_default()
            .insert(file_name.into(), contents.into());
    }
}

impl ResourceLocator for MemoryLocator {
    fn read(&self, location: &Uri, file_name: &str) -> I18nResult<Option<Vec<u8>>> {
        Ok(self
            .files
            .get(location)
            .and_then(|dir| dir.get(file_name))
            .cloned())
    }

    fn list(&self, location: &Uri) -> I18nResult<Vec<String>> {
        Ok(self
            .files
            .get(location)
            .map(|dir| dir.keys().cloned().collect::<BTreeSet<_>>().into_iter().collect())
            .unwrap_or_default())
    }
}
