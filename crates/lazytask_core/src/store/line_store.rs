//! Raw-line storage contract and flat-file implementation.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport error for line persistence.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "storage I/O failed at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Storage contract for ordered raw lines.
///
/// The task list is the only caller; it re-serializes every task after
/// each successful mutation and writes the full sequence back.
pub trait LineStore {
    fn read_lines(&self) -> StoreResult<Vec<String>>;
    fn write_lines(&self, lines: &[String]) -> StoreResult<()>;
}

/// Flat-file line store. One task per line, whole-file overwrite on write.
pub struct FileLineStore {
    path: PathBuf,
}

impl FileLineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LineStore for FileLineStore {
    fn read_lines(&self) -> StoreResult<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|err| self.io_error(err))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn write_lines(&self, lines: &[String]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(|err| self.io_error(err))
    }
}
