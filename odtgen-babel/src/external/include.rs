//! Source inclusion for `\sourcecodefile{name}`

use crate::error::ParseError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Supplies the text of an included source by base name.
pub trait SourceLoader: Send + Sync {
    fn load(&self, name: &str) -> Result<String, ParseError>;
}

/// Where included sources are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeOptions {
    pub directory: PathBuf,
    /// Appended to the base name, `.tex` by default
    pub suffix: String,
}

impl Default for IncludeOptions {
    fn default() -> Self {
        IncludeOptions {
            directory: PathBuf::from("."),
            suffix: ".tex".to_string(),
        }
    }
}

/// Reads `<directory>/<name><suffix>` from disk.
#[derive(Debug, Clone, Default)]
pub struct FsSourceLoader {
    options: IncludeOptions,
}

impl FsSourceLoader {
    pub fn new(options: IncludeOptions) -> Self {
        FsSourceLoader { options }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.options
            .directory
            .join(format!("{name}{}", self.options.suffix))
    }
}

impl SourceLoader for FsSourceLoader {
    fn load(&self, name: &str) -> Result<String, ParseError> {
        let path = self.path_for(name);
        log::debug!("including source file {}", path.display());
        fs::read_to_string(&path).map_err(|e| ParseError::Include {
            name: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Serves included sources from a map; unknown names fail like a missing file.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceLoader {
    sources: HashMap<String, String>,
}

impl MemorySourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, name: &str, text: &str) -> Self {
        self.sources.insert(name.to_string(), text.to_string());
        self
    }
}

impl SourceLoader for MemorySourceLoader {
    fn load(&self, name: &str) -> Result<String, ParseError> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| ParseError::Include {
                name: name.to_string(),
                reason: "no such source".to_string(),
            })
    }
}
