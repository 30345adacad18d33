//! Per-subdirectory index.ts barrel.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::{BARREL_FILE_NAME, GeneratedFile};

/// The index.ts written inside one top-level subdirectory, re-exporting
/// every qualifying module found beneath it.
///
/// A barrel with no exports still renders (and is written) as an empty file.
pub struct ModuleBarrel {
    name: String,
    exports: Vec<String>,
}

impl ModuleBarrel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exports: Vec::new(),
        }
    }

    /// Queue a re-export of `module`, a forward-slash path relative to the
    /// subdirectory with the source extension already stripped.
    pub fn export(&mut self, module: impl Into<String>) {
        self.exports.push(module.into());
    }

    /// Name of the subdirectory this barrel belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

impl GeneratedFile for ModuleBarrel {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.name).join(BARREL_FILE_NAME)
    }

    fn render(&self) -> String {
        let mut content = String::new();
        for module in &self.exports {
            let _ = writeln!(content, "export * from './{}';", module);
        }
        content
    }
}
