//! Root index.ts barrel.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::{BARREL_FILE_NAME, GeneratedFile, naming::module_identifier};

/// Warning stamped at the top of the root barrel.
pub const GENERATED_HEADER: &str =
    "// This file is generated automatically. Do not edit it manually.";

/// The root index.ts, re-exporting each subdirectory as a namespace named
/// after it.
#[derive(Default)]
pub struct RootBarrel {
    modules: Vec<String>,
}

impl RootBarrel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a namespace re-export for one subdirectory.
    pub fn module(&mut self, name: impl Into<String>) {
        self.modules.push(name.into());
    }
}

impl GeneratedFile for RootBarrel {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(BARREL_FILE_NAME)
    }

    /// Header, blank line, then a comment plus namespace re-export per
    /// subdirectory, with blocks separated by blank lines. Trailing
    /// whitespace is trimmed down to exactly one newline.
    fn render(&self) -> String {
        let mut content = format!("{}\n\n", GENERATED_HEADER);
        for name in &self.modules {
            let _ = writeln!(content, "// {}", name);
            let _ = writeln!(
                content,
                "export * as {} from './{}';\n",
                module_identifier(name),
                name
            );
        }
        format!("{}\n", content.trim_end())
    }
}
