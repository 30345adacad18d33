use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for the barrel files this tool regenerates.
///
/// Barrels are always rewritten from scratch; a write fully replaces any
/// previous content.
pub trait GeneratedFile {
    /// Get the file path under the scan root
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the rendered content to disk, returning the written path
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
