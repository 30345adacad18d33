//! Barrel generation over one scan root.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};

use crate::{
    BARREL_FILE_NAME, CLIENT_ONLY_SUFFIX, GeneratedFile, SOURCE_EXTENSION,
    files::{ModuleBarrel, RootBarrel},
    scan::{find_directories, find_files},
};

/// A rendered barrel for preview output.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the scan root.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Summary of one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path of the root barrel that was written.
    pub root_barrel: PathBuf,
    /// Subdirectories that received a barrel, in processing order.
    pub modules: Vec<String>,
}

/// Regenerates the barrel files under one source root.
///
/// The root is an explicit parameter; the generator carries no other
/// configuration. Runs are idempotent over an unchanged tree.
pub struct Generator {
    root: PathBuf,
}

impl Generator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Render every barrel without writing to disk.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let mut files = Vec::new();
        let mut root_barrel = RootBarrel::new();

        for name in find_directories(&self.root)? {
            let barrel = self.module_barrel(&name)?;
            root_barrel.module(&name);
            files.push(PreviewFile {
                path: format!("{}/{}", name, BARREL_FILE_NAME),
                content: barrel.render(),
            });
        }

        files.push(PreviewFile {
            path: BARREL_FILE_NAME.to_string(),
            content: root_barrel.render(),
        });

        Ok(files)
    }

    /// One linear pass: each subdirectory is scanned and its barrel written
    /// before the next subdirectory begins; the root barrel is written last.
    ///
    /// Every barrel fully overwrites its previous content. A failure partway
    /// leaves the barrels already written in place.
    pub fn generate(&self) -> Result<GenerateReport> {
        let mut root_barrel = RootBarrel::new();
        let mut modules = Vec::new();

        for name in find_directories(&self.root)? {
            let barrel = self.module_barrel(&name)?;
            barrel
                .write(&self.root)
                .wrap_err_with(|| format!("Failed to write barrel for {name}"))?;
            root_barrel.module(&name);
            modules.push(name);
        }

        let root_path = root_barrel
            .write(&self.root)
            .wrap_err("Failed to write root barrel")?;

        Ok(GenerateReport {
            root_barrel: root_path,
            modules,
        })
    }

    /// Collect one subdirectory's qualifying modules into its barrel.
    fn module_barrel(&self, name: &str) -> Result<ModuleBarrel> {
        let dir = self.root.join(name);
        let mut barrel = ModuleBarrel::new(name);

        let files = find_files(&dir, |path| {
            path.to_string_lossy().ends_with(SOURCE_EXTENSION)
        })?;

        for file in files {
            if is_excluded(&file) {
                continue;
            }
            barrel.export(relative_module_path(&dir, &file));
        }

        Ok(barrel)
    }
}

/// Barrel files themselves (any file named index.ts, at any depth) and
/// client-only modules are never re-exported.
fn is_excluded(path: &Path) -> bool {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            name == BARREL_FILE_NAME || name.ends_with(CLIENT_ONLY_SUFFIX)
        }
        None => true,
    }
}

/// Path of `file` relative to `dir`, joined with forward slashes and with
/// the source extension stripped.
fn relative_module_path(dir: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(dir).unwrap_or(file);
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    joined
        .strip_suffix(SOURCE_EXTENSION)
        .map(str::to_owned)
        .unwrap_or(joined)
}
