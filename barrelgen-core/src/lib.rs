//! Scanning and rendering for the barrelgen index generator.
//!
//! Discovers the immediate subdirectories of a source root, collects the
//! TypeScript modules inside each, and regenerates the barrel files that
//! re-export them: one `index.ts` per subdirectory plus a root `index.ts`
//! that re-exports every subdirectory as a namespace.

mod file;
mod files;
mod generator;
mod naming;
mod scan;

// File operations
pub use file::GeneratedFile;
// Barrel renderers
pub use files::{GENERATED_HEADER, ModuleBarrel, RootBarrel};
// Generation
pub use generator::{GenerateReport, Generator, PreviewFile};
// Naming utilities
pub use naming::module_identifier;
// Filesystem discovery
pub use scan::{find_directories, find_files};

/// Extension of the source files gathered into barrels.
pub const SOURCE_EXTENSION: &str = ".ts";

/// Name of the generated barrel file, inside each subdirectory and at the root.
pub const BARREL_FILE_NAME: &str = "index.ts";

/// Files carrying this suffix are never re-exported automatically.
pub const CLIENT_ONLY_SUFFIX: &str = ".client.ts";
