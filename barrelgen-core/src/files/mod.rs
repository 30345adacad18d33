//! Barrel file renderers.

mod module_barrel;
mod root_barrel;

pub use module_barrel::ModuleBarrel;
pub use root_barrel::{GENERATED_HEADER, RootBarrel};
