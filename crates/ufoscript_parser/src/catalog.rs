//! Document-level registrations.

use ufoscript_foundation::Result;

use crate::factory::SubParserFactory;
use crate::registry::SubParserRegistry;
use crate::subparsers::{data, entity, ui};

/// Name of the outermost scope.
pub const DOCUMENT_SCOPE: &str = "document";

/// Returns every factory that may open a block at the top of a file.
///
/// UI nodes are included so that a file holding a single node definition
/// parses on its own.
#[must_use]
pub fn top_level_factories() -> Vec<SubParserFactory> {
    ui::TOP_LEVEL
        .iter()
        .chain(ui::NODES)
        .chain(entity::TOP_LEVEL)
        .chain(data::TOP_LEVEL)
        .copied()
        .collect()
}

/// Builds the registry used for the document scope.
///
/// # Errors
///
/// Fails if two top-level factories share an identifier.
pub fn document_registry() -> Result<SubParserRegistry> {
    let mut registry = SubParserRegistry::new(DOCUMENT_SCOPE);
    registry.register_all(&top_level_factories())?;
    Ok(registry)
}
