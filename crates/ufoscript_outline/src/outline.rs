//! Outline trees for documents.
//!
//! An outline lists every node of a document in depth-first order with its
//! nesting depth, label and icon. Properties and statements are not shown.

use std::fmt::Write;

use ufoscript_language::visitor::{NodeVisitor, walk_document};
use ufoscript_language::{Document, Span, UfoNode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::label::LabelProvider;

/// One node in an outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutlineEntry {
    /// Nesting depth, 0 for top-level nodes.
    pub depth: usize,
    /// Node type.
    pub node_type: String,
    /// Display text from the label provider.
    pub label: String,
    /// Icon path from the label provider.
    pub icon: String,
    /// Source span of the node.
    pub span: Span,
}

/// Options for building and rendering an outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Deepest level to include, or None for all.
    pub max_depth: Option<usize>,
    /// Append the icon path to each rendered line.
    pub show_icons: bool,
    /// Append the source line to each rendered line.
    pub show_lines: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_icons: false,
            show_lines: true,
        }
    }
}

impl OutlineConfig {
    /// Builder method to limit the depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builder method to show icon paths.
    #[must_use]
    pub fn with_icons(mut self, enabled: bool) -> Self {
        self.show_icons = enabled;
        self
    }

    /// Builder method to show source lines.
    #[must_use]
    pub fn with_lines(mut self, enabled: bool) -> Self {
        self.show_lines = enabled;
        self
    }
}

/// The nodes of a document, flattened in depth-first order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Returns the entries in depth-first order.
    #[must_use]
    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document had no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the outline as indented text, one node per line.
    #[must_use]
    pub fn render(&self, config: &OutlineConfig) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            for _ in 0..entry.depth {
                out.push_str("  ");
            }
            out.push_str(&entry.label);
            if config.show_icons {
                let _ = write!(out, " [{}]", entry.icon);
            }
            if config.show_lines {
                let _ = write!(out, " :{}", entry.span.line);
            }
            out.push('\n');
        }
        out
    }
}

/// Builds the outline of `document`.
#[must_use]
pub fn build_outline(
    document: &Document,
    labels: &LabelProvider,
    config: &OutlineConfig,
) -> Outline {
    let mut builder = OutlineBuilder {
        labels,
        max_depth: config.max_depth,
        entries: Vec::new(),
    };
    walk_document(&mut builder, document);
    Outline {
        entries: builder.entries,
    }
}

struct OutlineBuilder<'a> {
    labels: &'a LabelProvider,
    max_depth: Option<usize>,
    entries: Vec<OutlineEntry>,
}

impl NodeVisitor for OutlineBuilder<'_> {
    fn enter_node(&mut self, node: &UfoNode, depth: usize) {
        if self.max_depth.is_some_and(|max| depth > max) {
            return;
        }
        self.entries.push(OutlineEntry {
            depth,
            node_type: node.node_type.clone(),
            label: self.labels.text(node),
            icon: self.labels.image(node),
            span: node.span,
        });
    }
}
