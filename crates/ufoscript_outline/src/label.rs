//! Display labels and icons for nodes.
//!
//! # Example
//!
//! ```
//! use ufoscript_language::{Span, UfoNode};
//! use ufoscript_outline::LabelProvider;
//!
//! let labels = LabelProvider::default();
//! let node = UfoNode::new("window", Span::default()).with_name("main");
//! assert_eq!(labels.text(&node), "window main");
//! assert_eq!(labels.image(&node), "icons/window.png");
//! ```

use ufoscript_language::{Item, UfoNode};

/// Produces the text and icon shown for a node in tree views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelProvider {
    /// Directory holding one icon per node type.
    pub icon_dir: String,
    /// Icon file extension, without the dot.
    pub icon_extension: String,
}

impl Default for LabelProvider {
    fn default() -> Self {
        Self {
            icon_dir: "icons".to_string(),
            icon_extension: "png".to_string(),
        }
    }
}

impl LabelProvider {
    /// Creates a provider with the default icon location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the icon directory.
    #[must_use]
    pub fn with_icon_dir(mut self, dir: impl Into<String>) -> Self {
        self.icon_dir = dir.into();
        self
    }

    /// Builder method to set the icon extension.
    #[must_use]
    pub fn with_icon_extension(mut self, extension: impl Into<String>) -> Self {
        self.icon_extension = extension.into();
        self
    }

    /// Returns `"<type> <name>"`, or just the type for unnamed nodes.
    #[must_use]
    pub fn text(&self, node: &UfoNode) -> String {
        match &node.name {
            Some(name) => format!("{} {name}", node.node_type),
            None => node.node_type.clone(),
        }
    }

    /// Returns the icon path for the node's type.
    #[must_use]
    pub fn image(&self, node: &UfoNode) -> String {
        format!(
            "{}/{}.{}",
            self.icon_dir, node.node_type, self.icon_extension
        )
    }

    /// Returns the label of a body item, or None if it is not a node.
    #[must_use]
    pub fn item_text(&self, item: &Item) -> Option<String> {
        item.as_node().map(|node| self.text(node))
    }

    /// Returns the icon of a body item, or None if it is not a node.
    #[must_use]
    pub fn item_image(&self, item: &Item) -> Option<String> {
        item.as_node().map(|node| self.image(node))
    }
}
