//! The sub-parser: per-block parsing rules.
//!
//! A [`SubParser`] is built fresh for every block by its factory. It names
//! the node type, says how the block body is read, and carries the registry
//! of factories that may open nested blocks inside it.

use ufoscript_foundation::{Error, Result};

use crate::factory::SubParserFactory;
use crate::registry::SubParserRegistry;

/// What a sub-parser may register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Nested blocks (nodes, data sections).
    pub children: bool,
    /// Event-handler properties such as `onclick`.
    pub event_properties: bool,
}

impl Capabilities {
    /// Accepts nothing.
    pub const NONE: Self = Self {
        children: false,
        event_properties: false,
    };

    /// Accepts nested blocks only.
    pub const BLOCK: Self = Self {
        children: true,
        event_properties: false,
    };

    /// Accepts nested blocks and event properties.
    pub const NODE: Self = Self {
        children: true,
        event_properties: true,
    };
}

/// How a block body is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyMode {
    /// Properties and nested blocks.
    #[default]
    Entries,
    /// Action statements separated by `;`.
    Actions,
}

/// Parsing rules for one block.
#[derive(Clone, Debug)]
pub struct SubParser {
    node_type: &'static str,
    capabilities: Capabilities,
    body_mode: BodyMode,
    registry: SubParserRegistry,
}

impl SubParser {
    fn with(node_type: &'static str, capabilities: Capabilities, body_mode: BodyMode) -> Self {
        Self {
            node_type,
            capabilities,
            body_mode,
            registry: SubParserRegistry::new(node_type),
        }
    }

    /// Creates a data block sub-parser (properties and nested blocks).
    #[must_use]
    pub fn block(node_type: &'static str) -> Self {
        Self::with(node_type, Capabilities::BLOCK, BodyMode::Entries)
    }

    /// Creates a UI node sub-parser (also accepts event properties).
    #[must_use]
    pub fn node(node_type: &'static str) -> Self {
        Self::with(node_type, Capabilities::NODE, BodyMode::Entries)
    }

    /// Creates an event property sub-parser, whose body is actions.
    #[must_use]
    pub fn event_property(node_type: &'static str) -> Self {
        Self::with(node_type, Capabilities::NONE, BodyMode::Actions)
    }

    /// Creates a function block sub-parser (`confunc`, `func`, ...).
    #[must_use]
    pub fn action_block(node_type: &'static str) -> Self {
        Self::with(node_type, Capabilities::NONE, BodyMode::Actions)
    }

    /// Returns the node type this sub-parser produces.
    #[must_use]
    pub const fn node_type(&self) -> &'static str {
        self.node_type
    }

    /// Returns the capability set.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Returns how the body is read.
    #[must_use]
    pub const fn body_mode(&self) -> BodyMode {
        self.body_mode
    }

    /// Returns the factories registered for nested blocks.
    #[must_use]
    pub const fn registry(&self) -> &SubParserRegistry {
        &self.registry
    }

    /// Returns true if `token` opens a nested block here.
    #[must_use]
    pub fn accepts(&self, token: &str) -> bool {
        self.registry.contains(token)
    }

    /// Registers a factory for nested blocks.
    ///
    /// # Errors
    ///
    /// Fails if this sub-parser does not accept children or the identifier
    /// is already registered.
    pub fn register_sub_parser(&mut self, factory: SubParserFactory) -> Result<()> {
        if !self.capabilities.children {
            return Err(Error::capability(self.node_type, "children"));
        }
        self.registry.register(factory)
    }

    /// Registers several factories for nested blocks.
    ///
    /// # Errors
    ///
    /// Fails at the first rejected registration.
    pub fn register_sub_parsers(&mut self, factories: &[SubParserFactory]) -> Result<()> {
        factories
            .iter()
            .try_for_each(|f| self.register_sub_parser(*f))
    }

    /// Registers an event property factory.
    ///
    /// # Errors
    ///
    /// Fails if this sub-parser does not accept event properties or the
    /// identifier is already registered.
    pub fn register_event_property(&mut self, factory: SubParserFactory) -> Result<()> {
        if !self.capabilities.event_properties {
            return Err(Error::capability(self.node_type, "event properties"));
        }
        self.registry.register(factory)
    }

    /// Splits the sub-parser into what the engine needs to read its body.
    #[must_use]
    pub fn into_parts(self) -> (&'static str, BodyMode, SubParserRegistry) {
        (self.node_type, self.body_mode, self.registry)
    }
}
