//! UI sub-parsers: windows, components and nodes.
//!
//! Node sub-parsers are driven by the behaviour table in
//! [`crate::behaviour`]: a node registers the event properties of its
//! behaviour chain, containers register every node type plus the function
//! blocks, and option-bearing nodes register `option`.

use ufoscript_foundation::{Error, Result};

use crate::behaviour;
use crate::context::ParserContext;
use crate::factory::SubParserFactory;
use crate::subparser::SubParser;
use crate::subparsers::events;

macro_rules! nodes {
    ($($(#[$meta:meta])* $name:ident => $id:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub const $name: SubParserFactory = {
                fn create(_ctx: &ParserContext<'_>) -> Result<SubParser> {
                    node_sub_parser($id)
                }
                SubParserFactory::new($id, create)
            };
        )*
    };
}

macro_rules! functions {
    ($($(#[$meta:meta])* $name:ident => $id:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub const $name: SubParserFactory = {
                fn create(_ctx: &ParserContext<'_>) -> Result<SubParser> {
                    Ok(SubParser::action_block($id))
                }
                SubParserFactory::new($id, create)
            };
        )*
    };
}

nodes! {
    /// Top-level window.
    WINDOW => "window",
    /// Reusable node group, instantiated by name inside windows.
    COMPONENT => "component",
    /// Layout container.
    PANEL => "panel",
    /// Clickable button.
    BUTTON => "button",
    /// Two-state check box.
    CHECKBOX => "checkbox",
    /// Numeric spinner.
    SPINNER => "spinner",
    /// Progress or value bar.
    BAR => "bar",
    /// Vertical scroll bar.
    VSCROLLBAR => "vscrollbar",
    /// Single line of text.
    STRING => "string",
    /// Multi-line text.
    TEXT => "text",
    /// Text with selectable lines.
    TEXTLIST => "textlist",
    /// Message log.
    MESSAGELIST => "messagelist",
    /// Editable text field.
    TEXTENTRY => "textentry",
    /// Static picture.
    IMAGE => "image",
    /// 3D model view.
    MODEL => "model",
    /// Battlescape radar.
    RADAR => "radar",
    /// Inventory container.
    CONTAINER => "container",
    /// Video player.
    VIDEO => "video",
    /// Invisible click or timer zone.
    ZONE => "zone",
    /// Alternating row background.
    ROWS => "rows",
    /// Hidden value holder.
    DATA => "data",
    /// Scrollable option list.
    OPTIONLIST => "optionlist",
    /// Tree of options.
    OPTIONTREE => "optiontree",
    /// Drop-down option list.
    SELECTBOX => "selectbox",
    /// Tab strip.
    TAB => "tab",
    /// One entry of an option-bearing node.
    OPTION => "option",
}

functions! {
    /// Console function bound to a window.
    CONFUNC => "confunc",
    /// Local function.
    FUNC => "func",
    /// Function run when a cvar changes.
    CVARFUNC => "cvarfunc",
}

/// UI factories available at document level.
pub const TOP_LEVEL: &[SubParserFactory] = &[WINDOW, COMPONENT];

/// Node types a container may hold.
pub const NODES: &[SubParserFactory] = &[
    PANEL,
    BUTTON,
    CHECKBOX,
    SPINNER,
    BAR,
    VSCROLLBAR,
    STRING,
    TEXT,
    TEXTLIST,
    MESSAGELIST,
    TEXTENTRY,
    IMAGE,
    MODEL,
    RADAR,
    CONTAINER,
    VIDEO,
    ZONE,
    ROWS,
    DATA,
    OPTIONLIST,
    OPTIONTREE,
    SELECTBOX,
    TAB,
];

/// Function blocks a container may hold.
pub const FUNCTIONS: &[SubParserFactory] = &[CONFUNC, FUNC, CVARFUNC];

/// Builds the sub-parser for a UI node from its behaviour.
///
/// # Errors
///
/// Fails if the behaviour table names an event with no factory, or if two
/// registrations collide.
pub fn node_sub_parser(node_type: &'static str) -> Result<SubParser> {
    let mut parser = SubParser::node(node_type);
    for event in behaviour::events_for(node_type) {
        let factory = events::factory(event).ok_or_else(|| {
            Error::internal(format!("{node_type} declares unknown event property {event}"))
        })?;
        parser.register_event_property(factory)?;
    }
    if behaviour::is_container(node_type) {
        parser.register_sub_parsers(NODES)?;
        parser.register_sub_parsers(FUNCTIONS)?;
    } else if behaviour::accepts_options(node_type) {
        parser.register_sub_parser(OPTION)?;
    }
    Ok(parser)
}
