//! Event property sub-parsers.
//!
//! An event property holds the actions run when a UI event fires:
//!
//! ```text
//! onclick { cmd "game_quit;" }
//! ```
//!
//! Event names match case-insensitively, so `onClick` and `onclick` select
//! the same factory.

use ufoscript_foundation::Result;

use crate::context::ParserContext;
use crate::factory::SubParserFactory;
use crate::subparser::SubParser;

macro_rules! event_properties {
    ($($(#[$meta:meta])* $name:ident => $id:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub const $name: SubParserFactory = {
                fn create(_ctx: &ParserContext<'_>) -> Result<SubParser> {
                    Ok(SubParser::event_property($id))
                }
                SubParserFactory::id_name($id, create)
            };
        )*

        /// Every event property factory.
        pub const ALL: &[SubParserFactory] = &[$($name),*];
    };
}

event_properties! {
    /// Left mouse click.
    ONCLICK => "onclick",
    /// Right mouse click.
    ONRCLICK => "onrclick",
    /// Middle mouse click.
    ONMCLICK => "onmclick",
    /// Any wheel movement.
    ONWHEEL => "onwheel",
    /// Wheel moved up.
    ONWHEELUP => "onwheelup",
    /// Wheel moved down.
    ONWHEELDOWN => "onwheeldown",
    /// Pointer entered the node.
    ONMOUSEENTER => "onmouseenter",
    /// Pointer left the node.
    ONMOUSELEAVE => "onmouseleave",
    /// Node value changed.
    ONCHANGE => "onchange",
    /// Text entry editing was cancelled.
    ONABORT => "onabort",
    /// Visible range of a scrollable node changed.
    ONVIEWCHANGE => "onviewchange",
    /// Window opened.
    ONINIT => "oninit",
    /// Window closed.
    ONCLOSE => "onclose",
    /// Window timer fired.
    ONEVENT => "onevent",
    /// Video playback finished.
    ONEND => "onend",
}

/// Finds an event property factory by canonical name.
#[must_use]
pub fn factory(name: &str) -> Option<SubParserFactory> {
    ALL.iter().find(|f| f.id() == name).copied()
}
