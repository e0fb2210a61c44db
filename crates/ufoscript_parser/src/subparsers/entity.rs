//! Entity definition sub-parsers.
//!
//! ```text
//! entity misc_model
//! {
//!     description "Static model"
//!     range angle { min 0 max 360 }
//! }
//! ```

use ufoscript_foundation::Result;

use crate::context::ParserContext;
use crate::factory::SubParserFactory;
use crate::subparser::SubParser;

/// `range` block, matched case-insensitively (`RANGE` and `Range` work too).
pub const RANGE: SubParserFactory = SubParserFactory::id_name("range", create_range);

/// `entity` definition block.
pub const ENTITY: SubParserFactory = SubParserFactory::new("entity", create_entity);

/// Factories available at document level.
pub const TOP_LEVEL: &[SubParserFactory] = &[ENTITY, RANGE];

fn create_range(_ctx: &ParserContext<'_>) -> Result<SubParser> {
    Ok(SubParser::block("range"))
}

fn create_entity(_ctx: &ParserContext<'_>) -> Result<SubParser> {
    let mut parser = SubParser::block("entity");
    parser.register_sub_parser(RANGE)?;
    Ok(parser)
}
