//! Data definition sub-parsers.
//!
//! Campaign, equipment and content definitions are plain property blocks.
//! A few of them hold named sub-blocks (`weapon_mod` inside `item`, the
//! scene elements of a `sequence`); everything else in their bodies is read
//! as properties, with brace-delimited values kept as lists.

use ufoscript_foundation::Result;

use crate::context::ParserContext;
use crate::factory::SubParserFactory;
use crate::subparser::SubParser;

macro_rules! data_blocks {
    ($($(#[$meta:meta])* $name:ident => $id:literal $([$($child:ident),* $(,)?])?),* $(,)?) => {
        $(
            $(#[$meta])*
            pub const $name: SubParserFactory = {
                fn create(_ctx: &ParserContext<'_>) -> Result<SubParser> {
                    let mut parser = SubParser::block($id);
                    parser.register_sub_parsers(&[$($($child),*)?])?;
                    Ok(parser)
                }
                SubParserFactory::new($id, create)
            };
        )*
    };
}

data_blocks! {
    /// Equipment item.
    ITEM => "item" [WEAPON_MOD],
    /// Ammo behaviour of an item when used with one weapon.
    WEAPON_MOD => "weapon_mod" [FIREDEF],
    /// One fire mode.
    FIREDEF => "firedef",
    /// Equipment pack.
    EQUIPMENT => "equipment",
    /// Research topic.
    TECH => "tech",
    /// Base building.
    BUILDING => "building",
    /// Geoscape installation.
    INSTALLATION => "installation",
    /// Map definition.
    MAPDEF => "mapdef",
    /// Team definition.
    TEAM => "team",
    /// Unmanned ground vehicle.
    UGV => "ugv",
    /// Aircraft definition.
    AIRCRAFT => "aircraft",
    /// Particle definition.
    PARTICLE => "particle",
    /// Scripted cut scene.
    SEQUENCE => "sequence" [PRECACHE, CAMERA, SEQUENCE_MODEL, OBJ2D],
    /// Assets loaded before a sequence starts.
    PRECACHE => "precache",
    /// Sequence camera.
    CAMERA => "camera",
    /// Model shown in a sequence.
    SEQUENCE_MODEL => "model",
    /// 2D overlay shown in a sequence.
    OBJ2D => "2dobj",
    /// Music playlist.
    MUSIC => "music",
    /// Font definition.
    FONT => "font",
    /// Loading screen tips.
    TIPS => "tips",
    /// Language definition.
    LANGUAGE => "language",
    /// Campaign definition.
    CAMPAIGN => "campaign",
    /// Nation definition.
    NATION => "nation",
    /// City definition.
    CITY => "city",
    /// Production components.
    COMPONENTS => "components",
    /// Alien team composition.
    ALIENTEAM => "alienteam",
    /// Terrain definition.
    TERRAIN => "terrain",
    /// Damage type list.
    DAMAGETYPES => "damagetypes",
    /// Message option defaults.
    MSGOPTIONS => "msgoptions",
    /// Message category.
    MESSAGECATEGORY => "messagecategory",
    /// Model used by the menu renderer.
    MENU_MODEL => "menu_model",
}

/// Data factories available at document level.
pub const TOP_LEVEL: &[SubParserFactory] = &[
    ITEM,
    EQUIPMENT,
    TECH,
    BUILDING,
    INSTALLATION,
    MAPDEF,
    TEAM,
    UGV,
    AIRCRAFT,
    PARTICLE,
    SEQUENCE,
    MUSIC,
    FONT,
    TIPS,
    LANGUAGE,
    CAMPAIGN,
    NATION,
    CITY,
    COMPONENTS,
    ALIENTEAM,
    TERRAIN,
    DAMAGETYPES,
    MSGOPTIONS,
    MESSAGECATEGORY,
    MENU_MODEL,
];
