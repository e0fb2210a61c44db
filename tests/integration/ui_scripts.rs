//! Window definitions as shipped with the game

use ufoscript_foundation::Value;
use ufoscript_language::visitor::find_all;
use ufoscript_language::{Item, pretty_print};
use ufoscript_outline::{LabelProvider, OutlineConfig, build_outline};
use ufoscript_parser::parse_source;

const OPTIONS_WINDOW: &str = r#"
// Game options
window options extends ipopup
{
	{
		pos "100 100"
		size "540 420"
	}

	string title
	{
		string	"_Options"
		pos		"0 0"
	}

	panel video
	{
		pos "20 40"
		layout LAYOUT_TOP_DOWN_JUSTIFY

		checkbox fullscreen
		{
			current *cvar:vid_fullscreen
			onChange { cmd "vid_restart;" }
		}

		selectbox resolution
		{
			dataid OPTION_VIDEO_RESOLUTIONS
			option r800x600 { label "800x600" value 0 }
			option r1024x768 { label "1024x768" value 1 }
			onViewChange { *node:parent.bar@current = <1> }
		}

		textentry playername
		{
			string *cvar:cl_name
			onAbort { cmd "echo aborted;" }
			onChange { cmd "cl_name_changed" }
		}
	}

	button save
	{
		icon icons/save
		onClick
		{
			if ( *cvar:vid_fullscreen ne 0 ) {
				cmd "vid_restart;"
			} else {
				cmd "echo windowed;"
			}
			cmd "ui_pop;"
		}
	}

	cmpSlider volume { pos "20 300" min 0 max 1 }

	confunc options_reset
	{
		*cvar:vid_fullscreen = 0;
		call *node:root.video.fullscreen@reset;
	}
}
"#;

#[test]
fn options_window_parses_cleanly() {
    let outcome = parse_source(OPTIONS_WINDOW).unwrap();
    assert!(outcome.diagnostics.is_empty(), "{:?}", outcome.diagnostics);

    let window = outcome.document.find("window", "options").unwrap();
    assert_eq!(window.extends.as_deref(), Some("ipopup"));
    assert_eq!(window.property("size").unwrap().value, Value::String("540 420".into()));

    let names: Vec<_> = window.children().map(|n| n.node_type.as_str()).collect();
    assert_eq!(names, vec!["string", "panel", "button", "confunc"]);
}

#[test]
fn event_properties_are_case_insensitive() {
    let document = parse_source(OPTIONS_WINDOW).unwrap().document;

    let entry = find_all(&document, "textentry")[0];
    assert!(entry.child("onabort").is_some());
    assert!(entry.child("onchange").is_some());

    let select = find_all(&document, "selectbox")[0];
    assert!(select.child("onviewchange").is_some());
    assert_eq!(select.children().filter(|n| n.node_type == "option").count(), 2);
}

#[test]
fn conditional_event_body() {
    let document = parse_source(OPTIONS_WINDOW).unwrap().document;
    let onclick = find_all(&document, "onclick")[0];
    let heads: Vec<_> = onclick.statements().filter_map(|s| s.head()).collect();
    assert_eq!(heads, vec!["if", "cmd"]);
    let first = onclick.statements().next().unwrap();
    assert!(first.words.contains(&Value::Ident("else".into())));
}

#[test]
fn unknown_component_is_kept_as_property() {
    let document = parse_source(OPTIONS_WINDOW).unwrap().document;
    let window = document.find("window", "options").unwrap();
    let Value::List(parts) = &window.property("cmpSlider").unwrap().value else {
        panic!("component instance should be a list");
    };
    assert_eq!(parts[0], Value::Ident("volume".into()));
}

#[test]
fn outline_of_options_window() {
    let document = parse_source(OPTIONS_WINDOW).unwrap().document;
    let config = OutlineConfig::default().with_max_depth(1).with_lines(false);
    let outline = build_outline(&document, &LabelProvider::new(), &config);
    assert_eq!(
        outline.render(&config),
        "window options\n  string title\n  panel video\n  button save\n  confunc options_reset\n"
    );
}

#[test]
fn pretty_print_reparses_to_same_tree() {
    let document = parse_source(OPTIONS_WINDOW).unwrap().document;
    let printed = pretty_print(&document);
    let reparsed = parse_source(&printed).unwrap();
    assert!(reparsed.diagnostics.is_empty(), "{printed}");
    assert_eq!(pretty_print(&reparsed.document), printed);
    assert!(matches!(reparsed.document.items[0], Item::Node(_)));
}
