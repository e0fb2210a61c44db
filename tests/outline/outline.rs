//! Outline construction and rendering

use ufoscript_outline::{LabelProvider, OutlineConfig, build_outline};
use ufoscript_parser::parse_source;

const SOURCE: &str = "\
window main
{
\tpanel body
\t{
\t\tbutton ok { onclick { cmd \"ok\"; } }
\t\tstring title { string \"_Title\" }
\t}
\tconfunc main_update { }
}
";

#[test]
fn nested_entries_follow_source_order() {
    let document = parse_source(SOURCE).unwrap().document;
    let outline = build_outline(&document, &LabelProvider::new(), &OutlineConfig::default());
    let labels: Vec<_> = outline.entries().iter().map(|e| (e.depth, e.label.as_str())).collect();
    assert_eq!(
        labels,
        vec![
            (0, "window main"),
            (1, "panel body"),
            (2, "button ok"),
            (3, "onclick"),
            (2, "string title"),
            (1, "confunc main_update"),
        ]
    );
}

#[test]
fn depth_limit_prunes_deep_nodes() {
    let document = parse_source(SOURCE).unwrap().document;
    let config = OutlineConfig::default().with_max_depth(1);
    let outline = build_outline(&document, &LabelProvider::new(), &config);
    assert_eq!(outline.len(), 3);
    assert!(outline.entries().iter().all(|e| e.depth <= 1));
}

#[test]
fn render_with_icons_and_lines() {
    let document = parse_source(SOURCE).unwrap().document;
    let config = OutlineConfig::default().with_max_depth(1).with_icons(true);
    let outline = build_outline(&document, &LabelProvider::new(), &config);
    assert_eq!(
        outline.render(&config),
        "window main [icons/window.png] :1\n  panel body [icons/panel.png] :3\n  confunc main_update [icons/confunc.png] :8\n"
    );
}
