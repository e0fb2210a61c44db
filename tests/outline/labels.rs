//! Label and icon lookups over parsed documents

use ufoscript_language::visitor::find_all;
use ufoscript_outline::LabelProvider;
use ufoscript_parser::parse_source;

const SOURCE: &str = "window options\n{\n\ttextentry name { }\n\tpanel { button save { } }\n}\nentity misc_model { range frame { min 0 } }\n";

#[test]
fn labels_for_every_node_type() {
    let document = parse_source(SOURCE).unwrap().document;
    let labels = LabelProvider::new();

    let window = document.find("window", "options").unwrap();
    assert_eq!(labels.text(window), "window options");
    assert_eq!(labels.image(window), "icons/window.png");

    let panel = window.child("panel").unwrap();
    assert_eq!(labels.text(panel), "panel");
    assert_eq!(labels.image(panel), "icons/panel.png");

    let range = find_all(&document, "range")[0];
    assert_eq!(labels.text(range), "range frame");
    assert_eq!(labels.image(range), "icons/range.png");
}

#[test]
fn custom_icon_location() {
    let document = parse_source(SOURCE).unwrap().document;
    let labels = LabelProvider::new()
        .with_icon_dir("share/icons")
        .with_icon_extension("svg");
    let button = find_all(&document, "button")[0];
    assert_eq!(labels.image(button), "share/icons/button.svg");
    assert_eq!(labels.text(button), "button save");
}

#[test]
fn items_without_labels() {
    let document = parse_source("entity e { range r { min 0 } }").unwrap().document;
    let range = find_all(&document, "range")[0];
    let labels = LabelProvider::new();
    let min = &range.body[0];
    assert_eq!(labels.item_text(min), None);
    assert_eq!(labels.item_image(min), None);
    assert_eq!(
        labels.item_text(&document.items[0]).as_deref(),
        Some("entity e")
    );
}
