//! Checking a directory of script files

use std::fs;

use ufoscript_outline::{LabelProvider, OutlineConfig};
use ufoscript_parser::ParserConfig;
use ufoscript_runtime::serialize::{document_from_json, report_to_json, save_report};
use ufoscript_runtime::{CheckSummary, Checker, JsonReport};

#[test]
fn checks_a_script_directory() {
    let dir = std::env::temp_dir().join(format!("ufoscript-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("ok.ufo"), "window main { button ok { onclick { cmd \"a\"; } } }\n").unwrap();
    fs::write(dir.join("bad.ufo"), "entity e {\n\trange r {\n").unwrap();

    let checker = Checker::new(ParserConfig::default()).unwrap();
    let mut names: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    names.sort();

    let mut summary = CheckSummary::default();
    for path in &names {
        summary.add(&checker.check_file(path).unwrap());
    }
    assert_eq!(summary.files, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.errors, 1);

    let missing = checker.check_file(&dir.join("missing.ufo"));
    assert!(missing.is_err());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn json_report_carries_tree_and_diagnostics() {
    let checker = Checker::new(ParserConfig::default()).unwrap();
    let report = checker.check_source("main.ufo", "window main { panel p { } }\n}\n".to_string());
    let outline = report.outline(&LabelProvider::new(), &OutlineConfig::default());
    let json = report_to_json(&JsonReport::new(&report, Some(outline))).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["path"], "main.ufo");
    assert_eq!(value["diagnostics"][0]["kind"], "unexpected-token");
    assert_eq!(value["diagnostics"][0]["line"], 2);
    assert_eq!(value["outline"]["entries"][1]["label"], "panel p");

    let document = document_from_json(&value["document"].to_string()).unwrap();
    assert_eq!(document, report.document);
}

#[test]
fn saved_report_can_be_read_back() {
    let checker = Checker::new(ParserConfig::default()).unwrap();
    let report = checker.check_source("r.ufo", "range a { min 1 }".to_string());
    let path = std::env::temp_dir().join(format!("ufoscript-report-{}.json", std::process::id()));
    save_report(&JsonReport::new(&report, None), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let back: JsonReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back.document, report.document);
    assert!(back.outline.is_none());
    fs::remove_file(&path).unwrap();
}
