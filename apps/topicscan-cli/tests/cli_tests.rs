use std::fs;
use tempfile::TempDir;

use topicscan_cli::{analyze_path, build_analyzer, list_html_files, TopicRequest};
use topicscan_core::config::{AnalysisConfig, Config};
use topicscan_text::BasicResearcher;

fn request(keyphrase: &str, locale: &str) -> TopicRequest {
    TopicRequest { keyphrase: keyphrase.to_string(), synonyms: "feline".to_string(), locale: locale.parse().unwrap() }
}

#[test]
fn lists_only_html_files_sorted() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(dir.join("b.html"), "").unwrap();
    fs::write(dir.join("nested/a.htm"), "").unwrap();
    fs::write(dir.join("notes.txt"), "").unwrap();

    let files = list_html_files(dir);
    assert_eq!(files, vec![dir.join("b.html"), dir.join("nested/a.htm")]);
}

#[test]
fn analyzes_every_file_in_a_directory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("a.html"), "<h2>Cat care</h2><h2>Dog care</h2>").unwrap();
    fs::write(dir.join("b.html"), "<h2>Feline diet</h2>").unwrap();
    fs::write(dir.join("c.html"), "<p>No headings</p>").unwrap();

    let analyzer = build_analyzer(&AnalysisConfig::default());
    let reports = analyze_path(&analyzer, &BasicResearcher::default(), dir, &request("cat", "en_US"), false).expect("analyze");
    let counts: Vec<_> = reports.iter().map(|r| (r.result.count, r.result.matches)).collect();
    assert_eq!(counts, vec![(2, 1), (1, 1), (0, 0)]);
}

#[test]
fn single_file_report_serializes_flat() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("page.html");
    fs::write(&file, "<h2>Cat care</h2><h2>Dog care</h2>").unwrap();

    let analyzer = build_analyzer(&AnalysisConfig::default());
    let reports = analyze_path(&analyzer, &BasicResearcher::default(), &file, &request("cat", "en_US"), false).expect("analyze");
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["count"], 2);
    assert_eq!(json[0]["matches"], 1);
    assert_eq!(json[0]["percentReflectingTopic"], 50.0);
    assert_eq!(json[0]["policy"], "MajorityMatch");
}

#[test]
fn configured_levels_and_synonym_switch_apply() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("page.html");
    fs::write(&file, "<h1>Cat</h1><h2>Feline care</h2>").unwrap();

    let config = Config::from_toml_str("use_synonyms = false\n[headings]\nmin = 1\nmax = 2\n").unwrap().analysis().unwrap();
    let analyzer = build_analyzer(&config);
    let reports = analyze_path(&analyzer, &BasicResearcher::default(), &file, &request("cat", "en_US"), false).expect("analyze");
    assert_eq!((reports[0].result.count, reports[0].result.matches), (2, 1));
}

#[test]
fn unsupported_locale_fails_the_run() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("page.html");
    fs::write(&file, "<h2>猫</h2>").unwrap();

    let analyzer = build_analyzer(&AnalysisConfig::default());
    let err = analyze_path(&analyzer, &BasicResearcher::default(), &file, &request("猫", "ja_JP"), false).unwrap_err();
    assert!(format!("{err:#}").contains("Unsupported locale: ja_JP"));
}

#[test]
fn missing_path_is_an_error_not_an_empty_report() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("pgae.html");

    let analyzer = build_analyzer(&AnalysisConfig::default());
    let err = analyze_path(&analyzer, &BasicResearcher::default(), &missing, &request("cat", "en_US"), false).unwrap_err();
    assert!(err.to_string().contains("does not exist"), "unexpected error: {err:#}");
}

#[test]
fn empty_directory_yields_no_reports() {
    let tmp = TempDir::new().unwrap();

    let analyzer = build_analyzer(&AnalysisConfig::default());
    let reports = analyze_path(&analyzer, &BasicResearcher::default(), tmp.path(), &request("cat", "en_US"), false).expect("analyze");
    assert!(reports.is_empty());
}
