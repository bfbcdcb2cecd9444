//! Integration tests for the corpus scan: discovery, ordering, duplicate
//! names and fatal configuration errors.

mod helpers;

use std::fs;
use std::path::PathBuf;

use serde_json::json;
use template_validator::config::Settings;
use template_validator::error::CheckError;
use template_validator::scan::{discover, scan};

use helpers::{Corpus, properties};

fn two_folder_corpus() -> Corpus {
    let corpus = Corpus::new(&[("ci", "Continuous integration"), ("code-scanning", "Security")]);
    corpus.add_icon("shield");
    corpus
}

#[test]
fn clean_corpus_reports_nothing() {
    let corpus = two_folder_corpus();
    corpus.add_template("ci", "go.yml", &properties("Go", "octicon go", json!(["Continuous integration"])));
    corpus.add_template("code-scanning", "scan.yml", &properties("Scan", "shield", json!(["security"])));

    let report = scan(&corpus.settings).unwrap();
    assert!(report.is_empty(), "{:?}", report);
}

#[test]
fn second_duplicate_name_only_is_flagged() {
    let corpus = two_folder_corpus();
    corpus.add_template("ci", "a.yml", &properties("Build", "shield", json!(["Continuous integration"])));
    corpus.add_template("ci", "b.yml", &properties("Build", "shield", json!(["Continuous integration"])));

    let report = scan(&corpus.settings).unwrap();
    assert_eq!(report.len(), 1, "{:?}", report);
    assert_eq!(report[0].id, corpus.folder("ci").join("b.yml"));
    assert_eq!(report[0].name.as_deref(), Some("Build"));
    assert_eq!(report[0].errors.len(), 1);
    assert_eq!(report[0].errors[0].code, "D001");
    assert_eq!(
        report[0].errors[0].message,
        "workflow template name \"Build\" already exists"
    );
}

#[test]
fn duplicate_names_are_detected_across_folders() {
    let corpus = two_folder_corpus();
    corpus.add_template("ci", "a.yml", &properties("Shared", "shield", json!(["Continuous integration"])));
    corpus.add_template("code-scanning", "a.yml", &properties("Shared", "shield", json!(["Security"])));
    corpus.add_template("code-scanning", "b.yml", &properties("Shared", "shield", json!(["Security"])));

    let report = scan(&corpus.settings).unwrap();
    let ids: Vec<PathBuf> = report.iter().map(|r| r.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            corpus.folder("code-scanning").join("a.yml"),
            corpus.folder("code-scanning").join("b.yml"),
        ]
    );
    assert!(report.iter().all(|r| r.errors.iter().any(|e| e.code == "D001")));
}

#[test]
fn blank_names_never_collide() {
    let corpus = two_folder_corpus();
    corpus.add_template("ci", "a.yml", &properties(" ", "shield", json!(["Continuous integration"])));
    corpus.add_template("ci", "b.yml", &properties(" ", "shield", json!(["Continuous integration"])));

    let report = scan(&corpus.settings).unwrap();
    assert!(report.iter().all(|r| r.errors.iter().all(|e| e.code != "D001")));
}

#[test]
fn report_follows_folder_then_file_name_order() {
    let corpus = two_folder_corpus();
    corpus.add_template("code-scanning", "a.yml", &properties("S1", "nope", json!(["Security"])));
    corpus.add_template("ci", "zeta.yml", &properties("C2", "nope", json!(["Continuous integration"])));
    corpus.add_template("ci", "alpha.yaml", &properties("C1", "nope", json!(["Continuous integration"])));

    let report = scan(&corpus.settings).unwrap();
    let names: Vec<&str> = report.iter().filter_map(|r| r.name.as_deref()).collect();
    assert_eq!(names, vec!["C1", "C2", "S1"]);
}

#[test]
fn discovery_keeps_only_definition_files() {
    let corpus = two_folder_corpus();
    corpus.add_template("ci", "go.yml", &properties("Go", "shield", json!(["Continuous integration"])));
    corpus.add_template("ci", "rust.yaml", &properties("Rust", "shield", json!(["Continuous integration"])));
    fs::write(corpus.folder("ci").join("README.md"), "# ci").unwrap();
    fs::write(corpus.folder("ci").join("notes.json"), "{}").unwrap();
    fs::create_dir_all(corpus.folder("ci").join("nested.yml")).unwrap();

    let items = discover(&corpus.folder("ci"), &corpus.settings).unwrap();
    let ids: Vec<PathBuf> = items.into_iter().map(|i| i.id).collect();
    assert_eq!(
        ids,
        vec![
            corpus.folder("ci").join("go.yml"),
            corpus.folder("ci").join("rust.yaml"),
        ]
    );
}

#[test]
fn per_item_failures_do_not_abort_the_scan() {
    let corpus = two_folder_corpus();
    corpus.add_template("ci", "a.yml", "not json");
    corpus.add_template("ci", "b.yml", &properties("B", "nope", json!(["Continuous integration"])));

    let report = scan(&corpus.settings).unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].errors[0].code, "P002");
    assert_eq!(report[1].errors[0].code, "I001");
}

#[test]
fn missing_folder_is_fatal() {
    let corpus = two_folder_corpus();
    fs::remove_dir_all(corpus.folder("ci")).unwrap();

    let err = scan(&corpus.settings).unwrap_err();
    assert!(matches!(err, CheckError::ReadDir { .. }), "{err}");
}

#[test]
fn unmapped_folder_is_fatal_before_evaluation() {
    let mut corpus = two_folder_corpus();
    let pages = corpus.folder("pages");
    fs::create_dir_all(&pages).unwrap();
    corpus.settings.folders.push(pages);

    let err = scan(&corpus.settings).unwrap_err();
    match err {
        CheckError::UnmappedDirectory(path) => assert_eq!(path, corpus.folder("pages")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn settings_file_paths_resolve_relative_to_it() {
    let corpus = two_folder_corpus();
    corpus.add_template("ci", "go.yml", &properties("Go", "shield", json!(["Continuous integration"])));
    corpus.add_template("ci", "bad.yml", &properties("Bad", "shield", json!(["Security"])));

    let settings_path = corpus.root().join("settings.yml");
    fs::write(
        &settings_path,
        "folders: [ci]\n\
         allowed_categories: [Continuous integration]\n\
         folder_category_map:\n  - name: ci\n    category: Continuous integration\n",
    )
    .unwrap();

    let settings = Settings::load(&settings_path).unwrap();
    assert_eq!(settings.icons_dir, corpus.root().join("icons"));

    let report = scan(&settings).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].id, corpus.folder("ci").join("bad.yml"));
    assert_eq!(report[0].errors[0].code, "C002");
}

#[test]
fn unreadable_settings_file_is_fatal() {
    let corpus = two_folder_corpus();
    let err = Settings::load(&corpus.root().join("missing.json")).unwrap_err();
    assert!(matches!(err, CheckError::SettingsRead { .. }));

    let bad = corpus.root().join("settings.json");
    fs::write(&bad, "{ \"folders\": ").unwrap();
    let err = Settings::load(&bad).unwrap_err();
    assert!(matches!(err, CheckError::SettingsParse { .. }));
}
