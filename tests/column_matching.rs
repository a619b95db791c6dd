use std::io::Write;

use sheetmatch::{
    ColumnRef, MatchSummary, OutputYamlConfig, SheetmatchConfig, match_columns, write_csv,
};
use tempfile::NamedTempFile;

fn table(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write table");
    file
}

fn sources() -> NamedTempFile {
    table("id,nome\n1,\"Silva, Maria\"\n2,\n3,JOÃO PEDRO\n4,Zeca\n5,Mariana Silveira\n")
}

fn targets() -> NamedTempFile {
    table("cliente,cidade\nMaria Silva,Recife\nJoao Pedro,Natal\nAna Lima,Olinda\n")
}

fn config(threshold: u8) -> SheetmatchConfig {
    let mut config = SheetmatchConfig::default();
    config.matcher.threshold = threshold;
    config
}

#[test]
fn matches_columns_end_to_end() {
    let (src, tgt) = (sources(), targets());
    let mut calls = Vec::new();
    let report = match_columns(
        &ColumnRef::new(src.path(), "nome"),
        &ColumnRef::new(tgt.path(), "cliente"),
        &config(80),
        &mut |done: usize, total: usize| calls.push((done, total)),
    )
    .expect("match columns");

    let rows: Vec<(&str, Option<&str>, u8)> = report
        .results
        .iter()
        .map(|r| (r.query.as_str(), r.matched.as_deref(), r.score.get()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Silva, Maria", Some("Maria Silva"), 100),
            ("JOÃO PEDRO", Some("Joao Pedro"), 100),
            ("Mariana Silveira", Some("Maria Silva"), 81),
        ]
    );
    assert_eq!(
        report.summary,
        MatchSummary {
            sources: 4,
            targets: 3,
            missing_sources: 1,
            missing_targets: 0,
            matched: 3,
            below_threshold: 1,
        }
    );
    assert_eq!(calls, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
}

#[test]
fn raising_threshold_drops_weaker_pairs() {
    let (src, tgt) = (sources(), targets());
    let report = match_columns(
        &ColumnRef::new(src.path(), "nome"),
        &ColumnRef::new(tgt.path(), "cliente"),
        &config(82),
        &mut |_: usize, _: usize| {},
    )
    .expect("match columns");

    assert_eq!(report.results.len(), 2);
    assert!(report.results.iter().all(|r| r.score.get() == 100));
}

#[test]
fn exported_csv_round_trips_through_loader() {
    let (src, tgt) = (sources(), targets());
    let report = match_columns(
        &ColumnRef::new(src.path(), "nome"),
        &ColumnRef::new(tgt.path(), "cliente"),
        &config(80),
        &mut |_: usize, _: usize| {},
    )
    .expect("match columns");

    let out = NamedTempFile::new().expect("temp file");
    write_csv(out.reopen().expect("reopen"), &report.results, &OutputYamlConfig::default())
        .expect("write csv");

    let opts = sheetmatch::TableOptions::default();
    let matched = sheetmatch::load_column(out.path(), "best_match", &opts).expect("reload");
    let names: Vec<&str> = matched.iter().filter_map(|l| l.as_text()).collect();
    assert_eq!(names, vec!["Maria Silva", "Joao Pedro", "Maria Silva"]);
}

#[test]
fn semicolon_tables_via_yaml_config() {
    let src = table("nome;idade\nAna Lima;30\n");
    let tgt = table("cliente;idade\nLIMA, Ana;31\n");
    let config = SheetmatchConfig::from_yaml(
        "version: \"1.0\"\nmatcher:\n  threshold: 100\ninput:\n  delimiter: \";\"\n",
    )
    .expect("config");

    let report = match_columns(
        &ColumnRef::new(src.path(), "nome"),
        &ColumnRef::new(tgt.path(), "cliente"),
        &config,
        &mut |_: usize, _: usize| {},
    )
    .expect("match columns");
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].matched.as_deref(), Some("LIMA, Ana"));
}
