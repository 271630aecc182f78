//! Export Flow Test
//!
//! Dump file → parse → filter → render → output file

#[path = "../common/fixtures.rs"]
mod fixtures;
use fixtures::{run_pipeline, Workspace, SAVED_DUMP, TWO_RECORDS};

use cachedump_application::RenderOptions;
use cachedump_domain::{CacheDump, Config, DomainError, LocalStyle, OutputFormat, RecordType};

// ============================================================================
// Formats
// ============================================================================

#[test]
fn test_hosts_for_a_single_name() {
    let ws = Workspace::new();
    let dump = ws.file("cache.dump", TWO_RECORDS);

    let (text, summary) = run_pipeline(
        Some(dump.as_path()),
        None,
        &[r"name:^foo\.example\.com\.$"],
        OutputFormat::Hosts,
        RenderOptions::default(),
        &ws.path("hosts"),
    )
    .unwrap();

    assert_eq!(text, "192.0.2.1 foo.example.com\n");
    assert_eq!(summary.total, 2);
    assert_eq!(summary.selected, 1);
}

#[test]
fn test_or_filter_keeps_dump_order() {
    let ws = Workspace::new();
    let dump = ws.file("cache.dump", SAVED_DUMP);

    let (text, _) = run_pipeline(
        Some(dump.as_path()),
        None,
        &["type:MX", "type:A", "or"],
        OutputFormat::UnboundCache,
        RenderOptions::default(),
        &ws.path("out.dump"),
    )
    .unwrap();

    let types: Vec<RecordType> = CacheDump::parse(&text)
        .records()
        .iter()
        .map(|r| r.record_type())
        .collect();
    assert_eq!(types, vec![RecordType::A, RecordType::A, RecordType::MX]);
}

#[test]
fn test_unbound_cache_output_loads_back_unchanged() {
    let ws = Workspace::new();
    let dump = ws.file("cache.dump", SAVED_DUMP);

    let (first, _) = run_pipeline(
        Some(dump.as_path()),
        None,
        &[],
        OutputFormat::UnboundCache,
        RenderOptions::default(),
        &ws.path("first.dump"),
    )
    .unwrap();
    let (second, _) = run_pipeline(
        Some(ws.path("first.dump").as_path()),
        None,
        &[],
        OutputFormat::UnboundCache,
        RenderOptions::default(),
        &ws.path("second.dump"),
    )
    .unwrap();

    assert_eq!(first, second);
    assert!(first.contains(";rrset 3000 1 1 8 2\n"));
    assert!(!first.contains("msg example.com."));
}

#[test]
fn test_local_directives_from_config() {
    let ws = Workspace::new();
    let dump = ws.file("cache.dump", SAVED_DUMP);
    let config = Config::from_toml("[output]\nlocal_style = \"control\"\n").unwrap();

    let (text, summary) = run_pipeline(
        Some(dump.as_path()),
        None,
        &["type:AAAA"],
        OutputFormat::UnboundLocal,
        RenderOptions::from(&config.output),
        &ws.path("local.sh"),
    )
    .unwrap();

    assert_eq!(
        text,
        "unbound-control local_data \"old.example.com. 40 IN AAAA 2001:db8::40\"\n"
    );
    assert_eq!(summary.lines, 1);
    assert_eq!(
        RenderOptions::from(&config.output).local_style,
        LocalStyle::Control
    );
}

#[test]
fn test_local_remove_lists_each_name_once() {
    let ws = Workspace::new();
    let dump = ws.file("cache.dump", SAVED_DUMP);

    let (text, _) = run_pipeline(
        Some(dump.as_path()),
        None,
        &[],
        OutputFormat::UnboundLocalRemove,
        RenderOptions::default(),
        &ws.path("remove.conf"),
    )
    .unwrap();

    assert_eq!(
        text,
        "local-data-remove: \"example.com.\"\nlocal-data-remove: \"old.example.com.\"\n"
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_malformed_filter_writes_nothing() {
    let ws = Workspace::new();
    let dump = ws.file("cache.dump", SAVED_DUMP);
    let out = ws.path("out");

    let err = run_pipeline(
        Some(dump.as_path()),
        None,
        &["and"],
        OutputFormat::Hosts,
        RenderOptions::default(),
        &out,
    )
    .unwrap_err();

    assert!(matches!(err, DomainError::MalformedFilter { .. }));
    assert!(!out.exists());
}

#[test]
fn test_missing_dump_file_writes_nothing() {
    let ws = Workspace::new();
    let out = ws.path("out");

    let err = run_pipeline(
        Some(ws.path("nope.dump").as_path()),
        None,
        &[],
        OutputFormat::Hosts,
        RenderOptions::default(),
        &out,
    )
    .unwrap_err();

    assert!(matches!(err, DomainError::InputUnreadable { .. }));
    assert!(!out.exists());
}

#[test]
fn test_unknown_format_name() {
    let err = "bind_zone".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, DomainError::UnknownFormat("bind_zone".to_string()));
}
