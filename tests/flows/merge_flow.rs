//! Merge Flow Test
//!
//! Saved dump file + live dump → merge (live wins) → render

#[path = "../common/fixtures.rs"]
mod fixtures;
use fixtures::{run_pipeline, Workspace, LIVE_DUMP, SAVED_DUMP};

use cachedump_application::RenderOptions;
use cachedump_domain::{CacheDump, OutputFormat, RecordType};

#[test]
fn test_live_rrset_replaces_saved_rrset() {
    let ws = Workspace::new();
    let saved = ws.file("saved.dump", SAVED_DUMP);
    let live = ws.file("live.dump", LIVE_DUMP);

    let (text, summary) = run_pipeline(
        Some(saved.as_path()),
        Some(live.as_path()),
        &[],
        OutputFormat::UnboundCache,
        RenderOptions::default(),
        &ws.path("merged.dump"),
    )
    .unwrap();

    let merged = CacheDump::parse(&text);
    let lines: Vec<(&str, RecordType, u32, &str)> = merged
        .records()
        .iter()
        .map(|r| (r.name(), r.record_type(), r.ttl(), r.rdata()))
        .collect();

    assert_eq!(summary.total, 5);
    assert_eq!(lines[0], ("example.com.", RecordType::A, 86400, "93.184.216.36"));
    assert_eq!(lines[1].1, RecordType::MX);
    assert_eq!(lines[2].1, RecordType::RRSIG);
    assert_eq!(lines[3].0, "old.example.com.");
    assert_eq!(lines[4].0, "new.example.com.");
    assert!(text.contains(";rrset 86400 1 0 8 3\n"));
}

#[test]
fn test_merge_then_filter_hosts() {
    let ws = Workspace::new();
    let saved = ws.file("saved.dump", SAVED_DUMP);
    let live = ws.file("live.dump", LIVE_DUMP);

    let (text, _) = run_pipeline(
        Some(saved.as_path()),
        Some(live.as_path()),
        &["ip:^93\\."],
        OutputFormat::Hosts,
        RenderOptions::default(),
        &ws.path("hosts"),
    )
    .unwrap();

    assert_eq!(text, "93.184.216.36 example.com\n");
}

#[test]
fn test_fixed_cache_ttl_after_merge() {
    let ws = Workspace::new();
    let saved = ws.file("saved.dump", SAVED_DUMP);
    let live = ws.file("live.dump", LIVE_DUMP);
    let options = RenderOptions {
        cache_ttl: Some(3600),
        ..RenderOptions::default()
    };

    let (text, _) = run_pipeline(
        Some(saved.as_path()),
        Some(live.as_path()),
        &["type:A"],
        OutputFormat::UnboundCache,
        options,
        &ws.path("merged.dump"),
    )
    .unwrap();

    let merged = CacheDump::parse(&text);
    assert_eq!(merged.len(), 2);
    assert!(merged.records().iter().all(|r| r.ttl() == 3600));
}

#[test]
fn test_only_live_dump() {
    let ws = Workspace::new();
    let live = ws.file("live.dump", LIVE_DUMP);

    let (text, summary) = run_pipeline(
        None,
        Some(live.as_path()),
        &["name:^new"],
        OutputFormat::Hosts,
        RenderOptions::default(),
        &ws.path("hosts"),
    )
    .unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(text, "198.51.100.7 new.example.com\n");
}
