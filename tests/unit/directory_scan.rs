use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;
use treescan::{EntryKind, ScanConfig, ScanMode, ScanSummary, TreeScanner};

#[test]
fn test_scan_flat_directory() {
    let td = TempDir::new().unwrap();
    let a = td.path().join("a.json");
    let mut fa = File::create(&a).unwrap();
    write!(fa, "{{\"name\": \"A\"}}\n").unwrap();
    fs::write(td.path().join("b.txt"), "b").unwrap();

    let scanner = TreeScanner::new(
        ScanConfig::new()
            .with_root(td.path())
            .with_mode(ScanMode::Filter),
    );
    let (outcomes, summary) = scanner.run();

    assert_eq!(summary.visited, 3);
    assert_eq!(summary.emitted, 1);
    assert_eq!(outcomes.len(), 3);
}

#[test]
fn test_scan_reports_entry_metadata() {
    let td = TempDir::new().unwrap();
    let sub = td.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("b.json"), "[true]").unwrap();

    let scanner = TreeScanner::new(
        ScanConfig::new()
            .with_root(td.path())
            .with_mode(ScanMode::All),
    );

    let mut seen = Vec::new();
    scanner.scan_with(|outcome| {
        if let treescan::EntryOutcome::Emitted { entry, .. } = outcome {
            seen.push((entry.depth, entry.kind, entry.size));
        }
    });

    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].0, 0);
    assert_eq!(seen[0].1, EntryKind::Directory);
    assert_eq!((seen[1].0, seen[1].1), (1, EntryKind::Directory));
    assert_eq!(seen[2], (2, EntryKind::File, 6));
}

#[test]
fn test_unsorted_scan_visits_same_entries() {
    let td = TempDir::new().unwrap();
    for name in ["c.json", "a.json", "b.json"] {
        fs::write(td.path().join(name), "{}").unwrap();
    }

    let sorted = TreeScanner::new(ScanConfig::new().with_root(td.path())).run().1;
    let unsorted = TreeScanner::new(
        ScanConfig::new()
            .with_root(td.path())
            .with_sort_entries(false),
    )
    .run()
    .1;

    assert_eq!(sorted, unsorted);
    assert_eq!(
        sorted,
        ScanSummary {
            visited: 4,
            emitted: 3,
            skipped: 1,
            decoded: 3,
            undecodable: 0,
            failed: 0,
        }
    );
}
