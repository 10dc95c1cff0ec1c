//! Hygiene: source-level standards for the showcase crate.
//!
//! The showcase crate runs inside every page view, so nothing in it may
//! panic or swallow an error. These tests scan `src/` (test sidecars
//! excluded) and fail when a pattern exceeds its budget. Budgets only ever
//! go down.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    reason: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, reason: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 0, reason: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, reason: "aborts rendering" },
    Budget { pattern: "unreachable!(", max: 0, reason: "aborts rendering" },
    Budget { pattern: "todo!(", max: 0, reason: "unfinished code path" },
    Budget { pattern: "unimplemented!(", max: 0, reason: "unfinished code path" },
    Budget { pattern: "let _ =", max: 0, reason: "discards a value without inspecting it" },
    Budget { pattern: ".ok()", max: 0, reason: "drops the error half of a Result" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, reason: "hides unused code" },
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_scanned() {
    let files = source_files();
    assert!(
        files.iter().any(|file| file.path.ends_with("player.rs")),
        "hygiene scan found no sources; run from the crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let total = found.iter().map(|(_, count)| count).sum::<usize>();
        if total > budget.max {
            let detail = found
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` ({}) found {total}, max {}\n{detail}",
                budget.pattern, budget.reason, budget.max
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
