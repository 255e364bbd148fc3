//! Hygiene: source-level rules checked at test time.
//!
//! Production sources under `src/` must not panic or silently drop errors,
//! and everything outside `src/dom/` must stay free of browser types so it
//! can be tested natively. Budgets are zero; they do not grow.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn is_browser_host(&self) -> bool {
        self.path.replace('\\', "/").contains("src/dom/")
    }
}

/// Production `.rs` files under `src/`; `*_test.rs` siblings are skipped.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Files containing `pattern`, with per-file line counts.
fn hits<'a>(files: impl IntoIterator<Item = &'a SourceFile>, pattern: &str) -> Vec<(String, usize)> {
    files
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_absent(pattern: &str, found: &[(String, usize)]) {
    let total: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(total == 0, "`{pattern}` is not allowed in production code, found {total}:\n{listing}");
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("site.rs")));
    assert!(files.iter().any(SourceFile::is_browser_host));
}

#[test]
fn no_panicking_calls() {
    let files = source_files();
    for pattern in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern, &hits(&files, pattern));
    }
}

#[test]
fn no_silent_discards() {
    let files = source_files();
    for pattern in ["let _ =", ".ok()"] {
        assert_absent(pattern, &hits(&files, pattern));
    }
}

#[test]
fn no_dead_code_allowances() {
    let files = source_files();
    assert_absent("#[allow(dead_code)]", &hits(&files, "#[allow(dead_code)]"));
}

#[test]
fn headless_modules_avoid_browser_types() {
    let files = source_files();
    let headless: Vec<&SourceFile> = files
        .iter()
        .filter(|f| !f.is_browser_host() && !f.path.ends_with("lib.rs"))
        .collect();
    for pattern in ["web_sys", "js_sys", "wasm_bindgen", "gloo_timers"] {
        assert_absent(pattern, &hits(headless.iter().copied(), pattern));
    }
}
