//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries
//! (domain → application → infra / output → commands) are maintained.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Track brace depth and return whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    /// Process a line and return `true` if it's inside a `#[cfg(test)]` block.
    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Non-comment lines of every production (non-`#[cfg(test)]`) source file
/// under `src/<layer>`, paired with a `path:line` location.
fn production_lines(layer: &str) -> Vec<(String, String)> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut out = Vec::new();
    for file in collect_rs_files(&root.join("src").join(layer)) {
        let rel = file
            .strip_prefix(root)
            .unwrap_or(&file)
            .display()
            .to_string();
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        let mut tracker = CfgTestTracker::new();
        for (i, line) in content.lines().enumerate() {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            if in_test || trimmed.starts_with("//") {
                continue;
            }
            out.push((format!("{rel}:{}", i + 1), line.to_string()));
        }
    }
    out
}

fn assert_layer_avoids(layer: &str, forbidden: &[&str]) {
    let violations: Vec<String> = production_lines(layer)
        .into_iter()
        .filter(|(_, line)| forbidden.iter().any(|f| line.contains(f)))
        .map(|(loc, line)| format!("{loc}: {line}"))
        .collect();

    assert!(
        violations.is_empty(),
        "{layer}/ must not reference {forbidden:?}:\n{}",
        violations.join("\n")
    );
}

// ── Layer boundaries ──────────────────────────────────────────────────────────

#[test]
fn domain_is_pure() {
    assert_layer_avoids(
        "domain",
        &[
            "crate::infra",
            "crate::application",
            "crate::commands",
            "crate::output",
            "reqwest",
            "tokio",
            "std::fs",
        ],
    );
}

#[test]
fn application_has_no_infra_or_output_imports() {
    assert_layer_avoids(
        "application",
        &["crate::infra", "crate::output", "crate::commands", "reqwest"],
    );
}

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    assert_layer_avoids("infra", &["crate::commands", "crate::output"]);
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    assert_layer_avoids("infra", &["println!", "eprintln!"]);
}

// ── Rendering goes through the renderer ───────────────────────────────────────

#[test]
fn no_inline_json_branching_in_commands() {
    let violations: Vec<String> = production_lines("commands")
        .into_iter()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            line.contains("json: bool")
                || trimmed.starts_with("if json")
                || trimmed.starts_with("if !json")
                || line.contains("println!")
        })
        .map(|(loc, line)| format!("{loc}: {line}"))
        .collect();

    assert!(
        violations.is_empty(),
        "commands/ must render through AppContext::renderer():\n{}",
        violations.join("\n")
    );
}
