/// Textual rewrite rules for wasm-bindgen glue modules
///
/// The transformation is deliberately line-anchored: top-level
/// declarations are expected to start at column 0, the way wasm-bindgen
/// emits them. Nested or indented declarations and import statements
/// spanning multiple lines are out of scope (known limitation, kept to
/// preserve the exact set and order of captured names).

use crate::scan;

/// Result of rewriting a glue module: the self-contained body plus the
/// two ordered function name sets.
#[derive(Debug, Clone, PartialEq)]
pub struct RewrittenGlue {
    /// Glue text with import lines removed and exports demoted
    pub text: String,
    /// Line-initial function declarations in the rewritten text,
    /// in order of first appearance, host bindings excluded
    pub public_functions: Vec<String>,
    /// Host-binding function declarations in the *original* text,
    /// in order of first appearance
    pub host_bindings: Vec<String>,
}

/// Apply both rewrite rules and run the two name scans.
///
/// Host bindings are scanned from the original text before any
/// rewriting: the binding scan accepts an optional `export ` prefix,
/// and running it after export demotion would see a different snapshot
/// than the one the glue author wrote.
pub fn rewrite(source: &str) -> RewrittenGlue {
    let host_bindings = scan::host_bindings(source);

    let mut text = String::with_capacity(source.len());
    for raw in source.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        if is_import_line(line) {
            // Rule R1: the whole line goes, module path included
            continue;
        }
        // Rule R2: demote line-initial exports to local declarations
        let demoted = demote_line(line);
        text.push_str(demoted);
        text.push_str(&raw[line.len()..]);
    }

    let public_functions = scan::public_functions(&text);

    RewrittenGlue {
        text,
        public_functions,
        host_bindings,
    }
}

/// Rule R1: does this line import bindings from another module?
///
/// Matches `import <bindings> from <path>` anchored at the start of the
/// line. Imports split across lines are not recognized.
pub fn is_import_line(line: &str) -> bool {
    match line.strip_prefix("import ") {
        Some(rest) => rest.contains(" from "),
        None => false,
    }
}

/// Rule R2: strip a line-initial `export ` qualifier from a function or
/// const declaration, leaving everything else untouched.
///
/// Idempotent: the demoted line no longer starts with `export `, so a
/// second pass is a no-op.
pub fn demote_line(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("export ") {
        if rest.starts_with("function ") || rest.starts_with("const ") {
            return rest;
        }
    }
    line
}
