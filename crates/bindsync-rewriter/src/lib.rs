pub mod rewrite;
mod scan;

pub use rewrite::{RewrittenGlue, demote_line, is_import_line};

/// Rewrite a wasm-bindgen glue module into a self-contained body.
///
/// Strips inter-module import lines, demotes `export` declarations to
/// local ones, and collects the two function name sets needed by the
/// synthesizer: the public functions (scanned from the rewritten text)
/// and the host-binding functions (scanned from the original text,
/// before the export keywords are stripped).
pub fn rewrite(source: &str) -> RewrittenGlue {
    rewrite::rewrite(source)
}
