/// Function name extraction for glue modules
///
/// Single-pass, line-anchored scans over the glue text. The two scans
/// run over different snapshots: public functions over the rewritten
/// text (exports already demoted), host bindings over the original
/// text (where the declarations may still carry `export `).

/// Prefix of functions the wasm module calls back into the host with.
pub const HOST_CALL_PREFIX: &str = "__wbg_";

/// Prefix of wasm-bindgen's low-level intrinsic bindings.
pub const INTRINSIC_PREFIX: &str = "__wbindgen_";

/// Is this name reserved for the wasm module's import table?
pub fn is_host_binding(name: &str) -> bool {
    name.starts_with(HOST_CALL_PREFIX) || name.starts_with(INTRINSIC_PREFIX)
}

/// Names of line-initial `function` declarations in rewritten glue
/// text, in order of first appearance. Host-binding names are excluded;
/// they belong in the import table, not the module's export list.
/// Duplicate declarations are recorded as found (malformed input is the
/// caller's problem).
pub fn public_functions(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(function_name)
        .filter(|name| !is_host_binding(name))
        .map(str::to_owned)
        .collect()
}

/// Names of line-initial function declarations in the original glue
/// text, exported or not, that match a host-binding prefix. Order of
/// first appearance.
pub fn host_bindings(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            function_name(line)
        })
        .filter(|name| is_host_binding(name))
        .map(str::to_owned)
        .collect()
}

/// Extract the declared name from a line-initial `function name(` form,
/// allowing whitespace between name and parenthesis.
fn function_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("function ")?;
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let (name, tail) = rest.split_at(end);
    if tail.trim_start().starts_with('(') {
        Some(name)
    } else {
        None
    }
}
