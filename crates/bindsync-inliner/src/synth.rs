/// Final artifact synthesis
///
/// Assembles the self-contained module from a small fixed template with
/// named slots: the base64 payload, the rewritten glue body, the
/// import-table members, and the re-export list. The "omit when empty"
/// rules live here so they can be tested in isolation.

use std::fmt::Write as _;

use bindsync_rewriter::RewrittenGlue;

use crate::error::Result;

/// Name of the module-scoped slot the glue's top-level code reads its
/// wasm exports through. wasm-bindgen declares it (`let wasm;`); the
/// init block writes it exactly once, at load time.
const WASM_SLOT: &str = "wasm";

/// Identifier the encoded payload is bound to in the header.
const PAYLOAD_IDENT: &str = "wasmBase64";

/// Export wasm-bindgen calls after instantiation, when present.
const START_HOOK: &str = "__wbindgen_start";

/// Everything the synthesizer needs to fill the template slots.
pub struct Synthesis<'a> {
    /// Rewritten glue body plus the two function name sets
    pub glue: &'a RewrittenGlue,
    /// Base64 text of the wasm binary
    pub payload: &'a str,
    /// Glue module file name, for the generated-from header
    pub glue_name: &'a str,
    /// Wasm binary file name, for the generated-from header
    pub wasm_name: &'a str,
    /// Import-table namespace key: the path the glue module was
    /// originally imported as, e.g. `./rumina_bg.js`
    pub module_key: &'a str,
}

/// Composes the final artifact text
pub struct Synthesizer {
    /// Output buffer
    output: String,
}

impl Synthesizer {
    /// Create a new synthesizer
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Assemble the final artifact: header, glue body, init block, and
    /// (when the public set is non-empty) the trailing re-export.
    pub fn generate(&mut self, input: &Synthesis<'_>) -> Result<String> {
        self.emit_header(input)?;
        self.output.push_str(&input.glue.text);
        self.emit_init_block(input)?;
        self.emit_reexports(&input.glue.public_functions)?;
        Ok(std::mem::take(&mut self.output))
    }

    /// Advisory header plus the embedded payload binding. The payload
    /// is base64 text, so it never needs escaping inside the quotes.
    fn emit_header(&mut self, input: &Synthesis<'_>) -> Result<()> {
        writeln!(self.output, "// @ts-nocheck")?;
        writeln!(
            self.output,
            "// Auto-generated from {} and {}",
            input.glue_name, input.wasm_name
        )?;
        writeln!(self.output, "// Do not edit manually")?;
        writeln!(self.output)?;
        writeln!(self.output, "// Inlined WASM binary (base64 encoded)")?;
        writeln!(self.output, "const {} = '{}'", PAYLOAD_IDENT, input.payload)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Load-time initialization: decode, compile, wire the import
    /// table, instantiate, run the start hook if present. Runs
    /// unconditionally and exactly once when the module is loaded, so
    /// every export is backed by a live instance before first call.
    fn emit_init_block(&mut self, input: &Synthesis<'_>) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "// Decode and instantiate WASM module")?;
        writeln!(
            self.output,
            "const wasmBytes = Uint8Array.from(atob({}), c => c.charCodeAt(0))",
            PAYLOAD_IDENT
        )?;
        writeln!(
            self.output,
            "const wasmModule = new WebAssembly.Module(wasmBytes)"
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "// Build imports object")?;
        writeln!(self.output, "const imports = {{")?;
        writeln!(self.output, "  '{}': {{", input.module_key)?;
        // Shorthand properties: each binding name resolves to the local
        // declaration of the same name in the glue body above
        let members = input
            .glue
            .host_bindings
            .iter()
            .map(|name| format!("    {name}"))
            .collect::<Vec<_>>()
            .join(",\n");
        writeln!(self.output, "{members}")?;
        writeln!(self.output, "  }}")?;
        writeln!(self.output, "}}")?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "const wasmInstance = new WebAssembly.Instance(wasmModule, imports)"
        )?;
        writeln!(self.output, "{} = wasmInstance.exports", WASM_SLOT)?;
        writeln!(self.output)?;
        writeln!(self.output, "// Start WASM")?;
        writeln!(self.output, "if ({}.{}) {{", WASM_SLOT, START_HOOK)?;
        writeln!(self.output, "  {}.{}()", WASM_SLOT, START_HOOK)?;
        writeln!(self.output, "}}")?;
        Ok(())
    }

    /// Trailing re-export. An empty list is omitted entirely: an empty
    /// `export { }` would be pointless and an empty name list invalid.
    fn emit_reexports(&mut self, public_functions: &[String]) -> Result<()> {
        if public_functions.is_empty() {
            return Ok(());
        }
        write!(
            self.output,
            "\nexport {{ {} }}",
            public_functions.join(", ")
        )?;
        Ok(())
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
