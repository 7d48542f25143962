/// Pipeline driver
///
/// Owns the file-system collaborators around the pure pipeline: reads
/// the glue module and wasm binary, runs the transformation entirely in
/// memory, and writes the artifact only once it is fully assembled. A
/// failed run never leaves a partial output file behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::encode;
use crate::error::{InlineError, Result};
use crate::synth::{Synthesis, Synthesizer};

/// Options for an inlining run
#[derive(Debug, Clone)]
pub struct InlineOptions {
    /// Path to the wasm-bindgen glue module (`*_bg.js`)
    glue_path: PathBuf,
    /// Path to the wasm binary (`*_bg.wasm`)
    wasm_path: PathBuf,
    /// Where to write the artifact; in-memory only when absent
    output_path: Option<PathBuf>,
    /// Import-table namespace key; derived from the glue file name
    /// when not set explicitly
    module_key: Option<String>,
    /// Enable progress output
    verbose: bool,
}

impl InlineOptions {
    /// Create options for the given input pair
    pub fn new(glue_path: impl Into<PathBuf>, wasm_path: impl Into<PathBuf>) -> Self {
        Self {
            glue_path: glue_path.into(),
            wasm_path: wasm_path.into(),
            output_path: None,
            module_key: None,
            verbose: false,
        }
    }

    /// Set the output path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Override the import-table namespace key
    pub fn module_key(mut self, key: impl Into<String>) -> Self {
        self.module_key = Some(key.into());
        self
    }

    /// Enable or disable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct InlineOutput {
    /// The complete self-contained module text
    pub artifact: String,
    /// Functions the artifact re-exports
    pub public_functions: Vec<String>,
    /// Functions wired into the wasm import table
    pub host_bindings: Vec<String>,
}

/// Run the transformation pipeline on in-memory inputs.
///
/// This is the whole pipeline as a pure function of its two streams:
/// rewrite the glue, encode the payload, synthesize the artifact. Glue
/// with no recognizable declarations is not an error; it produces an
/// artifact with an empty import table and no re-export statement.
pub fn inline(
    glue_source: &str,
    payload: &[u8],
    glue_name: &str,
    wasm_name: &str,
    module_key: &str,
) -> Result<InlineOutput> {
    let glue = bindsync_rewriter::rewrite(glue_source);
    let encoded = encode::encode(payload);

    let artifact = Synthesizer::new().generate(&Synthesis {
        glue: &glue,
        payload: &encoded,
        glue_name,
        wasm_name,
        module_key,
    })?;

    Ok(InlineOutput {
        artifact,
        public_functions: glue.public_functions,
        host_bindings: glue.host_bindings,
    })
}

/// One-shot inliner over a pair of input files
pub struct Inliner {
    options: InlineOptions,
}

impl Inliner {
    /// Create an inliner with the given options
    pub fn new(options: InlineOptions) -> Self {
        Self { options }
    }

    /// Read the inputs, run the pipeline, and emit the artifact.
    pub fn run(&self) -> Result<InlineOutput> {
        let glue_source =
            fs::read_to_string(&self.options.glue_path).map_err(|source| InlineError::ReadGlue {
                path: self.options.glue_path.clone(),
                source,
            })?;
        let payload = fs::read(&self.options.wasm_path).map_err(|source| InlineError::ReadWasm {
            path: self.options.wasm_path.clone(),
            source,
        })?;

        let glue_name = file_name(&self.options.glue_path);
        let wasm_name = file_name(&self.options.wasm_path);
        let module_key = match &self.options.module_key {
            Some(key) => key.clone(),
            // wasm-bindgen glue imports itself as `./<file name>`
            None => format!("./{glue_name}"),
        };

        if self.options.verbose {
            // Progress goes to stderr: stdout may be carrying the artifact
            eprintln!("Inlining {wasm_name} into {glue_name}...");
        }

        let output = inline(&glue_source, &payload, &glue_name, &wasm_name, &module_key)?;

        if let Some(path) = &self.options.output_path {
            fs::write(path, &output.artifact).map_err(|source| InlineError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            if self.options.verbose {
                println!("Wrote: {}", path.display());
            }
        }

        Ok(output)
    }
}

fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
