/// Bindsync CLI

use std::path::PathBuf;
use std::process;
use clap::Parser;
use bindsync_inliner::{InlineOptions, Inliner};

#[derive(Parser, Debug)]
#[command(name = "bindsync")]
#[command(about = "Inlines a wasm binary into its wasm-bindgen glue as one self-contained module")]
#[command(version)]
struct Args {
    /// Input wasm-bindgen glue module (e.g. pkg/app_bg.js)
    #[arg(value_name = "GLUE")]
    glue: PathBuf,

    /// Input wasm binary (e.g. pkg/app_bg.wasm)
    #[arg(value_name = "WASM")]
    wasm: PathBuf,

    /// Output file for the generated module
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Import-table namespace key (defaults to ./<glue file name>)
    #[arg(long, value_name = "KEY")]
    module_key: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let mut options = InlineOptions::new(args.glue, args.wasm).verbose(args.verbose);

    let write_to_file = args.output.is_some();
    if let Some(ref output) = args.output {
        options = options.output_path(output.clone());
    }
    if let Some(key) = args.module_key {
        options = options.module_key(key);
    }

    match Inliner::new(options).run() {
        Ok(output) => {
            if !write_to_file {
                // No output path: write the generated module to stdout
                print!("{}", output.artifact);
            }
            if args.verbose {
                eprintln!("Exported functions: {}", output.public_functions.join(", "));
                eprintln!("Binding functions: {}", output.host_bindings.len());
            }
        }
        Err(e) => {
            eprintln!("Inlining failed: {}", e);
            process::exit(1);
        }
    }
}
