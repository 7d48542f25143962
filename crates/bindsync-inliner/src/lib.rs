/// Bindsync inliner
///
/// Converts a wasm-bindgen glue module plus its wasm binary into a
/// single self-contained module: the binary is embedded as base64 text
/// and instantiated at load time, with no external module references.

pub mod driver;
pub mod encode;
pub mod error;
pub mod synth;

pub use driver::{InlineOptions, InlineOutput, Inliner, inline};
pub use error::{InlineError, Result};
pub use synth::Synthesizer;
