/// Integration tests for the inlining pipeline

use bindsync_inliner::{InlineError, InlineOptions, Inliner};

/// Helper to run the inliner over a glue string and wasm bytes
fn inline_pair(glue: &str, wasm: &[u8]) -> Result<bindsync_inliner::InlineOutput, String> {
    // Write inputs to temp files
    let temp_dir = std::env::temp_dir();
    let tag = rand::random::<u32>();
    let glue_file = temp_dir.join(format!("test_{}_bg.js", tag));
    let wasm_file = temp_dir.join(format!("test_{}_bg.wasm", tag));
    std::fs::write(&glue_file, glue).map_err(|e| e.to_string())?;
    std::fs::write(&wasm_file, wasm).map_err(|e| e.to_string())?;

    // Run it
    let options = InlineOptions::new(&glue_file, &wasm_file);
    let result = Inliner::new(options).run().map_err(|e| e.to_string());

    // Clean up
    let _ = std::fs::remove_file(&glue_file);
    let _ = std::fs::remove_file(&wasm_file);

    result
}

const SCENARIO_GLUE: &str = "export function add(a, b) { return a + b; }\n\
                             function __wbg_log(x) { console.log(x); }\n";

#[test]
fn test_scenario_end_to_end() {
    let output = inline_pair(SCENARIO_GLUE, &[0x00, 0x61, 0x73, 0x6d]).expect("inlining failed");

    assert_eq!(output.public_functions, vec!["add"]);
    assert_eq!(output.host_bindings, vec!["__wbg_log"]);

    let artifact = &output.artifact;
    assert!(artifact.contains("const wasmBase64 = 'AGFzbQ=='"));
    assert!(artifact.contains("function add(a, b) { return a + b; }"));
    assert!(artifact.contains("    __wbg_log"));
    assert!(artifact.ends_with("export { add }"));
}

#[test]
fn test_artifact_is_self_contained() {
    let glue = "import { table } from './snippets/helper.js';\n\
                import * as extra from 'some-package';\n\
                export function run() {}\n";
    let output = inline_pair(glue, b"\x00asm\x01\x00\x00\x00").expect("inlining failed");

    for line in output.artifact.lines() {
        assert!(
            !(line.starts_with("import ") && line.contains(" from ")),
            "artifact still references an external module: {line}"
        );
    }
    assert!(output.artifact.contains("function run() {}"));
}

#[test]
fn test_module_key_defaults_to_glue_file_name() {
    let output = inline_pair(SCENARIO_GLUE, &[]).expect("inlining failed");
    // The temp file is named test_<tag>_bg.js
    assert!(output.artifact.contains("_bg.js': {"));
}

#[test]
fn test_empty_glue_produces_no_reexport() {
    let output = inline_pair("// just a comment\n", &[1, 2, 3]).expect("inlining failed");
    assert!(output.public_functions.is_empty());
    assert!(!output.artifact.contains("export {"));
    // The payload is still embedded and instantiated
    assert!(output.artifact.contains("const wasmBase64 = 'AQID'"));
    assert!(output.artifact.contains("new WebAssembly.Instance"));
}

#[test]
fn test_empty_payload_embeds_empty_string() {
    let output = inline_pair(SCENARIO_GLUE, &[]).expect("inlining failed");
    assert!(output.artifact.contains("const wasmBase64 = ''"));
}

#[test]
fn test_output_file_matches_artifact() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let glue_file = dir.path().join("demo_bg.js");
    let wasm_file = dir.path().join("demo_bg.wasm");
    let out_file = dir.path().join("bindings.ts");
    std::fs::write(&glue_file, SCENARIO_GLUE).unwrap();
    std::fs::write(&wasm_file, [0x00, 0x61, 0x73, 0x6d]).unwrap();

    let options = InlineOptions::new(&glue_file, &wasm_file).output_path(&out_file);
    let output = Inliner::new(options).run().expect("inlining failed");

    let written = std::fs::read_to_string(&out_file).expect("output not written");
    assert_eq!(written, output.artifact);
    assert!(output.artifact.contains("'./demo_bg.js': {"));
}

#[test]
fn test_missing_glue_aborts_without_output() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let wasm_file = dir.path().join("demo_bg.wasm");
    let out_file = dir.path().join("bindings.ts");
    std::fs::write(&wasm_file, [0u8]).unwrap();

    let options =
        InlineOptions::new(dir.path().join("missing_bg.js"), &wasm_file).output_path(&out_file);
    let err = Inliner::new(options).run().expect_err("run should fail");

    assert!(matches!(err, InlineError::ReadGlue { .. }));
    assert!(err.to_string().contains("missing_bg.js"));
    // No partial output is ever committed
    assert!(!out_file.exists());
}

#[test]
fn test_missing_wasm_aborts_without_output() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let glue_file = dir.path().join("demo_bg.js");
    let out_file = dir.path().join("bindings.ts");
    std::fs::write(&glue_file, SCENARIO_GLUE).unwrap();

    let options =
        InlineOptions::new(&glue_file, dir.path().join("missing_bg.wasm")).output_path(&out_file);
    let err = Inliner::new(options).run().expect_err("run should fail");

    assert!(matches!(err, InlineError::ReadWasm { .. }));
    assert!(!out_file.exists());
}

#[test]
fn test_verbose_stdout_carries_only_the_artifact() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let glue_file = dir.path().join("demo_bg.js");
    let wasm_file = dir.path().join("demo_bg.wasm");
    std::fs::write(&glue_file, SCENARIO_GLUE).unwrap();
    std::fs::write(&wasm_file, [0x00, 0x61, 0x73, 0x6d]).unwrap();

    // No -o: the artifact is emitted on stdout and must stay valid even
    // with verbose progress enabled
    let result = std::process::Command::new(env!("CARGO_BIN_EXE_bindsync"))
        .arg(&glue_file)
        .arg(&wasm_file)
        .arg("--verbose")
        .output()
        .expect("failed to run bindsync");
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).expect("stdout not utf-8");
    assert!(stdout.starts_with("// @ts-nocheck\n"));
    assert!(stdout.ends_with("export { add }"));
    assert!(!stdout.contains("Inlining "));

    let stderr = String::from_utf8(result.stderr).expect("stderr not utf-8");
    assert!(stderr.contains("Inlining demo_bg.wasm into demo_bg.js..."));
    assert!(stderr.contains("Exported functions: add"));
}

#[test]
fn test_module_key_override() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let glue_file = dir.path().join("demo_bg.js");
    let wasm_file = dir.path().join("demo_bg.wasm");
    std::fs::write(&glue_file, SCENARIO_GLUE).unwrap();
    std::fs::write(&wasm_file, [0u8; 4]).unwrap();

    let options = InlineOptions::new(&glue_file, &wasm_file).module_key("./custom_bg.js");
    let output = Inliner::new(options).run().expect("inlining failed");
    assert!(output.artifact.contains("'./custom_bg.js': {"));
}
