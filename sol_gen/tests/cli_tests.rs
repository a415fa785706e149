/* End-to-end tests for the sol-gen binary */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn sol_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sol-gen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sol-gen")
}

fn fixture() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/ConsiderationStructs.sol")
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_solarray_writes_library_to_stdout() {
    let output = sol_gen(&["solarray", "--max-arity", "3", "-t", "address", "-t", "Order memory"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("// SPDX-License-Identifier: MIT\n\nlibrary Solarray {"));
    assert_eq!(stdout.matches("function addresses(").count(), 2);
    assert_eq!(stdout.matches("function Orders(").count(), 2);
}

#[test]
fn test_solarray_writes_library_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("helpers/Solarray.sol");
    let output = sol_gen(&["solarray", "-o", path.to_str().unwrap()]);
    assert!(output.status.success());

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("function ").count(), 14 * 7);
}

#[test]
fn test_struct_sort_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = sol_gen(&["struct-sort", &fixture(), "-o", dir.path().to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let structs = fs::read_to_string(dir.path().join("JsonStructs.sol")).unwrap();
    let library = fs::read_to_string(dir.path().join("JsonStructLib.sol")).unwrap();
    assert_eq!(structs.matches("struct ").count(), 5);
    assert!(library.contains("} from \"path/to/Original.sol\";"));
    assert!(library.contains("library JsonStructLib {"));
}

#[test]
fn test_struct_sort_flags_and_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("sol-gen.yml");
    fs::write(&config_path, "struct-mirror:\n  structs-file: Mirrors.sol\n  library-file: MirrorLib.sol\n").unwrap();

    let output = sol_gen(&[
        "struct-sort",
        &fixture(),
        "-c",
        config_path.to_str().unwrap(),
        "-o",
        dir.path().to_str().unwrap(),
        "--resolve-forward-refs",
        "--original-path",
        "seaport/lib/ConsiderationStructs.sol",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let structs = fs::read_to_string(dir.path().join("Mirrors.sol")).unwrap();
    let library = fs::read_to_string(dir.path().join("MirrorLib.sol")).unwrap();
    assert!(structs.contains("OfferItemJson[] offer;"));
    assert!(library.contains("} from \"./Mirrors.sol\";"));
    assert!(library.contains("} from \"seaport/lib/ConsiderationStructs.sol\";"));
}

#[test]
fn test_strict_mode_fails_on_unrecognized_member() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("Bad.sol");
    fs::write(&source, "struct Bad {\n    uint256[2] pair;\n}\n").unwrap();

    let output = sol_gen(&["struct-sort", source.to_str().unwrap(), "-o", dir.path().to_str().unwrap(), "--strict"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized member 'uint256[2] pair;'"), "{}", stderr);
    assert!(!dir.path().join("JsonStructs.sol").exists());
}

#[test]
fn test_missing_input_path_is_fatal() {
    let output = sol_gen(&["struct-sort"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unreadable_input_is_fatal() {
    let output = sol_gen(&["struct-sort", "/nonexistent/Structs.sol"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read /nonexistent/Structs.sol"));
}

#[test]
fn test_inspect_json_report() {
    let output = sol_gen(&["inspect", &fixture(), "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let structs = report.as_array().unwrap();
    assert_eq!(structs.len(), 5);
    assert_eq!(structs[0]["name"], "OrderComponents");
    assert_eq!(structs[0]["mirrored"], serde_json::json!([]));
    assert_eq!(structs[4]["name"], "Order");
    assert_eq!(structs[4]["mirrored"], serde_json::json!(["parameters"]));
}

#[test]
fn test_version_reports_package() {
    let output = sol_gen(&["--version"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), format!("sol-gen {}", env!("CARGO_PKG_VERSION")));
    assert_eq!(env!("CARGO_PKG_NAME"), "sol-gen");
    assert!(!env!("CARGO_PKG_DESCRIPTION").is_empty());
    assert_eq!(env!("CARGO_PKG_LICENSE"), "Apache-2.0");
}

#[test]
fn test_inspect_marks_duplicate_fields_independently() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("Dup.sol");
    fs::write(&source, "struct A {\n    A x;\n    uint256 x;\n}\n").unwrap();

    let output = sol_gen(&["inspect", source.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("-> mirrored").count(), 1, "{}", stdout);
    assert!(stdout.contains("    - uint256 x\n"), "{}", stdout);
}
