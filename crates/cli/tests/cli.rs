// Copyright (C) 2022-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rstest::rstest;
use serde_json::{json, Value};
use std::process::{Command, Output};

const TEST_VECTOR: &str =
    "ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff 00 1a 03 06 02 04 54 65 73 74";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bgp-shutcomm"))
        .args(args)
        .output()
        .expect("failed to run bgp-shutcomm")
}

fn run_json(args: &[&str]) -> Value {
    let output = run(args);
    assert!(
        output.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn run_error(args: &[&str]) -> String {
    let output = run(args);
    assert!(!output.status.success(), "{args:?} unexpectedly succeeded");
    assert!(output.stdout.is_empty());
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

#[test]
fn test_encode() {
    assert_eq!(
        run_json(&["encode", "Test"]),
        json!({"hex": TEST_VECTOR, "total_bytes": 26, "message_bytes": 4})
    );
}

#[test]
fn test_encode_compact() {
    let output = run(&["--compact", "encode", "Test", "--subcode", "4"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    let value: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total_bytes"], json!(26));
    assert!(value["hex"].as_str().unwrap().contains("03 06 04 04"));
}

#[test]
fn test_decode() {
    assert_eq!(
        run_json(&["decode", TEST_VECTOR]),
        json!({"subcode": "Administrative Shutdown", "subcode_value": 2, "message": "Test"})
    );
}

#[rstest]
#[case(&["encode", "Test", "--subcode", "3"], "Error: Invalid subcode: must be 2 or 4 (got 3)")]
#[case(&["decode", "abc"], "Error: Malformed hex input: hex string must have an even number of digits (got 3)")]
#[case(&["decode", "ff ff"], "Error: Message too short (minimum 22 bytes, got 2)")]
#[case(&["notify", "-e", "1", "-s", "2", "-d", "length", "-v", "70000"], "Error: Invalid auxiliary data: `70000` is out of range for data type `length`")]
fn test_errors(#[case] args: &[&str], #[case] expected: &str) {
    assert_eq!(run_error(args), expected);
}

#[test]
fn test_notify_and_inspect() {
    let created = run_json(&[
        "notify",
        "--error-code",
        "1",
        "--subcode",
        "2",
        "--data-type",
        "length",
        "--value",
        "4097",
    ]);
    assert_eq!(created["total_bytes"], json!(23));

    let hex = created["hex"].as_str().unwrap();
    assert_eq!(
        run_json(&["inspect", hex]),
        json!({
            "error_code": 1,
            "error_name": "Message Header Error",
            "subcode": 2,
            "subcode_name": "Bad Message Length",
            "data_length": 2,
            "interpretation": "Length: 4097",
        })
    );
}

#[test]
fn test_subcodes() {
    assert_eq!(
        run_json(&["subcodes"]),
        json!([[2, "Administrative Shutdown"], [4, "Administrative Reset"]])
    );
}

#[test]
fn test_auto_encodes_text() {
    let value = run_json(&["auto", "Test"]);
    assert_eq!(value["hex"], json!(TEST_VECTOR));
}

#[test]
fn test_auto_decodes_hex() {
    assert_eq!(
        run_json(&["auto", TEST_VECTOR]),
        json!({"subcode": "Administrative Shutdown", "subcode_value": 2, "message": "Test"})
    );
}

#[test]
fn test_auto_keeps_plain_cease_data_universal() {
    let notify = run_json(&["notify", "-e", "6", "-s", "2", "-d", "message", "-v", "maintenance"]);
    let hex = notify["hex"].as_str().unwrap();
    let value = run_json(&["auto", hex]);
    assert_eq!(value["error_name"], json!("Cease"));
    assert_eq!(value["interpretation"], json!("Message: maintenance"));
}

#[test]
fn test_auto_falls_back_to_shutdown() {
    // Declared length 0x30 doesn't match, only the lenient decoder accepts it
    let hex = "ffffffffffffffffffffffffffffffff 0030 03 06 02 02 6f6b";
    assert_eq!(
        run_json(&["auto", hex]),
        json!({"subcode": "Administrative Shutdown", "subcode_value": 2, "message": "ok"})
    );
}
