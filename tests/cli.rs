//! CLI integration tests for rfc-basenc
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn basenc() -> Command {
    let mut cmd = Command::cargo_bin("rfc-basenc").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    basenc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RFC 4648"));
}

#[test]
fn test_version() {
    basenc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rfc-basenc"));
}

#[test]
fn test_config_list() {
    basenc()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base16"))
        .stdout(predicate::str::contains("base32"))
        .stdout(predicate::str::contains("base64"));
}

#[test]
fn test_config_list_codecs_machine_readable() {
    basenc()
        .args(["config", "list", "codecs"])
        .assert()
        .success()
        .stdout("base16,base32,base64\n");
}

#[test]
fn test_config_list_json() {
    basenc()
        .args(["config", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"block_size\": 8"));
}

#[test]
fn test_config_show_alias() {
    basenc()
        .args(["config", "show", "hex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Codec: base16"))
        .stdout(predicate::str::contains("Padding: none"));
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_base64() {
    basenc()
        .args(["encode", "base64"])
        .write_stdin("Hi")
        .assert()
        .success()
        .stdout("SGk=\n");
}

#[test]
fn test_encode_base32() {
    basenc()
        .args(["encode", "base32"])
        .write_stdin("f")
        .assert()
        .success()
        .stdout("MY======\n");
}

#[test]
fn test_encode_hex_alias() {
    basenc()
        .args(["encode", "hex"])
        .write_stdin(vec![0x4Du8])
        .assert()
        .success()
        .stdout("4D\n");
}

#[test]
fn test_encode_uses_default_codec() {
    basenc()
        .arg("encode")
        .write_stdin("Hi")
        .assert()
        .success()
        .stdout("SGk=\n");
}

#[test]
fn test_encode_wrap() {
    basenc()
        .args(["encode", "base16", "--wrap", "4"])
        .write_stdin("foobar")
        .assert()
        .success()
        .stdout("666F\n6F62\n6172\n");
}

#[test]
fn test_decode_base64() {
    basenc()
        .args(["decode", "base64"])
        .write_stdin("SGk=\n")
        .assert()
        .success()
        .stdout("Hi");
}

#[test]
fn test_decode_wrapped_input() {
    basenc()
        .args(["decode", "base16"])
        .write_stdin("666F\n6F62\n6172\n")
        .assert()
        .success()
        .stdout("foobar");
}

#[test]
fn test_decode_ignore_garbage() {
    basenc()
        .args(["decode", "base32", "--ignore-garbage"])
        .write_stdin("MY==-==== !\n")
        .assert()
        .success()
        .stdout("f");
}

#[test]
fn test_empty_input_round_trips() {
    for codec in ["base16", "base32", "base64"] {
        let encoded = basenc()
            .args(["encode", codec])
            .write_stdin("")
            .assert()
            .success()
            .stdout("\n")
            .get_output()
            .stdout
            .clone();

        basenc()
            .args(["decode", codec])
            .write_stdin(encoded)
            .assert()
            .success()
            .stdout("");
    }
}

#[test]
fn test_decode_invalid_character() {
    basenc()
        .args(["decode", "base64"])
        .write_stdin("SG!=")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '!' at position 2"));
}

#[test]
fn test_decode_invalid_length() {
    basenc()
        .args(["decode", "base16"])
        .write_stdin("4D4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid length"));
}

#[test]
fn test_unknown_codec_suggests() {
    basenc()
        .args(["encode", "bas64"])
        .write_stdin("Hi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'base64'?"));
}

#[test]
fn test_max_size_guard() {
    basenc()
        .args(["--max-size", "4", "encode", "base64"])
        .write_stdin("too long")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));

    basenc()
        .args(["--max-size", "4", "--force", "encode", "base64"])
        .write_stdin("too long")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));
}

// ============================================================================
// Check / Config files
// ============================================================================

#[test]
fn test_check_sample() {
    basenc()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base64 test passed"))
        .stdout(predicate::str::contains("Base32 test passed"))
        .stdout(predicate::str::contains("Base16 test passed"));
}

#[test]
fn test_config_file_sets_default_and_wrap() {
    let dir = std::env::temp_dir().join(format!("rfc-basenc-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("codecs.toml");
    std::fs::write(
        &path,
        "[settings]\ndefault_codec = \"b32\"\n\n[codecs.base32]\nwrap = 8\n",
    )
    .unwrap();

    basenc()
        .arg("--config")
        .arg(&path)
        .arg("encode")
        .write_stdin("foobar")
        .assert()
        .success()
        .stdout("MZXW6YTB\nOI======\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_file_with_unknown_codec_fails() {
    let dir = std::env::temp_dir().join(format!("rfc-basenc-bad-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("codecs.toml");
    std::fs::write(&path, "[codecs.base58]\nwrap = 0\n").unwrap();

    basenc()
        .arg("--config")
        .arg(&path)
        .args(["config", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("codec 'base58' not found"));

    std::fs::remove_dir_all(&dir).unwrap();
}
