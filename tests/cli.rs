use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hashschema"));
    cmd.env_remove("HASHSCHEMA_SCHEMA")
        .env_remove("HASHSCHEMA_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn create(password: &str, schema: &str) -> String {
    let output = bin().arg(password).arg(schema).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim_end().to_string()
}

#[test]
fn plain_hash_is_printed() {
    bin()
        .arg("hunter2")
        .arg("PLAIN")
        .assert()
        .success()
        .stdout("{PLAIN}aHVudGVyMg==\n");
}

#[test]
fn default_schema_is_used_without_argument() {
    bin()
        .arg("pw")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{PBKDF2/24/20000/24/sha256}"));
}

#[test]
fn schema_can_come_from_environment() {
    bin()
        .env("HASHSCHEMA_SCHEMA", "SSHA256/24")
        .arg("pw")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{SSHA256/24}"));
}

#[test]
fn created_hash_verifies() {
    let hash = create("s3cret", "SSHA");

    bin()
        .arg("--verify")
        .arg(&hash)
        .arg("s3cret")
        .assert()
        .success()
        .stdout("valid\n");

    bin()
        .arg("--verify")
        .arg(&hash)
        .arg("wrong")
        .assert()
        .failure()
        .code(1)
        .stdout("invalid\n");
}

#[test]
fn missing_password_prints_usage() {
    bin()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_schema_fails() {
    bin()
        .arg("pw")
        .arg("MD5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown hash schema 'MD5'"));
}

#[test]
fn truncated_schema_fails() {
    bin()
        .arg("pw")
        .arg("PBKDF2/24")
        .assert()
        .failure()
        .stderr(predicate::str::contains("iterations"));
}

#[test]
fn malformed_hash_fails_verification() {
    bin()
        .arg("--verify")
        .arg("not-a-hash")
        .arg("pw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed hash"));
}

#[test]
fn password_from_environment() {
    bin()
        .env("HASHSCHEMA_PASSWORD", "hunter2")
        .arg("-")
        .arg("PLAIN")
        .assert()
        .success()
        .stdout("{PLAIN}aHVudGVyMg==\n");
}

#[test]
fn password_from_stdin() {
    bin()
        .arg("-")
        .arg("PLAIN")
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .stdout("{PLAIN}aHVudGVyMg==\n");
}
