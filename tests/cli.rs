//! End-to-end checks of the CLI binary.

use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn localize_renders_the_requested_language() {
    let dir = tempdir().unwrap();
    let template = dir.path().join("page.html");
    let dictionary = dir.path().join("nav.json");
    let state = dir.path().join("state.toml");

    std::fs::write(
        &template,
        r#"<html><body><h1 data-i18n="nav.about">Tentang</h1></body></html>"#,
    )
    .unwrap();
    std::fs::write(
        &dictionary,
        r#"{"nav": {"about": {"id": "Tentang", "en": "About"}}}"#,
    )
    .unwrap();

    let assert = Command::cargo_bin("dwibahasa")
        .unwrap()
        .env("DWIBAHASA_STATE_FILE", &state)
        .arg("localize")
        .arg(&template)
        .arg("--dict")
        .arg(&dictionary)
        .args(["--lang", "en"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains(">About<"));
    assert!(stdout.contains(r#"lang="en""#));
}

#[test]
fn localize_writes_the_output_file() {
    let dir = tempdir().unwrap();
    let template = dir.path().join("page.html");
    let dictionary = dir.path().join("nav.json");
    let output = dir.path().join("out.html");
    let state = dir.path().join("state.toml");

    std::fs::write(
        &template,
        r#"<html><body><h1 data-i18n="nav.about">Tentang</h1></body></html>"#,
    )
    .unwrap();
    std::fs::write(
        &dictionary,
        r#"{"nav": {"about": {"id": "Tentang Kami", "en": "About"}}}"#,
    )
    .unwrap();

    Command::cargo_bin("dwibahasa")
        .unwrap()
        .env("DWIBAHASA_STATE_FILE", &state)
        .arg("localize")
        .arg(&template)
        .arg("--dict")
        .arg(&dictionary)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    // No language requested: the default (Indonesian) rendering applies.
    assert!(html.contains("Tentang Kami"));
    assert!(html.contains(r#"lang="id""#));
}

#[test]
fn language_prints_default_when_nothing_is_stored() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.toml");

    Command::cargo_bin("dwibahasa")
        .unwrap()
        .env("DWIBAHASA_STATE_FILE", &state)
        .arg("language")
        .assert()
        .success()
        .stdout("id\n");
}

#[test]
fn language_persists_an_explicit_selection() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.toml");

    Command::cargo_bin("dwibahasa")
        .unwrap()
        .env("DWIBAHASA_STATE_FILE", &state)
        .args(["language", "en"])
        .assert()
        .success()
        .stdout("en\n");

    Command::cargo_bin("dwibahasa")
        .unwrap()
        .env("DWIBAHASA_STATE_FILE", &state)
        .arg("language")
        .assert()
        .success()
        .stdout("en\n");
}

#[test]
fn unsupported_selection_is_coerced_to_the_default() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.toml");

    Command::cargo_bin("dwibahasa")
        .unwrap()
        .env("DWIBAHASA_STATE_FILE", &state)
        .args(["language", "fr"])
        .assert()
        .success()
        .stdout("id\n");
}
