use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_sigextract")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Copy a fixture into `dir` under `name`, so default outputs land there too.
fn stage_fixture(dir: &TempDir, fixture: &str, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::copy(fixture_path(fixture), &path).unwrap();
    path
}

const EXPECTED_TSV: &str = "\
0x6bd4e0\tvoid\t__thiscall\tzCVob\tMove\tfloat\tfloat\tfloat
0x6bc6e0\tzCVob*\t__thiscall\tzCVob\tzCVob\t
0x6bc8b0\tvoid\t__thiscall\tzCVob\t~zCVob\t
0x70a4c0\tint\t__thiscall\tzCVob\tGetCharacterClass\t
0x401000\tint\t__stdcall\t\tWinMain\tstruct HINSTANCE__ *\tstruct HINSTANCE__ *\tchar *\tint
0x46ab30\tclass zSTRING &\t__thiscall\tzSTRING\toperator+=\tchar const *
0x6bd4f0\tvoid\t__thiscall\tzCVob\tMove\tclass zVEC3 const &
0x41c2a0\tint\t__thiscall\tzSTRING\tLength\t";

// -- file mode: tsv --

#[test]
fn file_mode_writes_tsv_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = stage_fixture(&dir, "g2a.txt", "Names.txt");

    cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 8 entries to"));

    let output = std::fs::read_to_string(dir.path().join("Names.tsv")).unwrap();
    assert_eq!(output, EXPECTED_TSV);
}

#[test]
fn file_mode_explicit_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("rows.txt");

    cmd()
        .arg(fixture_path("g2a.txt"))
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(out).unwrap(), EXPECTED_TSV);
}

#[test]
fn file_mode_refuses_to_overwrite_input() {
    let dir = TempDir::new().unwrap();
    let input = stage_fixture(&dir, "g2a.txt", "names.tsv");

    cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite"));

    let untouched = std::fs::read_to_string(&input).unwrap();
    assert!(untouched.starts_with("006BD4E0 public:"));
}

#[test]
fn missing_input_fails() {
    cmd()
        .arg("/nonexistent/Names.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}

// -- warnings --

#[test]
fn warnings_report_skipped_lines_verbatim() {
    let dir = TempDir::new().unwrap();
    let input = stage_fixture(&dir, "g2a.txt", "Names.txt");

    cmd()
        .arg(&input)
        .arg("--warnings")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Skipped 2 line(s) that could not be parsed:",
        ))
        .stderr(predicate::str::contains("  nothex some signature(int)"))
        .stderr(predicate::str::contains("  00402000 int Foo(int)"));
}

#[test]
fn skipped_lines_silent_without_flag() {
    let dir = TempDir::new().unwrap();
    let input = stage_fixture(&dir, "g2a.txt", "Names.txt");

    cmd()
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped").not());
}

// -- file mode: header --

#[test]
fn header_namespace_from_file_name() {
    let dir = TempDir::new().unwrap();
    let input = stage_fixture(&dir, "g2a.txt", "g2a.txt");

    cmd()
        .arg(&input)
        .args(["-f", "header"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 7 entries to"));

    let output = std::fs::read_to_string(dir.path().join("g2a_signatures.hpp")).unwrap();
    assert!(output.starts_with("#pragma once\n"));
    assert!(output.contains("namespace Gothic_II_Addon\n{"));
    assert!(output.contains("\t\t{ \"zCVob::Move\", 0x6BD4E0 },\n"));
    assert!(output.contains("\t\t{ \"zCVob::zCVob\", 0x6BC6E0 },\n"));
    assert!(output.contains("\t\t{ \"WinMain\", 0x401000 },\n"));
    assert!(
        !output.contains("0x6BD4F0"),
        "duplicate key must keep the first address"
    );
    assert!(output.contains("consteval std::uint32_t SignatureToAddress"));
}

#[test]
fn header_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let input = stage_fixture(&dir, "g2a.txt", "g1.txt");

    cmd().arg(&input).args(["-f", "header"]).assert().success();

    let output = std::fs::read_to_string(dir.path().join("g1_signatures.hpp")).unwrap();
    assert!(output.contains("namespace Gothic_I_Classic"));
    let move_at = output.find("\"zCVob::Move\"").unwrap();
    let ctor_at = output.find("\"zCVob::zCVob\"").unwrap();
    let length_at = output.find("\"zSTRING::Length\"").unwrap();
    assert!(move_at < ctor_at && ctor_at < length_at);
}

#[test]
fn header_explicit_namespace() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("table.hpp");

    cmd()
        .arg(fixture_path("g2a.txt"))
        .args(["-f", "header", "-n", "Game::Symbols"])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let output = std::fs::read_to_string(out).unwrap();
    assert!(output.contains("namespace Game::Symbols\n"));
}

#[test]
fn header_unknown_stem_needs_namespace() {
    let dir = TempDir::new().unwrap();
    let input = stage_fixture(&dir, "g2a.txt", "Names.txt");

    cmd()
        .arg(&input)
        .args(["-f", "header"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--namespace"));
}

#[test]
fn invalid_format_fails() {
    cmd()
        .arg(fixture_path("g2a.txt"))
        .args(["-f", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- stdin mode --

#[test]
fn stdin_mode_prints_tsv() {
    let input = std::fs::read_to_string(fixture_path("g2a.txt")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, EXPECTED_TSV);
}

#[test]
fn stdin_mode_header_with_namespace() {
    let assert = cmd()
        .args(["-f", "header", "-n", "Gothic_I_Addon"])
        .write_stdin("00401000 int __cdecl main(int,char * *)\n")
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("namespace Gothic_I_Addon"));
    assert!(output.contains("{ \"main\", 0x401000 }"));
}

#[test]
fn stdin_mode_malformed_line_reported() {
    cmd()
        .arg("--warnings")
        .write_stdin("nothex some signature(int)\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("  nothex some signature(int)"));
}

#[test]
fn non_utf8_input_is_read_lossily() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.txt");
    std::fs::write(
        &input,
        b"00401000 int __cdecl Foo(char \xff)\n00401010 int __cdecl Bar(void)\n",
    )
    .unwrap();
    let out = dir.path().join("out.tsv");

    cmd()
        .arg(&input)
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 entries"));

    let output = std::fs::read_to_string(out).unwrap();
    assert!(output.ends_with("0x401010\tint\t__cdecl\t\tBar\t"));
}
