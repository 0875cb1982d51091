mod common;

use assert_cmd::Command;
use common::{create_fixture, multiple_depth_fixture};
use predicates::prelude::*;

fn treegen() -> Command {
    Command::cargo_bin("treegen").unwrap()
}

#[test]
fn test_help_flag() {
    treegen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("indented text tree"))
        .stdout(predicate::str::contains("--style"))
        .stdout(predicate::str::contains("--level"))
        .stdout(predicate::str::contains("--crlf"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    treegen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treegen"));
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    treegen()
        .arg("/this/path/does/not/exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_invalid_configuration_reported_before_missing_path() {
    treegen()
        .args(["--recurrence", "-2", "/this/path/does/not/exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"))
        .stderr(predicate::str::contains("No such file").not());
}

#[test]
fn test_file_path_exits_with_error() {
    let (_tmp, root) = create_fixture("r", &["afile.txt"]);
    treegen()
        .arg(root.join("afile.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_detailed_output_is_default() {
    let (_tmp, root) = multiple_depth_fixture();
    treegen()
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "📦 multiple_depth_and_files\n   ┣ env.test\n   ┣ file.txt\n   ┗ file1txt\n",
        ));
}

#[test]
fn test_minimal_style_with_level() {
    let (_tmp, root) = create_fixture("test_folder", &["env.test", "file.txt", "src/test.txt"]);
    treegen()
        .args(["--style", "minimal", "-L", "0"])
        .arg(&root)
        .assert()
        .success()
        .stdout("🗃️ test_folder\n   env.test\n   file.txt\n");
}

#[test]
fn test_crlf_join() {
    let (_tmp, root) = create_fixture("one_file", &["unique_file"]);
    treegen()
        .args(["--style", "minimal", "--crlf"])
        .arg(&root)
        .assert()
        .success()
        .stdout("🗃️ one_file\r\n   unique_file\n");
}

#[test]
fn test_negative_recurrence_rejected() {
    let (_tmp, root) = create_fixture("r", &["a.txt"]);
    treegen()
        .args(["--recurrence", "-2"])
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_custom_prefixes() {
    let (_tmp, root) = create_fixture("r", &["a.txt", "b.txt"]);
    treegen()
        .args([
            "--root-prefix",
            "+ ",
            "--file-prefix",
            "|-",
            "--last-prefix",
            "`-",
            "--indent",
            "-",
            "--recurrence",
            "2",
        ])
        .arg(&root)
        .assert()
        .success()
        .stdout("+ r\n--|-a.txt\n--`-b.txt\n");
}
