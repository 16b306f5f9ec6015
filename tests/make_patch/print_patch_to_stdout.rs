use crate::common::command::{diff_hunks_output, run_makepatch_command, workspace_dir_with_sources};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_patch_to_stdout(
    workspace_dir_with_sources: TempDir,
    diff_hunks_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_with_sources;

    let expected_output = format!("--- a/old.rs\n+++ b/new.rs\n{}", diff_hunks_output);
    let actual_output = run_makepatch_command(workspace_dir.path(), &["old.rs", "new.rs"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn print_colored_patch_when_forced(
    workspace_dir_with_sources: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_with_sources;

    run_makepatch_command(
        workspace_dir.path(),
        &["old.rs", "new.rs", "--color", "always"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("\u{1b}["))
    .stdout(predicate::str::contains("@@ -1,9 +1,6 @@"));

    Ok(())
}

#[rstest]
fn patch_file_is_never_colored(
    workspace_dir_with_sources: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_with_sources;

    run_makepatch_command(
        workspace_dir.path(),
        &["old.rs", "new.rs", "out.patch", "--color", "always"],
    )
    .assert()
    .success();

    let patch = std::fs::read_to_string(workspace_dir.path().join("out.patch"))?;
    assert!(!patch.contains('\u{1b}'));

    Ok(())
}

#[rstest]
fn colored_patch_carries_the_plain_text(
    workspace_dir_with_sources: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let workspace_dir = workspace_dir_with_sources;
    std::fs::write(workspace_dir.path().join("new.rs"), "fn main() {}")?;

    let plain = run_makepatch_command(workspace_dir.path(), &["old.rs", "new.rs", "--color", "never"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let colored = run_makepatch_command(workspace_dir.path(), &["old.rs", "new.rs", "--color", "always"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plain = String::from_utf8(plain)?;
    let colored = String::from_utf8(colored)?;
    assert!(colored.contains('\u{1b}'));
    assert!(plain.contains("\\ No newline at end of file\n"));
    pretty_assertions::assert_eq!(strip_ansi(&colored), plain);

    Ok(())
}

fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            plain.push(c);
        }
    }
    plain
}
