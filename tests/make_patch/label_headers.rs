use crate::common::command::{run_makepatch_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use chrono::{DateTime, Local};
use filetime::FileTime;
use predicates::prelude::predicate;
use rstest::rstest;
use std::time::{Duration, UNIX_EPOCH};

#[rstest]
fn use_custom_labels(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("old.txt"), "a\n".to_string()));
    write_file(FileSpec::new(workspace_dir.path().join("new.txt"), "b\n".to_string()));

    run_makepatch_command(
        workspace_dir.path(),
        &[
            "old.txt",
            "new.txt",
            "--old-label",
            "src/config.toml.orig",
            "--new-label",
            "src/config.toml",
        ],
    )
    .assert()
    .success()
    .stdout("--- src/config.toml.orig\n+++ src/config.toml\n@@ -1 +1 @@\n-a\n+b\n");

    Ok(())
}

#[rstest]
fn default_labels_use_file_names_only(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("v1").join("notes.md"), "a\n".to_string()));
    write_file(FileSpec::new(workspace_dir.path().join("v2").join("notes.md"), "b\n".to_string()));

    run_makepatch_command(workspace_dir.path(), &["v1/notes.md", "v2/notes.md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--- a/notes.md\n+++ b/notes.md\n"));

    Ok(())
}

#[rstest]
fn append_modification_times(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let old_path = workspace_dir.path().join("old.txt");
    let new_path = workspace_dir.path().join("new.txt");
    write_file(FileSpec::new(old_path.clone(), "a\n".to_string()));
    write_file(FileSpec::new(new_path.clone(), "b\n".to_string()));

    let old_time = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let new_time = UNIX_EPOCH + Duration::from_secs(1_700_003_600);
    filetime::set_file_mtime(&old_path, FileTime::from_system_time(old_time))?;
    filetime::set_file_mtime(&new_path, FileTime::from_system_time(new_time))?;

    let format = "%Y-%m-%d %H:%M:%S%.9f %z";
    let expected_output = format!(
        "--- a/old.txt\t{}\n+++ b/new.txt\t{}\n@@ -1 +1 @@\n-a\n+b\n",
        DateTime::<Local>::from(old_time).format(format),
        DateTime::<Local>::from(new_time).format(format),
    );

    run_makepatch_command(workspace_dir.path(), &["old.txt", "new.txt", "--timestamps"])
        .assert()
        .success()
        .stdout(expected_output);

    Ok(())
}
