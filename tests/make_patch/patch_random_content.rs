use crate::common::command::{run_makepatch_command, workspace_dir};
use crate::common::file::{FileSpec, generate_lines, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn append_line_to_generated_file(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let lines = generate_lines(10);
    let old_content: String = lines.iter().map(|line| format!("{line}\n")).collect();
    let new_content = format!("{old_content}appended\n");
    write_file(FileSpec::new(workspace_dir.path().join("old.txt"), old_content));
    write_file(FileSpec::new(workspace_dir.path().join("new.txt"), new_content));

    let expected_output = format!(
        "--- a/old.txt\n+++ b/new.txt\n@@ -8,3 +8,4 @@\n {}\n {}\n {}\n+appended\n",
        lines[7], lines[8], lines[9]
    );
    let actual_output = run_makepatch_command(workspace_dir.path(), &["old.txt", "new.txt"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();

    pretty_assertions::assert_eq!(String::from_utf8(stdout)?, expected_output);

    Ok(())
}

#[rstest]
fn delete_every_line_of_generated_file(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines = generate_lines(5);
    let old_content: String = lines.iter().map(|line| format!("{line}\n")).collect();
    write_file(FileSpec::new(workspace_dir.path().join("old.txt"), old_content));
    write_file(FileSpec::new(workspace_dir.path().join("new.txt"), String::new()));

    let removed: String = lines.iter().map(|line| format!("-{line}\n")).collect();
    let expected_output = format!("--- a/old.txt\n+++ b/new.txt\n@@ -1,5 +0,0 @@\n{removed}");
    let actual_output = run_makepatch_command(workspace_dir.path(), &["old.txt", "new.txt"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();

    pretty_assertions::assert_eq!(String::from_utf8(stdout)?, expected_output);

    Ok(())
}
