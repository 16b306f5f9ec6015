use crate::common::command::{run_makepatch_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn write_patch_with_crlf_line_endings(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("old.txt"), "a\nb\nc\n".to_string()));
    write_file(FileSpec::new(workspace_dir.path().join("new.txt"), "a\nx\nc\n".to_string()));

    run_makepatch_command(
        workspace_dir.path(),
        &["old.txt", "new.txt", "out.patch", "--line-ending", "crlf"],
    )
    .assert()
    .success();

    let patch = std::fs::read(workspace_dir.path().join("out.patch"))?;

    pretty_assertions::assert_eq!(
        String::from_utf8(patch)?,
        "--- a/old.txt\r\n+++ b/new.txt\r\n@@ -1,3 +1,3 @@\r\n a\r\n-b\r\n+x\r\n c\r\n"
    );

    Ok(())
}
