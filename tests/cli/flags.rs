use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_flags_list() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["flags", "a, b ,,c"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "a": true,
      "b": true,
      "c": true
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_flags_reads_stdin() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("flags").pass_stdin("browser,\n  node\n"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "browser": true,
      "node": true
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_flags_verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::new()?;

    // Log lines carry the subscriber's own formatting, so only their
    // presence is checked.
    let output = test.command().args(["flags", "-v", "node"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "{\n  \"node\": true\n}\n");
    assert!(String::from_utf8(output.stderr)?.contains("parsing directive value"));

    Ok(())
}

#[test]
fn test_flags_rust_log_overrides_verbose() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .env("RUST_LOG", "error")
        .args(["flags", "-v", "node"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    Ok(())
}
