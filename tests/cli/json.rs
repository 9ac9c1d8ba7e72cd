use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_json_bareword_keys() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["json", r#""no-alert":0, semi:2"#]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "no-alert": 0,
      "semi": 2
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_json_missing_comma_after_number() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["json", "no-alert: 0 semi:2"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "no-alert": 0,
      "semi": 2
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_json_failure_reports_diagnostic() -> Result<()> {
    let test = CliTest::new()?;

    // The JSON5 parser's own wording is not part of the output contract.
    insta::with_settings!({
        filters => vec![(r#"(Failed to parse JSON from '[^']*': )[^"\n]*"#, "${1}[parser error]")]
    }, {
        assert_cmd_snapshot!(
            test.command()
                .args(["json", "not valid json {{{", "--line", "7", "--column", "4"]),
            @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        {
          "ruleId": null,
          "fatal": true,
          "severity": 2,
          "message": "Failed to parse JSON from 'not valid json {{{': [parser error]",
          "line": 7,
          "column": 5
        }

        ----- stderr -----
        error: Failed to parse JSON from 'not valid json {{{': [parser error]
          --> 7:5
          |
        7 | not valid json {{{
          | ^^^^^^^^^^^^^^^^^^
        "#);
    });

    Ok(())
}

#[test]
fn test_json_reads_stdin() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.command().arg("json").pass_stdin("quotes: [2, \"double\"]\n"),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "quotes": [
        2,
        "double"
      ]
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_json_dash_reads_stdin() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["json", "-"]).pass_stdin("semi: 1"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "semi": 1
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_json_large_integer_is_reported() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({
        filters => vec![(r#"(Failed to parse JSON from '[^']*': )[^"\n]*"#, "${1}[parser error]")]
    }, {
        assert_cmd_snapshot!(test.command().args(["json", "b: 99999999999999999999"]), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        {
          "ruleId": null,
          "fatal": true,
          "severity": 2,
          "message": "Failed to parse JSON from 'b: 99999999999999999999': [parser error]",
          "line": 1,
          "column": 1
        }

        ----- stderr -----
        error: Failed to parse JSON from 'b: 99999999999999999999': [parser error]
          --> 1:1
          |
        1 | b: 99999999999999999999
          | ^^^^^^^^^^^^^^^^^^^^^^^
        "#);
    });

    Ok(())
}
