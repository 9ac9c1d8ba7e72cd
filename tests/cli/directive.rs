use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_directive_default_labels() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.command()
            .args(["directive", "eslint-disable no-alert, semi -- legacy code"]),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "label": "eslint-disable",
      "value": {
        "no-alert": true,
        "semi": true
      },
      "justification": "legacy code"
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_directive_structured_label() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(
        test.command()
            .args(["directive", "eslint quotes: [2, 'double'] semi: 1"]),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "label": "eslint",
      "value": {
        "quotes": [
          2,
          "double"
        ],
        "semi": 1
      },
      "justification": ""
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_directive_custom_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".directivesrc.json",
        r#"{ "labels": { "rules": "structured", "vars": "list" } }"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["directive", "vars a:readonly b"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "label": "vars",
      "value": {
        "a": {
          "value": "readonly",
          "comment": {
            "start": {
              "line": 1,
              "column": 0
            }
          }
        },
        "b": {
          "value": null,
          "comment": {
            "start": {
              "line": 1,
              "column": 0
            }
          }
        }
      },
      "justification": ""
    }

    ----- stderr -----
    "#);

    // Default labels are replaced by the config file.
    assert_cmd_snapshot!(test.command().args(["directive", "eslint-disable semi"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    warning: text is not a recognized directive (see .directivesrc.json)
    ");

    Ok(())
}

#[test]
fn test_directive_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".directivesrc.json", r#"{ "labels": { "two words": "list" } }"#)?;

    assert_cmd_snapshot!(test.command().args(["directive", "two words x"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid label in 'labels': "two words" must not contain whitespace
    "#);

    Ok(())
}
