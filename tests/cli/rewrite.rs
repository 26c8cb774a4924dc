use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const APP_JS: &str = r#"var title = /*r:std_Title*/'Welcome'/**/;
var logo = /*r:img_logo*/'logo.png'/**/;
"#;

const APP_JS_REWRITTEN: &str = r#"var title = "<!IoRangePreExecute><%=std_title%><!/IoRangePreExecute>";
var logo = "<!IoRangePreExecute><%=img_logo%><!/IoRangePreExecute>";
"#;

const PLAIN_JS: &str = "var x = 1;\n";

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file("src/app.js", APP_JS)?;
    test.write_file("src/lib/plain.js", PLAIN_JS)?;
    Ok(())
}

#[test]
fn test_rewrite_dry_run() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.rewrite_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("src/app.js (2 annotations)"), "stdout: {}", stdout);
    assert!(!stdout.contains("plain.js"), "stdout: {}", stdout);
    assert!(
        stdout.contains("Would rewrite 2 annotations in 1 file."),
        "stdout: {}",
        stdout
    );

    // Dry run leaves sources untouched
    assert_eq!(test.read_file("src/app.js")?, APP_JS);
    Ok(())
}

#[test]
fn test_rewrite_apply() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.rewrite_command().arg("--apply").output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(test.read_file("src/app.js")?, APP_JS_REWRITTEN);
    assert_eq!(test.read_file("src/lib/plain.js")?, PLAIN_JS);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rewrote 2 annotations in 1 file."), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_rewrite_apply_is_stable() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    test.rewrite_command().arg("--apply").output()?;
    let output = test.rewrite_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No annotations found in 2 files"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_rewrite_out_dir() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test
        .rewrite_command()
        .args(["--source-root", "src", "--out-dir", "dist"])
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(test.read_file("dist/app.js")?, APP_JS_REWRITTEN);
    assert_eq!(test.read_file("dist/lib/plain.js")?, PLAIN_JS);
    assert_eq!(test.read_file("src/app.js")?, APP_JS);
    Ok(())
}

#[test]
fn test_rewrite_respects_extensions() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file("src/view.jsx", "x = /*r:std_view*/'v'/**/;")?;
    test.write_file(".reddotrc.json", r#"{ "extensions": ["jsx"] }"#)?;

    let output = test.rewrite_command().arg("--apply").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("src/view.jsx")?,
        r#"x = "<!IoRangePreExecute><%=std_view%><!/IoRangePreExecute>";"#
    );
    assert_eq!(test.read_file("src/app.js")?, APP_JS);
    Ok(())
}

#[test]
fn test_rewrite_apply_conflicts_with_out_dir() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test
        .rewrite_command()
        .args(["--apply", "--out-dir", "dist"])
        .output()?;
    assert!(!output.status.success());
    assert_eq!(test.read_file("src/app.js")?, APP_JS);
    Ok(())
}
