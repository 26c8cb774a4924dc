use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const APP_JS: &str = r#"var title = /*r:std_Title*/'Welcome'/**/;
var logo = /*r:img_logo*/'logo.png'/**/;
"#;

const SLIDER_JS: &str = r#"var speed = /*r: speed*/'500'/**/;
var title = /*r:std_title*/'Other'/**/;
"#;

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file("src/app.js", APP_JS)?;
    test.write_file("src/widgets/slider.js", SLIDER_JS)?;
    test.write_file("src/styles.css", "/*r:std_css*/'ignored'/**/")?;
    Ok(())
}

fn expected_listing(prefix: &[&str], postfix: &[&str]) -> String {
    let body = [
        r#"img_logo="<%img_logo%>"            ' logo.png        /src/app.js"#,
        r#"std_ speed="<%std_ speed%>"        ' 500             /src/widgets/slider.js"#,
        r#"std_title="<%std_title%>"          ' Welcome         /src/app.js"#,
    ];
    prefix
        .iter()
        .chain(body.iter())
        .chain(postfix.iter())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_build_writes_default_output() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.build_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let listing = test.read_file("reddot/jsvars.txt")?;
    assert_eq!(
        listing,
        expected_listing(
            &["<!IoRangePreExecute>", "<%"],
            &["%>", "<!/IoRangePreExecute>"]
        )
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Wrote 3 variables from 2 files to reddot/jsvars.txt"),
        "stdout: {}",
        stdout
    );
    Ok(())
}

#[test]
fn test_build_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(
        ".reddotrc.json",
        r#"{
            "prefix": ["<%"],
            "postfix": ["%>"],
            "output": "dist/vars.txt"
        }"#,
    )?;

    let output = test.build_command().output()?;
    assert!(output.status.success());

    let listing = test.read_file("dist/vars.txt")?;
    assert_eq!(listing, expected_listing(&["<%"], &["%>"]));
    assert!(!test.root().join("reddot").exists());
    Ok(())
}

#[test]
fn test_build_output_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(".reddotrc.json", r#"{ "output": "dist/vars.txt" }"#)?;

    let output = test
        .build_command()
        .args(["--output", "other/list.txt"])
        .output()?;
    assert!(output.status.success());

    assert!(test.root().join("other/list.txt").exists());
    assert!(!test.root().join("dist/vars.txt").exists());
    Ok(())
}

#[test]
fn test_build_stdout() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.build_command().arg("--stdout").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = expected_listing(
        &["<!IoRangePreExecute>", "<%"],
        &["%>", "<!/IoRangePreExecute>"],
    );
    assert_eq!(stdout, format!("{}\n", expected));
    assert!(!test.root().join("reddot").exists());
    Ok(())
}

#[test]
fn test_build_without_annotations() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/plain.js", "var x = 1;")?;

    let output = test.build_command().output()?;
    assert!(output.status.success());

    let listing = test.read_file("reddot/jsvars.txt")?;
    assert_eq!(listing, "<!IoRangePreExecute>\n<%\n%>\n<!/IoRangePreExecute>");
    Ok(())
}

#[test]
fn test_build_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;
    assert!(output.status.success());

    let listing = test.read_file("reddot/jsvars.txt")?;
    assert_eq!(listing, "<!IoRangePreExecute>\n<%\n%>\n<!/IoRangePreExecute>");
    Ok(())
}

#[test]
fn test_build_source_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file("web/page.js", "/*r:anc_home*/'Home'/**/")?;

    let output = test
        .build_command()
        .args(["--source-root", "web", "--stdout"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"anc_home="<%anc_home%>""#));
    assert!(stdout.contains("/web/page.js"));
    assert!(!stdout.contains("img_logo"));
    Ok(())
}

#[test]
fn test_build_skips_node_modules() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file("node_modules/lib/index.js", "/*r:std_vendor*/'v'/**/")?;

    let output = test.build_command().arg("--stdout").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("std_vendor"));
    Ok(())
}

#[test]
fn test_build_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file(".reddotrc.json", "{ invalid")?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"), "stderr: {}", stderr);
    assert!(!test.root().join("reddot").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_build_unreadable_file_aborts() -> Result<()> {
    use std::os::unix::fs::symlink;

    let test = CliTest::new()?;
    setup_project(&test)?;
    // Dangling symlinks are listed by the scanner but cannot be read
    symlink(
        test.root().join("missing-target.js"),
        test.root().join("src/broken.js"),
    )?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr: {}", stderr);
    assert!(stderr.contains("broken.js"), "stderr: {}", stderr);
    assert!(!test.root().join("reddot/jsvars.txt").exists());
    Ok(())
}
