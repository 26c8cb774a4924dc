//! Variable listing generation.
//!
//! Produces the text artifact RedDot pre-executes: a fixed header, one
//! aligned assignment per variable, and a fixed footer. Each body line reads
//!
//! ```text
//! std_title="<%std_title%>"        ' Welcome        /src/app.js
//! ```
//!
//! where `' ` starts a VBScript comment holding the default content and the
//! file the variable came from.

use std::path::Path;

use super::extract::Declaration;

/// Extra columns added after the widest field.
pub const COLUMN_GAP: usize = 8;

/// VBScript comment marker separating the assignment from its description.
pub const COMMENT_MARKER: &str = "' ";

/// Column widths of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub assignment: usize,
    pub content: usize,
}

impl ColumnWidths {
    /// Widest assignment and content plus [`COLUMN_GAP`], counted in
    /// characters.
    ///
    /// `None` for an empty set.
    pub fn measure(declarations: &[Declaration]) -> Option<Self> {
        let assignment = declarations.iter().map(|d| char_len(&d.assignment)).max()?;
        let content = declarations.iter().map(|d| char_len(&d.content)).max()?;
        Some(Self {
            assignment: assignment + COLUMN_GAP,
            content: content + COLUMN_GAP,
        })
    }
}

/// Framing and path display settings for a report.
#[derive(Debug, Clone, Copy)]
pub struct ReportLayout<'a> {
    pub prefix: &'a [String],
    pub postfix: &'a [String],
    /// Stripped from the front of every source path before display.
    pub base: Option<&'a Path>,
}

/// Render the aggregated declarations into the report text.
///
/// Lines are joined with `\n`, without a trailing newline.
pub fn render_report(declarations: &[Declaration], layout: &ReportLayout<'_>) -> String {
    let mut lines: Vec<String> = layout.prefix.to_vec();

    if let Some(widths) = ColumnWidths::measure(declarations) {
        lines.extend(
            declarations
                .iter()
                .map(|decl| format_line(decl, widths, layout.base)),
        );
    }

    lines.extend(layout.postfix.iter().cloned());
    lines.join("\n")
}

fn format_line(decl: &Declaration, widths: ColumnWidths, base: Option<&Path>) -> String {
    let mut line = String::with_capacity(widths.assignment + widths.content + 64);
    line.push_str(&decl.assignment);
    pad(&mut line, widths.assignment - char_len(&decl.assignment));
    line.push_str(COMMENT_MARKER);
    line.push_str(&decl.content);
    pad(&mut line, widths.content - char_len(&decl.content));
    line.push_str(&display_path(&decl.file, base));
    line
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn pad(line: &mut String, count: usize) {
    line.extend(std::iter::repeat_n(' ', count));
}

/// Source path as shown in the report.
///
/// The base is removed as a plain string prefix, so the leading separator
/// stays: `/home/me/site` + `/home/me/site/src/app.js` gives `/src/app.js`.
pub fn display_path(file: &Path, base: Option<&Path>) -> String {
    let file = file.to_string_lossy();
    let Some(base) = base else {
        return file.into_owned();
    };
    let base = base.to_string_lossy();
    if base.is_empty() {
        return file.into_owned();
    }
    file.strip_prefix(base.as_ref()).unwrap_or(&file).to_string()
}
