//! Source rewriting.
//!
//! Replaces each annotation with a string literal that RedDot fills in at
//! render time:
//!
//! ```text
//! /*r:std_title*/'Welcome'/**/
//! "<!IoRangePreExecute><%=std_title%><!/IoRangePreExecute>"
//! ```

use std::borrow::Cow;

use regex::Captures;

use super::{annotation::annotation_regex, field_name::canonical_name};

/// The template expression an annotation is replaced with.
pub fn placeholder(name: &str) -> String {
    format!(r#""<!IoRangePreExecute><%={name}%><!/IoRangePreExecute>""#)
}

/// Rewrite every annotation in `source`.
///
/// Returns the input unchanged (borrowed) when it has no annotations.
pub fn rewrite_source(source: &str) -> Cow<'_, str> {
    rewrite_counted(source).0
}

/// Rewrite `source` and report how many annotations were replaced.
pub fn rewrite_counted(source: &str) -> (Cow<'_, str>, usize) {
    let mut count = 0;
    let rewritten = annotation_regex().replace_all(source, |caps: &Captures<'_>| {
        count += 1;
        let raw_name = caps.get(1).map_or("", |m| m.as_str());
        placeholder(&canonical_name(raw_name))
    });
    (rewritten, count)
}
