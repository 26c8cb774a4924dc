//! Annotation matching.
//!
//! RedDot variables are declared in JavaScript comments followed by a quoted
//! default value, e.g. `/*r: std_headline*/'Welcome'/**/`. The matcher finds
//! every such annotation in a piece of text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{CaptureMatches, Captures, Regex};

// Capture group 1: raw variable name (after the `r:`/`d:`/`p:`/`h:` tag run),
//   ASCII word characters and whitespace only
// Capture group 2: default content between single quotes, same line only
static ANNOTATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[/*]+\s?[rdph:]+((?:(?-u:\w)|\s)+)[*/]+'([^'\n]*)'[/*]+")
        .expect("annotation pattern is valid")
});

/// The compiled annotation grammar.
///
/// Shared by the extractor and the rewrite transform. Each use starts a fresh
/// scan, so callers can interleave freely.
pub(crate) fn annotation_regex() -> &'static Regex {
    &ANNOTATION_REGEX
}

/// A single annotation found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// The whole matched annotation, delimiters included.
    pub full: &'a str,
    /// The raw variable name as written (not normalized).
    pub raw_name: &'a str,
    /// The quoted default content, without the quotes.
    pub content: &'a str,
    /// Byte range of `full` within the scanned text.
    pub span: Range<usize>,
}

impl<'a> Annotation<'a> {
    pub(crate) fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let full = caps.get(0)?;
        Some(Self {
            full: full.as_str(),
            raw_name: caps.get(1)?.as_str(),
            content: caps.get(2)?.as_str(),
            span: full.range(),
        })
    }
}

/// Lazy iterator over the annotations of one text.
///
/// Owns its scan position; two iterators over the same text never affect
/// each other.
pub struct Annotations<'r, 'a> {
    inner: CaptureMatches<'r, 'a>,
}

impl<'a> Iterator for Annotations<'_, 'a> {
    type Item = Annotation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let caps = self.inner.next()?;
            if let Some(annotation) = Annotation::from_captures(&caps) {
                return Some(annotation);
            }
        }
    }
}

/// Find all annotations in `text`, left to right, non-overlapping.
///
/// An annotation whose content has no closing quote on the same line is not
/// a match; scanning just moves past it.
pub fn find_annotations(text: &str) -> Annotations<'static, '_> {
    Annotations {
        inner: annotation_regex().captures_iter(text),
    }
}
