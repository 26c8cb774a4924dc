//! Per-file variable extraction.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use super::{annotation::find_annotations, field_name::canonical_name};
use crate::error::{Error, Result};

/// One RedDot variable declared in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Name as written in the annotation.
    pub raw_name: String,
    /// Normalized name, unique within an aggregate.
    pub name: String,
    /// Default content from the quoted literal.
    pub content: String,
    /// `name="<%name%>"`, the assignment line used by the report.
    pub assignment: String,
    pub file: PathBuf,
}

impl Declaration {
    pub fn new(raw_name: &str, content: &str, file: &Path) -> Self {
        let name = canonical_name(raw_name);
        let assignment = format!(r#"{name}="<%{name}%>""#);
        Self {
            raw_name: raw_name.to_string(),
            name,
            content: content.to_string(),
            assignment,
            file: file.to_path_buf(),
        }
    }
}

/// Extract declarations from source text already in memory.
///
/// Declarations keep match order; a name seen twice keeps its first
/// occurrence.
pub fn extract_from_source(source: &str, file: &Path) -> Vec<Declaration> {
    let declarations = find_annotations(source)
        .map(|annotation| Declaration::new(annotation.raw_name, annotation.content, file));
    dedup_by_name(declarations)
}

/// Read `file` and extract its declarations.
pub fn extract_file(file: &Path) -> Result<Vec<Declaration>> {
    let source = read_source(file)?;
    Ok(extract_from_source(&source, file))
}

/// Read a source file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(file: &Path) -> Result<String> {
    let bytes = fs::read(file).map_err(|source| Error::FileRead {
        path: file.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Keep the first declaration for each name, preserving order.
pub(crate) fn dedup_by_name(
    declarations: impl IntoIterator<Item = Declaration>,
) -> Vec<Declaration> {
    let mut seen: HashSet<String> = HashSet::new();
    declarations
        .into_iter()
        .filter(|decl| seen.insert(decl.name.clone()))
        .collect()
}
