//! Cross-file aggregation of declarations.

use std::path::Path;

use super::extract::{Declaration, dedup_by_name, extract_file};
use crate::error::Result;

/// Merge per-file declaration lists into the final sorted set.
///
/// Lists are taken in the given order; when several files declare the same
/// name, the first one wins. The result is sorted by name.
pub fn aggregate<I>(per_file: I) -> Vec<Declaration>
where
    I: IntoIterator<Item = Vec<Declaration>>,
{
    let mut declarations = dedup_by_name(per_file.into_iter().flatten());
    declarations.sort_by(|a, b| a.name.cmp(&b.name));
    declarations
}

/// Extract every file in order and aggregate the result.
///
/// The first unreadable file aborts the pass.
pub fn collect_declarations<P: AsRef<Path>>(files: &[P]) -> Result<Vec<Declaration>> {
    let per_file = files
        .iter()
        .map(|file| extract_file(file.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(aggregate(per_file))
}
