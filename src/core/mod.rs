//! Core extraction pipeline.
//!
//! ```text
//! files ─▶ extract (annotation + field_name) ─▶ aggregate ─▶ format ─▶ report text
//! source ─▶ rewrite ─▶ source with RedDot placeholders
//! ```
//!
//! Everything here is synchronous and holds no shared mutable state; the
//! annotation grammar is compiled once and never carries a scan position.

pub mod aggregate;
pub mod annotation;
pub mod extract;
pub mod field_name;
pub mod file_scanner;
pub mod format;
pub mod output;
pub mod rewrite;

pub use aggregate::{aggregate, collect_declarations};
pub use annotation::{Annotation, find_annotations};
pub use extract::{Declaration, extract_file, extract_from_source};
pub use field_name::{FieldName, TypeTag, canonical_name};
pub use format::{ColumnWidths, ReportLayout, render_report};
pub use output::write_text;
pub use rewrite::{rewrite_counted, rewrite_source};
