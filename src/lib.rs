//! reddot-vars - RedDot CMS variable extraction for JavaScript sources
//!
//! Scripts declare CMS-editable values in comments such as
//! `/*r:std_title*/'Welcome'/**/`. This crate collects those declarations
//! into the aligned variable listing RedDot pre-executes, and rewrites the
//! annotations into placeholders RedDot fills in at render time.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (discovery, config, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Matching, normalization, aggregation, formatting and rewriting
//! - `error`: Error types for the pipeline

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use error::{Error, Result};
