//! Field name normalization.
//!
//! A raw annotation name such as `img_Header-Logo` is turned into the
//! canonical RedDot placeholder name `img_header_logo`. The first
//! underscore-separated part is the type tag; only the tags RedDot knows
//! about are kept, anything else is filed under `std_` as written.

use std::fmt;

/// Placeholder types recognized by RedDot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Std,
    Anc,
    Info,
    Media,
    Img,
}

impl TypeTag {
    /// Parse a type tag. Exact, case-sensitive match.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "std" => Some(Self::Std),
            "anc" => Some(Self::Anc),
            "info" => Some(Self::Info),
            "media" => Some(Self::Media),
            "img" => Some(Self::Img),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Std => "std",
            Self::Anc => "anc",
            Self::Info => "info",
            Self::Media => "media",
            Self::Img => "img",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldName<'a> {
    /// Leading part is a known tag; `base` is the normalized rest.
    Recognized { tag: TypeTag, base: String },
    /// Unknown tag; the whole raw token is kept verbatim.
    Unrecognized(&'a str),
}

impl<'a> FieldName<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let (tag, rest) = raw.split_once('_').unwrap_or((raw, ""));

        match TypeTag::parse(tag) {
            Some(tag) => FieldName::Recognized {
                tag,
                base: rest.to_lowercase().replace('-', "_"),
            },
            None => FieldName::Unrecognized(raw),
        }
    }

    /// The canonical placeholder name, e.g. `std_headline`.
    pub fn canonical(&self) -> String {
        match self {
            FieldName::Recognized { tag, base } => format!("{}_{}", tag, base),
            FieldName::Unrecognized(raw) => format!("{}_{}", TypeTag::Std, raw),
        }
    }
}

/// Map a raw annotation name to its canonical field name.
pub fn canonical_name(raw: &str) -> String {
    FieldName::classify(raw).canonical()
}
