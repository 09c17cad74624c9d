//! Edition classification for upstream `subTypeName` labels.
//!
//! Classification is a pure lookup over the fixed upstream vocabulary. Labels
//! outside that vocabulary fall back to [`Edition::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical print edition of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edition {
    FirstEdition,
    UnlimitedEdition,
    LimitedEdition,
    Other,
}

impl Edition {
    /// Short code used as the row key (`1E`, `UE`, `LE`, `O`).
    pub fn code(self) -> &'static str {
        match self {
            Edition::FirstEdition => "1E",
            Edition::UnlimitedEdition => "UE",
            Edition::LimitedEdition => "LE",
            Edition::Other => "O",
        }
    }

    /// Row header shown in the price table.
    pub fn display_name(self) -> &'static str {
        match self {
            Edition::FirstEdition => "1st Edition",
            Edition::UnlimitedEdition => "Unlimited Edition",
            Edition::LimitedEdition => "Limited Edition",
            Edition::Other => "Other",
        }
    }

    /// Fragment used in the table's element ids and classes.
    pub fn css_class(self) -> &'static str {
        match self {
            Edition::FirstEdition => "1st-edition",
            Edition::UnlimitedEdition => "unlimited-edition",
            Edition::LimitedEdition => "limited-edition",
            Edition::Other => "other",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An edition plus the "ultimate" modifier.
///
/// Ultimate listings only contribute to the high price column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub edition: Edition,
    pub is_ultimate: bool,
}

impl Classification {
    pub const fn new(edition: Edition, is_ultimate: bool) -> Self {
        Self {
            edition,
            is_ultimate,
        }
    }
}

/// Classify a raw upstream label. Never fails.
pub fn classify(label: &str) -> Classification {
    match label {
        "1st Edition" => Classification::new(Edition::FirstEdition, false),
        "Unlimited" => Classification::new(Edition::UnlimitedEdition, false),
        "Limited" => Classification::new(Edition::LimitedEdition, false),
        "1st Edition - Ultimate" => Classification::new(Edition::FirstEdition, true),
        "Unlimited - Ultimate" => Classification::new(Edition::UnlimitedEdition, true),
        _ => Classification::new(Edition::Other, false),
    }
}
