use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Planting season category.
///
/// Records in the dataset always carry one of the three concrete seasons;
/// `Unknown` only appears as the result of resolving an unrecognised month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Season {
    /// Musim hujan (December to March).
    Rain,
    /// Musim peralihan (April, May, October, November).
    Transition,
    /// Musim kemarau (June to September).
    Dry,
    /// Month not recognised.
    Unknown,
}

impl Season {
    /// Canonical label used in JSON responses.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Rain => "Rain",
            Season::Transition => "Transition",
            Season::Dry => "Dry",
            Season::Unknown => "Unknown",
        }
    }

    /// Indonesian label used by the front-end season selector.
    pub fn local_label(&self) -> &'static str {
        match self {
            Season::Rain => "Hujan",
            Season::Transition => "Peralihan",
            Season::Dry => "Kemarau",
            Season::Unknown => "Tidak diketahui",
        }
    }

    /// Case-insensitive exact comparison against either label.
    ///
    /// `Unknown` never matches, so a query that could not be resolved to a
    /// season never earns the season bonus.
    pub fn matches_label(&self, label: &str) -> bool {
        if *self == Season::Unknown {
            return false;
        }
        // ASCII folding only: both labels are plain ASCII words.
        label.eq_ignore_ascii_case(self.label()) || label.eq_ignore_ascii_case(self.local_label())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a month name (Indonesian, any case, surrounding whitespace ignored)
/// to its season. Total over all inputs.
pub fn resolve_season(month: &str) -> Season {
    match month.trim().to_lowercase().as_str() {
        "desember" | "januari" | "februari" | "maret" => Season::Rain,
        "april" | "mei" | "oktober" | "november" => Season::Transition,
        "juni" | "juli" | "agustus" | "september" => Season::Dry,
        _ => Season::Unknown,
    }
}
