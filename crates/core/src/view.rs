//! The four mutually exclusive screens of the client.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Screen currently shown by the client.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Query prompt with suggestions (initial view)
    #[default]
    Search,
    /// Ranked result cards with the retrieval trace
    Results,
    /// Agent answer, grounding and trace, or the static comparison table
    Compare,
    /// Canned system metrics
    Observability,
}

impl View {
    pub const ALL_VARIANTS_STR: &'static str = "search|results|compare|observability";

    /// Tab order in the navigation bar.
    pub const ALL_VARIANTS: &'static [View] =
        &[View::Search, View::Results, View::Compare, View::Observability];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Search => "search",
            Self::Results => "results",
            Self::Compare => "compare",
            Self::Observability => "observability",
        }
    }

    /// Tab label shown in the navigation bar.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match *self {
            Self::Search => "Search",
            Self::Results => "Results",
            Self::Compare => "Compare",
            Self::Observability => "Observability",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "search" | "home" => Ok(Self::Search),
            "results" => Ok(Self::Results),
            "compare" => Ok(Self::Compare),
            "observability" | "metrics" => Ok(Self::Observability),
            _ => Err(CoreError::UnknownView(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_names_case_insensitively() {
        assert_eq!("Results".parse::<View>(), Ok(View::Results));
        assert_eq!(" observability ".parse::<View>(), Ok(View::Observability));
        assert_eq!("home".parse::<View>(), Ok(View::Search));
    }

    #[test]
    fn rejects_unknown_view() {
        let err = "settings".parse::<View>().unwrap_err();
        assert_eq!(err, CoreError::UnknownView("settings".to_owned()));
        assert!(err.to_string().contains("search|results|compare|observability"));
    }

    #[test]
    fn search_is_initial_view() {
        assert_eq!(View::default(), View::Search);
        assert_eq!(View::ALL_VARIANTS.first(), Some(&View::Search));
    }
}
