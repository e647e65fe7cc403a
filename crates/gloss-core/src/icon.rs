//! Closed set of glossary icon kinds.
//!
//! Content files name icons with kebab-case strings (`"bar-chart"`). Parsing is
//! strict: an unknown name is an [`Error::UnknownIcon`], never a silent default.
//! Renderers map every variant to a glyph with an exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Icon shown next to a glossary term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum IconKind {
    Brain,
    Database,
    BarChart,
    LineChart,
    PieChart,
    Network,
    Cpu,
    Sigma,
    Calculator,
    Layers,
    Target,
    TrendingUp,
    BookOpen,
    Lightbulb,
    Shuffle,
    Grid,
    Cloud,
    Shield,
    Eye,
    Dice,
}

impl IconKind {
    /// Every icon kind, in declaration order
    pub const ALL: [IconKind; 20] = [
        IconKind::Brain,
        IconKind::Database,
        IconKind::BarChart,
        IconKind::LineChart,
        IconKind::PieChart,
        IconKind::Network,
        IconKind::Cpu,
        IconKind::Sigma,
        IconKind::Calculator,
        IconKind::Layers,
        IconKind::Target,
        IconKind::TrendingUp,
        IconKind::BookOpen,
        IconKind::Lightbulb,
        IconKind::Shuffle,
        IconKind::Grid,
        IconKind::Cloud,
        IconKind::Shield,
        IconKind::Eye,
        IconKind::Dice,
    ];

    /// Stable kebab-case name used in content files
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Brain => "brain",
            IconKind::Database => "database",
            IconKind::BarChart => "bar-chart",
            IconKind::LineChart => "line-chart",
            IconKind::PieChart => "pie-chart",
            IconKind::Network => "network",
            IconKind::Cpu => "cpu",
            IconKind::Sigma => "sigma",
            IconKind::Calculator => "calculator",
            IconKind::Layers => "layers",
            IconKind::Target => "target",
            IconKind::TrendingUp => "trending-up",
            IconKind::BookOpen => "book-open",
            IconKind::Lightbulb => "lightbulb",
            IconKind::Shuffle => "shuffle",
            IconKind::Grid => "grid",
            IconKind::Cloud => "cloud",
            IconKind::Shield => "shield",
            IconKind::Eye => "eye",
            IconKind::Dice => "dice",
        }
    }
}

impl FromStr for IconKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IconKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| Error::unknown_icon(s))
    }
}

impl TryFrom<String> for IconKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IconKind> for &'static str {
    fn from(kind: IconKind) -> Self {
        kind.name()
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_known_icon() {
        assert_eq!("bar-chart".parse::<IconKind>().unwrap(), IconKind::BarChart);
        assert_eq!(" brain ".parse::<IconKind>().unwrap(), IconKind::Brain);
    }

    #[test]
    fn test_parse_unknown_icon_is_error() {
        let err = "sparkles".parse::<IconKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownIcon { ref name } if name == "sparkles"));
    }

    #[test]
    fn test_names_are_unique_and_round_trip() {
        let names: HashSet<&str> = IconKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), IconKind::ALL.len());

        for kind in IconKind::ALL {
            assert_eq!(kind.name().parse::<IconKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_uses_kebab_names() {
        let json = serde_json::to_string(&IconKind::TrendingUp).unwrap();
        assert_eq!(json, "\"trending-up\"");

        let parsed: IconKind = serde_json::from_str("\"pie-chart\"").unwrap();
        assert_eq!(parsed, IconKind::PieChart);

        let err = serde_json::from_str::<IconKind>("\"unicorn\"").unwrap_err();
        assert!(err.to_string().contains("unicorn"));
    }
}
