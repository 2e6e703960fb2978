use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome tag carried by every workflow report.
///
/// `NoMatches` is not an error: it marks an empty but well-formed result set
/// (e.g. an unknown reaction descriptor that normalized to a literal key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Success,
    NoMatches,
    Error,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportStatus::Success => "success",
            ReportStatus::NoMatches => "no_matches",
            ReportStatus::Error => "error",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::NoMatches).unwrap(),
            r#""no_matches""#
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::Success).unwrap(),
            r#""success""#
        );
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(ReportStatus::Error.to_string(), "error");
        assert_eq!(ReportStatus::NoMatches.to_string(), "no_matches");
    }
}
