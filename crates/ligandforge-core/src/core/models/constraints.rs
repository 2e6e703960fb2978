use super::catalyst::CostTier;
use serde::{Deserialize, Serialize};

/// Optional user constraints applied during catalyst scoring.
///
/// Every field is optional; an absent field means "no constraint". The
/// defaults therefore describe the completely unconstrained request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Preferred catalytic metal, compared case-insensitively against the
    /// record's element symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_metal: Option<String>,
    /// Most expensive acceptable cost tier. Defaults to the least
    /// restrictive tier when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cost: Option<CostTier>,
    /// Award a bonus to earth-abundant metals (Ni, Cu, Fe, Zr).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_earth_abundant: Option<bool>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self.prefer_metal.is_none()
            && self.max_cost.is_none()
            && self.prefer_earth_abundant.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constraints_are_empty() {
        assert!(Constraints::default().is_empty());
    }

    #[test]
    fn deserializes_partial_constraint_objects() {
        let constraints: Constraints =
            serde_json::from_str(r#"{"prefer_metal": "Pd", "max_cost": "high"}"#).unwrap();
        assert_eq!(constraints.prefer_metal.as_deref(), Some("Pd"));
        assert_eq!(constraints.max_cost, Some(CostTier::High));
        assert_eq!(constraints.prefer_earth_abundant, None);
        assert!(!constraints.is_empty());
    }

    #[test]
    fn serializes_without_absent_fields() {
        let json = serde_json::to_string(&Constraints {
            prefer_earth_abundant: Some(true),
            ..Constraints::default()
        })
        .unwrap();
        assert_eq!(json, r#"{"prefer_earth_abundant":true}"#);
    }
}
