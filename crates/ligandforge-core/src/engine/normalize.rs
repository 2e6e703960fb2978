//! Reaction-descriptor normalization against the closed vocabulary.

use super::rules::REACTION_ALIASES;
use std::collections::{BTreeSet, HashMap};

/// Resolves a free-text reaction descriptor to a set of canonical reaction
/// keys from the vocabulary.
///
/// The rule chain applies in strict precedence order; this ordering is the
/// disambiguation policy the scoring determinism depends on:
///
/// 1. Lowercase, and fold hyphens and spaces to underscores.
/// 2. An exact vocabulary key wins outright and returns a singleton.
/// 3. Alias shorthand expands to its canonical key set.
/// 4. A substring of any key or its (case-folded) description matches it.
/// 5. With no match at all, the literal normalized token is returned as a
///    singleton; downstream scoring then yields zero matches rather than an
///    error.
pub fn normalize(descriptor: &str, vocabulary: &HashMap<String, String>) -> BTreeSet<String> {
    let token = descriptor
        .trim()
        .to_lowercase()
        .replace(['-', ' '], "_");

    if vocabulary.contains_key(&token) {
        return BTreeSet::from([token]);
    }

    let mut matches = BTreeSet::new();

    if let Some(expanded) = REACTION_ALIASES.get(token.as_str()) {
        matches.extend(expanded.iter().map(|key| key.to_string()));
    }

    for (key, description) in vocabulary {
        if key.contains(&token) || description.to_lowercase().contains(&token) {
            matches.insert(key.clone());
        }
    }

    if matches.is_empty() {
        matches.insert(token);
    }
    matches
}
