// 🔍 Approximate Matcher - decide whether two names denote the same unit
// Three checks in order: exact after normalization, trailing-suffix strip,
// length-margin containment.
//
// Deliberately looser than edit-distance matching: false positives are
// tolerated in exchange for zero-configuration O(1) comparisons.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Trailing qualifiers that data entry appends inconsistently.
/// "Kisumu Branch" and "Kisumu" name the same unit.
pub const SUFFIX_VOCABULARY: [&str; 4] = ["branch", "office", "hq", "headquarters"];

// ============================================================================
// NAME MATCHER
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameMatcher {
    /// Minimum length difference before the substring heuristic applies
    /// (default: 3). Near-equal-length strings sharing a root are more
    /// likely distinct units, so containment alone must not match them.
    pub containment_margin: usize,

    /// Trailing suffixes stripped (at most one per name) before the
    /// second comparison pass.
    pub suffixes: Vec<String>,
}

impl NameMatcher {
    /// Create a matcher with the observed production thresholds
    pub fn new() -> Self {
        NameMatcher {
            containment_margin: 3,
            suffixes: SUFFIX_VOCABULARY.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Do `a` and `b` name the same organizational unit?
    ///
    /// False if either input is empty or blank. Otherwise, in order:
    /// 1. Exact match after normalization.
    /// 2. Strip one trailing suffix from the vocabulary from each
    ///    normalized string, compare again.
    /// 3. If one normalized string is more than `containment_margin`
    ///    characters longer than the other AND the shorter is a
    ///    substring of the longer.
    ///
    /// Exact/suffix checks run first so a short coincidental substring
    /// cannot override a clean match.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        let norm_a = normalize(a);
        let norm_b = normalize(b);

        if norm_a.is_empty() || norm_b.is_empty() {
            return false;
        }

        // Check 1: direct match
        if norm_a == norm_b {
            return true;
        }

        // Check 2: match without a common trailing qualifier
        if self.strip_suffix(&norm_a) == self.strip_suffix(&norm_b) {
            return true;
        }

        // Check 3: containment, only if one string is significantly longer
        if norm_a.len() > norm_b.len() + self.containment_margin && norm_a.contains(&norm_b) {
            return true;
        }
        if norm_b.len() > norm_a.len() + self.containment_margin && norm_b.contains(&norm_a) {
            return true;
        }

        false
    }

    /// Remove at most one trailing suffix from the vocabulary, then trim.
    /// Operates on an already-normalized string.
    fn strip_suffix(&self, name: &str) -> String {
        for suffix in &self.suffixes {
            if let Some(stem) = name.strip_suffix(suffix.as_str()) {
                return stem.trim_end().to_string();
            }
        }
        name.to_string()
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
