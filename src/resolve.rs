// 🎯 Scope Resolver - selection → closure of equivalent names
//
// A selection is either an Area (a key of area→towns), a Town, or the
// "all scopes" sentinel. Resolution widens a town to its whole area
// whenever that relationship is known: towns sharing an area are
// interchangeable for filtering.

use crate::mapping::MappingTables;
use serde::{Deserialize, Serialize};

/// Distinguished selection meaning "apply no filtering". Distinct from
/// a legitimate empty selection string, which also applies no filtering
/// but can be produced by an unset picker.
pub const ALL_SCOPES: &str = "ADMIN_ALL";

// ============================================================================
// CLOSURE
// ============================================================================

/// The resolved, selection-specific result: the towns and eligible
/// branch names considered "inside" the selected scope. Recomputed on
/// every selection or table change, discarded after the filter consumes
/// it - it has no independent identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Closure {
    /// The selection this closure was resolved from
    pub selection: String,

    /// Towns inside the scope
    pub towns: Vec<String>,

    /// Branch names a record's branch field may legitimately carry
    pub branches: Vec<String>,

    /// Whether the selection resolved as an Area key
    pub is_area: bool,

    /// True for the empty selection or the ALL_SCOPES sentinel; the
    /// filter passes every record through unchanged.
    pub unrestricted: bool,
}

impl Closure {
    fn all_scopes(selection: &str) -> Self {
        Closure {
            selection: selection.to_string(),
            towns: Vec::new(),
            branches: Vec::new(),
            is_area: false,
            unrestricted: true,
        }
    }

    /// Human-readable scope description for status output
    pub fn describe(&self) -> String {
        if self.unrestricted {
            return "No scope selected - showing all records".to_string();
        }
        if self.is_area {
            format!(
                "\"{}\" is an area containing {} towns: {}. Eligible branches: {}",
                self.selection,
                self.towns.len(),
                self.towns.join(", "),
                self.branches.join(", ")
            )
        } else {
            format!(
                "\"{}\" is a town ({} towns in scope). Eligible branches: {}",
                self.selection,
                self.towns.len(),
                self.branches.join(", ")
            )
        }
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

impl MappingTables {
    /// Resolve a selection into its closure of towns and eligible
    /// branch names.
    ///
    /// - Empty selection or [`ALL_SCOPES`]: unrestricted closure.
    /// - Area selection: the area's towns, every branch serving them,
    ///   plus the area name itself (records sometimes store the area
    ///   name in their branch field).
    /// - Town selection: the town, its branches, and - when a parent
    ///   area is known - every sibling town, their branches, and the
    ///   parent area name. A standalone town contributes its own name
    ///   as an eligible branch instead.
    ///
    /// An unknown selection still resolves via the standalone-town path;
    /// an overly narrow closure surfaces as empty filter results, never
    /// as an error.
    pub fn resolve(&self, selection: &str) -> Closure {
        if selection.is_empty() || selection == ALL_SCOPES {
            return Closure::all_scopes(selection);
        }

        let mut towns: Vec<String> = Vec::new();
        let mut branches: Vec<String> = Vec::new();

        // Area selection
        if let Some(area_towns) = self.area_to_towns.get(selection) {
            for town in area_towns {
                push_unique(&mut towns, town);
                for branch in self.branches_for_town(town) {
                    push_unique(&mut branches, branch);
                }
            }
            push_unique(&mut branches, selection);

            return Closure {
                selection: selection.to_string(),
                towns,
                branches,
                is_area: true,
                unrestricted: false,
            };
        }

        // Town selection
        push_unique(&mut towns, selection);
        for branch in self.branches_for_town(selection) {
            push_unique(&mut branches, branch);
        }

        if let Some(parent_area) = self.town_to_area.get(selection) {
            // Widen to the whole parent area: sibling towns and their
            // branches, plus the area name as an eligible branch.
            if let Some(siblings) = self.area_to_towns.get(parent_area) {
                for sibling in siblings {
                    push_unique(&mut towns, sibling);
                    for branch in self.branches_for_town(sibling) {
                        push_unique(&mut branches, branch);
                    }
                }
            }
            push_unique(&mut branches, parent_area);
        } else {
            // Standalone town: records sometimes store the town name as
            // the branch.
            push_unique(&mut branches, selection);
        }

        Closure {
            selection: selection.to_string(),
            towns,
            branches,
            is_area: false,
            unrestricted: false,
        }
    }

    fn branches_for_town<'a>(&'a self, town: &str) -> &'a [String] {
        self.town_to_branches
            .get(town)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

// ============================================================================
// TESTS
// ============================================================================
