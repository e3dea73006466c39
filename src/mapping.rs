// 🗺️ Mapping Builder - five lookup tables from two flat row sources
//
// The roster supplies (branch, town, office) triples; the registry
// supplies (branch office, area, town) triples. Neither source alone is
// complete, so both passes populate the same tables and either source
// alone yields partial but fully participating results.
//
// Conflict policy (deterministic, never an error):
//   - multi-valued tables (area→towns, town→branches, branch→towns):
//     set-union, deduplicated by raw string, insertion order preserved
//   - single-valued tables (town→area, branch→area): last write wins

use crate::rows::{RegistryRow, RosterRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// MAPPING TABLES
// ============================================================================

/// The five lookup tables, always rebuilt from scratch as one immutable
/// value. Stored names are the original strings; normalization happens
/// only at match time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingTables {
    /// Area name → towns belonging to it
    pub area_to_towns: HashMap<String, Vec<String>>,

    /// Town name → its (single, last-write-wins) parent area
    pub town_to_area: HashMap<String, String>,

    /// Town name → branch offices serving it
    pub town_to_branches: HashMap<String, Vec<String>>,

    /// Branch office name → towns it serves
    pub branch_to_towns: HashMap<String, Vec<String>>,

    /// Branch office name → its (single, last-write-wins) area
    pub branch_to_area: HashMap<String, String>,
}

impl MappingTables {
    /// Build all five tables from the two row sources.
    ///
    /// Rows missing a required field (roster: branch+town, registry:
    /// branch office+area) are skipped silently. Zero usable rows yield
    /// empty tables, never an error.
    pub fn build(roster: &[RosterRow], registry: &[RegistryRow]) -> Self {
        let mut tables = MappingTables::default();

        // Pass 1: staff roster. The roster's branch column doubles as
        // the area grouping for towns seen there.
        for row in roster {
            let (branch, town) = match (&row.branch, &row.town) {
                (Some(b), Some(t)) if !b.is_empty() && !t.is_empty() => (b, t),
                _ => continue,
            };

            push_unique(&mut tables.area_to_towns, branch, town);
            tables.town_to_area.insert(town.clone(), branch.clone());

            push_unique(&mut tables.town_to_branches, town, branch);
            push_unique(&mut tables.branch_to_towns, branch, town);

            if let Some(office) = &row.office {
                if !office.is_empty() && office != branch {
                    push_unique(&mut tables.town_to_branches, town, office);
                    push_unique(&mut tables.branch_to_towns, office, town);
                }
            }
        }

        // Pass 2: official branch registry.
        for row in registry {
            let (branch_office, area) = match (&row.branch_office, &row.area) {
                (Some(b), Some(a)) if !b.is_empty() && !a.is_empty() => (b, a),
                _ => continue,
            };

            tables
                .branch_to_area
                .insert(branch_office.clone(), area.clone());

            if let Some(town) = &row.town {
                if !town.is_empty() {
                    push_unique(&mut tables.area_to_towns, area, town);
                    tables.town_to_area.insert(town.clone(), area.clone());
                    push_unique(&mut tables.town_to_branches, town, branch_office);
                    push_unique(&mut tables.branch_to_towns, branch_office, town);
                }
            }

            // Bridge: every town this branch office is already known to
            // serve joins the registry's area, so a town mapped to an
            // area always appears in that area's town list.
            let served = tables
                .branch_to_towns
                .get(branch_office)
                .cloned()
                .unwrap_or_default();
            for town in &served {
                push_unique(&mut tables.area_to_towns, area, town);
                tables.town_to_area.insert(town.clone(), area.clone());
                push_unique(&mut tables.town_to_branches, town, branch_office);
            }
        }

        tables
    }

    pub fn is_empty(&self) -> bool {
        self.area_to_towns.is_empty()
            && self.town_to_area.is_empty()
            && self.town_to_branches.is_empty()
            && self.branch_to_towns.is_empty()
            && self.branch_to_area.is_empty()
    }

    /// Table cardinalities for status output
    pub fn summary(&self) -> MappingSummary {
        MappingSummary {
            areas: self.area_to_towns.len(),
            towns: self.town_to_area.len(),
            branches: self.branch_to_area.len(),
            built_at: Utc::now(),
        }
    }
}

// ============================================================================
// MAPPING SUMMARY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingSummary {
    pub areas: usize,
    pub towns: usize,
    pub branches: usize,
    pub built_at: DateTime<Utc>,
}

impl std::fmt::Display for MappingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mappings loaded: {} areas, {} towns, {} branches",
            self.areas, self.towns, self.branches
        )
    }
}

/// Append `value` to the vec under `key`, skipping raw-string duplicates.
/// Differently-cased spellings stay distinct entries here; the matcher
/// reconciles them downstream.
fn push_unique(map: &mut HashMap<String, Vec<String>>, key: &str, value: &str) {
    let entry = map.entry(key.to_string()).or_default();
    if !entry.iter().any(|v| v == value) {
        entry.push(value.to_string());
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_row(branch: &str, town: &str, office: Option<&str>) -> RosterRow {
        RosterRow {
            branch: Some(branch.to_string()),
            town: Some(town.to_string()),
            office: office.map(|s| s.to_string()),
        }
    }

    fn registry_row(branch_office: &str, area: &str, town: Option<&str>) -> RegistryRow {
        RegistryRow {
            branch_office: Some(branch_office.to_string()),
            area: Some(area.to_string()),
            town: town.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_roster_pass_populates_all_directions() {
        let roster = vec![roster_row("Nakuru Branch", "Nakuru", Some("Nakuru West"))];
        let tables = MappingTables::build(&roster, &[]);

        assert_eq!(tables.area_to_towns["Nakuru Branch"], vec!["Nakuru"]);
        assert_eq!(tables.town_to_area["Nakuru"], "Nakuru Branch");
        assert_eq!(
            tables.town_to_branches["Nakuru"],
            vec!["Nakuru Branch", "Nakuru West"]
        );
        assert_eq!(tables.branch_to_towns["Nakuru Branch"], vec!["Nakuru"]);
        assert_eq!(tables.branch_to_towns["Nakuru West"], vec!["Nakuru"]);
    }

    #[test]
    fn test_office_equal_to_branch_not_doubled() {
        let roster = vec![roster_row("Kisumu", "Kisumu", Some("Kisumu"))];
        let tables = MappingTables::build(&roster, &[]);
        assert_eq!(tables.town_to_branches["Kisumu"], vec!["Kisumu"]);
    }

    #[test]
    fn test_registry_alone_fully_participates() {
        let registry = vec![registry_row("Voi Office", "Coast Area", Some("Voi"))];
        let tables = MappingTables::build(&[], &registry);

        assert_eq!(tables.area_to_towns["Coast Area"], vec!["Voi"]);
        assert_eq!(tables.town_to_area["Voi"], "Coast Area");
        assert_eq!(tables.town_to_branches["Voi"], vec!["Voi Office"]);
        assert_eq!(tables.branch_to_towns["Voi Office"], vec!["Voi"]);
        assert_eq!(tables.branch_to_area["Voi Office"], "Coast Area");
    }

    #[test]
    fn test_registry_bridges_roster_towns_into_area() {
        // The roster knows which towns a branch serves; the registry
        // knows which area the branch belongs to. Both facts combine.
        let roster = vec![
            roster_row("Nairobi HQ", "Nairobi", None),
            roster_row("Nairobi HQ", "Westlands", None),
        ];
        let registry = vec![registry_row("Nairobi HQ", "Nairobi Area", Some("Nairobi"))];
        let tables = MappingTables::build(&roster, &registry);

        let area_towns = &tables.area_to_towns["Nairobi Area"];
        assert!(area_towns.contains(&"Nairobi".to_string()));
        assert!(area_towns.contains(&"Westlands".to_string()));
        assert_eq!(tables.town_to_area["Westlands"], "Nairobi Area");
    }

    #[test]
    fn test_town_in_area_list_whenever_mapped_to_area() {
        let roster = vec![
            roster_row("Nairobi HQ", "Nairobi", None),
            roster_row("Nairobi HQ", "Westlands", None),
        ];
        let registry = vec![registry_row("Nairobi HQ", "Nairobi Area", Some("Nairobi"))];
        let tables = MappingTables::build(&roster, &registry);

        for (town, area) in &tables.town_to_area {
            assert!(
                tables.area_to_towns[area].contains(town),
                "town {} mapped to area {} but missing from its town list",
                town,
                area
            );
        }
    }

    #[test]
    fn test_incomplete_rows_skipped_silently() {
        let roster = vec![
            RosterRow {
                branch: Some("Thika Branch".to_string()),
                town: None,
                office: None,
            },
            RosterRow {
                branch: None,
                town: Some("Thika".to_string()),
                office: None,
            },
            RosterRow::default(),
        ];
        let registry = vec![RegistryRow {
            branch_office: Some("Thika Branch".to_string()),
            area: None,
            town: Some("Thika".to_string()),
        }];

        let tables = MappingTables::build(&roster, &registry);
        assert!(tables.is_empty());
    }

    #[test]
    fn test_town_to_area_last_write_wins() {
        let roster = vec![
            roster_row("Old Branch", "Naivasha", None),
            roster_row("New Branch", "Naivasha", None),
        ];
        let tables = MappingTables::build(&roster, &[]);

        assert_eq!(tables.town_to_area["Naivasha"], "New Branch");
        // Membership is a union: the town stays in both area lists
        assert_eq!(tables.area_to_towns["Old Branch"], vec!["Naivasha"]);
        assert_eq!(tables.area_to_towns["New Branch"], vec!["Naivasha"]);
    }

    #[test]
    fn test_dedup_is_by_raw_string_not_normalized() {
        let roster = vec![
            roster_row("Nyeri Branch", "Nyeri", None),
            roster_row("Nyeri Branch", "NYERI", None),
        ];
        let tables = MappingTables::build(&roster, &[]);
        assert_eq!(tables.area_to_towns["Nyeri Branch"], vec!["Nyeri", "NYERI"]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let roster = vec![
            roster_row("Nairobi HQ", "Nairobi", Some("Westlands Office")),
            roster_row("Nairobi HQ", "Westlands", None),
        ];
        let registry = vec![registry_row("Nairobi HQ", "Nairobi Area", Some("Nairobi"))];

        let first = MappingTables::build(&roster, &registry);
        let second = MappingTables::build(&roster, &registry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_sources_yield_empty_tables() {
        let tables = MappingTables::build(&[], &[]);
        assert!(tables.is_empty());
        let summary = tables.summary();
        assert_eq!(summary.areas, 0);
        assert_eq!(summary.towns, 0);
        assert_eq!(summary.branches, 0);
    }

    #[test]
    fn test_summary_counts() {
        let roster = vec![roster_row("Eldoret Branch", "Eldoret", None)];
        let registry = vec![registry_row("Eldoret Branch", "Rift Area", Some("Eldoret"))];
        let tables = MappingTables::build(&roster, &registry);

        let summary = tables.summary();
        // "Eldoret Branch" (roster area key) and "Rift Area"
        assert_eq!(summary.areas, 2);
        assert_eq!(summary.towns, 1);
        assert_eq!(summary.branches, 1);
        assert!(summary.to_string().contains("2 areas"));
    }
}
