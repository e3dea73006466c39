// Branch Scope System - Core Library
// Exposes all modules for use in the CLI and tests

pub mod rows;
pub mod normalize;
pub mod matcher;
pub mod mapping;
pub mod resolve;
pub mod filter;

// Re-export commonly used types
pub use rows::{
    RosterRow, RegistryRow, Record,
    load_roster_csv, load_registry_csv, load_records_json,
};
pub use normalize::normalize;
pub use matcher::NameMatcher;
pub use mapping::{MappingTables, MappingSummary};
pub use resolve::{Closure, ALL_SCOPES};
pub use filter::{RecordFilter, ScopeFields};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
