// 🚦 Record Filter - admit or reject records against a resolved closure
//
// A record is admitted when its branch field matches any eligible branch
// OR its location field matches any town in the closure; the two checks
// are independent. A record with neither field populated cannot be
// evaluated and is treated conservatively as out of scope.

use crate::matcher::NameMatcher;
use crate::resolve::Closure;
use crate::rows::Record;

/// Accessors for the two scope fields a record may carry. The seam that
/// lets any record shape be filtered without touching its other fields.
pub trait ScopeFields {
    fn branch(&self) -> Option<&str>;
    fn location(&self) -> Option<&str>;
}

impl ScopeFields for Record {
    fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

// ============================================================================
// RECORD FILTER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Matcher used to compare record fields against closure names
    pub matcher: NameMatcher,
}

impl RecordFilter {
    pub fn new() -> Self {
        RecordFilter {
            matcher: NameMatcher::new(),
        }
    }

    /// Filter records against the closure, preserving order. Records
    /// pass through byte-for-byte; nothing is added, removed, or
    /// modified. An unrestricted closure admits everything, including
    /// records with no branch/location at all.
    pub fn filter<T: ScopeFields>(&self, records: Vec<T>, closure: &Closure) -> Vec<T> {
        if closure.unrestricted {
            return records;
        }

        records
            .into_iter()
            .filter(|record| self.is_in_scope(record, closure))
            .collect()
    }

    /// Is a single record inside the resolved scope?
    pub fn is_in_scope<T: ScopeFields>(&self, record: &T, closure: &Closure) -> bool {
        if closure.unrestricted {
            return true;
        }

        let branch = record.branch().unwrap_or("");
        let location = record.location().unwrap_or("");

        // Cannot be evaluated - conservatively out of scope
        if branch.is_empty() && location.is_empty() {
            return false;
        }

        let branch_match = closure
            .branches
            .iter()
            .any(|eligible| self.matcher.matches(branch, eligible));
        if branch_match {
            return true;
        }

        closure
            .towns
            .iter()
            .any(|town| self.matcher.matches(location, town))
    }
}

// ============================================================================
// TESTS
// ============================================================================
