//! Aggregate statistics and the metric vocabulary shared with the hierarchy
//!
//! Every field carries a serde default so a partially populated snapshot
//! deserializes with zero counts instead of failing.

use crate::values::Percentage;
use serde::{Deserialize, Serialize};

/// Top-level partition of records by the shared-authority flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// `common_shaam == "true"`
    WithShaam,
    /// `common_shaam == "false"`
    WithoutShaam,
}

/// Phase category within a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Codes `1` and `4`
    New,
    /// Code `2`
    Continued,
    /// Code `3`
    Midyear,
    /// Cancellation year present (tracked for the without-shaam branch only)
    Cancelled,
}

/// Phases of the shared branch that drill further
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// New work
    New,
    /// Work added mid-year
    Midyear,
}

/// Downstream outcome counted inside a drillable phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Verification status `6`
    Approved,
    /// Lifecycle status `8`
    Converted,
    /// Cancellation year present
    Cancelled,
    /// Converted with completion fraction `>= 1`
    Executing,
}

/// A single countable quantity of [`AggregateStatistics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Year-filtered record count
    Total,
    /// Branch total
    Branch(Branch),
    /// Category count within a branch
    Category(Branch, Category),
    /// Outcome count within a drillable phase of the shared branch
    Drill(Phase, Outcome),
}

/// Where a statistics snapshot came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Provenance {
    /// Computed from real records
    #[default]
    Computed,
    /// Documented demo snapshot used when no records were available
    Fallback,
}

/// Sub-counts of a drillable phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillStats {
    /// Records in the phase
    pub total: u64,
    /// Approved for execution
    pub approved: u64,
    /// Converted to a project
    pub converted: u64,
    /// Cancelled
    pub cancelled: u64,
    /// Converted and fully progressed
    pub executing: u64,
}

impl DrillStats {
    /// Count for one outcome
    #[must_use]
    pub fn outcome(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Approved => self.approved,
            Outcome::Converted => self.converted,
            Outcome::Cancelled => self.cancelled,
            Outcome::Executing => self.executing,
        }
    }
}

/// Shared-authority branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithShaamStats {
    /// Records in the branch
    pub total: u64,
    /// Mean reported completion
    pub percentage: Percentage,
    /// New work, with drill counts
    pub new: DrillStats,
    /// Continued work
    pub continued: u64,
    /// Mid-year work, with drill counts
    pub midyear: DrillStats,
}

/// Authority-only branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithoutShaamStats {
    /// Records in the branch
    pub total: u64,
    /// Share of records with status `8`
    pub percentage: Percentage,
    /// New work
    pub new: u64,
    /// Continued work
    pub continued: u64,
    /// Mid-year work
    pub midyear: u64,
    /// Cancelled work
    pub cancelled: u64,
}

/// Nested aggregate counts for one year selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregateStatistics {
    /// Year-filtered record count, independent of branch membership
    pub total: u64,
    /// Shared-authority branch
    pub with_shaam: WithShaamStats,
    /// Authority-only branch
    pub without_shaam: WithoutShaamStats,
    /// Computed or fallback
    pub provenance: Provenance,
}

impl AggregateStatistics {
    /// Whether this is the fallback snapshot
    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }

    /// Read one metric; combinations the snapshot does not track are 0
    #[must_use]
    pub fn count(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Total => self.total,
            Metric::Branch(branch) => self.branch_total(branch),
            Metric::Category(Branch::WithShaam, category) => match category {
                Category::New => self.with_shaam.new.total,
                Category::Continued => self.with_shaam.continued,
                Category::Midyear => self.with_shaam.midyear.total,
                Category::Cancelled => 0,
            },
            Metric::Category(Branch::WithoutShaam, category) => match category {
                Category::New => self.without_shaam.new,
                Category::Continued => self.without_shaam.continued,
                Category::Midyear => self.without_shaam.midyear,
                Category::Cancelled => self.without_shaam.cancelled,
            },
            Metric::Drill(phase, outcome) => self.drill(phase).outcome(outcome),
        }
    }

    /// Branch total
    #[inline]
    #[must_use]
    pub fn branch_total(&self, branch: Branch) -> u64 {
        match branch {
            Branch::WithShaam => self.with_shaam.total,
            Branch::WithoutShaam => self.without_shaam.total,
        }
    }

    /// Branch completion percentage
    #[inline]
    #[must_use]
    pub fn percentage(&self, branch: Branch) -> Percentage {
        match branch {
            Branch::WithShaam => self.with_shaam.percentage,
            Branch::WithoutShaam => self.without_shaam.percentage,
        }
    }

    /// Drill counts for a phase of the shared branch
    #[inline]
    #[must_use]
    pub fn drill(&self, phase: Phase) -> &DrillStats {
        match phase {
            Phase::New => &self.with_shaam.new,
            Phase::Midyear => &self.with_shaam.midyear,
        }
    }

    /// Every category count of both branches, paired with its branch
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Branch, u64)> {
        let w = &self.with_shaam;
        let wo = &self.without_shaam;
        vec![
            (Branch::WithShaam, w.new.total),
            (Branch::WithShaam, w.continued),
            (Branch::WithShaam, w.midyear.total),
            (Branch::WithoutShaam, wo.new),
            (Branch::WithoutShaam, wo.continued),
            (Branch::WithoutShaam, wo.midyear),
            (Branch::WithoutShaam, wo.cancelled),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_snapshot_defaults_to_zero() {
        let json = r#"{"total": 12, "withShaam": {"total": 5, "percentage": "40%"}}"#;
        let stats: AggregateStatistics = serde_json::from_str(json).unwrap();

        assert_eq!(stats.total, 12);
        assert_eq!(stats.with_shaam.total, 5);
        assert_eq!(stats.with_shaam.percentage, Percentage(40));
        assert_eq!(stats.with_shaam.new, DrillStats::default());
        assert_eq!(stats.without_shaam.total, 0);
        assert_eq!(stats.provenance, Provenance::Computed);
    }

    #[test]
    fn count_reads_every_metric() {
        let mut stats = AggregateStatistics::default();
        stats.with_shaam.midyear.executing = 7;
        stats.without_shaam.cancelled = 3;

        assert_eq!(stats.count(Metric::Drill(Phase::Midyear, Outcome::Executing)), 7);
        assert_eq!(
            stats.count(Metric::Category(Branch::WithoutShaam, Category::Cancelled)),
            3
        );
        assert_eq!(
            stats.count(Metric::Category(Branch::WithShaam, Category::Cancelled)),
            0
        );
    }

    #[test]
    fn serializes_camel_case_branches() {
        let value = serde_json::to_value(AggregateStatistics::default()).unwrap();
        assert!(value.get("withShaam").is_some());
        assert!(value.get("withoutShaam").is_some());
        assert_eq!(value["withShaam"]["percentage"], "0%");
        assert_eq!(value["provenance"], "computed");
    }
}
