//! Statistics aggregation
//!
//! Applies the fixed predicate pipeline to a record set:
//!
//! ```text
//! records ─ year filter ─┬─ total
//!                        ├─ withShaam ──┬─ new ─────┬─ approved
//!                        │              │           ├─ converted ─ executing
//!                        │              │           └─ cancelled
//!                        │              ├─ continued
//!                        │              └─ midyear ─ (same drill as new)
//!                        └─ withoutShaam ─ new / continued / midyear / cancelled
//! ```
//!
//! Partitions are independent filters, not a consuming state machine: a
//! record may be counted by several outcome filters or by none.

use crate::fallback::fallback_statistics;
use crate::predicates::{
    completion, is_approved, is_cancelled, is_continued, is_converted, is_executing, is_midyear,
    is_new, starts_in, with_shaam, without_shaam,
};
use rashut_model::{
    AggregateStatistics, DrillStats, Percentage, Provenance, Record, WithShaamStats,
    WithoutShaamStats, Year,
};

/// Compute the aggregate statistics for one year selection.
///
/// `None` or an empty record set yields the documented fallback snapshot,
/// marked [`Provenance::Fallback`]. A non-empty set whose records all miss
/// the selected year yields a computed all-zero snapshot.
///
/// With no year selected every record is kept.
#[must_use]
pub fn compute_statistics(
    records: Option<&[Record]>,
    selected_year: Option<Year>,
) -> AggregateStatistics {
    let records = match records {
        Some(records) if !records.is_empty() => records,
        _ => {
            tracing::warn!(
                year = ?selected_year,
                "no records available, using fallback statistics"
            );
            return fallback_statistics();
        }
    };

    let filtered: Vec<&Record> = records
        .iter()
        .filter(|r| selected_year.map_or(true, |year| starts_in(r, year)))
        .collect();

    let shared = select(&filtered, with_shaam);
    let authority = select(&filtered, without_shaam);

    let stats = AggregateStatistics {
        total: len(&filtered),
        with_shaam: with_shaam_stats(&shared),
        without_shaam: without_shaam_stats(&authority),
        provenance: Provenance::Computed,
    };

    tracing::debug!(
        year = ?selected_year,
        input = records.len(),
        total = stats.total,
        with_shaam = stats.with_shaam.total,
        without_shaam = stats.without_shaam.total,
        "computed statistics"
    );

    stats
}

fn with_shaam_stats(records: &[&Record]) -> WithShaamStats {
    WithShaamStats {
        total: len(records),
        percentage: mean_completion(records),
        new: drill(&select(records, is_new)),
        continued: count(records, is_continued),
        midyear: drill(&select(records, is_midyear)),
    }
}

fn without_shaam_stats(records: &[&Record]) -> WithoutShaamStats {
    WithoutShaamStats {
        total: len(records),
        percentage: Percentage::from_ratio(count(records, is_converted), len(records)),
        new: count(records, is_new),
        continued: count(records, is_continued),
        midyear: count(records, is_midyear),
        cancelled: count(records, is_cancelled),
    }
}

fn drill(records: &[&Record]) -> DrillStats {
    let converted = select(records, is_converted);
    DrillStats {
        total: len(records),
        approved: count(records, is_approved),
        converted: len(&converted),
        cancelled: count(records, is_cancelled),
        executing: count(&converted, is_executing),
    }
}

/// Mean of the reported completion fraction over records reporting progress.
fn mean_completion(records: &[&Record]) -> Percentage {
    let fractions: Vec<f64> = records
        .iter()
        .filter_map(|r| completion(r))
        .filter(|f| *f > 0.0)
        .collect();
    if fractions.is_empty() {
        return Percentage::ZERO;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = fractions.iter().sum::<f64>() / fractions.len() as f64;
    Percentage::from_fraction(mean)
}

fn select<'a>(records: &[&'a Record], pred: fn(&Record) -> bool) -> Vec<&'a Record> {
    records.iter().copied().filter(|r| pred(r)).collect()
}

fn count(records: &[&Record], pred: fn(&Record) -> bool) -> u64 {
    records.iter().filter(|r| pred(r)).count() as u64
}

fn len(records: &[&Record]) -> u64 {
    records.len() as u64
}
