//! Record predicates used by the aggregation pipeline
//!
//! Each predicate is an independent filter. Missing or empty fields never
//! match.

use rashut_model::{fields, Record, Year};

/// Category codes counted as "new"
pub const NEW_CODES: &[&str] = &["1", "4"];
/// Category code for continued work
pub const CONTINUED_CODE: &str = "2";
/// Category code for mid-year work
pub const MIDYEAR_CODE: &str = "3";
/// Lifecycle status of converted / completed records
pub const CONVERTED_STATUS: &str = "8";
/// Verification status of records approved for execution
pub const APPROVED_VERIFICATION: &str = "6";

/// Start year equals the selected year (string comparison)
#[inline]
#[must_use]
pub fn starts_in(record: &Record, year: Year) -> bool {
    record.get(fields::START_YEAR) == Some(year.to_string().as_str())
}

/// Shared-authority flag is exactly `"true"`
#[inline]
#[must_use]
pub fn with_shaam(record: &Record) -> bool {
    record.field_eq(fields::COMMON_SHAAM, "true")
}

/// Shared-authority flag is exactly `"false"`
#[inline]
#[must_use]
pub fn without_shaam(record: &Record) -> bool {
    record.field_eq(fields::COMMON_SHAAM, "false")
}

/// Category code `1` or `4`
#[inline]
#[must_use]
pub fn is_new(record: &Record) -> bool {
    record.field_in(fields::CATEGORY, NEW_CODES)
}

/// Category code `2`
#[inline]
#[must_use]
pub fn is_continued(record: &Record) -> bool {
    record.field_eq(fields::CATEGORY, CONTINUED_CODE)
}

/// Category code `3`
#[inline]
#[must_use]
pub fn is_midyear(record: &Record) -> bool {
    record.field_eq(fields::CATEGORY, MIDYEAR_CODE)
}

/// Verification status `6`
#[inline]
#[must_use]
pub fn is_approved(record: &Record) -> bool {
    record.field_eq(fields::VERIFICATION, APPROVED_VERIFICATION)
}

/// Lifecycle status `8`
#[inline]
#[must_use]
pub fn is_converted(record: &Record) -> bool {
    record.field_eq(fields::STATUS, CONVERTED_STATUS)
}

/// Cancellation year present
#[inline]
#[must_use]
pub fn is_cancelled(record: &Record) -> bool {
    record.has(fields::CANCELED_YEAR)
}

/// Completion fraction, if present and numeric
#[inline]
#[must_use]
pub fn completion(record: &Record) -> Option<f64> {
    record.number(fields::PERCENT_COMPLETE)
}

/// Completion fraction `>= 1`.
///
/// The field is documented as a 0..=1 fraction, so this only matches fully
/// progressed records. Kept literal pending product clarification.
#[inline]
#[must_use]
pub fn is_executing(record: &Record) -> bool {
    completion(record).is_some_and(|f| f >= 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_year_is_string_compared() {
        let record = Record::new().with(fields::START_YEAR, "2025");
        assert!(starts_in(&record, Year(2025)));
        assert!(!starts_in(&record, Year(2024)));

        let padded = Record::new().with(fields::START_YEAR, " 2025");
        assert!(!starts_in(&padded, Year(2025)));
    }

    #[test]
    fn flag_must_be_exact() {
        let upper = Record::new().with(fields::COMMON_SHAAM, "TRUE");
        assert!(!with_shaam(&upper));
        assert!(!without_shaam(&upper));
    }

    #[test]
    fn executing_threshold_is_literal() {
        let half = Record::new().with(fields::PERCENT_COMPLETE, "0.5");
        let full = Record::new().with(fields::PERCENT_COMPLETE, "1");
        let over = Record::new().with(fields::PERCENT_COMPLETE, "1.2");
        assert!(!is_executing(&half));
        assert!(is_executing(&full));
        assert!(is_executing(&over));
        assert!(!is_executing(&Record::new()));
    }
}
