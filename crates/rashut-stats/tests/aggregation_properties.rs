//! Aggregation properties and the documented scenarios

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rashut_model::{fields, Branch, Percentage, Provenance, Record, Year};
use rashut_stats::{compute_statistics, fallback_statistics};
use rashut_test_utils::RecordBuilder;

fn arb_record() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(vec!["true", "false", "", "TRUE"]),
        prop::sample::select(vec!["2023", "2024", "2025", " 2025", ""]),
        prop::sample::select(vec!["1", "2", "3", "4", "5", ""]),
        prop::sample::select(vec!["1", "5", "8", ""]),
        prop::sample::select(vec!["6", "2", ""]),
        prop::option::of(prop_oneof![Just("abc".to_string()), (0.0f64..2.0).prop_map(|f| f.to_string())]),
        prop::option::of(prop::sample::select(vec!["2024", "2025", ""])),
    )
        .prop_map(|(shaam, year, category, status, verification, completion, cancelled)| {
            let mut builder = RecordBuilder::new()
                .field(fields::COMMON_SHAAM, shaam)
                .field(fields::START_YEAR, year)
                .category(category)
                .status(status)
                .verification(verification);
            if let Some(completion) = completion {
                builder = builder.completion(&completion);
            }
            if let Some(cancelled) = cancelled {
                builder = builder.field(fields::CANCELED_YEAR, cancelled);
            }
            builder.build()
        })
}

fn arb_year() -> impl Strategy<Value = Option<Year>> {
    prop::option::of((2023u16..=2025).prop_map(Year))
}

proptest! {
    #[test]
    fn branches_never_exceed_filtered_total(
        records in prop::collection::vec(arb_record(), 1..60),
        year in arb_year(),
    ) {
        let stats = compute_statistics(Some(&records), year);
        prop_assert_eq!(stats.provenance, Provenance::Computed);
        prop_assert!(stats.with_shaam.total + stats.without_shaam.total <= stats.total);
    }

    #[test]
    fn categories_never_exceed_branch(
        records in prop::collection::vec(arb_record(), 1..60),
        year in arb_year(),
    ) {
        let stats = compute_statistics(Some(&records), year);
        let with = &stats.with_shaam;
        let without = &stats.without_shaam;

        for count in [with.new.total, with.continued, with.midyear.total] {
            prop_assert!(count <= with.total);
        }
        for drill in [&with.new, &with.midyear] {
            prop_assert!(drill.approved <= drill.total);
            prop_assert!(drill.converted <= drill.total);
            prop_assert!(drill.cancelled <= drill.total);
            prop_assert!(drill.executing <= drill.converted);
        }
        for count in [without.new, without.continued, without.midyear, without.cancelled] {
            prop_assert!(count <= without.total);
        }
        prop_assert!(stats.percentage(Branch::WithoutShaam) <= Percentage(100));
    }

    #[test]
    fn exact_flags_partition_the_total(
        flags in prop::collection::vec(prop::bool::ANY, 1..40),
    ) {
        let records: Vec<Record> = flags
            .iter()
            .map(|&shared| {
                let builder = if shared { RecordBuilder::shared() } else { RecordBuilder::unshared() };
                builder.year(2025).build()
            })
            .collect();
        let stats = compute_statistics(Some(&records), Some(Year(2025)));
        prop_assert_eq!(stats.with_shaam.total + stats.without_shaam.total, stats.total);
    }

    #[test]
    fn idempotent(records in prop::collection::vec(arb_record(), 0..40), year in arb_year()) {
        prop_assert_eq!(
            compute_statistics(Some(&records), year),
            compute_statistics(Some(&records), year)
        );
    }
}

#[test]
fn empty_selection_yields_fallback_snapshot() {
    let stats = compute_statistics(Some(&[]), Some(Year(2025)));

    assert_eq!(stats, fallback_statistics());
    assert_eq!(stats.total, 1496);
    assert_eq!(stats.with_shaam.total, 590);
    assert_eq!(stats.with_shaam.percentage.to_string(), "80%");
    assert_eq!(stats.with_shaam.new.executing, 242);
    assert_eq!(stats.without_shaam.total, 906);
    assert_eq!(stats.without_shaam.cancelled, 97);
}

#[test]
fn single_converted_new_record() {
    let records = vec![RecordBuilder::shared()
        .year(2025)
        .category("4")
        .status("8")
        .completion("0.5")
        .build()];
    let stats = compute_statistics(Some(&records), Some(Year(2025)));

    assert_eq!(stats.total, 1);
    assert_eq!(stats.with_shaam.total, 1);
    assert_eq!(stats.with_shaam.new.total, 1);
    assert_eq!(stats.with_shaam.new.converted, 1);
    assert_eq!(stats.with_shaam.new.executing, 0);
    assert_eq!(stats.with_shaam.percentage.to_string(), "50%");
}

#[test]
fn other_years_are_excluded() {
    let records = vec![
        RecordBuilder::shared().year(2024).category("1").build(),
        RecordBuilder::shared().year(2025).category("1").build(),
    ];
    let stats = compute_statistics(Some(&records), Some(Year(2025)));

    assert_eq!(stats.total, 1);
    assert_eq!(stats.with_shaam.new.total, 1);
}

#[test]
fn snapshot_json_round_trips_with_defaults() {
    let partial = r#"{"total": 4, "withShaam": {"total": 3, "percentage": "40%"}}"#;
    let stats: rashut_model::AggregateStatistics = serde_json::from_str(partial).unwrap();

    assert_eq!(stats.total, 4);
    assert_eq!(stats.with_shaam.percentage, Percentage(40));
    assert_eq!(stats.with_shaam.new.total, 0);
    assert_eq!(stats.without_shaam.cancelled, 0);
    assert_eq!(stats.provenance, Provenance::Computed);
}
