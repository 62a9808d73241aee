//! Turning collection blocks into the canonical per-category schedule.

use chrono::NaiveDate;

use crate::classify::classify;
use crate::model::{CollectionBlock, CollectionDate, ScheduleRecord};
use crate::registry::CategoryRegistry;

/// Date layouts observed on the council's schedule page, most specific first.
const DATE_FORMATS: [&str; 5] = [
    "%A, %d %B %Y",
    "%A %d %B %Y",
    "%d %B %Y",
    "%d/%m/%Y",
    "%Y-%m-%d",
];

/// Parse one date-bearing text fragment.
///
/// `None` marks an invalid fragment; it contributes nothing downstream and is
/// excluded from every comparison.
#[must_use]
pub fn parse_collection_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Build the full ordered schedule from the page's collection blocks.
///
/// The result always contains exactly one record per registered category, in
/// registry order. Blocks whose heading resolves to no category are skipped;
/// categories without a matching block keep their default "not due" state.
///
/// When several blocks resolve to the same category, `due_tomorrow` becomes
/// true if any block sets it, while the date fields take the value of the
/// last block in document order that produced one.
#[must_use]
pub fn extract(
    registry: &CategoryRegistry,
    blocks: &[CollectionBlock],
    reference: NaiveDate,
) -> Vec<ScheduleRecord> {
    let mut records: Vec<ScheduleRecord> = registry
        .definitions()
        .iter()
        .map(ScheduleRecord::not_due)
        .collect();

    for block in blocks {
        let Some(definition) = registry.resolve(&block.heading) else {
            continue;
        };
        let Some(record) = records
            .iter_mut()
            .find(|record| record.key == definition.key)
        else {
            continue;
        };

        let dates: Vec<NaiveDate> = block
            .date_texts
            .iter()
            .filter_map(|text| parse_collection_date(text))
            .collect();

        let outcome = classify(&dates, reference);

        record.due_tomorrow |= outcome.due_tomorrow;
        if let Some(date) = outcome.collection_day {
            record.collection_day = CollectionDate::Parsed(date);
        }
        if let Some(date) = outcome.next_collection {
            record.next_collection = CollectionDate::Parsed(date);
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{extract, parse_collection_date};
    use crate::model::{CollectionBlock, CollectionDate};
    use crate::registry::CategoryRegistry;

    fn day(year: i32, month: u32, dayofmonth: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dayofmonth).expect("valid test date")
    }

    fn block(heading: &str, date_texts: &[&str]) -> CollectionBlock {
        CollectionBlock {
            heading: heading.to_owned(),
            date_texts: date_texts.iter().map(|&text| text.to_owned()).collect(),
        }
    }

    #[test]
    fn parses_council_page_layouts() {
        let expected = Some(day(2024, 6, 11));
        assert_eq!(parse_collection_date("Tuesday, 11 June 2024"), expected);
        assert_eq!(parse_collection_date("Tuesday 11 June 2024"), expected);
        assert_eq!(parse_collection_date("11 June 2024"), expected);
        assert_eq!(parse_collection_date("11/06/2024"), expected);
        assert_eq!(parse_collection_date("2024-06-11"), expected);
        assert_eq!(parse_collection_date("  11 June 2024  "), expected);
    }

    #[test]
    fn rejects_non_date_fragments() {
        assert_eq!(parse_collection_date("no collections scheduled"), None);
        assert_eq!(parse_collection_date(""), None);
        assert_eq!(parse_collection_date("31 February 2024"), None);
    }

    #[test]
    fn always_one_record_per_category_in_registry_order() {
        let registry = CategoryRegistry::north_lanarkshire();
        let records = extract(&registry, &[], day(2024, 6, 10));

        let keys: Vec<&str> = records.iter().map(|record| record.key.as_str()).collect();
        assert_eq!(keys, ["general", "blue", "food", "glass"]);
        for record in &records {
            assert!(!record.due_tomorrow);
            assert_eq!(record.collection_day, CollectionDate::Absent);
            assert_eq!(record.next_collection, CollectionDate::Absent);
        }
    }

    #[test]
    fn block_due_tomorrow_sets_collection_day() {
        let registry = CategoryRegistry::north_lanarkshire();
        let blocks = [block(
            "General Waste",
            &["Tuesday, 11 June 2024", "Tuesday, 18 June 2024"],
        )];
        let records = extract(&registry, &blocks, day(2024, 6, 10));

        let general = records.first().expect("general record");
        assert!(general.due_tomorrow);
        assert_eq!(general.collection_day, CollectionDate::Parsed(day(2024, 6, 11)));
        assert_eq!(general.next_collection, CollectionDate::Parsed(day(2024, 6, 11)));
    }

    #[test]
    fn past_dates_are_skipped_for_next_collection() {
        let registry = CategoryRegistry::north_lanarkshire();
        let blocks = [block(
            "Blue Recycling",
            &["Friday, 7 June 2024", "Saturday, 15 June 2024"],
        )];
        let records = extract(&registry, &blocks, day(2024, 6, 10));

        let blue = records.get(1).expect("blue record");
        assert!(!blue.due_tomorrow);
        assert_eq!(blue.collection_day, CollectionDate::Absent);
        assert_eq!(blue.next_collection, CollectionDate::Parsed(day(2024, 6, 15)));
    }

    #[test]
    fn unknown_heading_leaves_all_records_default() {
        let registry = CategoryRegistry::north_lanarkshire();
        let blocks = [block("Unknown Bin Type", &["Tuesday, 11 June 2024"])];
        let records = extract(&registry, &blocks, day(2024, 6, 10));

        assert_eq!(records.len(), 4);
        for record in &records {
            assert!(!record.due_tomorrow);
            assert_eq!(record.next_collection, CollectionDate::Absent);
        }
    }

    #[test]
    fn invalid_fragments_contribute_nothing() {
        let registry = CategoryRegistry::north_lanarkshire();
        let blocks = [block(
            "Food and Garden",
            &["not a date", "Saturday, 15 June 2024", "also not a date"],
        )];
        let records = extract(&registry, &blocks, day(2024, 6, 10));

        let food = records.get(2).expect("food record");
        assert!(!food.due_tomorrow);
        assert_eq!(food.next_collection, CollectionDate::Parsed(day(2024, 6, 15)));
    }

    #[test]
    fn repeated_category_merges_with_last_write_for_dates() {
        let registry = CategoryRegistry::north_lanarkshire();
        let blocks = [
            block("General Waste", &["Tuesday, 11 June 2024"]),
            block("General Waste", &["Thursday, 20 June 2024"]),
            // A block with no usable dates must not clear earlier values.
            block("General Waste", &["nothing here"]),
        ];
        let records = extract(&registry, &blocks, day(2024, 6, 10));

        let general = records.first().expect("general record");
        assert!(general.due_tomorrow, "due flag survives later blocks");
        assert_eq!(general.collection_day, CollectionDate::Parsed(day(2024, 6, 11)));
        assert_eq!(general.next_collection, CollectionDate::Parsed(day(2024, 6, 20)));
    }
}
