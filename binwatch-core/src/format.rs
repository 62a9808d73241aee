//! Human-readable labels for collection dates and the daily heading.

use chrono::NaiveDate;

use crate::model::CollectionDate;

/// Format a collection date for display.
///
/// Literal values (simulation mode) are returned verbatim; no date arithmetic
/// is ever attempted on them. Parsed dates render as "Today", "Tomorrow", or
/// a day/month/year date with the signed day distance.
#[must_use]
pub fn collection_label(value: &CollectionDate, reference: NaiveDate) -> String {
    match value {
        CollectionDate::Absent => String::new(),
        CollectionDate::Literal(text) => text.clone(),
        CollectionDate::Parsed(date) => {
            let days = (*date - reference).num_days();
            match days {
                0 => "Today".to_owned(),
                1 => "Tomorrow".to_owned(),
                _ => format!("{} (in {days} days)", date.format("%d/%m/%Y")),
            }
        }
    }
}

/// The long heading line shown above the schedule, e.g.
/// "Monday, 10 June 2024".
#[must_use]
pub fn today_heading(reference: NaiveDate) -> String {
    reference.format("%A, %d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{collection_label, today_heading};
    use crate::model::CollectionDate;

    fn day(year: i32, month: u32, dayofmonth: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dayofmonth).expect("valid test date")
    }

    #[test]
    fn absent_renders_empty() {
        assert_eq!(
            collection_label(&CollectionDate::Absent, day(2024, 6, 10)),
            ""
        );
    }

    #[test]
    fn literal_passes_through_verbatim() {
        let literal = CollectionDate::Literal("Tomorrow (simulated)".to_owned());
        assert_eq!(
            collection_label(&literal, day(2024, 6, 10)),
            "Tomorrow (simulated)"
        );
    }

    #[test]
    fn relative_labels_for_near_days() {
        let reference = day(2024, 6, 10);
        assert_eq!(
            collection_label(&CollectionDate::Parsed(day(2024, 6, 10)), reference),
            "Today"
        );
        assert_eq!(
            collection_label(&CollectionDate::Parsed(day(2024, 6, 11)), reference),
            "Tomorrow"
        );
        assert_eq!(
            collection_label(&CollectionDate::Parsed(day(2024, 6, 15)), reference),
            "15/06/2024 (in 5 days)"
        );
    }

    #[test]
    fn distance_is_signed_for_past_dates() {
        let reference = day(2024, 6, 10);
        assert_eq!(
            collection_label(&CollectionDate::Parsed(day(2024, 6, 7)), reference),
            "07/06/2024 (in -3 days)"
        );
    }

    #[test]
    fn heading_uses_long_en_gb_form() {
        assert_eq!(today_heading(day(2024, 6, 10)), "Monday, 10 June 2024");
    }
}
