//! Day-granular classification of collection dates against a reference day.

use chrono::{Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of classifying one block's dates against a reference day.
pub struct Classification {
    /// Whether any date falls exactly one day after the reference day.
    pub due_tomorrow: bool,
    /// The first date in input order that falls on tomorrow, if any.
    pub collection_day: Option<NaiveDate>,
    /// The earliest date on or after the reference day, if any.
    pub next_collection: Option<NaiveDate>,
}

/// Classify a block's parsed dates against `reference`.
///
/// All comparisons are day-granular by construction: `NaiveDate` carries no
/// time of day. Dates strictly before `reference` are already-passed
/// collections and never become the next collection.
#[must_use]
pub fn classify(dates: &[NaiveDate], reference: NaiveDate) -> Classification {
    let tomorrow = reference + Days::new(1);

    let collection_day = dates.iter().copied().find(|&date| date == tomorrow);

    let next_collection = dates
        .iter()
        .copied()
        .filter(|&date| date >= reference)
        .min();

    Classification {
        due_tomorrow: collection_day.is_some(),
        collection_day,
        next_collection,
    }
}
