//! Domain data structures for addresses, waste categories, and schedule records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for an address known to binwatch.
pub struct AddressKey(pub String);

impl fmt::Display for AddressKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A selectable address with its human-friendly label.
///
/// The concrete source URL behind an address belongs to the provider; the core
/// only ever sees the key.
pub struct Address {
    /// Unique identifier used by a provider when fetching the schedule page.
    pub key: AddressKey,
    /// Human-friendly label, e.g. "Golf Place".
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Display colour token for a waste category.
///
/// Mapped to a concrete terminal colour by the UI layer only.
pub enum CategoryColor {
    /// General waste.
    Green,
    /// Blue-lidded recycling.
    Blue,
    /// Food and garden waste.
    Brown,
    /// Glass, metals, plastics and cartons.
    Grey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Static definition of one waste category.
pub struct CategoryDefinition {
    /// Unique short identifier, e.g. "general".
    pub key: String,
    /// Human-readable name shown in the UI.
    pub display_name: String,
    /// Lowercase phrases that identify this category in a block heading.
    ///
    /// Matching is case-insensitive substring containment against the full
    /// heading text.
    pub label_variants: Vec<String>,
    /// Display colour token.
    pub color: CategoryColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A collection date as carried by a schedule record.
///
/// `Literal` holds a pre-formatted string (simulation mode) that the formatter
/// passes through verbatim; `Parsed` is a real calendar day.
pub enum CollectionDate {
    /// No date known.
    Absent,
    /// A parsed calendar day.
    Parsed(NaiveDate),
    /// A pre-formatted display string, returned untouched by the formatter.
    Literal(String),
}

impl CollectionDate {
    /// Check whether any date (parsed or literal) is present.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, CollectionDate::Absent)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Canonical per-category schedule, rebuilt whole on every extraction run.
pub struct ScheduleRecord {
    /// Category identifier, copied from the definition.
    pub key: String,
    /// Display name, copied from the definition.
    pub display_name: String,
    /// Display colour token, copied from the definition.
    pub color: CategoryColor,
    /// Whether a collection falls on the day after the reference day.
    pub due_tomorrow: bool,
    /// The matched date when `due_tomorrow` is set, otherwise absent.
    pub collection_day: CollectionDate,
    /// Earliest collection on or after the reference day, if any.
    pub next_collection: CollectionDate,
}

impl ScheduleRecord {
    /// Default "not due" record for a category definition.
    #[must_use]
    pub fn not_due(definition: &CategoryDefinition) -> Self {
        Self {
            key: definition.key.clone(),
            display_name: definition.display_name.clone(),
            color: definition.color,
            due_tomorrow: false,
            collection_day: CollectionDate::Absent,
            next_collection: CollectionDate::Absent,
        }
    }
}

#[derive(Debug, Clone)]
/// One structural grouping from the source page: a heading plus the date
/// fragments found alongside it.
pub struct CollectionBlock {
    /// Raw heading text, empty when the block carries no heading.
    pub heading: String,
    /// Raw date-bearing text fragments in document order.
    pub date_texts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Result of one successful extraction run.
///
/// Replaced atomically by the UI; a failed run never overwrites the previous
/// snapshot.
pub struct ScheduleSnapshot {
    /// One record per registered category, in registry order.
    pub records: Vec<ScheduleRecord>,
    /// Formatted heading line for the reference day.
    pub today: String,
}
