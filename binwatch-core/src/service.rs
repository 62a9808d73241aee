//! High-level service facade combining source, registry, and pipeline.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::extract::extract;
use crate::format::today_heading;
use crate::model::{Address, AddressKey, CollectionDate, ScheduleRecord, ScheduleSnapshot};
use crate::ports::{CollectionSource, SourceError};
use crate::registry::CategoryRegistry;

/// Placeholder label used for every date field in simulation mode.
pub const SIMULATED_LABEL: &str = "Tomorrow (simulated)";

/// Public entry point for loading and simulating schedules.
pub struct ScheduleService {
    source: Arc<dyn CollectionSource>,
    registry: CategoryRegistry,
}

impl ScheduleService {
    /// Create a service bound to a source and category registry.
    #[must_use]
    pub fn new(source: Arc<dyn CollectionSource>, registry: CategoryRegistry) -> Self {
        Self { source, registry }
    }

    /// Addresses the underlying source can serve, in display order.
    #[must_use]
    pub fn addresses(&self) -> Vec<Address> {
        self.source.addresses()
    }

    /// The category registry driving extraction.
    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Fetch and extract the schedule for an address.
    ///
    /// A successful run always yields one record per registered category;
    /// a page with no matching blocks is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the fetch fails outright. The caller
    /// keeps its previous snapshot in that case.
    pub async fn load(
        &self,
        address: &AddressKey,
        reference: NaiveDate,
    ) -> Result<ScheduleSnapshot, SourceError> {
        let blocks = self.source.collection_blocks(address).await?;
        let records = extract(&self.registry, &blocks, reference);
        Ok(ScheduleSnapshot {
            records,
            today: today_heading(reference),
        })
    }

    /// Simulation mode: every category due tomorrow with a placeholder label,
    /// without contacting the source.
    #[must_use]
    pub fn simulated(&self, reference: NaiveDate) -> ScheduleSnapshot {
        let records = self
            .registry
            .definitions()
            .iter()
            .map(|definition| {
                let mut record = ScheduleRecord::not_due(definition);
                record.due_tomorrow = true;
                record.collection_day = CollectionDate::Literal(SIMULATED_LABEL.to_owned());
                record.next_collection = CollectionDate::Literal(SIMULATED_LABEL.to_owned());
                record
            })
            .collect();
        ScheduleSnapshot {
            records,
            today: today_heading(reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::{SIMULATED_LABEL, ScheduleService};
    use crate::format::collection_label;
    use crate::model::{Address, AddressKey, CollectionBlock, CollectionDate};
    use crate::ports::{CollectionSource, SourceError};
    use crate::registry::CategoryRegistry;

    struct FixedSource {
        blocks: Vec<CollectionBlock>,
    }

    #[async_trait]
    impl CollectionSource for FixedSource {
        fn addresses(&self) -> Vec<Address> {
            vec![Address {
                key: AddressKey("test".to_owned()),
                label: "Test Street".to_owned(),
            }]
        }

        async fn collection_blocks(
            &self,
            _address: &AddressKey,
        ) -> Result<Vec<CollectionBlock>, SourceError> {
            Ok(self.blocks.clone())
        }
    }

    fn day(year: i32, month: u32, dayofmonth: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dayofmonth).expect("valid test date")
    }

    fn service(blocks: Vec<CollectionBlock>) -> ScheduleService {
        ScheduleService::new(
            Arc::new(FixedSource { blocks }),
            CategoryRegistry::north_lanarkshire(),
        )
    }

    #[tokio::test]
    async fn load_wraps_extraction_with_today_heading() {
        let blocks = vec![CollectionBlock {
            heading: "General Waste".to_owned(),
            date_texts: vec!["Tuesday, 11 June 2024".to_owned()],
        }];
        let snapshot = service(blocks)
            .load(&AddressKey("test".to_owned()), day(2024, 6, 10))
            .await
            .expect("load should succeed");

        assert_eq!(snapshot.records.len(), 4);
        assert_eq!(snapshot.today, "Monday, 10 June 2024");
        let general = snapshot.records.first().expect("general record");
        assert!(general.due_tomorrow);
        assert_eq!(
            collection_label(&general.collection_day, day(2024, 6, 10)),
            "Tomorrow"
        );
    }

    #[tokio::test]
    async fn empty_page_yields_full_default_schedule() {
        let snapshot = service(Vec::new())
            .load(&AddressKey("test".to_owned()), day(2024, 6, 10))
            .await
            .expect("load should succeed");

        assert_eq!(snapshot.records.len(), 4);
        for record in &snapshot.records {
            assert!(!record.due_tomorrow);
            assert_eq!(record.next_collection, CollectionDate::Absent);
        }
    }

    #[test]
    fn simulation_marks_every_category_due_with_literal_labels() {
        let snapshot = service(Vec::new()).simulated(day(2024, 6, 10));

        assert_eq!(snapshot.records.len(), 4);
        for record in &snapshot.records {
            assert!(record.due_tomorrow);
            assert_eq!(
                collection_label(&record.collection_day, day(2024, 6, 10)),
                SIMULATED_LABEL
            );
            assert_eq!(
                collection_label(&record.next_collection, day(2024, 6, 10)),
                SIMULATED_LABEL
            );
        }
    }
}
