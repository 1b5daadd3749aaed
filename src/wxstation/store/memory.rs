use super::DataStore;
use crate::error::Result;
use crate::model::Records;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Records,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the last `save` wrote.
    pub fn records(&self) -> &Records {
        &self.records
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&mut self) -> Result<Records> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &Records) -> Result<()> {
        self.records = records.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::WeatherRecord;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_record(mut self, date: &str, record: WeatherRecord) -> Self {
            self.store.records.insert(date.to_string(), record);
            self
        }

        /// Adds `count` consecutive January 2025 days starting on the 1st.
        pub fn with_january_days(mut self, count: u32) -> Self {
            for day in 1..=count {
                let value = day as f64;
                self.store.records.insert(
                    format!("2025-01-{:02}", day),
                    WeatherRecord::new(value, value, value, value, value),
                );
            }
            self
        }
    }
}
