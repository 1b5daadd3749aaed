//! # API Facade
//!
//! [`StationApi`] is the single entry point for station operations. It owns
//! the records of one session and dispatches to the command layer. It never
//! prints or reads from the terminal; callers get [`CmdResult`]s back.
//!
//! `StationApi<S: DataStore>` is generic over the storage backend:
//! - Production: `StationApi<FileStore>`
//! - Testing: `StationApi<InMemoryStore>`

use crate::commands;
use crate::config::StationConfig;
use crate::error::Result;
use crate::model::{Records, WeatherRecord};
use crate::store::DataStore;

pub struct StationApi<S: DataStore> {
    store: S,
    config: StationConfig,
    records: Records,
}

impl<S: DataStore> StationApi<S> {
    /// Loads every record from `store`, creating the store if needed.
    pub fn open(mut store: S, config: StationConfig) -> Result<Self> {
        let records = store.load()?;
        Ok(Self {
            store,
            config,
            records,
        })
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn has_record(&self, date: &str) -> bool {
        self.records.contains_key(date)
    }

    pub fn upsert(&mut self, date: &str, record: WeatherRecord) -> Result<CmdResult> {
        commands::upsert::run(&mut self.records, date, record)
    }

    /// Writes all records back to the store.
    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.store, &self.records)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.records)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, ReportRow};
