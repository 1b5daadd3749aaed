//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the records of a station live.
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON object in
//!   `<data-dir>/weather.json`
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! A session loads the whole store once when it starts and writes it back in
//! full once when it ends. There is no incremental update.
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── weather.json        # { "YYYY-MM-DD": { "temperature": .., ... }, ... }
//! └── config.json         # Optional metric limits
//! ```

use crate::error::Result;
use crate::model::Records;

pub mod fs;
pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Load every record. A store that does not exist yet is created empty.
    fn load(&mut self) -> Result<Records>;

    /// Replace the stored records with `records`.
    fn save(&mut self, records: &Records) -> Result<()>;
}
