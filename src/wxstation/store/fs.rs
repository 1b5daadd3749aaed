use super::DataStore;
use crate::error::{Result, StationError};
use crate::model::Records;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::PathBuf;

const DATA_FILENAME: &str = "weather.json";
const INDENT: &[u8] = b"    ";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            log::debug!("creating data directory {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(StationError::Io)?;
        }
        Ok(())
    }

    fn write_records(&self, records: &Records) -> Result<()> {
        let data_file = self.data_path();
        let content = to_pretty_json(records)?;

        // Write beside the target and rename over it so the file is never half-written.
        let tmp_file = data_file.with_extension("json.tmp");
        fs::write(&tmp_file, content).map_err(StationError::Io)?;
        fs::rename(&tmp_file, &data_file).map_err(StationError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&mut self) -> Result<Records> {
        self.ensure_dir()?;

        let data_file = self.data_path();
        if !data_file.exists() {
            log::info!("initializing empty store at {}", data_file.display());
            self.write_records(&Records::new())?;
        }

        let content = fs::read_to_string(&data_file).map_err(StationError::Io)?;
        let records: Records =
            serde_json::from_str(&content).map_err(StationError::Serialization)?;
        log::debug!("loaded {} records from {}", records.len(), data_file.display());
        Ok(records)
    }

    fn save(&mut self, records: &Records) -> Result<()> {
        self.ensure_dir()?;
        self.write_records(records)?;
        log::debug!(
            "saved {} records to {}",
            records.len(),
            self.data_path().display()
        );
        Ok(())
    }
}

fn to_pretty_json(records: &Records) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(StationError::Serialization)?;
    Ok(buf)
}
