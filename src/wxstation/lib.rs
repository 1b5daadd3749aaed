//! # wxstation Architecture
//!
//! wxstation keeps a small daily weather log: one record of temperature,
//! humidity, UV index, dew point and wind speed per date, stored as a JSON
//! object keyed by `YYYY-MM-DD`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints the report             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Line-at-a-time state machine: date, then five metrics    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Commands (api.rs, commands/*.rs)                     │
//! │  - upsert, save, report over the in-memory records          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are loaded once when a session opens and written back in full once
//! when it ends.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: upsert, save and report logic
//! - [`session`]: The interactive entry state machine
//! - [`validate`]: Date and metric validation, date formatting
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `WeatherRecord`, `Records`, `Metric`
//! - [`config`]: Metric limits
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod validate;
