//! # Entry Session
//!
//! A [`Session`] is the state machine behind the interactive prompt. It is fed
//! one line of user input at a time and answers with messages; the caller
//! decides how prompts and messages reach the user.
//!
//! ```text
//!             stop / EOF
//!   ┌───────────────────────────────┐
//!   │                               ▼
//! AwaitingDate ──valid date──▶ AwaitingMetrics      Done
//!   ▲   │                           │
//!   │   └── invalid / future ──┐    │ last metric stored
//!   └──────────────────────────┴────┘ or range failure
//! ```
//!
//! - A blank date accepts the placeholder, which is today's date as long as
//!   today has no record yet.
//! - A metric that is not a number is asked for again.
//! - A metric outside its limits drops the whole entry.

use crate::api::{CmdMessage, StationApi};
use crate::error::{Result, StationError};
use crate::model::{Metric, WeatherRecord};
use crate::store::DataStore;
use crate::validate::{check_range, is_future, parse_metric, validate_date, DATE_FORMAT};
use chrono::NaiveDate;

/// Input that ends the session when given at the date prompt.
pub const SENTINEL: &str = "stop";

/// Shown instead of a date when today already has a record.
pub const DATE_HINT: &str = "yyyy-mm-dd";

const BAD_DATE: &str = "Oops, please use 'yyyy-mm-dd' format...";
const FUTURE_DATE: &str = "Oops, date is in the future...";
const NOT_A_NUMBER: &str = "Oops, please enter a number...";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    AwaitingDate,
    AwaitingMetrics {
        date: String,
        metric: Metric,
        record: WeatherRecord,
    },
    Done,
}

pub struct Session<S: DataStore> {
    api: StationApi<S>,
    today: NaiveDate,
    today_key: String,
    state: SessionState,
}

impl<S: DataStore> Session<S> {
    pub fn new(api: StationApi<S>, today: NaiveDate) -> Self {
        Self {
            api,
            today,
            today_key: today.format(DATE_FORMAT).to_string(),
            state: SessionState::AwaitingDate,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == SessionState::Done
    }

    pub fn api(&self) -> &StationApi<S> {
        &self.api
    }

    pub fn into_api(self) -> StationApi<S> {
        self.api
    }

    /// Today's date, or [`DATE_HINT`] once today has been recorded.
    pub fn placeholder(&self) -> &str {
        if self.api.has_record(&self.today_key) {
            DATE_HINT
        } else {
            &self.today_key
        }
    }

    /// The question to ask for the current state.
    pub fn prompt(&self) -> String {
        match &self.state {
            SessionState::AwaitingDate => format!("\nEnter date ({}): ", self.placeholder()),
            SessionState::AwaitingMetrics { metric, .. } => metric.prompt().to_string(),
            SessionState::Done => String::new(),
        }
    }

    /// Handles one line of input and moves to the next state.
    pub fn submit(&mut self, input: &str) -> Result<Vec<CmdMessage>> {
        let state = std::mem::replace(&mut self.state, SessionState::Done);
        let (next, messages) = match state {
            SessionState::AwaitingDate => self.on_date(input.trim()),
            SessionState::AwaitingMetrics {
                date,
                metric,
                record,
            } => self.on_metric(date, metric, record, input)?,
            SessionState::Done => (SessionState::Done, Vec::new()),
        };
        self.state = next;
        Ok(messages)
    }

    /// Input ran out. Any partly entered record is dropped.
    pub fn end_of_input(&mut self) -> Vec<CmdMessage> {
        let messages = match &self.state {
            SessionState::AwaitingMetrics { date, .. } => {
                log::warn!("input closed while entering {}", date);
                vec![CmdMessage::warning(format!(
                    "Input closed, entry for {} discarded.",
                    date
                ))]
            }
            _ => Vec::new(),
        };
        self.state = SessionState::Done;
        messages
    }

    fn on_date(&self, input: &str) -> (SessionState, Vec<CmdMessage>) {
        if input == SENTINEL {
            log::debug!("sentinel received");
            return (SessionState::Done, Vec::new());
        }

        let placeholder = self.placeholder();
        let date = if input.is_empty() && placeholder != DATE_HINT {
            placeholder.to_string()
        } else if !validate_date(input) {
            log::debug!("rejected date {:?}", input);
            return (
                SessionState::AwaitingDate,
                vec![CmdMessage::warning(BAD_DATE)],
            );
        } else if is_future(input, self.today) {
            log::debug!("rejected future date {}", input);
            return (
                SessionState::AwaitingDate,
                vec![CmdMessage::warning(FUTURE_DATE)],
            );
        } else {
            input.to_string()
        };

        (
            SessionState::AwaitingMetrics {
                date,
                metric: Metric::Temperature,
                record: WeatherRecord::default(),
            },
            Vec::new(),
        )
    }

    fn on_metric(
        &mut self,
        date: String,
        metric: Metric,
        mut record: WeatherRecord,
        input: &str,
    ) -> Result<(SessionState, Vec<CmdMessage>)> {
        let value = match parse_metric(input) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("{}: {}", metric, e);
                let retry = SessionState::AwaitingMetrics {
                    date,
                    metric,
                    record,
                };
                return Ok((retry, vec![CmdMessage::warning(NOT_A_NUMBER)]));
            }
        };

        if let Err(e) = check_range(metric, value, self.api.config()) {
            log::debug!("dropping entry for {}: {}", date, e);
            return Ok((SessionState::AwaitingDate, vec![range_message(&e)]));
        }

        record.set(metric, value);
        match metric.next() {
            Some(next) => Ok((
                SessionState::AwaitingMetrics {
                    date,
                    metric: next,
                    record,
                },
                Vec::new(),
            )),
            None => {
                let result = self.api.upsert(&date, record)?;
                Ok((SessionState::AwaitingDate, result.messages))
            }
        }
    }
}

fn range_message(error: &StationError) -> CmdMessage {
    match error {
        StationError::OutOfRange {
            metric, min, max, ..
        } => CmdMessage::warning(format!(
            "Oops, {} must be between {}-{} only...",
            metric, min, max
        )),
        other => CmdMessage::warning(format!("Oops, {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StationConfig;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn session_with(store: InMemoryStore) -> Session<InMemoryStore> {
        let api = StationApi::open(store, StationConfig::default()).unwrap();
        Session::new(api, today())
    }

    fn feed(session: &mut Session<InMemoryStore>, lines: &[&str]) -> Vec<CmdMessage> {
        let mut messages = Vec::new();
        for line in lines {
            messages.extend(session.submit(line).unwrap());
        }
        messages
    }

    #[test]
    fn full_entry_is_upserted() {
        let mut session = session_with(InMemoryStore::new());
        feed(
            &mut session,
            &["2025-01-05", "25.3", "60", "5", "18.2", "3.4"],
        );

        assert_eq!(session.state(), &SessionState::AwaitingDate);
        assert_eq!(
            session.api().records()["2025-01-05"],
            WeatherRecord::new(25.3, 60.0, 5.0, 18.2, 3.4)
        );
    }

    #[test]
    fn metrics_are_prompted_in_order() {
        let mut session = session_with(InMemoryStore::new());
        session.submit("2025-01-05").unwrap();

        let mut prompts = Vec::new();
        for value in ["1", "2", "3", "4", "5"] {
            prompts.push(session.prompt());
            session.submit(value).unwrap();
        }

        let expected: Vec<String> = Metric::ALL.iter().map(|m| m.prompt().to_string()).collect();
        assert_eq!(prompts, expected);
    }

    #[test]
    fn stop_ends_session() {
        let mut session = session_with(InMemoryStore::new());
        session.submit("stop").unwrap();
        assert!(session.is_done());
    }

    #[test]
    fn stop_is_case_sensitive() {
        let mut session = session_with(InMemoryStore::new());
        let messages = session.submit("STOP").unwrap();
        assert!(!session.is_done());
        assert_eq!(messages, vec![CmdMessage::warning(BAD_DATE)]);
    }

    #[test]
    fn blank_date_uses_today() {
        let mut session = session_with(InMemoryStore::new());
        assert_eq!(session.prompt(), "\nEnter date (2025-01-10): ");

        feed(&mut session, &["", "1", "2", "3", "4", "5"]);
        assert!(session.api().has_record("2025-01-10"));
    }

    #[test]
    fn placeholder_becomes_hint_once_today_is_recorded() {
        let mut session = session_with(InMemoryStore::new());
        feed(&mut session, &["", "1", "2", "3", "4", "5"]);

        assert_eq!(session.placeholder(), DATE_HINT);
        assert_eq!(session.prompt(), "\nEnter date (yyyy-mm-dd): ");

        let messages = session.submit("").unwrap();
        assert_eq!(messages, vec![CmdMessage::warning(BAD_DATE)]);
        assert_eq!(session.state(), &SessionState::AwaitingDate);
    }

    #[test]
    fn placeholder_is_hint_when_store_already_has_today() {
        let store = StoreFixture::new()
            .with_record("2025-01-10", WeatherRecord::default())
            .store;
        let session = session_with(store);
        assert_eq!(session.placeholder(), DATE_HINT);
    }

    #[test]
    fn invalid_dates_are_rejected() {
        let mut session = session_with(InMemoryStore::new());
        for input in ["2025-13-01", "2023-02-29", "01/05/2025", "tomorrow"] {
            let messages = session.submit(input).unwrap();
            assert_eq!(messages, vec![CmdMessage::warning(BAD_DATE)], "{}", input);
            assert_eq!(session.state(), &SessionState::AwaitingDate);
        }
    }

    #[test]
    fn future_dates_are_rejected() {
        let mut session = session_with(InMemoryStore::new());
        for input in ["2025-01-11", "2026-01-01", "9999-12-31"] {
            let messages = session.submit(input).unwrap();
            assert_eq!(messages, vec![CmdMessage::warning(FUTURE_DATE)], "{}", input);
            assert_eq!(session.state(), &SessionState::AwaitingDate);
        }
    }

    #[test]
    fn date_input_is_trimmed() {
        let mut session = session_with(InMemoryStore::new());
        session.submit("  2025-01-05 ").unwrap();
        assert!(matches!(
            session.state(),
            SessionState::AwaitingMetrics { date, .. } if date == "2025-01-05"
        ));
    }

    #[test]
    fn non_numeric_metric_is_asked_again() {
        let mut session = session_with(InMemoryStore::new());
        feed(&mut session, &["2025-01-05", "25.3"]);

        let messages = session.submit("sixty").unwrap();
        assert_eq!(messages, vec![CmdMessage::warning(NOT_A_NUMBER)]);
        assert_eq!(session.prompt(), Metric::Humidity.prompt());

        feed(&mut session, &["60", "5", "18.2", "3.4"]);
        assert_eq!(session.api().records()["2025-01-05"].humidity, 60.0);
    }

    #[test]
    fn humidity_out_of_range_drops_entry() {
        let mut session = session_with(InMemoryStore::new());
        let messages = feed(&mut session, &["2025-01-05", "25.3", "101"]);

        assert_eq!(
            messages,
            vec![CmdMessage::warning(
                "Oops, RH (%) must be between 0-100 only..."
            )]
        );
        assert_eq!(session.state(), &SessionState::AwaitingDate);
        assert!(session.api().records().is_empty());
    }

    #[test]
    fn uv_and_wind_out_of_range_drop_entry() {
        let mut session = session_with(InMemoryStore::new());
        let messages = feed(&mut session, &["2025-01-05", "25.3", "60", "12"]);
        assert_eq!(
            messages,
            vec![CmdMessage::warning(
                "Oops, UV Index must be between 0-11 only..."
            )]
        );
        assert_eq!(session.state(), &SessionState::AwaitingDate);

        let messages = feed(&mut session, &["2025-01-05", "25.3", "60", "5", "18.2", "-1"]);
        assert_eq!(
            messages,
            vec![CmdMessage::warning(
                "Oops, Wind Speed must be between 0-100 only..."
            )]
        );
        assert!(session.api().records().is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut session = session_with(InMemoryStore::new());
        feed(&mut session, &["2025-01-05", "-40", "0", "11", "-50", "100"]);
        feed(&mut session, &["2025-01-06", "40", "100", "0", "30", "0"]);
        assert_eq!(session.api().records().len(), 2);
    }

    #[test]
    fn same_date_twice_keeps_second_entry() {
        let mut session = session_with(InMemoryStore::new());
        feed(&mut session, &["2025-01-05", "1", "1", "1", "1", "1"]);
        let messages = feed(&mut session, &["2025-01-05", "2", "2", "2", "2", "2"]);

        assert_eq!(session.api().records().len(), 1);
        assert_eq!(
            session.api().records()["2025-01-05"],
            WeatherRecord::new(2.0, 2.0, 2.0, 2.0, 2.0)
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn end_of_input_discards_partial_entry() {
        let mut session = session_with(InMemoryStore::new());
        feed(&mut session, &["2025-01-05", "25.3", "60"]);

        let messages = session.end_of_input();
        assert_eq!(messages.len(), 1);
        assert!(session.is_done());
        assert!(session.api().records().is_empty());
    }

    #[test]
    fn custom_limits_apply() {
        let config = StationConfig {
            uv_index: crate::config::Limits::new(0.0, 15.0),
            ..StationConfig::default()
        };
        let api = StationApi::open(InMemoryStore::new(), config).unwrap();
        let mut session = Session::new(api, today());
        feed(&mut session, &["2025-01-05", "30", "50", "13.5", "20", "4"]);
        assert_eq!(session.api().records()["2025-01-05"].uv_index, 13.5);
    }
}
