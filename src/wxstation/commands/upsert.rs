use crate::commands::CmdResult;
use crate::error::{Result, StationError};
use crate::model::{Records, WeatherRecord};
use crate::validate::validate_date;

/// Inserts or replaces the record for `date`. Replacing is silent.
pub fn run(records: &mut Records, date: &str, record: WeatherRecord) -> Result<CmdResult> {
    if !validate_date(date) {
        return Err(StationError::InvalidDate(date.to_string()));
    }

    if records.insert(date.to_string(), record).is_some() {
        log::info!("replaced record for {}", date);
    } else {
        log::info!("added record for {}", date);
    }

    Ok(CmdResult::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_new_record() {
        let mut records = Records::new();
        let record = WeatherRecord::new(25.3, 60.0, 5.0, 18.2, 3.4);

        let result = run(&mut records, "2025-01-05", record).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records["2025-01-05"], record);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn second_upsert_wins_without_messages() {
        let mut records = Records::new();
        run(&mut records, "2025-01-05", WeatherRecord::new(1.0, 1.0, 1.0, 1.0, 1.0)).unwrap();
        let result = run(
            &mut records,
            "2025-01-05",
            WeatherRecord::new(2.0, 2.0, 2.0, 2.0, 2.0),
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records["2025-01-05"].temperature, 2.0);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn rejects_invalid_key() {
        let mut records = Records::new();
        let err = run(&mut records, "2025-02-30", WeatherRecord::default()).unwrap_err();
        assert!(matches!(err, StationError::InvalidDate(_)));
        assert!(records.is_empty());
    }
}
