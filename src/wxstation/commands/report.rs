use crate::commands::{CmdResult, ReportRow};
use crate::error::Result;
use crate::model::Records;
use crate::validate::format_date;

/// Builds one report row per record, oldest first.
pub fn run(records: &Records) -> Result<CmdResult> {
    let rows = records
        .iter()
        .map(|(date, record)| -> Result<ReportRow> {
            Ok(ReportRow {
                date: date.clone(),
                display_date: format_date(date)?,
                record: *record,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_report_rows(rows))
}
