use crate::model::WeatherRecord;

pub mod report;
pub mod save;
pub mod upsert;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A record ready for display, with its date already rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: String,
    pub display_date: String,
    pub record: WeatherRecord,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub report_rows: Vec<ReportRow>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_report_rows(mut self, rows: Vec<ReportRow>) -> Self {
        self.report_rows = rows;
        self
    }
}
