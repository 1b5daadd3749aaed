use colored::Colorize;
use std::io::{self, Write};
use wxstation::api::{CmdMessage, MessageLevel, ReportRow};
use wxstation::model::Metric;
use wxstation::session::SENTINEL;

pub(super) fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "[Weather Station]".bold())?;
    writeln!(out, " \nNOTE: Type '{}' to end the program.", SENTINEL)
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
        }
    }
    Ok(())
}

pub(super) fn print_report<W: Write>(out: &mut W, rows: &[ReportRow]) -> io::Result<()> {
    writeln!(out, "\n{}", "[Weather Information]".bold())?;
    if rows.is_empty() {
        writeln!(out, "No records.")?;
        return Ok(());
    }
    for row in rows {
        writeln!(out, "{}", report_line(row))?;
    }
    Ok(())
}

/// One tab separated report line. UV index is printed as entered.
pub(super) fn report_line(row: &ReportRow) -> String {
    let mut line = row.display_date.clone();
    for metric in Metric::ALL {
        let value = row.record.get(metric);
        let cell = match metric {
            Metric::UvIndex => plain_number(value),
            _ => format!("{:.1}{}", value, metric.unit()),
        };
        line.push_str(&format!("\t| {}", cell));
    }
    line.push_str("\t|");
    line
}

/// Shortest exact rendering, keeping a `.0` on whole numbers. Magnitudes
/// below `1e-4` or from `1e16` up switch to an exponent with a sign and at
/// least two digits (`1e-05`, `1e+16`).
fn plain_number(value: f64) -> String {
    let abs = value.abs();
    if abs != 0.0 && (abs < 1e-4 || abs >= 1e16) {
        let sci = format!("{:e}", value);
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exp.abs());
            }
        }
        sci
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
