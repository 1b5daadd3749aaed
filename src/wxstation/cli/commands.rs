use super::logging;
use super::print::{print_banner, print_messages, print_report};
use super::setup::Cli;
use chrono::Local;
use clap::Parser;
use std::io::{self, BufRead, Write};
use wxstation::api::StationApi;
use wxstation::config::StationConfig;
use wxstation::error::Result;
use wxstation::session::Session;
use wxstation::store::fs::FileStore;
use wxstation::store::DataStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::initialize(cli.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let config = StationConfig::load(&cli.data_dir)?;
    let store = FileStore::new(&cli.data_dir);
    log::info!("using store {}", store.data_path().display());
    let api = StationApi::open(store, config)?;

    let today = Local::now().date_naive();
    let mut session = Session::new(api, today);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_banner(&mut out)?;
    collect(&mut session, stdin.lock(), &mut out)?;

    let mut api = session.into_api();
    finish(&mut api, &mut out)
}

/// Asks questions until the session ends, either by the sentinel or end of input.
fn collect<S, R, W>(session: &mut Session<S>, mut input: R, out: &mut W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    while !session.is_done() {
        write!(out, "{}", session.prompt())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            let messages = session.end_of_input();
            print_messages(out, &messages)?;
            break;
        }

        let messages = session.submit(line.trim_end_matches(['\r', '\n']))?;
        print_messages(out, &messages)?;
    }
    Ok(())
}

/// Persists the session's records and prints the report.
fn finish<S: DataStore, W: Write>(api: &mut StationApi<S>, out: &mut W) -> Result<()> {
    writeln!(out, "\nSaving to file...")?;
    let saved = api.save()?;
    print_messages(out, &saved.messages)?;

    let report = api.report()?;
    print_report(out, &report.report_rows)?;
    Ok(())
}
