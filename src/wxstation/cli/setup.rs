use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Parser, Debug)]
#[command(name = "wxstation", bin_name = "wxstation", version)]
#[command(about = "Record daily weather observations and print a report", long_about = None)]
pub struct Cli {
    /// Directory holding weather.json and config.json
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["wxstation"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn data_dir_and_verbosity() {
        let cli = Cli::try_parse_from(["wxstation", "-vv", "--data-dir", "/tmp/wx"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/wx"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_positional_args() {
        assert!(Cli::try_parse_from(["wxstation", "2025-01-05"]).is_err());
    }
}
