//! Command-line configuration

use crate::interpreter::constants::DEFAULT_LOG_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Bounded RPN stack calculator.
///
/// Enter numbers or words to push them, or one of the commands:
/// `+ - * /` arithmetic, `d` drop, `w` word square, `r` roll, `q` quit.
#[derive(Debug, Clone, Parser)]
#[command(name = "stackcalc", version, about, long_about = None)]
pub struct Config {
    /// Interaction log file, truncated at startup
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_PATH)]
    pub log: PathBuf,

    /// Run the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Write diagnostic events to this file (filter with STACKCALC_LOG)
    #[arg(long, value_name = "PATH")]
    pub trace_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["stackcalc"]).unwrap();
        assert_eq!(config.log, PathBuf::from(DEFAULT_LOG_PATH));
        assert!(!config.tui);
        assert!(config.trace_file.is_none());
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "stackcalc",
            "--log",
            "/tmp/calc.log",
            "--tui",
            "--trace-file",
            "/tmp/trace.log",
        ])
        .unwrap();

        assert_eq!(config.log, PathBuf::from("/tmp/calc.log"));
        assert!(config.tui);
        assert_eq!(config.trace_file, Some(PathBuf::from("/tmp/trace.log")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Config::try_parse_from(["stackcalc", "--verbose"]).is_err());
    }
}
