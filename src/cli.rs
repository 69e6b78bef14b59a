//! Command line arguments.
//!
//! Flags follow the Go `flag` package convention: long options take a single
//! dash (`-version`, `-listen :8000`). The double-dash form is accepted too.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// A hit counter backed by a MongoDB-compatible document database
#[derive(Parser, Debug)]
#[command(name = "docdb-example", about, disable_version_flag = true)]
pub struct Args {
    /// Show version and exit.
    #[arg(long)]
    pub version: bool,

    /// Listen address (default ":8000").
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level filter (e.g., "docdb_example=debug,tower_http=info")
    #[arg(long = "log-level", value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    /// Parse the process arguments, exiting with a usage error on failure.
    pub fn parse_go_style() -> Self {
        Self::parse_from(normalize_go_flags(std::env::args_os()))
    }

    /// Parse the given arguments (program name first).
    pub fn try_parse_go_style<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_go_flags(args))
    }
}

/// Rewrite single-dash long flags (`-listen`) into clap's `--listen` form.
///
/// Short flags (`-h`) and everything after a bare `--` are left alone.
pub fn normalize_go_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().map(Into::into).enumerate() {
        if index == 0 || passthrough {
            normalized.push(arg);
            continue;
        }

        match arg.to_str() {
            Some("--") => {
                passthrough = true;
                normalized.push(arg);
            }
            Some(flag) if is_single_dash_long_flag(flag) => {
                normalized.push(OsString::from(format!("-{}", flag)));
            }
            _ => normalized.push(arg),
        }
    }

    normalized
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split('=').next().unwrap_or_default();
    !rest.starts_with('-') && name.chars().count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_normalize_single_dash_long_flags() {
        let args = normalize_go_flags(["docdb-example", "-listen", ":9000", "-version"]);
        assert_eq!(args, vec!["docdb-example", "--listen", ":9000", "--version"]);
    }

    #[test]
    fn test_normalize_keeps_short_and_double_dash_flags() {
        let args = normalize_go_flags(["docdb-example", "-h", "--listen", ":9000"]);
        assert_eq!(args, vec!["docdb-example", "-h", "--listen", ":9000"]);
    }

    #[test]
    fn test_normalize_stops_after_separator() {
        let args = normalize_go_flags(["docdb-example", "--", "-listen"]);
        assert_eq!(args, vec!["docdb-example", "--", "-listen"]);
    }

    #[test]
    fn test_parse_version_flag() {
        let args = Args::try_parse_go_style(["docdb-example", "-version"]).unwrap();
        assert!(args.version);
        assert!(args.listen.is_none());
    }

    #[test]
    fn test_parse_listen_with_equals() {
        let args = Args::try_parse_go_style(["docdb-example", "-listen=:9000"]).unwrap();
        assert_eq!(args.listen.as_deref(), Some(":9000"));
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_go_style([
            "docdb-example",
            "-listen",
            "127.0.0.1:8080",
            "-config",
            "/etc/docdb-example.toml",
            "-log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.listen.as_deref(), Some("127.0.0.1:8080"));
        assert_eq!(args.config, Some(PathBuf::from("/etc/docdb-example.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_positional_argument_is_usage_error() {
        let err = Args::try_parse_go_style(["docdb-example", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
