//! Command-line entry point: hardens one password against an avoid list file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use pwd_harden::{AVOID_LIST_PATH_ENV, AvoidList, HardenedPassword, RngSource};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "
Usage: pwd-harden <PASSWORD> <AVOID_LIST>
- PASSWORD should be the password to harden
- AVOID_LIST should be a path to a newline delimited file of substrings to avoid
";

/// Hardens a password and reports how many edits it took.
#[derive(Parser, Debug)]
#[command(name = "pwd-harden", version)]
struct Cli {
    /// Password to harden.
    #[arg(value_name = "PASSWORD")]
    password: String,
    /// Newline-delimited file of substrings the result must avoid.
    #[arg(value_name = "AVOID_LIST", env = AVOID_LIST_PATH_ENV)]
    avoid_list: PathBuf,
    /// Seed for a reproducible result.
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let avoid = AvoidList::from_path(&cli.avoid_list)
        .with_context(|| format!("failed to load avoid list {}", cli.avoid_list.display()))?;
    let password = SecretString::new(cli.password.clone().into());

    let hardened = match cli.seed {
        Some(seed) => {
            HardenedPassword::with_source(&password, &avoid, &mut RngSource::seeded(seed))
        }
        None => HardenedPassword::new(&password, &avoid),
    };

    // report ends in a newline; the blank line after it is part of the output
    Ok(format!("{}\n", hardened.report()))
}

fn main() -> Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            tracing::warn!("missing required argument");
            println!("{}", USAGE);
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    print!("{}", run(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    fn avoid_file(entries: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for entry in entries {
            writeln!(temp_file, "{}", entry).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_missing_arguments() {
        remove_env(AVOID_LIST_PATH_ENV);

        let err = Cli::try_parse_from(["pwd-harden"]).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["pwd-harden", "abc"]).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    #[serial]
    fn test_avoid_list_from_env() {
        set_env(AVOID_LIST_PATH_ENV, "/tmp/avoid.txt");

        let cli = Cli::try_parse_from(["pwd-harden", "abc"]).expect("should parse");
        assert_eq!(cli.avoid_list, PathBuf::from("/tmp/avoid.txt"));

        remove_env(AVOID_LIST_PATH_ENV);
    }

    #[test]
    fn test_run_with_seed_is_reproducible() {
        let file = avoid_file(&["password", "123"]);
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["pwd-harden", "abc", path, "--seed", "9"])
            .expect("should parse");

        let first = run(&cli).expect("should run");
        let second = run(&cli).expect("should run");
        assert_eq!(first, second);
        assert!(first.starts_with("Original password: abc\nSecure password: "));
        assert!(first.contains("Operations required: "));
        assert!(first.ends_with("\n\n"));
        assert_eq!(first.lines().count(), 4);
    }

    #[test]
    fn test_run_missing_avoid_list_file() {
        let cli = Cli::try_parse_from(["pwd-harden", "abc", "/nonexistent/avoid.txt"])
            .expect("should parse");

        let err = run(&cli).expect_err("should fail");
        assert!(err.to_string().contains("/nonexistent/avoid.txt"));
    }
}
