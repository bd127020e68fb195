//! CLI module — Clap argument parser, password prompts, and commands.

pub mod commands;
pub mod output;

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{PwGuardError, Result};
use crate::store::SqliteStore;

/// pwguard CLI: salted password storage and verification.
#[derive(Parser)]
#[command(
    name = "pwguard",
    about = "Store and verify salted PBKDF2 password hashes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the credential database
    #[arg(long, default_value = "passwords.db", global = true)]
    pub db: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Hash and store a password
    Store,

    /// Check a password against every stored credential
    Verify,
}

/// Open the credential database named by `--db`.
pub fn open_store(cli: &Cli) -> Result<SqliteStore> {
    SqliteStore::open(Path::new(&cli.db))
}

/// Read a password from the user.
///
/// Uses a hidden prompt on a terminal and reads one line from stdin
/// otherwise, so the tool can be scripted.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(prompt: &str) -> Result<Zeroizing<String>> {
    if io::stdin().is_terminal() {
        let pw = dialoguer::Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| PwGuardError::CommandFailed(format!("password prompt: {e}")))?;
        return Ok(Zeroizing::new(pw));
    }

    let mut line = Zeroizing::new(String::new());
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(PwGuardError::CommandFailed(format!(
            "{prompt}: no input on stdin"
        )));
    }
    Ok(Zeroizing::new(strip_line_ending(&line).to_string()))
}

/// Drop a trailing `\n` or `\r\n`, keeping any other whitespace.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unix_and_windows_newlines() {
        assert_eq!(strip_line_ending("secret\n"), "secret");
        assert_eq!(strip_line_ending("secret\r\n"), "secret");
        assert_eq!(strip_line_ending("secret"), "secret");
    }

    #[test]
    fn keeps_significant_whitespace() {
        assert_eq!(strip_line_ending("  spaced out \n"), "  spaced out ");
        assert_eq!(strip_line_ending("\n"), "");
    }

    #[test]
    fn parses_default_invocation() {
        let cli = Cli::try_parse_from(["pwguard"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.db, "passwords.db");
    }

    #[test]
    fn parses_db_after_subcommand() {
        let cli = Cli::try_parse_from(["pwguard", "verify", "--db", "/tmp/x.db"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Verify)));
        assert_eq!(cli.db, "/tmp/x.db");
    }
}
