//! `pwguard` with no subcommand — store one password, then verify one.

use crate::cli::output;
use crate::cli::{open_store, prompt_password, Cli};
use crate::credentials::{store_password, verify_password};
use crate::errors::Result;

/// Execute the default interactive session.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut store = open_store(cli)?;

    let password = prompt_password("Enter password")?;
    store_password(&mut store, password.as_bytes())?;

    let candidate = prompt_password("Enter password to verify")?;
    let verified = verify_password(&store, candidate.as_bytes())?;
    output::verification(verified);

    Ok(())
}
