//! `pwguard verify` — check a password against the stored credentials.

use crate::cli::output;
use crate::cli::{open_store, prompt_password, Cli};
use crate::credentials::verify_password;
use crate::errors::Result;

/// Execute the `verify` command.
///
/// A failed match is reported, not returned as an error.
pub fn execute(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    let candidate = prompt_password("Enter password to verify")?;

    let verified = verify_password(&store, candidate.as_bytes())?;
    output::verification(verified);

    Ok(())
}
