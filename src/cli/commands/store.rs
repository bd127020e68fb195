//! `pwguard store` — hash a password and persist it.

use crate::cli::output;
use crate::cli::{open_store, prompt_password, Cli};
use crate::credentials::store_password;
use crate::errors::Result;

/// Execute the `store` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut store = open_store(cli)?;
    let password = prompt_password("Enter password")?;

    let id = store_password(&mut store, password.as_bytes())?;
    output::success(&format!("Password stored as record {id} in {}", cli.db));

    Ok(())
}
