//! One module per subcommand.

pub mod session;
pub mod store;
pub mod verify;
