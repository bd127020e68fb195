pub mod cli;
pub mod credentials;
pub mod crypto;
pub mod errors;
pub mod store;
